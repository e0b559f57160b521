//! # Choice Vocabulary
//!
//! Closed enumerations for every value a player can pick during character
//! creation. Each variant carries a stable kebab-case string id that is used
//! on the wire and in submissions.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Stable ids** - `as_str()`, `Display`, `FromStr` and serde agree
//! 3. **Closed** - unknown ids fail to parse instead of defaulting

/// Declares a string-backed vocabulary enum.
///
/// Generates the enum with serde renames, an `ALL` slice in declaration order,
/// `as_str()`, `Display`, and a strict `FromStr` returning [`DomainError::Parse`].
///
/// [`DomainError::Parse`]: crate::error::DomainError::Parse
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $id)] $variant, )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Human readable name of this vocabulary, used in messages.
            pub const KIND: &'static str = $kind;

            /// Stable string id.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $id, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $id => Ok($name::$variant), )+
                    _ => Err($crate::error::DomainError::parse(format!(
                        "Unknown {}: '{}'",
                        $kind, s
                    ))),
                }
            }
        }

        impl $crate::vocab::Vocabulary for $name {
            const KIND: &'static str = $kind;

            fn id(&self) -> &'static str {
                self.as_str()
            }
        }
    };
}

/// Common surface of every vocabulary enum.
///
/// Requirement and validation code is generic over this trait so the same
/// count/membership rules apply to skills, languages, tools and the rest.
pub trait Vocabulary:
    Copy
    + Eq
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
    + std::str::FromStr<Err = crate::error::DomainError>
{
    /// Human readable name of the vocabulary ("skill", "language").
    const KIND: &'static str;

    /// Stable string id.
    fn id(&self) -> &'static str;
}

mod background;
pub use background::Background;

mod class;
pub use class::{Class, Level, Subclass};

mod equipment;
pub use equipment::{Equipment, EquipmentCategory};

mod fighting_style;
pub use fighting_style::FightingStyle;

mod language;
pub use language::Language;

mod race;
pub use race::{DraconicAncestry, Race};

mod skill;
pub use skill::Skill;

mod spell;
pub use spell::Spell;

mod tool;
pub use tool::{Tool, ToolCategory};

mod expertise;
pub use expertise::ExpertiseTarget;
