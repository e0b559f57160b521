//! Automatic grants: proficiencies and spells a source bestows without a
//! choice. Grants never become requirements. They feed the validation
//! context and the duplicate detector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::choices::submission::{ChoiceCategory, Source};
use crate::vocab::{Language, Skill, Spell, Tool};

/// Pool a value competes in when looking for cross-source waste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyKind {
    Skill,
    Language,
    Tool,
    Spell,
}

impl ProficiencyKind {
    /// Pool for a submission category. Equipment, expertise, fighting style,
    /// subclass and ancestry picks are not proficiencies.
    pub fn for_category(category: ChoiceCategory) -> Option<Self> {
        match category {
            ChoiceCategory::Skills => Some(Self::Skill),
            ChoiceCategory::Languages => Some(Self::Language),
            ChoiceCategory::Tools | ChoiceCategory::Instruments => Some(Self::Tool),
            ChoiceCategory::Cantrips | ChoiceCategory::Spells => Some(Self::Spell),
            ChoiceCategory::FightingStyle
            | ChoiceCategory::Expertise
            | ChoiceCategory::Equipment
            | ChoiceCategory::Subclass
            | ChoiceCategory::DraconicAncestry => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Language => "language",
            Self::Tool => "tool",
            Self::Spell => "spell",
        }
    }
}

impl fmt::Display for ProficiencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single granted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Proficiency {
    Skill(Skill),
    Language(Language),
    Tool(Tool),
    Spell(Spell),
}

impl Proficiency {
    pub fn kind(&self) -> ProficiencyKind {
        match self {
            Self::Skill(_) => ProficiencyKind::Skill,
            Self::Language(_) => ProficiencyKind::Language,
            Self::Tool(_) => ProficiencyKind::Tool,
            Self::Spell(_) => ProficiencyKind::Spell,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Skill(v) => v.as_str(),
            Self::Language(v) => v.as_str(),
            Self::Tool(v) => v.as_str(),
            Self::Spell(v) => v.as_str(),
        }
    }
}

impl From<Skill> for Proficiency {
    fn from(value: Skill) -> Self {
        Self::Skill(value)
    }
}

impl From<Language> for Proficiency {
    fn from(value: Language) -> Self {
        Self::Language(value)
    }
}

impl From<Tool> for Proficiency {
    fn from(value: Tool) -> Self {
        Self::Tool(value)
    }
}

impl From<Spell> for Proficiency {
    fn from(value: Spell) -> Self {
        Self::Spell(value)
    }
}

/// A proficiency bestowed by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub source: Source,
    pub proficiency: Proficiency,
}

impl Grant {
    pub fn new(source: Source, proficiency: impl Into<Proficiency>) -> Self {
        Self {
            source,
            proficiency: proficiency.into(),
        }
    }
}

/// Shorthand for building grant lists from one source.
pub(crate) fn grants_from<P: Into<Proficiency>>(
    source: Source,
    values: impl IntoIterator<Item = P>,
) -> impl Iterator<Item = Grant> {
    values.into_iter().map(move |v| Grant::new(source, v))
}
