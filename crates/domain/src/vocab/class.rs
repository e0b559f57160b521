//! Classes, subclasses and character level.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

string_enum! {
    /// A player character class.
    pub enum Class ("class") {
        Barbarian => "barbarian",
        Bard => "bard",
        Cleric => "cleric",
        Druid => "druid",
        Fighter => "fighter",
        Monk => "monk",
        Paladin => "paladin",
        Ranger => "ranger",
        Rogue => "rogue",
        Sorcerer => "sorcerer",
        Warlock => "warlock",
        Wizard => "wizard",
    }
}

impl Class {
    /// Character level at which the subclass is chosen.
    pub fn subclass_level(&self) -> Level {
        match self {
            Class::Cleric | Class::Sorcerer | Class::Warlock => Level(1),
            Class::Wizard | Class::Druid => Level(2),
            _ => Level(3),
        }
    }

    /// Subclasses belonging to this class.
    pub fn subclasses(&self) -> Vec<Subclass> {
        Subclass::ALL
            .iter()
            .copied()
            .filter(|s| s.class() == *self)
            .collect()
    }
}

string_enum! {
    /// A class archetype (domain, school, oath, patron).
    pub enum Subclass ("subclass") {
        PathOfTheBerserker => "path-of-the-berserker",
        PathOfTheTotemWarrior => "path-of-the-totem-warrior",
        CollegeOfLore => "college-of-lore",
        CollegeOfValor => "college-of-valor",
        LifeDomain => "life-domain",
        LightDomain => "light-domain",
        NatureDomain => "nature-domain",
        TempestDomain => "tempest-domain",
        TrickeryDomain => "trickery-domain",
        WarDomain => "war-domain",
        KnowledgeDomain => "knowledge-domain",
        DeathDomain => "death-domain",
        CircleOfTheLand => "circle-of-the-land",
        CircleOfTheMoon => "circle-of-the-moon",
        Champion => "champion",
        BattleMaster => "battle-master",
        EldritchKnight => "eldritch-knight",
        WayOfTheOpenHand => "way-of-the-open-hand",
        WayOfShadow => "way-of-shadow",
        WayOfTheFourElements => "way-of-the-four-elements",
        OathOfDevotion => "oath-of-devotion",
        OathOfTheAncients => "oath-of-the-ancients",
        OathOfVengeance => "oath-of-vengeance",
        Hunter => "hunter",
        BeastMaster => "beast-master",
        Thief => "thief",
        Assassin => "assassin",
        ArcaneTrickster => "arcane-trickster",
        DraconicBloodline => "draconic-bloodline",
        WildMagic => "wild-magic",
        TheArchfey => "the-archfey",
        TheFiend => "the-fiend",
        TheGreatOldOne => "the-great-old-one",
        SchoolOfAbjuration => "school-of-abjuration",
        SchoolOfConjuration => "school-of-conjuration",
        SchoolOfDivination => "school-of-divination",
        SchoolOfEnchantment => "school-of-enchantment",
        SchoolOfEvocation => "school-of-evocation",
        SchoolOfIllusion => "school-of-illusion",
        SchoolOfNecromancy => "school-of-necromancy",
        SchoolOfTransmutation => "school-of-transmutation",
    }
}

impl Subclass {
    /// The class this subclass belongs to.
    pub fn class(&self) -> Class {
        use Subclass::*;
        match self {
            PathOfTheBerserker | PathOfTheTotemWarrior => Class::Barbarian,
            CollegeOfLore | CollegeOfValor => Class::Bard,
            LifeDomain | LightDomain | NatureDomain | TempestDomain | TrickeryDomain
            | WarDomain | KnowledgeDomain | DeathDomain => Class::Cleric,
            CircleOfTheLand | CircleOfTheMoon => Class::Druid,
            Champion | BattleMaster | EldritchKnight => Class::Fighter,
            WayOfTheOpenHand | WayOfShadow | WayOfTheFourElements => Class::Monk,
            OathOfDevotion | OathOfTheAncients | OathOfVengeance => Class::Paladin,
            Hunter | BeastMaster => Class::Ranger,
            Thief | Assassin | ArcaneTrickster => Class::Rogue,
            DraconicBloodline | WildMagic => Class::Sorcerer,
            TheArchfey | TheFiend | TheGreatOldOne => Class::Warlock,
            SchoolOfAbjuration | SchoolOfConjuration | SchoolOfDivination
            | SchoolOfEnchantment | SchoolOfEvocation | SchoolOfIllusion
            | SchoolOfNecromancy | SchoolOfTransmutation => Class::Wizard,
        }
    }
}

/// Character level, always within `1..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(20);

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "Level must be between 1 and 20, got {}",
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
