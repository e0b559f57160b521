//! D&D 5e character-creation choices: the vocabulary, the requirement
//! catalog, and the rules that check a player's submitted picks.

#[macro_use]
pub mod vocab;

pub mod choices;
pub mod error;
pub mod ids;

pub use choices::{
    validate, validate_background_choices, validate_character, validate_class_choices,
    validate_class_choices_with_subclass, validate_race_choices, validate_with_subclass,
    CharacterChoices, ChoiceCategory, Requirements, Source, Submission, Submissions,
    ValidationContext, ValidationIssue, ValidationResult,
};
pub use error::DomainError;
pub use ids::{ChoiceId, OptionId};
pub use vocab::{
    Background, Class, DraconicAncestry, Equipment, EquipmentCategory, ExpertiseTarget,
    FightingStyle, Language, Level, Race, Skill, Spell, Subclass, Tool, ToolCategory, Vocabulary,
};
