//! Request payloads for the choice engine.
//!
//! Vocabulary values travel as their kebab-case ids ("fighter", "half-orc")
//! and are parsed by the engine, which reports unknown ids as `not_found`.

use chargen_domain::{Submissions, ValidationContext};
use serde::{Deserialize, Serialize};

fn first_level() -> u8 {
    1
}

/// All operations the choice engine answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChoiceRequest {
    // =========================================================================
    // Requirement lookups
    // =========================================================================
    /// Choices a class needs at a level, optionally with a subclass applied
    GetClassRequirements {
        class: String,
        #[serde(default = "first_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subclass: Option<String>,
    },

    GetRaceRequirements { race: String },

    GetBackgroundRequirements { background: String },

    /// Per-source requirements for a whole character
    GetRequirements {
        class: String,
        race: String,
        background: String,
        #[serde(default = "first_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subclass: Option<String>,
    },

    // =========================================================================
    // Validation
    // =========================================================================
    ValidateClassChoices {
        class: String,
        #[serde(default = "first_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subclass: Option<String>,
        submissions: Submissions,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<ValidationContext>,
    },

    ValidateRaceChoices {
        race: String,
        submissions: Submissions,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<ValidationContext>,
    },

    ValidateBackgroundChoices {
        background: String,
        submissions: Submissions,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<ValidationContext>,
    },

    /// Every source plus the cross-source duplicate scan
    Validate {
        class: String,
        race: String,
        background: String,
        #[serde(default = "first_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subclass: Option<String>,
        submissions: Submissions,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<ValidationContext>,
    },
}

impl ChoiceRequest {
    /// Wire name of the operation, for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            ChoiceRequest::GetClassRequirements { .. } => "get_class_requirements",
            ChoiceRequest::GetRaceRequirements { .. } => "get_race_requirements",
            ChoiceRequest::GetBackgroundRequirements { .. } => "get_background_requirements",
            ChoiceRequest::GetRequirements { .. } => "get_requirements",
            ChoiceRequest::ValidateClassChoices { .. } => "validate_class_choices",
            ChoiceRequest::ValidateRaceChoices { .. } => "validate_race_choices",
            ChoiceRequest::ValidateBackgroundChoices { .. } => "validate_background_choices",
            ChoiceRequest::Validate { .. } => "validate",
        }
    }
}
