//! Validation issues and the tiered result accumulator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choices::submission::{ChoiceCategory, Source};
use crate::error::DomainError;
use crate::ids::ChoiceId;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Invalid choice. Blocks saving the draft.
    Error,
    /// Missing choice. Draft can be saved but not finalized.
    Incomplete,
    /// Legal but wasteful. Never blocks.
    Warning,
}

/// Specific validation issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    ExactCountRequired,
    InvalidOption,
    DuplicateSelection,
    ConflictingChoice,
    RequiredChoiceMissing,
    DependentChoiceMissing,
    ExpertiseWithoutProficiency,
    DuplicateChoice,
    RedundantChoice,
    ExpertiseAlreadyApplied,
    CrossSourceDuplicate,
}

impl IssueCode {
    pub fn severity(&self) -> Severity {
        match self {
            IssueCode::ExactCountRequired
            | IssueCode::InvalidOption
            | IssueCode::DuplicateSelection
            | IssueCode::ConflictingChoice => Severity::Error,
            IssueCode::RequiredChoiceMissing
            | IssueCode::DependentChoiceMissing
            | IssueCode::ExpertiseWithoutProficiency => Severity::Incomplete,
            IssueCode::DuplicateChoice
            | IssueCode::RedundantChoice
            | IssueCode::ExpertiseAlreadyApplied
            | IssueCode::CrossSourceDuplicate => Severity::Warning,
        }
    }
}

/// One party that supplied a value: a player choice from `source`, or an
/// automatic grant from it.
///
/// Serialised as `"class"` or `"race(granted)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Contributor {
    pub source: Source,
    pub granted: bool,
}

impl Contributor {
    pub fn chosen(source: Source) -> Self {
        Self {
            source,
            granted: false,
        }
    }

    pub fn granted(source: Source) -> Self {
        Self {
            source,
            granted: true,
        }
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.granted {
            write!(f, "{}(granted)", self.source)
        } else {
            write!(f, "{}", self.source)
        }
    }
}

impl FromStr for Contributor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix("(granted)") {
            Some(source) => Ok(Self::granted(source.parse()?)),
            None => Ok(Self::chosen(s.parse()?)),
        }
    }
}

impl From<Contributor> for String {
    fn from(contributor: Contributor) -> Self {
        contributor.to_string()
    }
}

impl TryFrom<String> for Contributor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Structured payload attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueDetails {
    Count {
        expected: u32,
        actual: u32,
    },
    InvalidValue {
        value: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<String>,
    },
    Duplicate {
        value: String,
        sources: Vec<Contributor>,
    },
    Missing {
        choice_id: ChoiceId,
    },
    Prerequisite {
        value: String,
        prerequisite: String,
    },
    Conflict {
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub severity: Severity,
    pub field: ChoiceCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_id: Option<ChoiceId>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<IssueDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl ValidationIssue {
    /// New issue with the code's default severity.
    pub fn new(code: IssueCode, field: ChoiceCategory, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            field,
            choice_id: None,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    pub fn with_choice(mut self, choice_id: &ChoiceId) -> Self {
        self.choice_id = Some(choice_id.clone());
        self
    }

    pub fn with_details(mut self, details: IssueDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Prevents saving the draft.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Value the issue is about, when the details name one.
    pub fn subject(&self) -> Option<&str> {
        match self.details.as_ref()? {
            IssueDetails::InvalidValue { value, .. }
            | IssueDetails::Duplicate { value, .. }
            | IssueDetails::Prerequisite { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Tiered validation outcome.
///
/// Built by a single validation call; not meant to be shared between
/// concurrent writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub can_save: bool,
    pub can_finalize: bool,
    pub is_optimal: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationIssue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incomplete: Vec<ValidationIssue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationIssue>,
    #[serde(default)]
    pub all_issues: Vec<ValidationIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            can_save: true,
            can_finalize: true,
            is_optimal: true,
            errors: Vec::new(),
            incomplete: Vec::new(),
            warnings: Vec::new(),
            all_issues: Vec::new(),
        }
    }

    /// Records an issue and lowers the status flags it affects.
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => {
                self.can_save = false;
                self.can_finalize = false;
                self.errors.push(issue.clone());
            }
            Severity::Incomplete => {
                self.can_finalize = false;
                self.incomplete.push(issue.clone());
            }
            Severity::Warning => {
                self.is_optimal = false;
                self.warnings.push(issue.clone());
            }
        }
        self.all_issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        for issue in issues {
            self.add_issue(issue);
        }
    }

    /// Folds another result's issues into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.extend(other.all_issues);
    }

    /// Sets `source` on every issue that has none.
    pub fn tag_source(mut self, source: Source) -> Self {
        for issue in self
            .errors
            .iter_mut()
            .chain(self.incomplete.iter_mut())
            .chain(self.warnings.iter_mut())
            .chain(self.all_issues.iter_mut())
        {
            issue.source.get_or_insert(source);
        }
        self
    }

    /// Rebuilds the result keeping only issues accepted by `keep`.
    pub fn retain(self, keep: impl Fn(&ValidationIssue) -> bool) -> Self {
        let mut result = ValidationResult::new();
        result.extend(self.all_issues.into_iter().filter(|issue| keep(issue)));
        result
    }

    pub fn issues_with_code(&self, code: IssueCode) -> impl Iterator<Item = &ValidationIssue> {
        self.all_issues.iter().filter(move |issue| issue.code == code)
    }
}
