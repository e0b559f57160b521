//! What a player actually chose.
//!
//! A [`Submission`] answers one requirement slot. [`Submissions`] keeps them in
//! arrival order and indexes them by `(category, choice_id)`; the index is
//! derived and never serialised.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ChoiceId, OptionId};

string_enum! {
    /// Where a choice or grant comes from.
    pub enum Source ("source") {
        Class => "class",
        Race => "race",
        Subrace => "subrace",
        Subclass => "subclass",
        Background => "background",
        Feat => "feat",
        Multiclass => "multiclass",
        LevelUp => "level_up",
        Manual => "manual",
    }
}

string_enum! {
    /// Which kind of requirement a submission answers.
    pub enum ChoiceCategory ("choice category") {
        Skills => "skills",
        Languages => "languages",
        Tools => "tools",
        Instruments => "instruments",
        FightingStyle => "fighting_style",
        Expertise => "expertise",
        Cantrips => "cantrips",
        Spells => "spells",
        Equipment => "equipment",
        Subclass => "subclass",
        DraconicAncestry => "draconic_ancestry",
    }
}

/// One answered choice slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub category: ChoiceCategory,
    pub source: Source,
    pub choice_id: ChoiceId,
    /// Chosen bundle for equipment requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<OptionId>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Submission {
    pub fn new<V: ToString>(
        category: ChoiceCategory,
        source: Source,
        choice_id: impl Into<ChoiceId>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            category,
            source,
            choice_id: choice_id.into(),
            option_id: None,
            values: values.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Equipment bundle pick. The option id is also the single submitted value.
    pub fn equipment(
        source: Source,
        choice_id: impl Into<ChoiceId>,
        option_id: impl Into<OptionId>,
    ) -> Self {
        let option_id = option_id.into();
        Self {
            category: ChoiceCategory::Equipment,
            source,
            choice_id: choice_id.into(),
            values: vec![option_id.to_string()],
            option_id: Some(option_id),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

#[derive(Serialize, Deserialize)]
struct SubmissionsRepr {
    #[serde(default)]
    choices: Vec<Submission>,
}

/// Ordered collection of submissions with a `(category, choice_id)` index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SubmissionsRepr", into = "SubmissionsRepr")]
pub struct Submissions {
    choices: Vec<Submission>,
    index: HashMap<(ChoiceCategory, ChoiceId), Vec<usize>>,
}

impl Submissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON payload of the form `{"choices": [...]}`.
    ///
    /// A choice missing its category or source, or with an empty choice id,
    /// is a contract violation and fails the whole payload.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let repr: SubmissionsRepr = serde_json::from_str(json)?;
        Self::try_from(repr)
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn add(&mut self, submission: Submission) -> Result<&mut Self, DomainError> {
        if submission.choice_id.is_empty() {
            return Err(DomainError::invalid_submission(format!(
                "{} submission from {} has an empty choice_id",
                submission.category, submission.source
            )));
        }
        let key = (submission.category, submission.choice_id.clone());
        self.index.entry(key).or_default().push(self.choices.len());
        self.choices.push(submission);
        Ok(self)
    }

    /// Builder form of [`Submissions::add`].
    pub fn with(mut self, submission: Submission) -> Result<Self, DomainError> {
        self.add(submission)?;
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Submissions answering one slot, in arrival order.
    pub fn for_choice<'a>(
        &'a self,
        category: ChoiceCategory,
        choice_id: &ChoiceId,
    ) -> impl Iterator<Item = &'a Submission> + 'a {
        self.index
            .get(&(category, choice_id.clone()))
            .into_iter()
            .flatten()
            .filter_map(|i| self.choices.get(*i))
    }

    pub fn by_category(&self, category: ChoiceCategory) -> impl Iterator<Item = &Submission> {
        self.choices.iter().filter(move |s| s.category == category)
    }
}

impl PartialEq for Submissions {
    fn eq(&self, other: &Self) -> bool {
        self.choices == other.choices
    }
}

impl Eq for Submissions {}

impl TryFrom<SubmissionsRepr> for Submissions {
    type Error = DomainError;

    fn try_from(repr: SubmissionsRepr) -> Result<Self, Self::Error> {
        let mut submissions = Submissions::new();
        for choice in repr.choices {
            submissions.add(choice)?;
        }
        Ok(submissions)
    }
}

impl From<Submissions> for SubmissionsRepr {
    fn from(submissions: Submissions) -> Self {
        Self {
            choices: submissions.choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(source: Source, id: &str, values: &[&str]) -> Submission {
        Submission::new(ChoiceCategory::Skills, source, id, values.iter().copied())
    }

    #[test]
    fn test_index_matches_by_category_and_choice() {
        let subs = Submissions::new()
            .with(skills(Source::Class, "fighter-skills", &["athletics", "history"]))
            .unwrap()
            .with(Submission::equipment(Source::Class, "fighter-pack", "fighter-pack-a"))
            .unwrap();

        let id = ChoiceId::from("fighter-skills");
        assert_eq!(subs.for_choice(ChoiceCategory::Skills, &id).count(), 1);
        assert_eq!(subs.for_choice(ChoiceCategory::Languages, &id).count(), 0);
        assert_eq!(subs.by_category(ChoiceCategory::Equipment).count(), 1);
    }

    #[test]
    fn test_json_roundtrip_skips_index() {
        let subs = Submissions::new()
            .with(skills(Source::Race, "half-elf-skills", &["stealth", "insight"]))
            .unwrap();
        let json = subs.to_json().unwrap();
        assert!(!json.contains("index"));

        let back = Submissions::from_json(&json).unwrap();
        assert_eq!(back, subs);
        let id = ChoiceId::from("half-elf-skills");
        assert_eq!(back.for_choice(ChoiceCategory::Skills, &id).count(), 1);
    }

    #[test]
    fn test_missing_category_is_contract_error() {
        let json = r#"{"choices":[{"source":"class","choice_id":"fighter-skills","values":[]}]}"#;
        let err = Submissions::from_json(json).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSubmission(_)));
    }

    #[test]
    fn test_unknown_category_is_contract_error() {
        let json = r#"{"choices":[{"category":"feelings","source":"class","choice_id":"x","values":[]}]}"#;
        assert!(Submissions::from_json(json).is_err());
    }

    #[test]
    fn test_empty_choice_id_rejected() {
        let mut subs = Submissions::new();
        let err = subs
            .add(skills(Source::Class, "", &["athletics"]))
            .unwrap_err();
        assert!(err.to_string().contains("empty choice_id"));
        assert!(subs.is_empty());
    }

    #[test]
    fn test_source_ids() {
        assert_eq!(Source::LevelUp.as_str(), "level_up");
        assert_eq!("subrace".parse::<Source>().unwrap(), Source::Subrace);
    }
}
