//! # Character Choices
//!
//! Declares what a player must choose during character creation and checks
//! what they submitted.
//!
//! ```text
//! catalog ──> Requirements ──> subclass modifications
//!                                     │
//!            Submissions ──> validator ┴──> ValidationResult
//!                 └────────> duplicate detector ──┘
//! ```
//!
//! Per-source entry points (`validate_class_choices` and friends) check one
//! source's requirements. The combined entry points check every source and
//! run the cross-source duplicate scan.

pub mod catalog;
pub mod choice_ids;
pub mod context;
pub mod duplicates;
pub mod grants;
pub mod issues;
pub mod requirements;
pub mod subclass;
pub mod submission;
pub mod validator;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

pub use catalog::{
    background_requirements, character_requirements, class_requirements,
    class_requirements_at_level, class_requirements_with_subclass, race_requirements,
};
pub use context::{AutomaticGrants, ValidationContext};
pub use duplicates::detect_cross_source_duplicates;
pub use grants::{Grant, Proficiency, ProficiencyKind};
pub use issues::{
    Contributor, IssueCode, IssueDetails, Severity, ValidationIssue, ValidationResult,
};
pub use requirements::{
    CharacterRequirements, ChoiceRequirement, EquipmentCategoryChoice, EquipmentItem,
    EquipmentOption, EquipmentRequirement, Requirements,
};
pub use subclass::{
    apply_subclass_modifications, subclass_modifications, LeveledDelta, RequirementDelta,
    SubclassModifications, SubclassRegistry,
};
pub use submission::{ChoiceCategory, Source, Submission, Submissions};
pub use validator::validate_requirements;

use crate::error::DomainError;
use crate::vocab::{Background, Class, Level, Race, Subclass};

/// Context enriched with `grants`, keeping whatever the caller supplied.
fn context_with(context: Option<&ValidationContext>, grants: &[Grant]) -> ValidationContext {
    let mut ctx = context.cloned().unwrap_or_default();
    ctx.add_grants(grants);
    ctx
}

/// Checks one source's `reqs` with `grants` added to the caller's context.
/// Issues without a source are attributed to `source`.
pub fn validate_source(
    source: Source,
    reqs: &Requirements,
    grants: &[Grant],
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> ValidationResult {
    let ctx = context_with(context, grants);
    validate_requirements(reqs, submissions, Some(&ctx)).tag_source(source)
}

pub fn validate_class_choices(
    class: Class,
    level: Level,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> ValidationResult {
    let reqs = class_requirements_at_level(class, level);
    validate_source(
        Source::Class,
        &reqs,
        &catalog::class_grants(class),
        submissions,
        context,
    )
}

/// Class validation with the subclass already decided.
///
/// A subclass submission naming a different subclass is reported as
/// [`IssueCode::ConflictingChoice`].
pub fn validate_class_choices_with_subclass(
    class: Class,
    subclass: Subclass,
    level: Level,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> Result<ValidationResult, DomainError> {
    let reqs = class_requirements_with_subclass(class, level, subclass)?;
    let mut grants = catalog::class_grants(class);
    grants.extend(catalog::subclass_grants(subclass, level));

    let mut result = validate_source(Source::Class, &reqs, &grants, submissions, context);
    result.extend(subclass_conflicts(class, subclass, submissions));
    Ok(result)
}

/// Subclass submissions naming anything other than `subclass`.
pub fn subclass_conflicts(
    class: Class,
    subclass: Subclass,
    submissions: &Submissions,
) -> Vec<ValidationIssue> {
    let choice_id = choice_ids::subclass(class);
    submissions
        .for_choice(ChoiceCategory::Subclass, &choice_id)
        .flat_map(|sub| sub.values.iter().map(move |value| (sub.source, value)))
        .filter(|(_, value)| value.as_str() != subclass.as_str())
        .map(|(source, value)| {
            ValidationIssue::new(
                IssueCode::ConflictingChoice,
                ChoiceCategory::Subclass,
                format!(
                    "Submitted subclass {} conflicts with chosen subclass {}",
                    value, subclass
                ),
            )
            .with_choice(&choice_id)
            .with_details(IssueDetails::Conflict {
                expected: subclass.to_string(),
                actual: value.clone(),
            })
            .with_source(source)
        })
        .collect()
}

pub fn validate_race_choices(
    race: Race,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> ValidationResult {
    let reqs = race_requirements(race);
    validate_source(
        Source::Race,
        &reqs,
        &catalog::race_grants(race),
        submissions,
        context,
    )
}

pub fn validate_background_choices(
    background: Background,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> ValidationResult {
    let reqs = background_requirements(background);
    validate_source(
        Source::Background,
        &reqs,
        &catalog::background_grants(background),
        submissions,
        context,
    )
}

/// Everything that identifies a character for whole-character validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterChoices {
    pub class: Class,
    pub race: Race,
    pub background: Background,
    pub level: Level,
    pub subclass: Option<Subclass>,
}

/// Validates every source and, when `detect_duplicates` is set, scans the
/// whole submission set for cross-source waste.
pub fn validate_character(
    character: &CharacterChoices,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
    detect_duplicates: bool,
) -> Result<ValidationResult, DomainError> {
    let CharacterChoices {
        class,
        race,
        background,
        level,
        subclass,
    } = *character;

    let catalog_grants =
        catalog::character_grants(class, race, background, subclass.map(|s| (s, level)));
    let ctx = context_with(context, &catalog_grants);

    let mut result = match subclass {
        Some(subclass) => {
            validate_class_choices_with_subclass(class, subclass, level, submissions, Some(&ctx))?
        }
        None => validate_class_choices(class, level, submissions, Some(&ctx)),
    };
    result.merge(validate_race_choices(race, submissions, Some(&ctx)));
    result.merge(validate_background_choices(background, submissions, Some(&ctx)));

    if detect_duplicates {
        let mut grants = catalog_grants;
        grants.extend(context.map(ValidationContext::grants).unwrap_or_default());
        result = with_duplicate_scan(result, submissions, &grants);
    }

    tracing::debug!(
        class = %class,
        race = %race,
        background = %background,
        level = %level,
        can_save = result.can_save,
        can_finalize = result.can_finalize,
        is_optimal = result.is_optimal,
        "Validated character choices"
    );
    Ok(result)
}

/// Adds the cross-source duplicate scan to a combined `result`.
///
/// Per-slot redundancy warnings for a value the scan reports are dropped so
/// one waste yields one warning.
pub fn with_duplicate_scan(
    result: ValidationResult,
    submissions: &Submissions,
    grants: &[Grant],
) -> ValidationResult {
    let duplicates = detect_cross_source_duplicates(submissions, grants);
    let key = |issue: &ValidationIssue| {
        issue
            .subject()
            .map(|value| (ProficiencyKind::for_category(issue.field), value.to_string()))
    };
    let reported: HashSet<_> = duplicates.iter().filter_map(key).collect();

    let mut result = result.retain(|issue| {
        let overlapping = matches!(
            issue.code,
            IssueCode::RedundantChoice | IssueCode::DuplicateChoice
        );
        !(overlapping && key(issue).is_some_and(|k| reported.contains(&k)))
    });
    result.extend(duplicates);
    result
}

/// Validates every source plus the cross-source duplicate scan.
pub fn validate(
    class: Class,
    race: Race,
    background: Background,
    level: Level,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> ValidationResult {
    let catalog_grants = catalog::character_grants(class, race, background, None);
    let ctx = context_with(context, &catalog_grants);

    let mut result = validate_class_choices(class, level, submissions, Some(&ctx));
    result.merge(validate_race_choices(race, submissions, Some(&ctx)));
    result.merge(validate_background_choices(background, submissions, Some(&ctx)));

    let mut grants = catalog_grants;
    grants.extend(context.map(ValidationContext::grants).unwrap_or_default());
    with_duplicate_scan(result, submissions, &grants)
}

pub fn validate_with_subclass(
    class: Class,
    subclass: Subclass,
    race: Race,
    background: Background,
    level: Level,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> Result<ValidationResult, DomainError> {
    let character = CharacterChoices {
        class,
        race,
        background,
        level,
        subclass: Some(subclass),
    };
    validate_character(&character, submissions, context, true)
}
