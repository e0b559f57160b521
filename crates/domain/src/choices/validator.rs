//! Checks submissions against declared requirements.
//!
//! Every applicable rule runs; the validator never stops at the first
//! problem. Player mistakes become [`ValidationIssue`]s, never errors.

use crate::choices::context::ValidationContext;
use crate::choices::grants::ProficiencyKind;
use crate::choices::issues::{
    Contributor, IssueCode, IssueDetails, ValidationIssue, ValidationResult,
};
use crate::choices::requirements::{
    ChoiceRequirement, EquipmentCategoryChoice, EquipmentRequirement, ExpertiseRequirement,
    Requirements,
};
use crate::choices::submission::{ChoiceCategory, Source, Submission, Submissions};
use crate::ids::ChoiceId;
use crate::vocab::{Equipment, ExpertiseTarget, Vocabulary};

/// Validates `submissions` against one source's `requirements`.
pub fn validate_requirements(
    requirements: &Requirements,
    submissions: &Submissions,
    context: Option<&ValidationContext>,
) -> ValidationResult {
    let empty = ValidationContext::default();
    let mut validator = Validator {
        submissions,
        context: context.unwrap_or(&empty),
        claimed: Vec::new(),
    };
    let mut result = ValidationResult::new();
    let reqs = requirements;

    if let Some(req) = &reqs.skills {
        validator.check_choice(&mut result, ChoiceCategory::Skills, req);
    }
    for req in &reqs.additional_skills {
        validator.check_choice(&mut result, ChoiceCategory::Skills, req);
    }
    for req in &reqs.languages {
        validator.check_choice(&mut result, ChoiceCategory::Languages, req);
    }
    for req in &reqs.tools {
        validator.check_choice(&mut result, ChoiceCategory::Tools, req);
    }
    if let Some(req) = &reqs.instruments {
        validator.check_choice(&mut result, ChoiceCategory::Instruments, req);
    }
    if let Some(req) = &reqs.fighting_style {
        validator.check_choice(&mut result, ChoiceCategory::FightingStyle, req);
    }
    if let Some(req) = &reqs.cantrips {
        validator.check_choice(&mut result, ChoiceCategory::Cantrips, req);
    }
    for req in reqs.spells.iter().chain(&reqs.spellbook) {
        validator.check_choice(&mut result, ChoiceCategory::Spells, req);
    }
    if let Some(req) = &reqs.draconic_ancestry {
        validator.check_choice(&mut result, ChoiceCategory::DraconicAncestry, req);
    }
    if let Some(req) = &reqs.subclass {
        validator.check_choice(&mut result, ChoiceCategory::Subclass, req);
    }
    for req in &reqs.equipment {
        validator.check_equipment(&mut result, req);
    }
    for req in &reqs.expertise {
        validator.check_expertise(&mut result, req);
    }

    tracing::debug!(
        errors = result.errors.len(),
        incomplete = result.incomplete.len(),
        warnings = result.warnings.len(),
        "Validated requirements"
    );
    result
}

/// Word for `count` values of a category, as used in messages.
fn noun(category: ChoiceCategory, count: u32) -> &'static str {
    let (one, many) = match category {
        ChoiceCategory::Skills => ("skill", "skills"),
        ChoiceCategory::Languages => ("language", "languages"),
        ChoiceCategory::Tools => ("tool", "tools"),
        ChoiceCategory::Instruments => ("instrument", "instruments"),
        ChoiceCategory::FightingStyle => ("fighting style", "fighting styles"),
        ChoiceCategory::Expertise => ("skill or tool for expertise", "skills or tools for expertise"),
        ChoiceCategory::Cantrips => ("cantrip", "cantrips"),
        ChoiceCategory::Spells => ("spell", "spells"),
        ChoiceCategory::Equipment => ("option", "options"),
        ChoiceCategory::Subclass => ("subclass", "subclasses"),
        ChoiceCategory::DraconicAncestry => ("draconic ancestry", "draconic ancestries"),
    };
    if count == 1 {
        one
    } else {
        many
    }
}

fn value_count(values: &[String]) -> u32 {
    u32::try_from(values.len()).unwrap_or(u32::MAX)
}

fn missing(category: ChoiceCategory, choice_id: &ChoiceId) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::RequiredChoiceMissing,
        category,
        format!("Required choice '{}' is missing", choice_id),
    )
    .with_choice(choice_id)
    .with_details(IssueDetails::Missing {
        choice_id: choice_id.clone(),
    })
}

fn count_mismatch(
    category: ChoiceCategory,
    choice_id: &ChoiceId,
    expected: u32,
    actual: u32,
) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::ExactCountRequired,
        category,
        format!(
            "Must choose exactly {} {}, got {}",
            expected,
            noun(category, expected),
            actual
        ),
    )
    .with_choice(choice_id)
    .with_details(IssueDetails::Count { expected, actual })
}

fn invalid_value(
    category: ChoiceCategory,
    choice_id: &ChoiceId,
    value: &str,
    options: Vec<String>,
) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::InvalidOption,
        category,
        format!("Invalid {} choice: {}", noun(category, 1), value),
    )
    .with_choice(choice_id)
    .with_details(IssueDetails::InvalidValue {
        value: value.to_string(),
        options,
    })
}

fn duplicate_selection(
    category: ChoiceCategory,
    choice_id: &ChoiceId,
    value: &str,
    source: Source,
) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::DuplicateSelection,
        category,
        format!("Duplicate {} selected: {}", noun(category, 1), value),
    )
    .with_choice(choice_id)
    .with_details(IssueDetails::Duplicate {
        value: value.to_string(),
        sources: vec![Contributor::chosen(source)],
    })
    .with_source(source)
}

fn duplicate_choice(
    category: ChoiceCategory,
    choice_id: &ChoiceId,
    kind: &str,
    value: &str,
    first: Source,
    second: Source,
) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::DuplicateChoice,
        category,
        format!("{} '{}' chosen by both {} and {}", kind, value, first, second),
    )
    .with_choice(choice_id)
    .with_details(IssueDetails::Duplicate {
        value: value.to_string(),
        sources: vec![Contributor::chosen(first), Contributor::chosen(second)],
    })
    .with_source(second)
}

/// A proficiency value accepted for one slot.
struct Claim {
    kind: ProficiencyKind,
    value: &'static str,
    source: Source,
    choice_id: ChoiceId,
}

struct Validator<'a> {
    submissions: &'a Submissions,
    context: &'a ValidationContext,
    /// Values accepted so far, across every slot of the same proficiency kind.
    claimed: Vec<Claim>,
}

impl Validator<'_> {
    /// Count, membership, duplicate and redundancy rules for one slot.
    ///
    /// Returns the accepted values with the source that chose them.
    fn check_choice<T: Vocabulary>(
        &mut self,
        result: &mut ValidationResult,
        category: ChoiceCategory,
        req: &ChoiceRequirement<T>,
    ) -> Vec<(T, Source)> {
        let submissions = self.submissions;
        let mut accepted: Vec<(T, Source)> = Vec::new();
        let mut answered = false;

        for sub in submissions.for_choice(category, &req.id) {
            answered = true;
            let actual = value_count(&sub.values);
            if actual != req.count {
                result.add_issue(
                    count_mismatch(category, &req.id, req.count, actual).with_source(sub.source),
                );
            }

            for raw in &sub.values {
                let value = match raw.parse::<T>() {
                    Ok(value) if req.allows(&value) => value,
                    _ => {
                        let options = req
                            .options
                            .as_ref()
                            .map(|opts| opts.iter().map(|o| o.id().to_string()).collect())
                            .unwrap_or_default();
                        result.add_issue(
                            invalid_value(category, &req.id, raw, options).with_source(sub.source),
                        );
                        continue;
                    }
                };

                match accepted.iter().find(|(v, _)| *v == value) {
                    Some((_, prev)) if *prev == sub.source => {
                        result.add_issue(duplicate_selection(
                            category, &req.id, raw, sub.source,
                        ));
                        continue;
                    }
                    Some((_, prev)) => {
                        result.add_issue(duplicate_choice(
                            category, &req.id, T::KIND, raw, *prev, sub.source,
                        ));
                        continue;
                    }
                    None => {}
                }

                let kind = ProficiencyKind::for_category(category);
                if let Some(kind) = kind {
                    let earlier = self
                        .claimed
                        .iter()
                        .find(|c| c.kind == kind && c.value == value.id() && c.choice_id != req.id);
                    if let Some(claim) = earlier {
                        let issue = if claim.source == sub.source {
                            ValidationIssue::new(
                                IssueCode::DuplicateSelection,
                                category,
                                format!(
                                    "Duplicate {} selected: {} is already chosen for '{}'",
                                    noun(category, 1),
                                    raw,
                                    claim.choice_id
                                ),
                            )
                            .with_choice(&req.id)
                            .with_details(IssueDetails::Duplicate {
                                value: raw.clone(),
                                sources: vec![Contributor::chosen(sub.source)],
                            })
                            .with_source(sub.source)
                        } else {
                            duplicate_choice(
                                category,
                                &req.id,
                                T::KIND,
                                raw,
                                claim.source,
                                sub.source,
                            )
                        };
                        result.add_issue(issue);
                        continue;
                    }
                }

                self.check_redundant(result, category, &req.id, value.id(), sub.source);
                if let Some(kind) = kind {
                    self.claimed.push(Claim {
                        kind,
                        value: value.id(),
                        source: sub.source,
                        choice_id: req.id.clone(),
                    });
                }
                accepted.push((value, sub.source));
            }
        }

        if !answered {
            result.add_issue(missing(category, &req.id));
        }
        accepted
    }

    /// Warns when the context already supplies `value` from another source.
    fn check_redundant(
        &self,
        result: &mut ValidationResult,
        category: ChoiceCategory,
        choice_id: &ChoiceId,
        value: &str,
        source: Source,
    ) {
        let Some(kind) = ProficiencyKind::for_category(category) else {
            return;
        };
        let held = self
            .context
            .grant_source(kind, value)
            .map(Contributor::granted)
            .or_else(|| self.context.proficiency_source(kind, value).map(Contributor::chosen));
        let Some(held) = held.filter(|held| held.source != source) else {
            return;
        };
        result.add_issue(
            ValidationIssue::new(
                IssueCode::RedundantChoice,
                category,
                format!("{} '{}' is already provided by {}", kind, value, held.source),
            )
            .with_choice(choice_id)
            .with_details(IssueDetails::Duplicate {
                value: value.to_string(),
                sources: vec![Contributor::chosen(source), held],
            })
            .with_source(source),
        );
    }

    fn check_equipment(&self, result: &mut ValidationResult, req: &EquipmentRequirement) {
        let category = ChoiceCategory::Equipment;
        let declared: Vec<String> = req.options.iter().map(|o| o.id.to_string()).collect();
        let mut answered = false;

        for sub in self.submissions.for_choice(category, &req.id) {
            answered = true;
            let actual = value_count(&sub.values);
            if actual != req.choose {
                result.add_issue(
                    count_mismatch(category, &req.id, req.choose, actual).with_source(sub.source),
                );
            }

            if let Some(option_id) = &sub.option_id {
                if req.option(option_id.as_str()).is_none() {
                    result.add_issue(
                        invalid_value(category, &req.id, option_id.as_str(), declared.clone())
                            .with_source(sub.source),
                    );
                } else if !sub.contains(option_id.as_str()) {
                    result.add_issue(
                        ValidationIssue::new(
                            IssueCode::ConflictingChoice,
                            category,
                            format!(
                                "Option '{}' does not match the submitted values",
                                option_id
                            ),
                        )
                        .with_choice(&req.id)
                        .with_details(IssueDetails::Conflict {
                            expected: option_id.to_string(),
                            actual: sub.values.join(", "),
                        })
                        .with_source(sub.source),
                    );
                }
            }

            let mut chosen: Vec<&str> = Vec::new();
            for raw in &sub.values {
                let Some(option) = req.option(raw) else {
                    result.add_issue(
                        invalid_value(category, &req.id, raw, declared.clone())
                            .with_source(sub.source),
                    );
                    continue;
                };
                if chosen.contains(&raw.as_str()) {
                    result.add_issue(duplicate_selection(category, &req.id, raw, sub.source));
                    continue;
                }
                chosen.push(raw.as_str());
                for choice in &option.category_choices {
                    self.check_category_choice(result, option.id.as_str(), choice, sub);
                }
            }
        }

        if !answered {
            result.add_issue(missing(category, &req.id));
        }
    }

    /// Open pick nested in a chosen bundle ("any martial weapon").
    fn check_category_choice(
        &self,
        result: &mut ValidationResult,
        option_id: &str,
        choice: &EquipmentCategoryChoice,
        parent: &Submission,
    ) {
        let category = ChoiceCategory::Equipment;
        let mut answered = false;

        for sub in self.submissions.for_choice(category, &choice.id) {
            answered = true;
            let actual = value_count(&sub.values);
            if actual != choice.choose {
                result.add_issue(
                    count_mismatch(category, &choice.id, choice.choose, actual)
                        .with_source(sub.source),
                );
            }

            let mut picked: Vec<Equipment> = Vec::new();
            for raw in &sub.values {
                let item = match raw.parse::<Equipment>() {
                    Ok(item) if choice.allows(item) => item,
                    _ => {
                        let allowed = choice
                            .categories
                            .iter()
                            .map(|c| c.as_str().to_string())
                            .collect();
                        result.add_issue(
                            invalid_value(category, &choice.id, raw, allowed)
                                .with_source(sub.source),
                        );
                        continue;
                    }
                };
                if choice.choose > 1 && picked.contains(&item) {
                    result.add_issue(duplicate_selection(category, &choice.id, raw, sub.source));
                    continue;
                }
                picked.push(item);
            }
        }

        if !answered {
            result.add_issue(
                ValidationIssue::new(
                    IssueCode::DependentChoiceMissing,
                    category,
                    format!(
                        "Option '{}' needs choice '{}': {}",
                        option_id, choice.id, choice.label
                    ),
                )
                .with_choice(&choice.id)
                .with_details(IssueDetails::Missing {
                    choice_id: choice.id.clone(),
                })
                .with_source(parent.source),
            );
        }
    }

    fn check_expertise(&mut self, result: &mut ValidationResult, req: &ExpertiseRequirement) {
        let category = ChoiceCategory::Expertise;
        for (target, source) in self.check_choice(result, category, req) {
            if !self.context.has_proficiency(target) && !self.submitted_proficiency(target) {
                result.add_issue(
                    ValidationIssue::new(
                        IssueCode::ExpertiseWithoutProficiency,
                        category,
                        format!("Cannot have expertise in {} without proficiency", target),
                    )
                    .with_choice(&req.id)
                    .with_details(IssueDetails::Prerequisite {
                        value: target.to_string(),
                        prerequisite: format!("proficiency in {}", target),
                    })
                    .with_source(source),
                );
            }
            if self.context.has_expertise(target) {
                result.add_issue(
                    ValidationIssue::new(
                        IssueCode::ExpertiseAlreadyApplied,
                        category,
                        format!("Expertise in {} is already applied", target),
                    )
                    .with_choice(&req.id)
                    .with_details(IssueDetails::InvalidValue {
                        value: target.to_string(),
                        options: Vec::new(),
                    })
                    .with_source(source),
                );
            }
        }
    }

    /// Proficiency picked elsewhere in the same submission set.
    fn submitted_proficiency(&self, target: ExpertiseTarget) -> bool {
        let id = target.as_str();
        match target {
            ExpertiseTarget::Skill(_) => self
                .submissions
                .by_category(ChoiceCategory::Skills)
                .any(|s| s.contains(id)),
            ExpertiseTarget::Tool(_) => self
                .submissions
                .by_category(ChoiceCategory::Tools)
                .chain(self.submissions.by_category(ChoiceCategory::Instruments))
                .any(|s| s.contains(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::grants::Grant;
    use crate::choices::issues::Severity;
    use crate::choices::requirements::{
        EquipmentOption, LanguageRequirement, SkillRequirement,
    };
    use crate::vocab::{EquipmentCategory, Skill, Tool};

    fn skill_req() -> Requirements {
        Requirements {
            skills: Some(SkillRequirement::from_options(
                "fighter-skills",
                2,
                [Skill::Athletics, Skill::History, Skill::Perception],
                "Choose 2 skills",
            )),
            ..Requirements::default()
        }
    }

    fn skills(source: Source, values: &[&str]) -> Submission {
        Submission::new(
            ChoiceCategory::Skills,
            source,
            "fighter-skills",
            values.iter().copied(),
        )
    }

    fn run(reqs: &Requirements, subs: Vec<Submission>) -> ValidationResult {
        let mut all = Submissions::new();
        for sub in subs {
            all.add(sub).unwrap();
        }
        validate_requirements(reqs, &all, None)
    }

    #[test]
    fn test_exact_count_passes() {
        let result = run(&skill_req(), vec![skills(Source::Class, &["athletics", "history"])]);
        assert!(result.all_issues.is_empty());
        assert!(result.can_finalize);
    }

    #[test]
    fn test_count_off_by_one_yields_one_error() {
        for values in [vec!["athletics"], vec!["athletics", "history", "perception"]] {
            let result = run(&skill_req(), vec![skills(Source::Class, &values)]);
            let counts: Vec<_> = result.issues_with_code(IssueCode::ExactCountRequired).collect();
            assert_eq!(counts.len(), 1);
            assert_eq!(
                counts[0].details,
                Some(IssueDetails::Count {
                    expected: 2,
                    actual: u32::try_from(values.len()).unwrap(),
                })
            );
        }
    }

    #[test]
    fn test_value_outside_options_is_invalid() {
        let result = run(&skill_req(), vec![skills(Source::Class, &["athletics", "arcana"])]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, IssueCode::InvalidOption);
        assert_eq!(result.errors[0].message, "Invalid skill choice: arcana");
    }

    #[test]
    fn test_unparseable_value_in_open_slot_is_invalid() {
        let reqs = Requirements {
            languages: vec![LanguageRequirement::any("human-language", 1, "Choose 1")],
            ..Requirements::default()
        };
        let sub = Submission::new(
            ChoiceCategory::Languages,
            Source::Race,
            "human-language",
            ["klingon"],
        );
        let result = run(&reqs, vec![sub]);
        assert_eq!(result.errors[0].code, IssueCode::InvalidOption);
    }

    #[test]
    fn test_duplicate_within_submission_is_error() {
        let result = run(&skill_req(), vec![skills(Source::Class, &["athletics", "athletics"])]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, IssueCode::DuplicateSelection);
        assert!(!result.can_save);
    }

    #[test]
    fn test_duplicate_across_sources_is_warning() {
        let result = run(
            &skill_req(),
            vec![
                skills(Source::Class, &["athletics", "history"]),
                skills(Source::Feat, &["athletics", "perception"]),
            ],
        );
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, IssueCode::DuplicateChoice);
        assert!(result.can_save);
        assert!(!result.is_optimal);
    }

    fn skills_with_extra_slot() -> Requirements {
        let mut reqs = skill_req();
        reqs.additional_skills.push(SkillRequirement::from_options(
            "extra-skills",
            2,
            [Skill::Arcana, Skill::History],
            "Choose 2 skills",
        ));
        reqs
    }

    #[test]
    fn test_same_value_in_two_slots_from_one_source_is_error() {
        let result = run(
            &skills_with_extra_slot(),
            vec![
                skills(Source::Class, &["history", "athletics"]),
                Submission::new(
                    ChoiceCategory::Skills,
                    Source::Class,
                    "extra-skills",
                    ["history", "arcana"],
                ),
            ],
        );
        assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
        let error = &result.errors[0];
        assert_eq!(error.code, IssueCode::DuplicateSelection);
        assert_eq!(error.choice_id.as_ref().unwrap(), "extra-skills");
        assert!(error.message.contains("fighter-skills"));
        assert!(!result.can_save);
    }

    #[test]
    fn test_same_value_in_two_slots_from_two_sources_is_warning() {
        let result = run(
            &skills_with_extra_slot(),
            vec![
                skills(Source::Class, &["history", "athletics"]),
                Submission::new(
                    ChoiceCategory::Skills,
                    Source::Subclass,
                    "extra-skills",
                    ["history", "arcana"],
                ),
            ],
        );
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, IssueCode::DuplicateChoice);
    }

    #[test]
    fn test_languages_share_one_pool_across_slots() {
        let reqs = Requirements {
            languages: vec![
                LanguageRequirement::any("first-language", 1, "Choose 1 language"),
                LanguageRequirement::any("second-language", 1, "Choose 1 language"),
            ],
            ..Requirements::default()
        };
        let lang = |id: &str| {
            Submission::new(ChoiceCategory::Languages, Source::Background, id, ["elvish"])
        };
        let result = run(&reqs, vec![lang("first-language"), lang("second-language")]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, IssueCode::DuplicateSelection);
    }

    #[test]
    fn test_missing_submission_is_incomplete() {
        let result = run(&skill_req(), vec![]);
        assert_eq!(result.incomplete.len(), 1);
        assert_eq!(result.incomplete[0].severity, Severity::Incomplete);
        assert!(result.can_save);
        assert!(!result.can_finalize);
    }

    #[test]
    fn test_granted_value_is_redundant() {
        let ctx = ValidationContext::new().with_grant(Grant::new(Source::Race, Skill::Perception));
        let subs = Submissions::new()
            .with(skills(Source::Class, &["athletics", "perception"]))
            .unwrap();
        let result = validate_requirements(&skill_req(), &subs, Some(&ctx));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, IssueCode::RedundantChoice);
        assert_eq!(
            result.warnings[0].details,
            Some(IssueDetails::Duplicate {
                value: "perception".into(),
                sources: vec![
                    Contributor::chosen(Source::Class),
                    Contributor::granted(Source::Race)
                ],
            })
        );
    }

    #[test]
    fn test_all_checks_run_without_short_circuit() {
        let result = run(
            &skill_req(),
            vec![skills(Source::Class, &["arcana", "athletics", "athletics"])],
        );
        let codes: Vec<_> = result.errors.iter().map(|i| i.code).collect();
        assert!(codes.contains(&IssueCode::ExactCountRequired));
        assert!(codes.contains(&IssueCode::InvalidOption));
        assert!(codes.contains(&IssueCode::DuplicateSelection));
    }

    fn weapon_req() -> Requirements {
        Requirements {
            equipment: vec![EquipmentRequirement::new(
                "fighter-weapons-primary",
                "Choose your primary weapons",
                vec![
                    EquipmentOption::new("fighter-weapon-a", "a martial weapon and a shield")
                        .item(Equipment::Shield, 1)
                        .choice_of(1, EquipmentCategory::MARTIAL_WEAPONS, "Choose a martial weapon"),
                    EquipmentOption::new("fighter-weapon-b", "two martial weapons").choice_of(
                        2,
                        EquipmentCategory::MARTIAL_WEAPONS,
                        "Choose 2 martial weapons",
                    ),
                ],
            )],
            ..Requirements::default()
        }
    }

    fn pick(option: &str) -> Submission {
        Submission::equipment(Source::Class, "fighter-weapons-primary", option)
    }

    fn nested(choice: &str, values: &[&str]) -> Submission {
        Submission::new(
            ChoiceCategory::Equipment,
            Source::Class,
            choice,
            values.iter().copied(),
        )
    }

    #[test]
    fn test_equipment_with_category_choice_passes() {
        let result = run(
            &weapon_req(),
            vec![
                pick("fighter-weapon-b"),
                nested("fighter-weapon-b-choice-1", &["longsword", "rapier"]),
            ],
        );
        assert!(result.all_issues.is_empty(), "{:?}", result.all_issues);
    }

    #[test]
    fn test_equipment_unknown_option_is_invalid() {
        let result = run(&weapon_req(), vec![pick("fighter-weapon-z")]);
        assert!(result
            .errors
            .iter()
            .all(|i| i.code == IssueCode::InvalidOption));
        assert!(!result.errors.is_empty());
    }

    #[test]
    fn test_equipment_missing_category_choice_is_incomplete() {
        let result = run(&weapon_req(), vec![pick("fighter-weapon-a")]);
        assert!(result.errors.is_empty());
        assert_eq!(result.incomplete.len(), 1);
        assert_eq!(result.incomplete[0].code, IssueCode::DependentChoiceMissing);
    }

    #[test]
    fn test_equipment_category_choice_rules() {
        let result = run(
            &weapon_req(),
            vec![
                pick("fighter-weapon-b"),
                nested("fighter-weapon-b-choice-1", &["longsword", "longsword"]),
            ],
        );
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, IssueCode::DuplicateSelection);

        let result = run(
            &weapon_req(),
            vec![
                pick("fighter-weapon-b"),
                nested("fighter-weapon-b-choice-1", &["longsword", "mace"]),
            ],
        );
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, IssueCode::InvalidOption);
    }

    #[test]
    fn test_equipment_option_id_must_match_values() {
        let mut sub = pick("fighter-weapon-a");
        sub.values = vec!["fighter-weapon-b".into()];
        let result = run(&weapon_req(), vec![sub]);
        assert!(result
            .errors
            .iter()
            .any(|i| i.code == IssueCode::ConflictingChoice));
    }

    fn expertise_req() -> Requirements {
        let mut options = ExpertiseTarget::all_skills();
        options.push(ExpertiseTarget::Tool(Tool::ThievesTools));
        Requirements {
            expertise: vec![ExpertiseRequirement::from_options(
                "rogue-expertise-1",
                2,
                options,
                "Choose 2",
            )],
            ..Requirements::default()
        }
    }

    fn expertise(values: &[&str]) -> Submission {
        Submission::new(
            ChoiceCategory::Expertise,
            Source::Class,
            "rogue-expertise-1",
            values.iter().copied(),
        )
    }

    #[test]
    fn test_expertise_proficiency_from_submitted_skills() {
        let result = run(
            &expertise_req(),
            vec![
                Submission::new(
                    ChoiceCategory::Skills,
                    Source::Class,
                    "rogue-skills",
                    ["stealth", "acrobatics"],
                ),
                expertise(&["stealth", "acrobatics"]),
            ],
        );
        assert!(result.all_issues.is_empty());
    }

    #[test]
    fn test_expertise_without_proficiency_is_incomplete() {
        let ctx = ValidationContext::new().with_skill(Skill::Stealth, Source::Class);
        let subs = Submissions::new().with(expertise(&["stealth", "arcana"])).unwrap();
        let result = validate_requirements(&expertise_req(), &subs, Some(&ctx));
        assert_eq!(result.incomplete.len(), 1);
        assert_eq!(
            result.incomplete[0].code,
            IssueCode::ExpertiseWithoutProficiency
        );
        assert!(result.can_save);
    }

    #[test]
    fn test_expertise_already_applied_warns() {
        let ctx = ValidationContext::new()
            .with_skill(Skill::Stealth, Source::Class)
            .with_skill(Skill::Arcana, Source::Class)
            .with_expertise(Skill::Stealth);
        let subs = Submissions::new().with(expertise(&["stealth", "arcana"])).unwrap();
        let result = validate_requirements(&expertise_req(), &subs, Some(&ctx));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, IssueCode::ExpertiseAlreadyApplied);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let reqs = skill_req();
        let subs = Submissions::new()
            .with(skills(Source::Class, &["arcana", "athletics", "athletics"]))
            .unwrap();
        assert_eq!(
            validate_requirements(&reqs, &subs, None),
            validate_requirements(&reqs, &subs, None)
        );
    }
}
