use super::{class_bundle, class_pick, submissions};
use crate::choices::{
    validate, validate_background_choices, validate_character, validate_class_choices,
    validate_class_choices_with_subclass, validate_race_choices, validate_with_subclass,
    CharacterChoices, ChoiceCategory, Contributor, IssueCode, IssueDetails, Source, Submission,
    ValidationContext, ValidationResult,
};
use crate::vocab::{Background, Class, Level, Race, Subclass};

fn fighter_equipment() -> Vec<Submission> {
    vec![
        class_bundle("fighter-armor", "fighter-armor-a"),
        class_bundle("fighter-weapons-primary", "fighter-weapon-a"),
        class_pick(ChoiceCategory::Equipment, "fighter-weapon-a-choice-1", &["longsword"]),
        class_bundle("fighter-weapons-secondary", "fighter-ranged-a"),
        class_bundle("fighter-pack", "fighter-pack-a"),
    ]
}

fn fighter(skills: &[&str]) -> Vec<Submission> {
    let mut subs = vec![
        class_pick(ChoiceCategory::Skills, "fighter-skills", skills),
        class_pick(ChoiceCategory::FightingStyle, "fighter-fighting-style", &["defense"]),
    ];
    subs.extend(fighter_equipment());
    subs
}

#[test]
fn test_fighter_level_one_complete() {
    let subs = submissions(fighter(&["athletics", "perception"]));
    let result = validate_class_choices(Class::Fighter, Level::MIN, &subs, None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.can_finalize, "{:?}", result.all_issues);
    assert!(result.is_optimal);
}

#[test]
fn test_fighter_three_skills_single_count_error() {
    let subs = submissions(fighter(&["athletics", "perception", "history"]));
    let result = validate_class_choices(Class::Fighter, Level::MIN, &subs, None);
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.code, IssueCode::ExactCountRequired);
    assert_eq!(
        error.details,
        Some(IssueDetails::Count {
            expected: 2,
            actual: 3
        })
    );
    assert_eq!(error.message, "Must choose exactly 2 skills, got 3");
    assert_eq!(error.source, Some(Source::Class));
    assert!(!result.can_save);
}

#[test]
fn test_knowledge_cleric_complete() {
    let subs = submissions(vec![
        class_pick(ChoiceCategory::Skills, "cleric-skills", &["insight", "medicine"]),
        class_pick(ChoiceCategory::Skills, "cleric-knowledge-skills", &["arcana", "history"]),
        class_pick(
            ChoiceCategory::Languages,
            "cleric-knowledge-languages",
            &["elvish", "dwarvish"],
        ),
        class_pick(
            ChoiceCategory::Cantrips,
            "cleric-cantrips-1",
            &["sacred-flame", "guidance", "thaumaturgy"],
        ),
        class_bundle("cleric-weapons", "cleric-weapon-a"),
        class_bundle("cleric-armor", "cleric-armor-a"),
        class_bundle("cleric-secondary-weapon", "cleric-secondary-a"),
        class_bundle("cleric-pack", "cleric-pack-a"),
        class_bundle("cleric-holy-symbol", "cleric-holy-a"),
    ]);
    let result = validate_class_choices_with_subclass(
        Class::Cleric,
        Subclass::KnowledgeDomain,
        Level::MIN,
        &subs,
        None,
    )
    .unwrap();
    assert!(result.can_finalize, "{:?}", result.all_issues);
    assert!(result.errors.is_empty());
}

#[test]
fn test_knowledge_skills_in_base_pool_rejected() {
    let subs = submissions(vec![class_pick(
        ChoiceCategory::Skills,
        "cleric-skills",
        &["insight", "medicine", "arcana", "history"],
    )]);
    let result = validate_class_choices(Class::Cleric, Level::MIN, &subs, None);
    let counts: Vec<_> = result
        .issues_with_code(IssueCode::ExactCountRequired)
        .collect();
    assert_eq!(counts.len(), 1);
    assert!(counts[0].message.contains("2 skills"));
    assert!(counts[0].message.contains('4'));
}

#[test]
fn test_half_orc_fighter_picks_granted_intimidation() {
    let mut list = fighter(&["intimidation", "athletics"]);
    list.push(Submission::new(
        ChoiceCategory::Languages,
        Source::Background,
        "acolyte-languages",
        ["dwarvish", "elvish"],
    ));
    let subs = submissions(list);

    let result = validate(
        Class::Fighter,
        Race::HalfOrc,
        Background::Acolyte,
        Level::MIN,
        &subs,
        None,
    );

    assert!(result.can_save);
    assert!(result.can_finalize, "{:?}", result.all_issues);
    assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
    let warning = &result.warnings[0];
    assert_eq!(warning.code, IssueCode::CrossSourceDuplicate);
    assert_eq!(
        warning.details,
        Some(IssueDetails::Duplicate {
            value: "intimidation".into(),
            sources: vec![
                Contributor::chosen(Source::Class),
                Contributor::granted(Source::Race)
            ],
        })
    );
    let json = serde_json::to_value(warning).unwrap();
    assert_eq!(
        json["details"]["sources"],
        serde_json::json!(["class", "race(granted)"])
    );
}

#[test]
fn test_rogue_expertise_without_proficiency() {
    let subs = submissions(vec![
        class_pick(
            ChoiceCategory::Skills,
            "rogue-skills",
            &["stealth", "acrobatics", "deception", "perception"],
        ),
        class_pick(ChoiceCategory::Expertise, "rogue-expertise-1", &["stealth", "arcana"]),
        class_bundle("rogue-weapons-primary", "rogue-weapon-a"),
        class_bundle("rogue-weapons-secondary", "rogue-secondary-a"),
        class_bundle("rogue-pack", "rogue-pack-a"),
    ]);
    let result = validate_class_choices(Class::Rogue, Level::MIN, &subs, None);
    assert_eq!(result.incomplete.len(), 1, "{:?}", result.incomplete);
    assert_eq!(
        result.incomplete[0].code,
        IssueCode::ExpertiseWithoutProficiency
    );
    assert!(result.can_save);
    assert!(!result.can_finalize);
}

#[test]
fn test_rogue_expertise_in_granted_thieves_tools() {
    let subs = submissions(vec![class_pick(
        ChoiceCategory::Expertise,
        "rogue-expertise-1",
        &["thieves-tools", "stealth"],
    )]);
    let ctx = ValidationContext::new().with_skill(crate::vocab::Skill::Stealth, Source::Class);
    let result = validate_class_choices(Class::Rogue, Level::MIN, &subs, Some(&ctx));
    assert!(result
        .issues_with_code(IssueCode::ExpertiseWithoutProficiency)
        .next()
        .is_none());
}

#[test]
fn test_conflicting_subclass_submission() {
    let subs = submissions(vec![class_pick(
        ChoiceCategory::Subclass,
        "cleric-domain",
        &["war-domain"],
    )]);
    let result = validate_class_choices_with_subclass(
        Class::Cleric,
        Subclass::LifeDomain,
        Level::MIN,
        &subs,
        None,
    )
    .unwrap();
    assert!(result
        .errors
        .iter()
        .any(|issue| issue.code == IssueCode::ConflictingChoice));
}

#[test]
fn test_subclass_slot_at_unlock_level() {
    let subs = submissions(vec![class_pick(
        ChoiceCategory::Subclass,
        "fighter-archetype",
        &["life-domain"],
    )]);
    let level3 = Level::new(3).unwrap();
    let result = validate_class_choices(Class::Fighter, level3, &subs, None);
    assert!(result
        .errors
        .iter()
        .any(|issue| issue.code == IssueCode::InvalidOption
            && issue.field == ChoiceCategory::Subclass));
}

fn issues_for<'a>(
    result: &'a ValidationResult,
    choice_id: &'a str,
) -> impl Iterator<Item = IssueCode> + 'a {
    result
        .all_issues
        .iter()
        .filter(move |issue| issue.choice_id.as_ref().is_some_and(|id| *id == choice_id))
        .map(|issue| issue.code)
}

#[test]
fn test_human_language_by_race() {
    let pick = |values: &[&str]| {
        submissions(vec![Submission::new(
            ChoiceCategory::Languages,
            Source::Race,
            "human-language",
            values.iter().copied(),
        )])
    };
    let result = validate_race_choices(Race::Human, &pick(&["elvish"]), None);
    assert!(result.can_finalize, "{:?}", result.all_issues);

    let result = validate_race_choices(Race::Human, &pick(&[]), None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, IssueCode::ExactCountRequired);
    assert_eq!(result.errors[0].source, Some(Source::Race));
}

#[test]
fn test_dragonborn_ancestry() {
    let pick = |value: &str| {
        submissions(vec![Submission::new(
            ChoiceCategory::DraconicAncestry,
            Source::Race,
            "dragonborn-ancestry",
            [value],
        )])
    };
    let result = validate_race_choices(Race::Dragonborn, &pick("gold"), None);
    assert!(result.can_finalize, "{:?}", result.all_issues);

    let result = validate_race_choices(Race::Dragonborn, &pick("purple"), None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, IssueCode::InvalidOption);
    assert_eq!(result.errors[0].field, ChoiceCategory::DraconicAncestry);

    let result = validate_race_choices(Race::Dragonborn, &submissions(Vec::new()), None);
    assert!(result.can_save);
    assert_eq!(
        issues_for(&result, "dragonborn-ancestry").collect::<Vec<_>>(),
        vec![IssueCode::RequiredChoiceMissing]
    );
}

#[test]
fn test_background_instrument() {
    let pick = |choice_id: &str, values: &[&str]| {
        Submission::new(
            ChoiceCategory::Instruments,
            Source::Background,
            choice_id,
            values.iter().copied(),
        )
    };

    let subs = submissions(vec![pick("entertainer-tools", &["lute"])]);
    let result = validate_background_choices(Background::Entertainer, &subs, None);
    assert!(result.can_finalize, "{:?}", result.all_issues);

    // Outlander also owes a language.
    let subs = submissions(vec![pick("outlander-tools", &["flute", "drum"])]);
    let result = validate_background_choices(Background::Outlander, &subs, None);
    assert_eq!(
        issues_for(&result, "outlander-tools").collect::<Vec<_>>(),
        vec![IssueCode::ExactCountRequired]
    );
    assert_eq!(
        issues_for(&result, "outlander-language").collect::<Vec<_>>(),
        vec![IssueCode::RequiredChoiceMissing]
    );
}

#[test]
fn test_bard_instruments() {
    let pick = |values: &[&str]| {
        submissions(vec![class_pick(ChoiceCategory::Instruments, "bard-tools", values)])
    };

    let result = validate_class_choices(Class::Bard, Level::MIN, &pick(&["lute", "flute", "viol"]), None);
    assert_eq!(issues_for(&result, "bard-tools").count(), 0);

    let result = validate_class_choices(Class::Bard, Level::MIN, &pick(&["lute", "flute"]), None);
    assert_eq!(
        issues_for(&result, "bard-tools").collect::<Vec<_>>(),
        vec![IssueCode::ExactCountRequired]
    );

    // Thieves' tools are a tool, not an instrument.
    let result = validate_class_choices(
        Class::Bard,
        Level::MIN,
        &pick(&["lute", "flute", "thieves-tools"]),
        None,
    );
    assert_eq!(
        issues_for(&result, "bard-tools").collect::<Vec<_>>(),
        vec![IssueCode::InvalidOption]
    );
}

#[test]
fn test_wizard_spellbook() {
    let book = [
        "alarm",
        "burning-hands",
        "charm-person",
        "chromatic-orb",
        "color-spray",
        "comprehend-languages",
    ];
    let pick = |values: &[&str]| {
        submissions(vec![class_pick(ChoiceCategory::Spells, "wizard-spells-1", values)])
    };

    let result = validate_class_choices(Class::Wizard, Level::MIN, &pick(&book), None);
    assert_eq!(issues_for(&result, "wizard-spells-1").count(), 0);

    let result = validate_class_choices(Class::Wizard, Level::MIN, &pick(&book[..5]), None);
    let count = result
        .issues_with_code(IssueCode::ExactCountRequired)
        .find(|issue| issue.choice_id.as_ref().is_some_and(|id| *id == "wizard-spells-1"))
        .unwrap();
    assert_eq!(count.message, "Must choose exactly 6 spells, got 5");

    // Bless is a cleric spell.
    let mut cleric_pick = book[..5].to_vec();
    cleric_pick.push("bless");
    let result = validate_class_choices(Class::Wizard, Level::MIN, &pick(&cleric_pick), None);
    assert_eq!(
        issues_for(&result, "wizard-spells-1").collect::<Vec<_>>(),
        vec![IssueCode::InvalidOption]
    );

    let level3 = Level::new(3).unwrap();
    let result = validate_class_choices(Class::Wizard, level3, &pick(&book), None);
    assert_eq!(
        issues_for(&result, "wizard-spells-1").collect::<Vec<_>>(),
        vec![IssueCode::ExactCountRequired]
    );
}

#[test]
fn test_knowledge_cleric_repeats_skill_across_slots() {
    let subs = submissions(vec![
        class_pick(ChoiceCategory::Skills, "cleric-skills", &["history", "insight"]),
        class_pick(ChoiceCategory::Skills, "cleric-knowledge-skills", &["history", "arcana"]),
    ]);
    let result = validate_with_subclass(
        Class::Cleric,
        Subclass::KnowledgeDomain,
        Race::HalfOrc,
        Background::Charlatan,
        Level::MIN,
        &subs,
        None,
    )
    .unwrap();
    let duplicates: Vec<_> = result
        .issues_with_code(IssueCode::DuplicateSelection)
        .collect();
    assert_eq!(duplicates.len(), 1, "{:?}", result.all_issues);
    assert_eq!(
        duplicates[0].choice_id.as_ref().unwrap(),
        "cleric-knowledge-skills"
    );
    assert!(!result.can_save);
}

#[test]
fn test_combined_without_duplicate_scan_keeps_redundancy_warning() {
    let subs = submissions(fighter(&["intimidation", "athletics"]));
    let character = CharacterChoices {
        class: Class::Fighter,
        race: Race::HalfOrc,
        background: Background::Charlatan,
        level: Level::MIN,
        subclass: None,
    };

    let result = validate_character(&character, &subs, None, false).unwrap();
    assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
    assert_eq!(result.warnings[0].code, IssueCode::RedundantChoice);

    let result = validate_character(&character, &subs, None, true).unwrap();
    assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
    assert_eq!(result.warnings[0].code, IssueCode::CrossSourceDuplicate);
}

#[test]
fn test_rogue_criminal_overlapping_grants_not_flagged() {
    let subs = submissions(vec![class_pick(
        ChoiceCategory::Skills,
        "rogue-skills",
        &["acrobatics", "insight", "investigation", "perception"],
    )]);
    let result = validate(
        Class::Rogue,
        Race::Human,
        Background::Criminal,
        Level::MIN,
        &subs,
        None,
    );
    assert_eq!(
        result
            .issues_with_code(IssueCode::CrossSourceDuplicate)
            .count(),
        0
    );
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}
