//! Whole-character scan for values supplied by more than one source.

use std::collections::HashMap;

use crate::choices::grants::{Grant, ProficiencyKind};
use crate::choices::issues::{Contributor, IssueCode, IssueDetails, ValidationIssue};
use crate::choices::submission::{ChoiceCategory, Submissions};

struct Entry {
    kind: ProficiencyKind,
    value: String,
    category: ChoiceCategory,
    contributors: Vec<Contributor>,
}

/// Flags every proficiency value a player chose that another source also
/// supplies. Values only ever granted are left alone, since no choice was
/// wasted on them.
///
/// Chosen contributors are recorded in submission order before grants, so a
/// class pick of a race-granted skill reads `["class", "race(granted)"]`.
/// Equipment, expertise, fighting style, subclass and ancestry values are
/// never compared.
pub fn detect_cross_source_duplicates(
    submissions: &Submissions,
    grants: &[Grant],
) -> Vec<ValidationIssue> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut index: HashMap<(ProficiencyKind, String), usize> = HashMap::new();

    let mut record = |kind: ProficiencyKind,
                      value: &str,
                      category: ChoiceCategory,
                      contributor: Contributor| {
        let slot = *index.entry((kind, value.to_string())).or_insert_with(|| {
            entries.push(Entry {
                kind,
                value: value.to_string(),
                category,
                contributors: Vec::new(),
            });
            entries.len() - 1
        });
        if let Some(entry) = entries.get_mut(slot) {
            if !entry.contributors.contains(&contributor) {
                entry.contributors.push(contributor);
            }
        }
    };

    for sub in submissions.iter() {
        let Some(kind) = ProficiencyKind::for_category(sub.category) else {
            continue;
        };
        for value in &sub.values {
            record(kind, value, sub.category, Contributor::chosen(sub.source));
        }
    }
    for grant in grants {
        let kind = grant.proficiency.kind();
        let category = match kind {
            ProficiencyKind::Skill => ChoiceCategory::Skills,
            ProficiencyKind::Language => ChoiceCategory::Languages,
            ProficiencyKind::Tool => ChoiceCategory::Tools,
            ProficiencyKind::Spell => ChoiceCategory::Cantrips,
        };
        record(
            kind,
            grant.proficiency.value(),
            category,
            Contributor::granted(grant.source),
        );
    }

    let issues: Vec<ValidationIssue> = entries
        .into_iter()
        .filter(|entry| {
            entry.contributors.len() > 1 && entry.contributors.iter().any(|c| !c.granted)
        })
        .map(|entry| {
            let names: Vec<String> = entry.contributors.iter().map(ToString::to_string).collect();
            let mut kind = entry.kind.to_string();
            if let Some(first) = kind.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            ValidationIssue::new(
                IssueCode::CrossSourceDuplicate,
                entry.category,
                format!(
                    "{} '{}' supplied by multiple sources: [{}]",
                    kind,
                    entry.value,
                    names.join(", ")
                ),
            )
            .with_details(IssueDetails::Duplicate {
                value: entry.value,
                sources: entry.contributors,
            })
        })
        .collect();

    tracing::debug!(duplicates = issues.len(), "Cross-source duplicate scan complete");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::submission::{Source, Submission};
    use crate::vocab::{Skill, Tool};

    fn subs(list: Vec<Submission>) -> Submissions {
        let mut all = Submissions::new();
        for sub in list {
            all.add(sub).unwrap();
        }
        all
    }

    #[test]
    fn test_class_pick_of_race_grant() {
        let submissions = subs(vec![Submission::new(
            ChoiceCategory::Skills,
            Source::Class,
            "fighter-skills",
            ["intimidation", "athletics"],
        )]);
        let grants = [Grant::new(Source::Race, Skill::Intimidation)];
        let issues = detect_cross_source_duplicates(&submissions, &grants);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Skill 'intimidation' supplied by multiple sources: [class, race(granted)]"
        );
        assert_eq!(
            issues[0].details,
            Some(IssueDetails::Duplicate {
                value: "intimidation".into(),
                sources: vec![
                    Contributor::chosen(Source::Class),
                    Contributor::granted(Source::Race)
                ],
            })
        );
    }

    #[test]
    fn test_same_source_twice_is_not_cross_source() {
        let submissions = subs(vec![
            Submission::new(ChoiceCategory::Skills, Source::Class, "a", ["stealth"]),
            Submission::new(ChoiceCategory::Skills, Source::Class, "b", ["stealth"]),
        ]);
        assert!(detect_cross_source_duplicates(&submissions, &[]).is_empty());
    }

    #[test]
    fn test_tools_and_instruments_share_pool() {
        let submissions = subs(vec![
            Submission::new(ChoiceCategory::Instruments, Source::Class, "bard-tools", ["lute"]),
            Submission::new(
                ChoiceCategory::Instruments,
                Source::Background,
                "entertainer-tools",
                ["lute"],
            ),
        ]);
        let issues = detect_cross_source_duplicates(&submissions, &[]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, crate::choices::issues::Severity::Warning);
    }

    #[test]
    fn test_equipment_and_expertise_values_ignored() {
        let submissions = subs(vec![
            Submission::new(ChoiceCategory::Skills, Source::Class, "rogue-skills", ["stealth"]),
            Submission::new(
                ChoiceCategory::Expertise,
                Source::Background,
                "rogue-expertise-1",
                ["stealth"],
            ),
            Submission::equipment(Source::Class, "rogue-pack", "rogue-pack-a"),
        ]);
        assert!(detect_cross_source_duplicates(&submissions, &[]).is_empty());
    }

    #[test]
    fn test_overlapping_grants_alone_are_not_waste() {
        let grants = [
            Grant::new(Source::Class, Tool::ThievesTools),
            Grant::new(Source::Background, Tool::ThievesTools),
        ];
        assert!(detect_cross_source_duplicates(&Submissions::new(), &grants).is_empty());
    }

    #[test]
    fn test_choice_over_two_grants_lists_all() {
        let submissions = subs(vec![Submission::new(
            ChoiceCategory::Tools,
            Source::Race,
            "dwarf-tools",
            ["thieves-tools"],
        )]);
        let grants = [
            Grant::new(Source::Class, Tool::ThievesTools),
            Grant::new(Source::Background, Tool::ThievesTools),
        ];
        let issues = detect_cross_source_duplicates(&submissions, &grants);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, ChoiceCategory::Tools);
        assert_eq!(
            issues[0].details,
            Some(IssueDetails::Duplicate {
                value: "thieves-tools".into(),
                sources: vec![
                    Contributor::chosen(Source::Race),
                    Contributor::granted(Source::Class),
                    Contributor::granted(Source::Background),
                ],
            })
        );
    }
}
