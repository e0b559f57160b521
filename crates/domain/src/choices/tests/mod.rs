//! Whole-flow tests over the public entry points.

mod scenarios;

use super::{ChoiceCategory, Source, Submission, Submissions};

pub(super) fn submissions(list: Vec<Submission>) -> Submissions {
    let mut all = Submissions::new();
    for sub in list {
        all.add(sub).unwrap();
    }
    all
}

pub(super) fn class_pick(category: ChoiceCategory, choice_id: &str, values: &[&str]) -> Submission {
    Submission::new(category, Source::Class, choice_id, values.iter().copied())
}

pub(super) fn class_bundle(choice_id: &str, option_id: &str) -> Submission {
    Submission::equipment(Source::Class, choice_id, option_id)
}
