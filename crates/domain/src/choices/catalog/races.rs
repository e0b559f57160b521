//! Race rule tables. Sub-races inherit every choice and grant of their
//! parent race.

use crate::choices::choice_ids;
use crate::choices::grants::{grants_from, Grant};
use crate::choices::requirements::{
    AncestryRequirement, LanguageRequirement, Requirements, SkillRequirement, SpellRequirement,
    ToolRequirement,
};
use crate::choices::submission::Source;
use crate::vocab::{Class, Language, Race, Skill, Spell, Tool};

/// Choices declared by `race` alone, without its parent.
fn own_requirements(race: Race) -> Requirements {
    match race {
        Race::Human => Requirements {
            languages: vec![LanguageRequirement::any(
                choice_ids::race_language(race),
                1,
                "Choose 1 language",
            )],
            ..Requirements::default()
        },
        Race::HighElf => Requirements {
            languages: vec![LanguageRequirement::any(
                choice_ids::race_language(race),
                1,
                "Choose 1 language",
            )],
            cantrips: Some(SpellRequirement::from_options(
                choice_ids::race_cantrip(race),
                1,
                Spell::cantrips_for(Class::Wizard),
                "Choose 1 wizard cantrip",
            )),
            ..Requirements::default()
        },
        Race::Dwarf => Requirements {
            tools: vec![ToolRequirement::from_options(
                choice_ids::race_tools(race),
                1,
                [Tool::SmithsTools, Tool::BrewersSupplies, Tool::MasonsTools],
                "Choose 1 artisan's tool",
            )],
            ..Requirements::default()
        },
        Race::HalfElf => Requirements {
            skills: Some(SkillRequirement::any(
                choice_ids::race_skills(race),
                2,
                "Choose 2 skills",
            )),
            languages: vec![LanguageRequirement::any(
                choice_ids::race_language(race),
                1,
                "Choose 1 language",
            )],
            ..Requirements::default()
        },
        Race::Dragonborn => Requirements {
            draconic_ancestry: Some(AncestryRequirement::any(
                choice_ids::draconic_ancestry(race),
                1,
                "Choose your draconic ancestry",
            )),
            ..Requirements::default()
        },
        _ => Requirements::default(),
    }
}

/// Merges a parent's requirements under a sub-race's own.
fn inherit(mut own: Requirements, parent: Requirements) -> Requirements {
    own.skills = own.skills.or(parent.skills);
    own.languages.splice(0..0, parent.languages);
    own.tools.splice(0..0, parent.tools);
    own.cantrips = own.cantrips.or(parent.cantrips);
    own.draconic_ancestry = own.draconic_ancestry.or(parent.draconic_ancestry);
    own
}

pub fn race_requirements(race: Race) -> Requirements {
    let own = own_requirements(race);
    match race.parent() {
        Some(parent) => inherit(own, own_requirements(parent)),
        None => own,
    }
}

fn own_grants(race: Race) -> Vec<Grant> {
    let source = if race.is_subrace() {
        Source::Subrace
    } else {
        Source::Race
    };
    let languages: &[Language] = match race {
        Race::Human => &[Language::Common],
        Race::Elf => &[Language::Common, Language::Elvish],
        Race::Dwarf => &[Language::Common, Language::Dwarvish],
        Race::Halfling => &[Language::Common, Language::Halfling],
        Race::Gnome => &[Language::Common, Language::Gnomish],
        Race::Dragonborn => &[Language::Common, Language::Draconic],
        Race::HalfElf => &[Language::Common, Language::Elvish],
        Race::HalfOrc => &[Language::Common, Language::Orc],
        Race::Tiefling => &[Language::Common, Language::Infernal],
        _ => &[],
    };
    let skills: &[Skill] = match race {
        Race::Elf => &[Skill::Perception],
        Race::HalfOrc => &[Skill::Intimidation],
        _ => &[],
    };
    let tools: &[Tool] = match race {
        Race::RockGnome => &[Tool::TinkersTools],
        _ => &[],
    };
    let cantrips: &[Spell] = match race {
        Race::DarkElf => &[Spell::DancingLights],
        Race::ForestGnome => &[Spell::MinorIllusion],
        Race::Tiefling => &[Spell::Thaumaturgy],
        _ => &[],
    };

    grants_from(source, languages.iter().copied())
        .chain(grants_from(source, skills.iter().copied()))
        .chain(grants_from(source, tools.iter().copied()))
        .chain(grants_from(source, cantrips.iter().copied()))
        .collect()
}

/// Proficiencies and cantrips the race bestows, parent race first.
pub fn race_grants(race: Race) -> Vec<Grant> {
    let mut grants = race.parent().map(own_grants).unwrap_or_default();
    grants.extend(own_grants(race));
    grants
}
