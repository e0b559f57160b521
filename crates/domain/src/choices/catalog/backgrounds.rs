//! Background rule tables.

use crate::choices::choice_ids;
use crate::choices::grants::{grants_from, Grant};
use crate::choices::requirements::{
    InstrumentRequirement, LanguageRequirement, Requirements, ToolRequirement,
};
use crate::choices::submission::Source;
use crate::vocab::{Background, Skill, Tool, ToolCategory};

use Skill::*;

fn languages(background: Background, count: u32) -> Vec<LanguageRequirement> {
    let label = if count == 1 {
        "Choose 1 language".to_string()
    } else {
        format!("Choose {} languages", count)
    };
    vec![LanguageRequirement::any(
        choice_ids::background_languages(background, count),
        count,
        label,
    )]
}

fn tool_of(background: Background, category: ToolCategory, label: &str) -> Vec<ToolRequirement> {
    vec![ToolRequirement::from_options(
        choice_ids::background_tools(background),
        1,
        Tool::of_category(category),
        label,
    )]
}

fn instrument(background: Background) -> Option<InstrumentRequirement> {
    Some(InstrumentRequirement::from_options(
        choice_ids::background_tools(background),
        1,
        Tool::of_category(ToolCategory::MusicalInstrument),
        "Choose 1 musical instrument",
    ))
}

const ARTISAN_LABEL: &str = "Choose 1 type of artisan's tools";

pub fn background_requirements(background: Background) -> Requirements {
    match background {
        Background::Acolyte | Background::Sage => Requirements {
            languages: languages(background, 2),
            ..Requirements::default()
        },
        Background::Criminal | Background::Soldier => Requirements {
            tools: tool_of(background, ToolCategory::GamingSet, "Choose 1 gaming set"),
            ..Requirements::default()
        },
        Background::Entertainer => Requirements {
            instruments: instrument(background),
            ..Requirements::default()
        },
        Background::FolkHero => Requirements {
            tools: tool_of(background, ToolCategory::Artisan, ARTISAN_LABEL),
            ..Requirements::default()
        },
        Background::GuildArtisan => Requirements {
            tools: tool_of(background, ToolCategory::Artisan, ARTISAN_LABEL),
            languages: languages(background, 1),
            ..Requirements::default()
        },
        Background::Hermit => Requirements {
            languages: languages(background, 1),
            ..Requirements::default()
        },
        Background::Noble => Requirements {
            tools: tool_of(background, ToolCategory::GamingSet, "Choose 1 gaming set"),
            languages: languages(background, 1),
            ..Requirements::default()
        },
        Background::Outlander => Requirements {
            instruments: instrument(background),
            languages: languages(background, 1),
            ..Requirements::default()
        },
        Background::Charlatan | Background::Sailor | Background::Urchin => Requirements::default(),
    }
}

/// Skill and tool proficiencies every member of the background receives.
pub fn background_grants(background: Background) -> Vec<Grant> {
    let (skills, tools): (&[Skill], &[Tool]) = match background {
        Background::Acolyte => (&[Insight, Religion], &[]),
        Background::Charlatan => (
            &[Deception, SleightOfHand],
            &[Tool::DisguiseKit, Tool::ForgeryKit],
        ),
        Background::Criminal => (&[Deception, Stealth], &[Tool::ThievesTools]),
        Background::Entertainer => (&[Acrobatics, Performance], &[Tool::DisguiseKit]),
        Background::FolkHero => (&[AnimalHandling, Survival], &[Tool::VehiclesLand]),
        Background::GuildArtisan => (&[Insight, Persuasion], &[]),
        Background::Hermit => (&[Medicine, Religion], &[Tool::HerbalismKit]),
        Background::Noble => (&[History, Persuasion], &[]),
        Background::Outlander => (&[Athletics, Survival], &[]),
        Background::Sage => (&[Arcana, History], &[]),
        Background::Sailor => (
            &[Athletics, Perception],
            &[Tool::NavigatorsTools, Tool::VehiclesWater],
        ),
        Background::Soldier => (&[Athletics, Intimidation], &[Tool::VehiclesLand]),
        Background::Urchin => (
            &[SleightOfHand, Stealth],
            &[Tool::DisguiseKit, Tool::ThievesTools],
        ),
    };
    grants_from(Source::Background, skills.iter().copied())
        .chain(grants_from(Source::Background, tools.iter().copied()))
        .collect()
}
