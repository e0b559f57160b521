//! Stable choice ids.
//!
//! Class slots follow `<class>-<slot>`, race and background slots follow
//! `<race|background>-<slot>`. Callers match submissions on these ids, so
//! they never change once published.

use crate::ids::ChoiceId;
use crate::vocab::{Background, Class, Race};

pub fn class_skills(class: Class) -> ChoiceId {
    ChoiceId::new(format!("{}-skills", class))
}

pub fn fighting_style(class: Class) -> ChoiceId {
    ChoiceId::new(format!("{}-fighting-style", class))
}

/// Expertise slots carry the level that unlocks them ("rogue-expertise-6").
pub fn expertise(class: Class, level: u8) -> ChoiceId {
    ChoiceId::new(format!("{}-expertise-{}", class, level))
}

pub fn cantrips(class: Class) -> ChoiceId {
    ChoiceId::new(format!("{}-cantrips-1", class))
}

pub fn spells(class: Class) -> ChoiceId {
    ChoiceId::new(format!("{}-spells-1", class))
}

pub fn class_tools(class: Class) -> ChoiceId {
    ChoiceId::new(format!("{}-tools", class))
}

pub fn subclass(class: Class) -> ChoiceId {
    let slot = match class {
        Class::Barbarian => "barbarian-path",
        Class::Bard => "bard-college",
        Class::Cleric => "cleric-domain",
        Class::Druid => "druid-circle",
        Class::Fighter => "fighter-archetype",
        Class::Monk => "monk-tradition",
        Class::Paladin => "paladin-oath",
        Class::Ranger => "ranger-archetype",
        Class::Rogue => "rogue-archetype",
        Class::Sorcerer => "sorcerer-origin",
        Class::Warlock => "warlock-patron",
        Class::Wizard => "wizard-school",
    };
    ChoiceId::from(slot)
}

pub fn race_skills(race: Race) -> ChoiceId {
    ChoiceId::new(format!("{}-skills", race))
}

pub fn race_language(race: Race) -> ChoiceId {
    ChoiceId::new(format!("{}-language", race))
}

pub fn race_tools(race: Race) -> ChoiceId {
    ChoiceId::new(format!("{}-tools", race))
}

pub fn race_cantrip(race: Race) -> ChoiceId {
    ChoiceId::new(format!("{}-cantrip", race))
}

pub fn draconic_ancestry(race: Race) -> ChoiceId {
    ChoiceId::new(format!("{}-ancestry", race))
}

/// Background language slot. Singular or plural follows the count.
pub fn background_languages(background: Background, count: u32) -> ChoiceId {
    let suffix = if count > 1 { "languages" } else { "language" };
    ChoiceId::new(format!("{}-{}", background, suffix))
}

pub fn background_tools(background: Background) -> ChoiceId {
    ChoiceId::new(format!("{}-tools", background))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_ids() {
        assert_eq!(class_skills(Class::Fighter), "fighter-skills");
        assert_eq!(fighting_style(Class::Paladin), "paladin-fighting-style");
        assert_eq!(expertise(Class::Rogue, 6), "rogue-expertise-6");
        assert_eq!(cantrips(Class::Wizard), "wizard-cantrips-1");
        assert_eq!(subclass(Class::Wizard), "wizard-school");
        assert_eq!(race_skills(Race::HalfElf), "half-elf-skills");
        assert_eq!(race_language(Race::HighElf), "high-elf-language");
        assert_eq!(race_cantrip(Race::HighElf), "high-elf-cantrip");
        assert_eq!(
            background_languages(Background::Acolyte, 2),
            "acolyte-languages"
        );
        assert_eq!(
            background_languages(Background::Hermit, 1),
            "hermit-language"
        );
        assert_eq!(background_tools(Background::GuildArtisan), "guild-artisan-tools");
    }
}
