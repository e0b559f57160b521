//! Class rule tables: skills, fighting styles, expertise, tools and
//! spellcasting progressions.

use crate::choices::choice_ids;
use crate::choices::grants::{grants_from, Grant};
use crate::choices::submission::Source;
use crate::choices::requirements::{
    ExpertiseRequirement, FightingStyleRequirement, InstrumentRequirement, Requirements,
    SkillRequirement, SpellRequirement, SubclassRequirement, ToolRequirement,
};
use crate::vocab::{
    Class, ExpertiseTarget, FightingStyle, Level, Skill, Spell, Tool, ToolCategory,
};

use super::equipment::starting_equipment;

use Skill::*;

const BARBARIAN_SKILLS: &[Skill] =
    &[AnimalHandling, Athletics, Intimidation, Nature, Perception, Survival];
const CLERIC_SKILLS: &[Skill] = &[History, Insight, Medicine, Persuasion, Religion];
const DRUID_SKILLS: &[Skill] = &[
    Arcana, AnimalHandling, Insight, Medicine, Nature, Perception, Religion, Survival,
];
const FIGHTER_SKILLS: &[Skill] = &[
    Acrobatics, AnimalHandling, Athletics, History, Insight, Intimidation, Perception, Survival,
];
const MONK_SKILLS: &[Skill] = &[Acrobatics, Athletics, History, Insight, Religion, Stealth];
const PALADIN_SKILLS: &[Skill] =
    &[Athletics, Insight, Intimidation, Medicine, Persuasion, Religion];
const RANGER_SKILLS: &[Skill] = &[
    AnimalHandling, Athletics, Insight, Investigation, Nature, Perception, Stealth, Survival,
];
const ROGUE_SKILLS: &[Skill] = &[
    Acrobatics, Athletics, Deception, Insight, Intimidation, Investigation, Perception,
    Performance, Persuasion, SleightOfHand, Stealth,
];
const SORCERER_SKILLS: &[Skill] =
    &[Arcana, Deception, Insight, Intimidation, Persuasion, Religion];
const WARLOCK_SKILLS: &[Skill] =
    &[Arcana, Deception, History, Intimidation, Investigation, Nature, Religion];
const WIZARD_SKILLS: &[Skill] = &[Arcana, History, Insight, Investigation, Medicine, Religion];

/// Skill proficiency pick: `(count, options)`. `None` means any skill.
fn skill_choice(class: Class) -> (u32, Option<&'static [Skill]>) {
    match class {
        Class::Barbarian => (2, Some(BARBARIAN_SKILLS)),
        Class::Bard => (3, None),
        Class::Cleric => (2, Some(CLERIC_SKILLS)),
        Class::Druid => (2, Some(DRUID_SKILLS)),
        Class::Fighter => (2, Some(FIGHTER_SKILLS)),
        Class::Monk => (2, Some(MONK_SKILLS)),
        Class::Paladin => (2, Some(PALADIN_SKILLS)),
        Class::Ranger => (3, Some(RANGER_SKILLS)),
        Class::Rogue => (4, Some(ROGUE_SKILLS)),
        Class::Sorcerer => (2, Some(SORCERER_SKILLS)),
        Class::Warlock => (2, Some(WARLOCK_SKILLS)),
        Class::Wizard => (2, Some(WIZARD_SKILLS)),
    }
}

fn skills(class: Class) -> SkillRequirement {
    let (count, options) = skill_choice(class);
    let id = choice_ids::class_skills(class);
    let label = format!("Choose {} skills", count);
    match options {
        Some(options) => SkillRequirement::from_options(id, count, options.iter().copied(), label),
        None => SkillRequirement::any(id, count, label),
    }
}

/// Level the fighting style is chosen at and the styles on offer.
fn fighting_style_table(class: Class) -> Option<(u8, &'static [FightingStyle])> {
    const PALADIN: &[FightingStyle] = &[
        FightingStyle::Defense,
        FightingStyle::Dueling,
        FightingStyle::GreatWeaponFighting,
        FightingStyle::Protection,
    ];
    const RANGER: &[FightingStyle] = &[
        FightingStyle::Archery,
        FightingStyle::Defense,
        FightingStyle::Dueling,
        FightingStyle::TwoWeaponFighting,
    ];
    match class {
        Class::Fighter => Some((1, FightingStyle::ALL)),
        Class::Paladin => Some((2, PALADIN)),
        Class::Ranger => Some((2, RANGER)),
        _ => None,
    }
}

fn fighting_style(class: Class, level: Level) -> Option<FightingStyleRequirement> {
    let (unlock, styles) = fighting_style_table(class)?;
    (level.get() >= unlock).then(|| {
        FightingStyleRequirement::from_options(
            choice_ids::fighting_style(class),
            1,
            styles.iter().copied(),
            "Choose a fighting style",
        )
    })
}

fn expertise(class: Class, level: Level) -> Vec<ExpertiseRequirement> {
    const ROGUE_LEVELS: &[u8] = &[1, 6];
    const BARD_LEVELS: &[u8] = &[3, 10];
    let (levels, options) = match class {
        Class::Rogue => {
            let mut options = ExpertiseTarget::all_skills();
            options.push(ExpertiseTarget::Tool(Tool::ThievesTools));
            (ROGUE_LEVELS, options)
        }
        Class::Bard => (BARD_LEVELS, ExpertiseTarget::all_skills()),
        _ => return Vec::new(),
    };
    levels
        .iter()
        .filter(|unlock| level.get() >= **unlock)
        .map(|unlock| {
            ExpertiseRequirement::from_options(
                choice_ids::expertise(class, *unlock),
                2,
                options.iter().copied(),
                "Choose 2 proficiencies to gain expertise in",
            )
        })
        .collect()
}

fn tools(class: Class) -> Vec<ToolRequirement> {
    match class {
        Class::Monk => {
            let mut options = Tool::of_category(ToolCategory::Artisan);
            options.extend(Tool::of_category(ToolCategory::MusicalInstrument));
            vec![ToolRequirement::from_options(
                choice_ids::class_tools(class),
                1,
                options,
                "Choose one type of artisan's tools or musical instrument",
            )]
        }
        _ => Vec::new(),
    }
}

fn instruments(class: Class) -> Option<InstrumentRequirement> {
    (class == Class::Bard).then(|| {
        InstrumentRequirement::from_options(
            choice_ids::class_tools(class),
            3,
            Tool::of_category(ToolCategory::MusicalInstrument),
            "Choose 3 musical instruments",
        )
    })
}

/// Cantrips known at levels 1, 4 and 10.
fn cantrip_table(class: Class) -> Option<[u32; 3]> {
    match class {
        Class::Bard | Class::Druid | Class::Warlock => Some([2, 3, 4]),
        Class::Cleric | Class::Wizard => Some([3, 4, 5]),
        Class::Sorcerer => Some([4, 5, 6]),
        _ => None,
    }
}

fn cantrips_known(class: Class, level: Level) -> Option<u32> {
    let [first, fourth, tenth] = cantrip_table(class)?;
    Some(match level.get() {
        1..=3 => first,
        4..=9 => fourth,
        _ => tenth,
    })
}

// Spells known by class level, index 0 is level 1.
const BARD_SPELLS_KNOWN: [u32; 20] = [
    4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 15, 16, 18, 19, 19, 20, 22, 22, 22,
];
const SORCERER_SPELLS_KNOWN: [u32; 20] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15, 15,
];
const WARLOCK_SPELLS_KNOWN: [u32; 20] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15,
];
const RANGER_SPELLS_KNOWN: [u32; 20] = [
    0, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11,
];

fn spells_known(class: Class, level: Level) -> Option<u32> {
    let table = match class {
        Class::Bard => &BARD_SPELLS_KNOWN,
        Class::Sorcerer => &SORCERER_SPELLS_KNOWN,
        Class::Warlock => &WARLOCK_SPELLS_KNOWN,
        Class::Ranger => &RANGER_SPELLS_KNOWN,
        _ => return None,
    };
    let known = table[usize::from(level.get() - 1)];
    (known > 0).then_some(known)
}

/// Highest spell level a class can cast at `level`, 0 for none.
fn max_spell_level(class: Class, level: Level) -> u8 {
    let l = level.get();
    match class {
        Class::Bard | Class::Cleric | Class::Druid | Class::Sorcerer | Class::Wizard => {
            ((l + 1) / 2).min(9)
        }
        Class::Warlock => ((l + 1) / 2).min(5),
        Class::Paladin | Class::Ranger if l >= 2 => ((l - 1) / 4 + 1).min(5),
        _ => 0,
    }
}

fn cantrips(class: Class, level: Level) -> Option<SpellRequirement> {
    let count = cantrips_known(class, level)?;
    Some(SpellRequirement::from_options(
        choice_ids::cantrips(class),
        count,
        Spell::cantrips_for(class),
        format!("Choose {} cantrips", count),
    ))
}

fn spells(class: Class, level: Level) -> Option<SpellRequirement> {
    let count = spells_known(class, level)?;
    Some(SpellRequirement::from_options(
        choice_ids::spells(class),
        count,
        Spell::spells_for(class, max_spell_level(class, level)),
        format!("Choose {} spells known", count),
    ))
}

/// Wizard spellbook: six 1st-level spells, two more per level after the first.
fn spellbook(class: Class, level: Level) -> Option<SpellRequirement> {
    if class != Class::Wizard {
        return None;
    }
    let count = 6 + 2 * u32::from(level.get() - 1);
    Some(SpellRequirement::from_options(
        choice_ids::spells(class),
        count,
        Spell::spells_for(class, max_spell_level(class, level)),
        format!("Choose {} spells for your spellbook", count),
    ))
}

fn subclass(class: Class, level: Level) -> Option<SubclassRequirement> {
    (level >= class.subclass_level()).then(|| {
        SubclassRequirement::from_options(
            choice_ids::subclass(class),
            1,
            class.subclasses(),
            format!("Choose your {} subclass", class),
        )
    })
}

pub fn requirements_at_level(class: Class, level: Level) -> Requirements {
    Requirements {
        skills: Some(skills(class)),
        equipment: starting_equipment(class),
        tools: tools(class),
        instruments: instruments(class),
        fighting_style: fighting_style(class, level),
        expertise: expertise(class, level),
        cantrips: cantrips(class, level),
        spells: spells(class, level),
        spellbook: spellbook(class, level),
        subclass: subclass(class, level),
        ..Requirements::default()
    }
}

/// Proficiencies a class bestows that overlap with player choices.
///
/// Only tool grants are listed; armor and weapon proficiencies never collide
/// with a choice.
pub fn class_grants(class: Class) -> Vec<Grant> {
    let tools: &[Tool] = match class {
        Class::Rogue => &[Tool::ThievesTools],
        Class::Druid => &[Tool::HerbalismKit],
        _ => &[],
    };
    grants_from(Source::Class, tools.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn test_skill_counts() {
        let count = |c| requirements_at_level(c, Level::MIN).skills.unwrap().count;
        assert_eq!(count(Class::Fighter), 2);
        assert_eq!(count(Class::Rogue), 4);
        assert_eq!(count(Class::Bard), 3);
        assert_eq!(count(Class::Ranger), 3);
    }

    #[test]
    fn test_fighter_has_eight_skill_options_and_all_styles() {
        let reqs = requirements_at_level(Class::Fighter, Level::MIN);
        assert_eq!(reqs.skills.unwrap().options.unwrap().len(), 8);
        assert_eq!(reqs.fighting_style.unwrap().options.unwrap().len(), 6);
    }

    #[test]
    fn test_bard_skills_are_open() {
        let reqs = requirements_at_level(Class::Bard, Level::MIN);
        assert!(reqs.skills.unwrap().is_open());
        assert_eq!(reqs.instruments.unwrap().count, 3);
    }

    #[test]
    fn test_paladin_fighting_style_is_level_gated() {
        assert!(requirements_at_level(Class::Paladin, level(1)).fighting_style.is_none());
        let style = requirements_at_level(Class::Paladin, level(2)).fighting_style.unwrap();
        assert_eq!(style.id, "paladin-fighting-style");
        assert!(!style.allows(&FightingStyle::Archery));
    }

    #[test]
    fn test_subclass_is_level_gated() {
        assert!(requirements_at_level(Class::Fighter, level(2)).subclass.is_none());
        let sub = requirements_at_level(Class::Fighter, level(3)).subclass.unwrap();
        assert_eq!(sub.id, "fighter-archetype");
        assert_eq!(sub.count, 1);
        assert!(requirements_at_level(Class::Cleric, level(1)).subclass.is_some());
        assert!(requirements_at_level(Class::Wizard, level(1)).subclass.is_none());
        assert!(requirements_at_level(Class::Wizard, level(2)).subclass.is_some());
    }

    #[test]
    fn test_rogue_expertise_levels() {
        let ids = |n| -> Vec<String> {
            requirements_at_level(Class::Rogue, level(n))
                .expertise
                .iter()
                .map(|e| e.id.to_string())
                .collect()
        };
        assert_eq!(ids(1), vec!["rogue-expertise-1"]);
        assert_eq!(ids(6), vec!["rogue-expertise-1", "rogue-expertise-6"]);
        let reqs = requirements_at_level(Class::Rogue, level(1));
        assert!(reqs.expertise[0].allows(&ExpertiseTarget::Tool(Tool::ThievesTools)));
    }

    #[test]
    fn test_bard_expertise_starts_at_three() {
        assert!(requirements_at_level(Class::Bard, level(2)).expertise.is_empty());
        assert_eq!(requirements_at_level(Class::Bard, level(10)).expertise.len(), 2);
    }

    #[test]
    fn test_cantrip_progression() {
        assert_eq!(cantrips_known(Class::Wizard, level(1)), Some(3));
        assert_eq!(cantrips_known(Class::Wizard, level(4)), Some(4));
        assert_eq!(cantrips_known(Class::Sorcerer, level(10)), Some(6));
        assert_eq!(cantrips_known(Class::Fighter, level(10)), None);
    }

    #[test]
    fn test_spells_known() {
        assert_eq!(spells_known(Class::Bard, level(1)), Some(4));
        assert_eq!(spells_known(Class::Ranger, level(1)), None);
        assert_eq!(spells_known(Class::Ranger, level(2)), Some(2));
        assert!(requirements_at_level(Class::Ranger, level(1)).spells.is_none());
        assert!(requirements_at_level(Class::Cleric, level(5)).spells.is_none());
    }

    #[test]
    fn test_wizard_spellbook_grows() {
        assert_eq!(requirements_at_level(Class::Wizard, level(1)).spellbook.unwrap().count, 6);
        assert_eq!(requirements_at_level(Class::Wizard, level(3)).spellbook.unwrap().count, 10);
    }

    #[test]
    fn test_spell_options_respect_castable_level() {
        let low = requirements_at_level(Class::Wizard, level(1)).spellbook.unwrap();
        assert!(!low.allows(&Spell::Fireball));
        let high = requirements_at_level(Class::Wizard, level(5)).spellbook.unwrap();
        assert!(high.allows(&Spell::Fireball));
    }

    #[test]
    fn test_max_spell_level() {
        assert_eq!(max_spell_level(Class::Wizard, level(17)), 9);
        assert_eq!(max_spell_level(Class::Warlock, level(17)), 5);
        assert_eq!(max_spell_level(Class::Paladin, level(1)), 0);
        assert_eq!(max_spell_level(Class::Paladin, level(5)), 2);
        assert_eq!(max_spell_level(Class::Fighter, level(20)), 0);
    }

    #[test]
    fn test_choice_ids_unique_per_class() {
        for class in Class::ALL {
            let reqs = requirements_at_level(*class, Level::MAX);
            let mut ids = reqs.choice_ids();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), total, "{} has duplicate choice ids", class);
        }
    }
}
