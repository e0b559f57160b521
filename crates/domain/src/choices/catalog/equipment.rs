//! Starting-equipment bundles per class.
//!
//! Each requirement is one mutually exclusive group. Fixed starting items
//! that involve no choice are not listed.

use crate::choices::requirements::{EquipmentOption, EquipmentRequirement};
use crate::vocab::{Class, Equipment, EquipmentCategory};

use EquipmentCategory as Cat;

const SIMPLE: &[EquipmentCategory] = EquipmentCategory::SIMPLE_WEAPONS;
const MARTIAL: &[EquipmentCategory] = EquipmentCategory::MARTIAL_WEAPONS;

fn single(id: &str, label: &str, item: Equipment) -> EquipmentOption {
    EquipmentOption::new(id, label).item(item, 1)
}

fn any_of(id: &str, label: &str, categories: &[EquipmentCategory], choose: u32) -> EquipmentOption {
    EquipmentOption::new(id, label).choice_of(choose, categories, format!("Choose {}", label))
}

fn crossbow_and_bolts(id: &str) -> EquipmentOption {
    EquipmentOption::new(id, "a light crossbow and 20 bolts")
        .item(Equipment::LightCrossbow, 1)
        .item(Equipment::CrossbowBolts, 20)
}

fn packs(class: Class, first: (Equipment, &str), second: (Equipment, &str)) -> EquipmentRequirement {
    EquipmentRequirement::new(
        format!("{}-pack", class),
        "Choose an equipment pack",
        vec![
            single(&format!("{}-pack-a", class), first.1, first.0),
            single(&format!("{}-pack-b", class), second.1, second.0),
        ],
    )
}

fn focus(class: Class) -> EquipmentRequirement {
    EquipmentRequirement::new(
        format!("{}-focus", class),
        "Choose a spellcasting focus",
        vec![
            single(
                &format!("{}-focus-a", class),
                "a component pouch",
                Equipment::ComponentPouch,
            ),
            any_of(&format!("{}-focus-b", class), "an arcane focus", &[Cat::ArcaneFocus], 1),
        ],
    )
}

const DUNGEONEER: (Equipment, &str) = (Equipment::DungeoneersPack, "a dungeoneer's pack");
const EXPLORER: (Equipment, &str) = (Equipment::ExplorersPack, "an explorer's pack");
const PRIEST: (Equipment, &str) = (Equipment::PriestsPack, "a priest's pack");
const SCHOLAR: (Equipment, &str) = (Equipment::ScholarsPack, "a scholar's pack");

pub fn starting_equipment(class: Class) -> Vec<EquipmentRequirement> {
    match class {
        Class::Barbarian => vec![
            EquipmentRequirement::new(
                "barbarian-weapons-primary",
                "Choose your primary weapon",
                vec![
                    single("barbarian-weapon-a", "a greataxe", Equipment::Greataxe),
                    any_of("barbarian-weapon-b", "any martial melee weapon", &[Cat::MartialMelee], 1),
                ],
            ),
            EquipmentRequirement::new(
                "barbarian-weapons-secondary",
                "Choose your secondary weapon",
                vec![
                    EquipmentOption::new("barbarian-secondary-a", "two handaxes")
                        .item(Equipment::Handaxe, 2),
                    any_of("barbarian-secondary-b", "any simple weapon", SIMPLE, 1),
                ],
            ),
        ],
        Class::Bard => vec![
            EquipmentRequirement::new(
                "bard-weapons",
                "Choose your weapon",
                vec![
                    single("bard-weapon-a", "a rapier", Equipment::Rapier),
                    single("bard-weapon-b", "a longsword", Equipment::Longsword),
                    any_of("bard-weapon-c", "any simple weapon", SIMPLE, 1),
                ],
            ),
            packs(
                class,
                (Equipment::DiplomatsPack, "a diplomat's pack"),
                (Equipment::EntertainersPack, "an entertainer's pack"),
            ),
            EquipmentRequirement::new(
                "bard-instrument",
                "Choose a musical instrument",
                vec![
                    single("bard-instrument-a", "a lute", Equipment::Lute),
                    any_of(
                        "bard-instrument-b",
                        "any other musical instrument",
                        &[Cat::MusicalInstrument],
                        1,
                    ),
                ],
            ),
        ],
        Class::Cleric => vec![
            EquipmentRequirement::new(
                "cleric-weapons",
                "Choose your weapon",
                vec![
                    single("cleric-weapon-a", "a mace", Equipment::Mace),
                    single("cleric-weapon-b", "a warhammer", Equipment::Warhammer),
                ],
            ),
            EquipmentRequirement::new(
                "cleric-armor",
                "Choose your armor",
                vec![
                    single("cleric-armor-a", "scale mail", Equipment::ScaleMail),
                    single("cleric-armor-b", "leather armor", Equipment::LeatherArmor),
                ],
            ),
            EquipmentRequirement::new(
                "cleric-secondary-weapon",
                "Choose your secondary weapon",
                vec![
                    crossbow_and_bolts("cleric-secondary-a"),
                    any_of("cleric-secondary-b", "any simple weapon", SIMPLE, 1),
                ],
            ),
            packs(class, PRIEST, EXPLORER),
            EquipmentRequirement::new(
                "cleric-holy-symbol",
                "Choose a holy symbol",
                vec![
                    single("cleric-holy-a", "an amulet", Equipment::Amulet),
                    single("cleric-holy-b", "an emblem", Equipment::Emblem),
                ],
            ),
        ],
        Class::Druid => vec![
            EquipmentRequirement::new(
                "druid-shield",
                "Choose a shield or weapon",
                vec![
                    single("druid-shield-a", "a wooden shield", Equipment::WoodenShield),
                    any_of("druid-shield-b", "any simple weapon", SIMPLE, 1),
                ],
            ),
            EquipmentRequirement::new(
                "druid-weapons",
                "Choose your melee weapon",
                vec![
                    single("druid-weapon-a", "a scimitar", Equipment::Scimitar),
                    any_of("druid-weapon-b", "any simple melee weapon", &[Cat::SimpleMelee], 1),
                ],
            ),
        ],
        Class::Fighter => vec![
            EquipmentRequirement::new(
                "fighter-armor",
                "Choose your armor",
                vec![
                    single("fighter-armor-a", "chain mail", Equipment::ChainMail),
                    EquipmentOption::new("fighter-armor-b", "leather armor, longbow, and 20 arrows")
                        .item(Equipment::LeatherArmor, 1)
                        .item(Equipment::Longbow, 1)
                        .item(Equipment::Arrows, 20),
                ],
            ),
            EquipmentRequirement::new(
                "fighter-weapons-primary",
                "Choose your primary weapons",
                vec![
                    EquipmentOption::new("fighter-weapon-a", "a martial weapon and a shield")
                        .item(Equipment::Shield, 1)
                        .choice_of(1, MARTIAL, "Choose a martial weapon"),
                    any_of("fighter-weapon-b", "two martial weapons", MARTIAL, 2),
                ],
            ),
            EquipmentRequirement::new(
                "fighter-weapons-secondary",
                "Choose your secondary weapons",
                vec![
                    crossbow_and_bolts("fighter-ranged-a"),
                    EquipmentOption::new("fighter-ranged-b", "two handaxes")
                        .item(Equipment::Handaxe, 2),
                ],
            ),
            packs(class, DUNGEONEER, EXPLORER),
        ],
        Class::Monk => vec![
            EquipmentRequirement::new(
                "monk-weapons",
                "Choose your weapon",
                vec![
                    single("monk-weapon-a", "a shortsword", Equipment::Shortsword),
                    any_of("monk-weapon-b", "any simple weapon", SIMPLE, 1),
                ],
            ),
            packs(class, DUNGEONEER, EXPLORER),
        ],
        Class::Paladin => vec![
            EquipmentRequirement::new(
                "paladin-weapons-primary",
                "Choose your primary weapons",
                vec![
                    EquipmentOption::new("paladin-weapon-a", "a martial weapon and a shield")
                        .item(Equipment::Shield, 1)
                        .choice_of(1, MARTIAL, "Choose a martial weapon"),
                    any_of("paladin-weapon-b", "two martial weapons", MARTIAL, 2),
                ],
            ),
            EquipmentRequirement::new(
                "paladin-weapons-secondary",
                "Choose your secondary weapon",
                vec![
                    EquipmentOption::new("paladin-secondary-a", "five javelins")
                        .item(Equipment::Javelin, 5),
                    any_of("paladin-secondary-b", "any simple melee weapon", &[Cat::SimpleMelee], 1),
                ],
            ),
            packs(class, PRIEST, EXPLORER),
        ],
        Class::Ranger => vec![
            EquipmentRequirement::new(
                "ranger-armor",
                "Choose your armor",
                vec![
                    single("ranger-armor-a", "scale mail", Equipment::ScaleMail),
                    single("ranger-armor-b", "leather armor", Equipment::LeatherArmor),
                ],
            ),
            EquipmentRequirement::new(
                "ranger-weapons",
                "Choose your melee weapons",
                vec![
                    EquipmentOption::new("ranger-weapon-a", "two shortswords")
                        .item(Equipment::Shortsword, 2),
                    any_of("ranger-weapon-b", "two simple melee weapons", &[Cat::SimpleMelee], 2),
                ],
            ),
            packs(class, DUNGEONEER, EXPLORER),
        ],
        Class::Rogue => vec![
            EquipmentRequirement::new(
                "rogue-weapons-primary",
                "Choose your primary weapon",
                vec![
                    single("rogue-weapon-a", "a rapier", Equipment::Rapier),
                    single("rogue-weapon-b", "a shortsword", Equipment::Shortsword),
                ],
            ),
            EquipmentRequirement::new(
                "rogue-weapons-secondary",
                "Choose your secondary weapon",
                vec![
                    EquipmentOption::new("rogue-secondary-a", "a shortbow and quiver of 20 arrows")
                        .item(Equipment::Shortbow, 1)
                        .item(Equipment::Quiver, 1)
                        .item(Equipment::Arrows, 20),
                    single("rogue-secondary-b", "a shortsword", Equipment::Shortsword),
                ],
            ),
            EquipmentRequirement::new(
                "rogue-pack",
                "Choose an equipment pack",
                vec![
                    single("rogue-pack-a", "a burglar's pack", Equipment::BurglarsPack),
                    single("rogue-pack-b", DUNGEONEER.1, DUNGEONEER.0),
                    single("rogue-pack-c", EXPLORER.1, EXPLORER.0),
                ],
            ),
        ],
        Class::Sorcerer => vec![
            EquipmentRequirement::new(
                "sorcerer-weapons",
                "Choose your weapon",
                vec![
                    crossbow_and_bolts("sorcerer-weapon-a"),
                    any_of("sorcerer-weapon-b", "any simple weapon", SIMPLE, 1),
                ],
            ),
            focus(class),
            packs(class, DUNGEONEER, EXPLORER),
        ],
        Class::Warlock => vec![
            EquipmentRequirement::new(
                "warlock-weapons",
                "Choose your weapon",
                vec![
                    crossbow_and_bolts("warlock-weapon-a"),
                    any_of("warlock-weapon-b", "any simple weapon", SIMPLE, 1),
                ],
            ),
            focus(class),
            packs(class, SCHOLAR, DUNGEONEER),
        ],
        Class::Wizard => vec![
            EquipmentRequirement::new(
                "wizard-weapons-primary",
                "Choose your weapon",
                vec![
                    single("wizard-weapon-a", "a quarterstaff", Equipment::Quarterstaff),
                    single("wizard-weapon-b", "a dagger", Equipment::Dagger),
                ],
            ),
            focus(class),
            packs(class, SCHOLAR, EXPLORER),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_equipment_groups() {
        for class in Class::ALL {
            let groups = starting_equipment(*class);
            assert!(!groups.is_empty(), "{} has no equipment", class);
            for group in &groups {
                assert_eq!(group.choose, 1);
                assert!(group.options.len() >= 2, "{} has a single option", group.id);
            }
        }
    }

    #[test]
    fn test_fighter_published_ids() {
        let groups = starting_equipment(Class::Fighter);
        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "fighter-armor",
                "fighter-weapons-primary",
                "fighter-weapons-secondary",
                "fighter-pack"
            ]
        );
        let primary = &groups[1];
        let two_martial = primary.option("fighter-weapon-b").unwrap();
        assert_eq!(two_martial.category_choices[0].choose, 2);
    }

    #[test]
    fn test_wizard_focus_option_is_open_category() {
        let groups = starting_equipment(Class::Wizard);
        let focus = groups.iter().find(|g| g.id == "wizard-focus").unwrap();
        let arcane = focus.option("wizard-focus-b").unwrap();
        assert!(arcane.items.is_empty());
        assert!(arcane.category_choices[0].allows(Equipment::Orb));
    }
}
