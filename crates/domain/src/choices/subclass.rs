//! Subclass modification engine.
//!
//! Each registered subclass carries additive changes to its class's base
//! requirements plus the grants it bestows. The registry is built once and
//! only exposed through read accessors.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::choices::grants::{grants_from, Grant};
use crate::choices::requirements::{
    AncestryRequirement, ChoiceRequirement, EquipmentOption, FightingStyleRequirement,
    InstrumentRequirement, LanguageRequirement, Requirements, SkillRequirement, SpellRequirement,
    ToolRequirement,
};
use crate::choices::submission::Source;
use crate::ids::ChoiceId;
use crate::vocab::{
    Class, Equipment, EquipmentCategory, Language, Level, Skill, Spell, Subclass, Tool,
    ToolCategory, Vocabulary,
};

/// Proficiencies granted outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantedProficiencies {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weapons: Vec<EquipmentCategory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub armor: Vec<EquipmentCategory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}

/// Spells always prepared from the given character level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellGrant {
    pub level: u8,
    pub spells: Vec<Spell>,
}

/// Option-bearing slot targeted by [`RequirementDelta::AppendOption`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "options", rename_all = "snake_case")]
pub enum OptionTarget {
    Skills(Vec<Skill>),
    Cantrips(Vec<Spell>),
    Spells(Vec<Spell>),
    Instruments(Vec<Tool>),
}

/// Counted slot targeted by [`RequirementDelta::IncrementCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountField {
    Skills,
    Cantrips,
    Spells,
    Spellbook,
    Instruments,
}

/// Whole slot supplied by [`RequirementDelta::ReplaceField`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "requirement", rename_all = "snake_case")]
pub enum FieldReplacement {
    Cantrips(SpellRequirement),
    Spells(SpellRequirement),
    Instruments(InstrumentRequirement),
    FightingStyle(FightingStyleRequirement),
    DraconicAncestry(AncestryRequirement),
}

/// A change to existing requirements that is not a plain append.
///
/// Every delta only widens: counts go up, option sets grow, and a field is
/// replaced only by one that allows at least as much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RequirementDelta {
    AppendOption { target: OptionTarget },
    IncrementCount { field: CountField, by: u32 },
    ReplaceField { replacement: FieldReplacement },
}

/// A delta that takes effect once the character reaches `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeveledDelta {
    pub level: u8,
    pub delta: RequirementDelta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubclassModifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_skills: Option<SkillRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_languages: Vec<LanguageRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_tools: Option<ToolRequirement>,
    /// New bundles keyed by the equipment requirement they extend.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_equipment_options: BTreeMap<ChoiceId, Vec<EquipmentOption>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deltas: Vec<RequirementDelta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leveled_deltas: Vec<LeveledDelta>,
    pub granted_proficiencies: GrantedProficiencies,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub granted_spells: Vec<SpellGrant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub granted_cantrips: Vec<Spell>,
}

impl SubclassModifications {
    /// The modifications in effect at `level`. Leveled deltas already reached
    /// join `deltas` in table order and later ones are dropped.
    pub fn at_level(&self, level: Level) -> SubclassModifications {
        let mut mods = self.clone();
        let leveled = std::mem::take(&mut mods.leveled_deltas);
        mods.deltas.extend(
            leveled
                .into_iter()
                .filter(|leveled| leveled.level <= level.get())
                .map(|leveled| leveled.delta),
        );
        mods
    }

    /// Spells granted at or below `level`, in grant order.
    pub fn granted_spells_through(&self, level: Level) -> Vec<Spell> {
        self.granted_spells
            .iter()
            .filter(|grant| grant.level <= level.get())
            .flat_map(|grant| grant.spells.iter().copied())
            .collect()
    }

    /// Skill, language, tool and spell grants in effect at `level`.
    pub fn grants(&self, level: Level) -> Vec<Grant> {
        let granted = &self.granted_proficiencies;
        grants_from(Source::Subclass, granted.skills.iter().copied())
            .chain(grants_from(Source::Subclass, granted.languages.iter().copied()))
            .chain(grants_from(Source::Subclass, granted.tools.iter().copied()))
            .chain(grants_from(Source::Subclass, self.granted_cantrips.iter().copied()))
            .chain(grants_from(Source::Subclass, self.granted_spells_through(level)))
            .collect()
    }
}

/// Applies `mods` to `reqs`, returning the augmented requirements.
///
/// Base requirements are never shrunk: existing counts, options and fields
/// survive untouched unless a delta widens them.
pub fn apply_subclass_modifications(
    reqs: &Requirements,
    mods: &SubclassModifications,
) -> Requirements {
    let mut out = reqs.clone();

    if let Some(skills) = &mods.additional_skills {
        out.additional_skills.push(skills.clone());
    }
    out.languages.extend(mods.additional_languages.iter().cloned());
    if let Some(tools) = &mods.additional_tools {
        out.tools.push(tools.clone());
    }

    for (choice_id, options) in &mods.additional_equipment_options {
        let Some(target) = out.equipment.iter_mut().find(|req| &req.id == choice_id) else {
            tracing::debug!(choice_id = %choice_id, "No equipment requirement to extend");
            continue;
        };
        for option in options {
            if target.options.iter().all(|existing| existing.id != option.id) {
                target.options.push(option.clone());
            }
        }
    }

    for delta in &mods.deltas {
        apply_delta(&mut out, delta);
    }
    out
}

fn apply_delta(reqs: &mut Requirements, delta: &RequirementDelta) {
    match delta {
        RequirementDelta::AppendOption { target } => match target {
            OptionTarget::Skills(values) => append_options(reqs.skills.as_mut(), values),
            OptionTarget::Cantrips(values) => append_options(reqs.cantrips.as_mut(), values),
            OptionTarget::Spells(values) => append_options(reqs.spells.as_mut(), values),
            OptionTarget::Instruments(values) => {
                append_options(reqs.instruments.as_mut(), values)
            }
        },
        RequirementDelta::IncrementCount { field, by } => {
            let count = match field {
                CountField::Skills => reqs.skills.as_mut().map(|r| &mut r.count),
                CountField::Cantrips => reqs.cantrips.as_mut().map(|r| &mut r.count),
                CountField::Spells => reqs.spells.as_mut().map(|r| &mut r.count),
                CountField::Spellbook => reqs.spellbook.as_mut().map(|r| &mut r.count),
                CountField::Instruments => reqs.instruments.as_mut().map(|r| &mut r.count),
            };
            match count {
                Some(count) => *count = count.saturating_add(*by),
                None => tracing::debug!(field = ?field, "IncrementCount on absent slot ignored"),
            }
        }
        RequirementDelta::ReplaceField { replacement } => match replacement {
            FieldReplacement::Cantrips(req) => replace_field(&mut reqs.cantrips, req),
            FieldReplacement::Spells(req) => replace_field(&mut reqs.spells, req),
            FieldReplacement::Instruments(req) => replace_field(&mut reqs.instruments, req),
            FieldReplacement::FightingStyle(req) => replace_field(&mut reqs.fighting_style, req),
            FieldReplacement::DraconicAncestry(req) => {
                replace_field(&mut reqs.draconic_ancestry, req)
            }
        },
    }
}

fn append_options<T: Vocabulary>(slot: Option<&mut ChoiceRequirement<T>>, values: &[T]) {
    let Some(req) = slot else {
        tracing::debug!(kind = T::KIND, "AppendOption on absent slot ignored");
        return;
    };
    // An open slot already allows every value.
    if let Some(options) = req.options.as_mut() {
        for value in values {
            if !options.contains(value) {
                options.push(*value);
            }
        }
    }
}

fn replace_field<T: Vocabulary>(
    slot: &mut Option<ChoiceRequirement<T>>,
    replacement: &ChoiceRequirement<T>,
) {
    match slot {
        None => *slot = Some(replacement.clone()),
        Some(existing)
            if replacement.count >= existing.count && existing.is_widened_by(replacement) =>
        {
            *existing = replacement.clone();
        }
        Some(existing) => {
            tracing::warn!(
                kind = T::KIND,
                existing = %existing.id,
                replacement = %replacement.id,
                "Refusing ReplaceField that would narrow an existing requirement"
            );
        }
    }
}

/// Immutable subclass-to-modifications table.
#[derive(Debug)]
pub struct SubclassRegistry {
    entries: BTreeMap<Subclass, SubclassModifications>,
}

static REGISTRY: LazyLock<SubclassRegistry> = LazyLock::new(SubclassRegistry::build);

impl SubclassRegistry {
    pub fn global() -> &'static SubclassRegistry {
        &REGISTRY
    }

    pub fn get(&self, subclass: Subclass) -> Option<&SubclassModifications> {
        self.entries.get(&subclass)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subclass, &SubclassModifications)> {
        self.entries.iter().map(|(subclass, mods)| (*subclass, mods))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build() -> Self {
        use Subclass::*;
        let entries = [
            (LifeDomain, life_domain()),
            (LightDomain, light_domain()),
            (NatureDomain, nature_domain()),
            (TempestDomain, martial_domain("tempest", "Tempest Domain", tempest_spells())),
            (TrickeryDomain, trickery_domain()),
            (WarDomain, martial_domain("war", "War Domain", war_spells())),
            (KnowledgeDomain, knowledge_domain()),
            (DeathDomain, death_domain()),
            (EldritchKnight, third_caster("eldritch-knight", Vec::new())),
            (BattleMaster, battle_master()),
            (ArcaneTrickster, third_caster("arcane-trickster", vec![Spell::MageHand])),
            (Assassin, assassin()),
            (CollegeOfLore, college_of_lore()),
            (CollegeOfValor, college_of_valor()),
            (CircleOfTheLand, circle_of_the_land()),
            (DraconicBloodline, draconic_bloodline()),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

/// Modifications registered for `subclass`, if any.
pub fn subclass_modifications(subclass: Subclass) -> Option<&'static SubclassModifications> {
    SubclassRegistry::global().get(subclass)
}

// Registry data

const CLERIC_WEAPONS: &str = "cleric-weapons";
const CLERIC_ARMOR: &str = "cleric-armor";

fn spell_table(rows: [(u8, [Spell; 2]); 5]) -> Vec<SpellGrant> {
    rows.into_iter()
        .map(|(level, spells)| SpellGrant {
            level,
            spells: spells.to_vec(),
        })
        .collect()
}

fn heavy_armor() -> GrantedProficiencies {
    GrantedProficiencies {
        armor: vec![EquipmentCategory::HeavyArmor],
        ..GrantedProficiencies::default()
    }
}

fn chain_mail(id: &str, label: &str) -> EquipmentOption {
    EquipmentOption::new(id, format!("chain mail ({})", label)).item(Equipment::ChainMail, 1)
}

fn life_domain() -> SubclassModifications {
    use Spell::*;
    SubclassModifications {
        additional_equipment_options: BTreeMap::from([(
            ChoiceId::from(CLERIC_ARMOR),
            vec![chain_mail("cleric-armor-life", "Life Domain")],
        )]),
        granted_proficiencies: heavy_armor(),
        granted_spells: spell_table([
            (1, [Bless, CureWounds]),
            (3, [LesserRestoration, SpiritualWeapon]),
            (5, [BeaconOfHope, Revivify]),
            (7, [DeathWard, GuardianOfFaith]),
            (9, [MassCureWounds, RaiseDead]),
        ]),
        ..SubclassModifications::default()
    }
}

fn light_domain() -> SubclassModifications {
    use Spell::*;
    SubclassModifications {
        granted_cantrips: vec![Light],
        granted_spells: spell_table([
            (1, [BurningHands, FaerieFire]),
            (3, [FlamingSphere, ScorchingRay]),
            (5, [Daylight, Fireball]),
            (7, [GuardianOfFaith, WallOfFire]),
            (9, [FlameStrike, Scrying]),
        ]),
        ..SubclassModifications::default()
    }
}

fn nature_domain() -> SubclassModifications {
    use Spell::*;
    SubclassModifications {
        additional_skills: Some(SkillRequirement::from_options(
            "cleric-nature-skill",
            1,
            [Skill::AnimalHandling, Skill::Nature, Skill::Survival],
            "Choose 1 skill (Nature Domain)",
        )),
        deltas: vec![
            RequirementDelta::IncrementCount {
                field: CountField::Cantrips,
                by: 1,
            },
            RequirementDelta::AppendOption {
                target: OptionTarget::Cantrips(vec![Guidance, Resistance, PoisonSpray, ThornWhip]),
            },
        ],
        granted_proficiencies: heavy_armor(),
        granted_spells: spell_table([
            (1, [AnimalFriendship, SpeakWithAnimals]),
            (3, [Barkskin, SpikeGrowth]),
            (5, [PlantGrowth, WindWall]),
            (7, [DominateBeast, GraspingVine]),
            (9, [InsectPlague, TreeStride]),
        ]),
        ..SubclassModifications::default()
    }
}

fn tempest_spells() -> Vec<SpellGrant> {
    use Spell::*;
    spell_table([
        (1, [FogCloud, Thunderwave]),
        (3, [GustOfWind, Shatter]),
        (5, [CallLightning, SleetStorm]),
        (7, [ControlWater, IceStorm]),
        (9, [DestructiveWave, InsectPlague]),
    ])
}

fn war_spells() -> Vec<SpellGrant> {
    use Spell::*;
    spell_table([
        (1, [DivineFavor, ShieldOfFaith]),
        (3, [MagicWeapon, SpiritualWeapon]),
        (5, [CrusadersMantle, SpiritGuardians]),
        (7, [FreedomOfMovement, Stoneskin]),
        (9, [FlameStrike, HoldMonster]),
    ])
}

/// Tempest and War: martial weapons and heavy armor unlock extra bundles.
fn martial_domain(slug: &str, label: &str, spells: Vec<SpellGrant>) -> SubclassModifications {
    let weapon = EquipmentOption::new(
        format!("cleric-weapon-{}", slug),
        format!("martial weapon ({})", label),
    )
    .choice_of(1, EquipmentCategory::MARTIAL_WEAPONS, "Choose a martial weapon");
    SubclassModifications {
        additional_equipment_options: BTreeMap::from([
            (ChoiceId::from(CLERIC_WEAPONS), vec![weapon]),
            (
                ChoiceId::from(CLERIC_ARMOR),
                vec![chain_mail(&format!("cleric-armor-{}", slug), label)],
            ),
        ]),
        granted_proficiencies: GrantedProficiencies {
            weapons: EquipmentCategory::MARTIAL_WEAPONS.to_vec(),
            armor: vec![EquipmentCategory::HeavyArmor],
            ..GrantedProficiencies::default()
        },
        granted_spells: spells,
        ..SubclassModifications::default()
    }
}

fn trickery_domain() -> SubclassModifications {
    use Spell::*;
    SubclassModifications {
        granted_spells: spell_table([
            (1, [CharmPerson, DisguiseSelf]),
            (3, [MirrorImage, PassWithoutTrace]),
            (5, [Blink, DispelMagic]),
            (7, [DimensionDoor, Polymorph]),
            (9, [DominatePerson, ModifyMemory]),
        ]),
        ..SubclassModifications::default()
    }
}

fn knowledge_domain() -> SubclassModifications {
    use Spell::*;
    SubclassModifications {
        additional_skills: Some(SkillRequirement::from_options(
            "cleric-knowledge-skills",
            2,
            [Skill::Arcana, Skill::History, Skill::Nature, Skill::Religion],
            "Choose 2 Knowledge Domain skills",
        )),
        additional_languages: vec![LanguageRequirement::any(
            "cleric-knowledge-languages",
            2,
            "Choose 2 languages (Knowledge Domain)",
        )],
        granted_spells: spell_table([
            (1, [Command, Identify]),
            (3, [Augury, Suggestion]),
            (5, [Nondetection, SpeakWithDead]),
            (7, [ArcaneEye, Confusion]),
            (9, [LegendLore, Scrying]),
        ]),
        ..SubclassModifications::default()
    }
}

fn death_domain() -> SubclassModifications {
    use Spell::*;
    let weapon = EquipmentOption::new("cleric-weapon-death", "martial melee weapon (Death Domain)")
        .choice_of(1, &[EquipmentCategory::MartialMelee], "Choose a martial melee weapon");
    SubclassModifications {
        additional_equipment_options: BTreeMap::from([(
            ChoiceId::from(CLERIC_WEAPONS),
            vec![weapon],
        )]),
        deltas: vec![
            RequirementDelta::IncrementCount {
                field: CountField::Cantrips,
                by: 1,
            },
            RequirementDelta::AppendOption {
                target: OptionTarget::Cantrips(vec![ChillTouch]),
            },
        ],
        granted_proficiencies: GrantedProficiencies {
            weapons: vec![EquipmentCategory::MartialMelee],
            ..GrantedProficiencies::default()
        },
        granted_spells: spell_table([
            (1, [FalseLife, RayOfSickness]),
            (3, [BlindnessDeafness, RayOfEnfeeblement]),
            (5, [AnimateDead, VampiricTouch]),
            (7, [Blight, DeathWard]),
            (9, [AntilifeShell, Cloudkill]),
        ]),
        ..SubclassModifications::default()
    }
}

// Levels at which a third caster learns one more spell.
const THIRD_CASTER_SPELL_GAINS: [u8; 10] = [4, 7, 8, 10, 11, 13, 14, 16, 19, 20];

/// Eldritch Knight and Arcane Trickster learn wizard magic at level 3 and
/// keep learning on the third-caster table.
fn third_caster(slug: &str, granted_cantrips: Vec<Spell>) -> SubclassModifications {
    let cantrips: Vec<Spell> = Spell::cantrips_for(Class::Wizard)
        .into_iter()
        .filter(|spell| !granted_cantrips.contains(spell))
        .collect();

    let increment = |field| RequirementDelta::IncrementCount { field, by: 1 };
    let mut leveled_deltas: Vec<LeveledDelta> = THIRD_CASTER_SPELL_GAINS
        .iter()
        .map(|&level| LeveledDelta {
            level,
            delta: increment(CountField::Spells),
        })
        .collect();
    leveled_deltas.push(LeveledDelta {
        level: 10,
        delta: increment(CountField::Cantrips),
    });
    for (level, spell_level) in [(7, 2), (13, 3), (19, 4)] {
        leveled_deltas.push(LeveledDelta {
            level,
            delta: RequirementDelta::AppendOption {
                target: OptionTarget::Spells(Spell::spells_for(Class::Wizard, spell_level)),
            },
        });
    }

    SubclassModifications {
        deltas: vec![
            RequirementDelta::ReplaceField {
                replacement: FieldReplacement::Cantrips(SpellRequirement::from_options(
                    format!("{}-cantrips", slug),
                    2,
                    cantrips,
                    "Choose wizard cantrips",
                )),
            },
            RequirementDelta::ReplaceField {
                replacement: FieldReplacement::Spells(SpellRequirement::from_options(
                    format!("{}-spells", slug),
                    3,
                    Spell::spells_for(Class::Wizard, 1),
                    "Choose wizard spells",
                )),
            },
        ],
        leveled_deltas,
        granted_cantrips,
        ..SubclassModifications::default()
    }
}

fn battle_master() -> SubclassModifications {
    SubclassModifications {
        additional_tools: Some(ToolRequirement::from_options(
            "fighter-battle-master-tools",
            1,
            Tool::of_category(ToolCategory::Artisan),
            "Choose 1 type of artisan's tools (Student of War)",
        )),
        ..SubclassModifications::default()
    }
}

fn assassin() -> SubclassModifications {
    SubclassModifications {
        granted_proficiencies: GrantedProficiencies {
            tools: vec![Tool::DisguiseKit, Tool::PoisonersKit],
            ..GrantedProficiencies::default()
        },
        ..SubclassModifications::default()
    }
}

fn college_of_lore() -> SubclassModifications {
    SubclassModifications {
        additional_skills: Some(SkillRequirement::any(
            "bard-lore-skills",
            3,
            "Choose 3 skills (Bonus Proficiencies)",
        )),
        ..SubclassModifications::default()
    }
}

fn college_of_valor() -> SubclassModifications {
    SubclassModifications {
        granted_proficiencies: GrantedProficiencies {
            weapons: EquipmentCategory::MARTIAL_WEAPONS.to_vec(),
            armor: vec![EquipmentCategory::MediumArmor, EquipmentCategory::Shield],
            ..GrantedProficiencies::default()
        },
        ..SubclassModifications::default()
    }
}

fn circle_of_the_land() -> SubclassModifications {
    SubclassModifications {
        deltas: vec![RequirementDelta::IncrementCount {
            field: CountField::Cantrips,
            by: 1,
        }],
        ..SubclassModifications::default()
    }
}

fn draconic_bloodline() -> SubclassModifications {
    SubclassModifications {
        deltas: vec![RequirementDelta::ReplaceField {
            replacement: FieldReplacement::DraconicAncestry(AncestryRequirement::any(
                "sorcerer-dragon-ancestor",
                1,
                "Choose your dragon ancestor",
            )),
        }],
        granted_proficiencies: GrantedProficiencies {
            languages: vec![Language::Draconic],
            ..GrantedProficiencies::default()
        },
        ..SubclassModifications::default()
    }
}
