//! Spells and cantrips with their level and class lists.
//!
//! Covers the core cantrips and 1st-level spells of each class list, plus each
//! higher-level spell a subclass grants automatically.

use crate::vocab::Class;

string_enum! {
    /// A spell or cantrip.
    pub enum Spell ("spell") {
        AcidSplash => "acid-splash",
        BladeWard => "blade-ward",
        ChillTouch => "chill-touch",
        DancingLights => "dancing-lights",
        Druidcraft => "druidcraft",
        EldritchBlast => "eldritch-blast",
        FireBolt => "fire-bolt",
        Friends => "friends",
        Guidance => "guidance",
        Light => "light",
        MageHand => "mage-hand",
        Mending => "mending",
        Message => "message",
        MinorIllusion => "minor-illusion",
        PoisonSpray => "poison-spray",
        Prestidigitation => "prestidigitation",
        ProduceFlame => "produce-flame",
        RayOfFrost => "ray-of-frost",
        Resistance => "resistance",
        SacredFlame => "sacred-flame",
        Shillelagh => "shillelagh",
        ShockingGrasp => "shocking-grasp",
        SpareTheDying => "spare-the-dying",
        Thaumaturgy => "thaumaturgy",
        ThornWhip => "thorn-whip",
        TrueStrike => "true-strike",
        ViciousMockery => "vicious-mockery",
        Alarm => "alarm",
        AnimalFriendship => "animal-friendship",
        ArmorOfAgathys => "armor-of-agathys",
        ArmsOfHadar => "arms-of-hadar",
        Bane => "bane",
        Bless => "bless",
        BurningHands => "burning-hands",
        CharmPerson => "charm-person",
        ChromaticOrb => "chromatic-orb",
        ColorSpray => "color-spray",
        Command => "command",
        CompelledDuel => "compelled-duel",
        ComprehendLanguages => "comprehend-languages",
        CreateOrDestroyWater => "create-or-destroy-water",
        CureWounds => "cure-wounds",
        DetectEvilAndGood => "detect-evil-and-good",
        DetectMagic => "detect-magic",
        DetectPoisonAndDisease => "detect-poison-and-disease",
        DisguiseSelf => "disguise-self",
        DissonantWhispers => "dissonant-whispers",
        DivineFavor => "divine-favor",
        EnsnaringStrike => "ensnaring-strike",
        Entangle => "entangle",
        ExpeditiousRetreat => "expeditious-retreat",
        FaerieFire => "faerie-fire",
        FalseLife => "false-life",
        FeatherFall => "feather-fall",
        FindFamiliar => "find-familiar",
        FogCloud => "fog-cloud",
        Goodberry => "goodberry",
        Grease => "grease",
        GuidingBolt => "guiding-bolt",
        HailOfThorns => "hail-of-thorns",
        HealingWord => "healing-word",
        HellishRebuke => "hellish-rebuke",
        Heroism => "heroism",
        Hex => "hex",
        HuntersMark => "hunters-mark",
        Identify => "identify",
        IllusoryScript => "illusory-script",
        InflictWounds => "inflict-wounds",
        Jump => "jump",
        Longstrider => "longstrider",
        MageArmor => "mage-armor",
        MagicMissile => "magic-missile",
        ProtectionFromEvilAndGood => "protection-from-evil-and-good",
        PurifyFoodAndDrink => "purify-food-and-drink",
        RayOfSickness => "ray-of-sickness",
        Sanctuary => "sanctuary",
        SearingSmite => "searing-smite",
        Shield => "shield",
        ShieldOfFaith => "shield-of-faith",
        SilentImage => "silent-image",
        Sleep => "sleep",
        SpeakWithAnimals => "speak-with-animals",
        TashasHideousLaughter => "tashas-hideous-laughter",
        TensersFloatingDisk => "tensers-floating-disk",
        ThunderousSmite => "thunderous-smite",
        Thunderwave => "thunderwave",
        UnseenServant => "unseen-servant",
        WitchBolt => "witch-bolt",
        WrathfulSmite => "wrathful-smite",
        Augury => "augury",
        Barkskin => "barkskin",
        BlindnessDeafness => "blindness-deafness",
        FlamingSphere => "flaming-sphere",
        GustOfWind => "gust-of-wind",
        LesserRestoration => "lesser-restoration",
        MagicWeapon => "magic-weapon",
        MirrorImage => "mirror-image",
        PassWithoutTrace => "pass-without-trace",
        RayOfEnfeeblement => "ray-of-enfeeblement",
        ScorchingRay => "scorching-ray",
        Shatter => "shatter",
        SpikeGrowth => "spike-growth",
        SpiritualWeapon => "spiritual-weapon",
        Suggestion => "suggestion",
        AnimateDead => "animate-dead",
        BeaconOfHope => "beacon-of-hope",
        Blink => "blink",
        CallLightning => "call-lightning",
        CrusadersMantle => "crusaders-mantle",
        Daylight => "daylight",
        DispelMagic => "dispel-magic",
        Fireball => "fireball",
        Nondetection => "nondetection",
        PlantGrowth => "plant-growth",
        Revivify => "revivify",
        SleetStorm => "sleet-storm",
        SpeakWithDead => "speak-with-dead",
        SpiritGuardians => "spirit-guardians",
        VampiricTouch => "vampiric-touch",
        WindWall => "wind-wall",
        ArcaneEye => "arcane-eye",
        Blight => "blight",
        Confusion => "confusion",
        ControlWater => "control-water",
        DeathWard => "death-ward",
        DimensionDoor => "dimension-door",
        DominateBeast => "dominate-beast",
        FreedomOfMovement => "freedom-of-movement",
        GraspingVine => "grasping-vine",
        GuardianOfFaith => "guardian-of-faith",
        IceStorm => "ice-storm",
        Polymorph => "polymorph",
        Stoneskin => "stoneskin",
        WallOfFire => "wall-of-fire",
        AntilifeShell => "antilife-shell",
        Cloudkill => "cloudkill",
        DestructiveWave => "destructive-wave",
        DominatePerson => "dominate-person",
        FlameStrike => "flame-strike",
        HoldMonster => "hold-monster",
        InsectPlague => "insect-plague",
        LegendLore => "legend-lore",
        MassCureWounds => "mass-cure-wounds",
        ModifyMemory => "modify-memory",
        RaiseDead => "raise-dead",
        Scrying => "scrying",
        TreeStride => "tree-stride",
    }
}

use Class::{Bard, Cleric, Druid, Paladin, Ranger, Sorcerer, Warlock, Wizard};

/// `(spell, spell level, classes whose list includes it)`. Level 0 is a cantrip.
const SPELL_TABLE: &[(Spell, u8, &[Class])] = &[
    // Cantrips
    (Spell::AcidSplash, 0, &[Sorcerer, Wizard]),
    (Spell::BladeWard, 0, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::ChillTouch, 0, &[Sorcerer, Warlock, Wizard]),
    (Spell::DancingLights, 0, &[Bard, Sorcerer, Wizard]),
    (Spell::Druidcraft, 0, &[Druid]),
    (Spell::EldritchBlast, 0, &[Warlock]),
    (Spell::FireBolt, 0, &[Sorcerer, Wizard]),
    (Spell::Friends, 0, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::Guidance, 0, &[Cleric, Druid]),
    (Spell::Light, 0, &[Bard, Cleric, Sorcerer, Wizard]),
    (Spell::MageHand, 0, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::Mending, 0, &[Bard, Cleric, Druid, Sorcerer, Wizard]),
    (Spell::Message, 0, &[Bard, Sorcerer, Wizard]),
    (Spell::MinorIllusion, 0, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::PoisonSpray, 0, &[Druid, Sorcerer, Warlock, Wizard]),
    (Spell::Prestidigitation, 0, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::ProduceFlame, 0, &[Druid]),
    (Spell::RayOfFrost, 0, &[Sorcerer, Wizard]),
    (Spell::Resistance, 0, &[Cleric, Druid]),
    (Spell::SacredFlame, 0, &[Cleric]),
    (Spell::Shillelagh, 0, &[Druid]),
    (Spell::ShockingGrasp, 0, &[Sorcerer, Wizard]),
    (Spell::SpareTheDying, 0, &[Cleric]),
    (Spell::Thaumaturgy, 0, &[Cleric]),
    (Spell::ThornWhip, 0, &[Druid]),
    (Spell::TrueStrike, 0, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::ViciousMockery, 0, &[Bard]),
    // 1st level
    (Spell::Alarm, 1, &[Ranger, Wizard]),
    (Spell::AnimalFriendship, 1, &[Bard, Druid, Ranger]),
    (Spell::ArmorOfAgathys, 1, &[Warlock]),
    (Spell::ArmsOfHadar, 1, &[Warlock]),
    (Spell::Bane, 1, &[Bard, Cleric]),
    (Spell::Bless, 1, &[Cleric, Paladin]),
    (Spell::BurningHands, 1, &[Sorcerer, Wizard]),
    (Spell::CharmPerson, 1, &[Bard, Druid, Sorcerer, Warlock, Wizard]),
    (Spell::ChromaticOrb, 1, &[Sorcerer, Wizard]),
    (Spell::ColorSpray, 1, &[Sorcerer, Wizard]),
    (Spell::Command, 1, &[Cleric, Paladin]),
    (Spell::CompelledDuel, 1, &[Paladin]),
    (Spell::ComprehendLanguages, 1, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::CreateOrDestroyWater, 1, &[Cleric, Druid]),
    (Spell::CureWounds, 1, &[Bard, Cleric, Druid, Paladin, Ranger]),
    (Spell::DetectEvilAndGood, 1, &[Cleric, Paladin]),
    (Spell::DetectMagic, 1, &[Bard, Cleric, Druid, Paladin, Ranger, Sorcerer, Wizard]),
    (Spell::DetectPoisonAndDisease, 1, &[Cleric, Druid, Paladin, Ranger]),
    (Spell::DisguiseSelf, 1, &[Bard, Sorcerer, Wizard]),
    (Spell::DissonantWhispers, 1, &[Bard]),
    (Spell::DivineFavor, 1, &[Paladin]),
    (Spell::EnsnaringStrike, 1, &[Ranger]),
    (Spell::Entangle, 1, &[Druid]),
    (Spell::ExpeditiousRetreat, 1, &[Sorcerer, Warlock, Wizard]),
    (Spell::FaerieFire, 1, &[Bard, Druid]),
    (Spell::FalseLife, 1, &[Sorcerer, Wizard]),
    (Spell::FeatherFall, 1, &[Bard, Sorcerer, Wizard]),
    (Spell::FindFamiliar, 1, &[Wizard]),
    (Spell::FogCloud, 1, &[Druid, Ranger, Sorcerer, Wizard]),
    (Spell::Goodberry, 1, &[Druid, Ranger]),
    (Spell::Grease, 1, &[Wizard]),
    (Spell::GuidingBolt, 1, &[Cleric]),
    (Spell::HailOfThorns, 1, &[Ranger]),
    (Spell::HealingWord, 1, &[Bard, Cleric, Druid]),
    (Spell::HellishRebuke, 1, &[Warlock]),
    (Spell::Heroism, 1, &[Bard, Paladin]),
    (Spell::Hex, 1, &[Warlock]),
    (Spell::HuntersMark, 1, &[Ranger]),
    (Spell::Identify, 1, &[Bard, Wizard]),
    (Spell::IllusoryScript, 1, &[Bard, Warlock, Wizard]),
    (Spell::InflictWounds, 1, &[Cleric]),
    (Spell::Jump, 1, &[Druid, Ranger, Sorcerer, Wizard]),
    (Spell::Longstrider, 1, &[Bard, Druid, Ranger, Wizard]),
    (Spell::MageArmor, 1, &[Sorcerer, Wizard]),
    (Spell::MagicMissile, 1, &[Sorcerer, Wizard]),
    (Spell::ProtectionFromEvilAndGood, 1, &[Cleric, Paladin, Warlock, Wizard]),
    (Spell::PurifyFoodAndDrink, 1, &[Cleric, Druid, Paladin]),
    (Spell::RayOfSickness, 1, &[Sorcerer, Wizard]),
    (Spell::Sanctuary, 1, &[Cleric]),
    (Spell::SearingSmite, 1, &[Paladin]),
    (Spell::Shield, 1, &[Sorcerer, Wizard]),
    (Spell::ShieldOfFaith, 1, &[Cleric, Paladin]),
    (Spell::SilentImage, 1, &[Bard, Sorcerer, Wizard]),
    (Spell::Sleep, 1, &[Bard, Sorcerer, Wizard]),
    (Spell::SpeakWithAnimals, 1, &[Bard, Druid, Ranger]),
    (Spell::TashasHideousLaughter, 1, &[Bard, Wizard]),
    (Spell::TensersFloatingDisk, 1, &[Wizard]),
    (Spell::ThunderousSmite, 1, &[Paladin]),
    (Spell::Thunderwave, 1, &[Bard, Druid, Sorcerer, Wizard]),
    (Spell::UnseenServant, 1, &[Bard, Warlock, Wizard]),
    (Spell::WitchBolt, 1, &[Sorcerer, Warlock, Wizard]),
    (Spell::WrathfulSmite, 1, &[Paladin]),
    // 2nd level
    (Spell::Augury, 2, &[Cleric]),
    (Spell::Barkskin, 2, &[Druid, Ranger]),
    (Spell::BlindnessDeafness, 2, &[Bard, Cleric, Sorcerer, Wizard]),
    (Spell::FlamingSphere, 2, &[Druid, Wizard]),
    (Spell::GustOfWind, 2, &[Druid, Sorcerer, Wizard]),
    (Spell::LesserRestoration, 2, &[Bard, Cleric, Druid, Paladin, Ranger]),
    (Spell::MagicWeapon, 2, &[Paladin, Wizard]),
    (Spell::MirrorImage, 2, &[Sorcerer, Warlock, Wizard]),
    (Spell::PassWithoutTrace, 2, &[Druid, Ranger]),
    (Spell::RayOfEnfeeblement, 2, &[Warlock, Wizard]),
    (Spell::ScorchingRay, 2, &[Sorcerer, Wizard]),
    (Spell::Shatter, 2, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::SpikeGrowth, 2, &[Druid, Ranger]),
    (Spell::SpiritualWeapon, 2, &[Cleric]),
    (Spell::Suggestion, 2, &[Bard, Sorcerer, Warlock, Wizard]),
    // 3rd level
    (Spell::AnimateDead, 3, &[Cleric, Wizard]),
    (Spell::BeaconOfHope, 3, &[Cleric]),
    (Spell::Blink, 3, &[Sorcerer, Wizard]),
    (Spell::CallLightning, 3, &[Druid]),
    (Spell::CrusadersMantle, 3, &[Paladin]),
    (Spell::Daylight, 3, &[Cleric, Druid, Paladin, Ranger, Sorcerer]),
    (Spell::DispelMagic, 3, &[Bard, Cleric, Druid, Paladin, Sorcerer, Warlock, Wizard]),
    (Spell::Fireball, 3, &[Sorcerer, Wizard]),
    (Spell::Nondetection, 3, &[Bard, Ranger, Wizard]),
    (Spell::PlantGrowth, 3, &[Bard, Druid, Ranger]),
    (Spell::Revivify, 3, &[Cleric, Paladin]),
    (Spell::SleetStorm, 3, &[Druid, Sorcerer, Wizard]),
    (Spell::SpeakWithDead, 3, &[Bard, Cleric]),
    (Spell::SpiritGuardians, 3, &[Cleric]),
    (Spell::VampiricTouch, 3, &[Warlock, Wizard]),
    (Spell::WindWall, 3, &[Druid, Ranger]),
    // 4th level
    (Spell::ArcaneEye, 4, &[Wizard]),
    (Spell::Blight, 4, &[Druid, Sorcerer, Warlock, Wizard]),
    (Spell::Confusion, 4, &[Bard, Druid, Sorcerer, Wizard]),
    (Spell::ControlWater, 4, &[Cleric, Druid, Wizard]),
    (Spell::DeathWard, 4, &[Cleric, Paladin]),
    (Spell::DimensionDoor, 4, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::DominateBeast, 4, &[Druid, Sorcerer]),
    (Spell::FreedomOfMovement, 4, &[Bard, Cleric, Druid, Ranger]),
    (Spell::GraspingVine, 4, &[Druid, Ranger]),
    (Spell::GuardianOfFaith, 4, &[Cleric]),
    (Spell::IceStorm, 4, &[Druid, Sorcerer, Wizard]),
    (Spell::Polymorph, 4, &[Bard, Druid, Sorcerer, Wizard]),
    (Spell::Stoneskin, 4, &[Druid, Ranger, Sorcerer, Wizard]),
    (Spell::WallOfFire, 4, &[Druid, Sorcerer, Wizard]),
    // 5th level
    (Spell::AntilifeShell, 5, &[Druid]),
    (Spell::Cloudkill, 5, &[Sorcerer, Wizard]),
    (Spell::DestructiveWave, 5, &[Paladin]),
    (Spell::DominatePerson, 5, &[Bard, Sorcerer, Wizard]),
    (Spell::FlameStrike, 5, &[Cleric]),
    (Spell::HoldMonster, 5, &[Bard, Sorcerer, Warlock, Wizard]),
    (Spell::InsectPlague, 5, &[Cleric, Druid, Sorcerer]),
    (Spell::LegendLore, 5, &[Bard, Cleric, Wizard]),
    (Spell::MassCureWounds, 5, &[Bard, Cleric, Druid]),
    (Spell::ModifyMemory, 5, &[Bard, Wizard]),
    (Spell::RaiseDead, 5, &[Bard, Cleric, Paladin]),
    (Spell::Scrying, 5, &[Bard, Cleric, Druid, Warlock, Wizard]),
    (Spell::TreeStride, 5, &[Druid, Ranger]),
];

impl Spell {
    fn entry(&self) -> Option<&'static (Spell, u8, &'static [Class])> {
        SPELL_TABLE.iter().find(|(spell, _, _)| spell == self)
    }

    /// Spell level, 0 for cantrips.
    pub fn level(&self) -> u8 {
        self.entry().map_or(0, |(_, level, _)| *level)
    }

    pub fn is_cantrip(&self) -> bool {
        self.level() == 0
    }

    pub fn classes(&self) -> &'static [Class] {
        self.entry().map_or(&[], |(_, _, classes)| classes)
    }

    /// Cantrips on a class's spell list.
    pub fn cantrips_for(class: Class) -> Vec<Spell> {
        Self::matching(class, |level| level == 0)
    }

    /// Leveled spells on a class's spell list up to `max_level` inclusive.
    pub fn spells_for(class: Class, max_level: u8) -> Vec<Spell> {
        Self::matching(class, |level| (1..=max_level).contains(&level))
    }

    fn matching(class: Class, level_filter: impl Fn(u8) -> bool) -> Vec<Spell> {
        SPELL_TABLE
            .iter()
            .filter(|(_, level, classes)| level_filter(*level) && classes.contains(&class))
            .map(|(spell, _, _)| *spell)
            .collect()
    }
}
