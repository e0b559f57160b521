//! Starting-equipment items and the categories used by "any martial weapon"
//! style choices.

string_enum! {
    /// Grouping an equipment category choice can draw from.
    pub enum EquipmentCategory ("equipment category") {
        SimpleMelee => "simple-melee",
        SimpleRanged => "simple-ranged",
        MartialMelee => "martial-melee",
        MartialRanged => "martial-ranged",
        LightArmor => "light-armor",
        MediumArmor => "medium-armor",
        HeavyArmor => "heavy-armor",
        Shield => "shield",
        Pack => "pack",
        ArcaneFocus => "arcane-focus",
        HolySymbol => "holy-symbol",
        DruidicFocus => "druidic-focus",
        MusicalInstrument => "musical-instrument",
        Ammunition => "ammunition",
        Gear => "gear",
    }
}

impl EquipmentCategory {
    pub const SIMPLE_WEAPONS: &'static [EquipmentCategory] =
        &[EquipmentCategory::SimpleMelee, EquipmentCategory::SimpleRanged];
    pub const MARTIAL_WEAPONS: &'static [EquipmentCategory] =
        &[EquipmentCategory::MartialMelee, EquipmentCategory::MartialRanged];
}

string_enum! {
    /// An equipment item.
    pub enum Equipment ("equipment") {
        // Simple melee
        Club => "club",
        Dagger => "dagger",
        Greatclub => "greatclub",
        Handaxe => "handaxe",
        Javelin => "javelin",
        LightHammer => "light-hammer",
        Mace => "mace",
        Quarterstaff => "quarterstaff",
        Sickle => "sickle",
        Spear => "spear",
        // Simple ranged
        LightCrossbow => "light-crossbow",
        Dart => "dart",
        Shortbow => "shortbow",
        Sling => "sling",
        // Martial melee
        Battleaxe => "battleaxe",
        Flail => "flail",
        Glaive => "glaive",
        Greataxe => "greataxe",
        Greatsword => "greatsword",
        Halberd => "halberd",
        Lance => "lance",
        Longsword => "longsword",
        Maul => "maul",
        Morningstar => "morningstar",
        Pike => "pike",
        Rapier => "rapier",
        Scimitar => "scimitar",
        Shortsword => "shortsword",
        Trident => "trident",
        WarPick => "war-pick",
        Warhammer => "warhammer",
        Whip => "whip",
        // Martial ranged
        Blowgun => "blowgun",
        HandCrossbow => "hand-crossbow",
        HeavyCrossbow => "heavy-crossbow",
        Longbow => "longbow",
        Net => "net",
        // Armor
        PaddedArmor => "padded-armor",
        LeatherArmor => "leather-armor",
        StuddedLeatherArmor => "studded-leather-armor",
        HideArmor => "hide-armor",
        ChainShirt => "chain-shirt",
        ScaleMail => "scale-mail",
        Breastplate => "breastplate",
        HalfPlate => "half-plate",
        RingMail => "ring-mail",
        ChainMail => "chain-mail",
        SplintArmor => "splint-armor",
        PlateArmor => "plate-armor",
        Shield => "shield",
        WoodenShield => "wooden-shield",
        // Packs
        BurglarsPack => "burglars-pack",
        DiplomatsPack => "diplomats-pack",
        DungeoneersPack => "dungeoneers-pack",
        EntertainersPack => "entertainers-pack",
        ExplorersPack => "explorers-pack",
        PriestsPack => "priests-pack",
        ScholarsPack => "scholars-pack",
        // Arcane foci
        Crystal => "crystal",
        Orb => "orb",
        Rod => "rod",
        ArcaneStaff => "arcane-staff",
        Wand => "wand",
        // Holy symbols
        Amulet => "amulet",
        Emblem => "emblem",
        Reliquary => "reliquary",
        // Druidic foci
        SprigOfMistletoe => "sprig-of-mistletoe",
        Totem => "totem",
        WoodenStaff => "wooden-staff",
        YewWand => "yew-wand",
        // Musical instruments
        Bagpipes => "bagpipes",
        Drum => "drum",
        Dulcimer => "dulcimer",
        Flute => "flute",
        Lute => "lute",
        Lyre => "lyre",
        Horn => "horn",
        PanFlute => "pan-flute",
        Shawm => "shawm",
        Viol => "viol",
        // Ammunition
        Arrows => "arrows",
        CrossbowBolts => "crossbow-bolts",
        // Gear
        ComponentPouch => "component-pouch",
        Spellbook => "spellbook",
        Quiver => "quiver",
    }
}

impl Equipment {
    pub fn category(&self) -> EquipmentCategory {
        use Equipment::*;
        use EquipmentCategory as Cat;
        match self {
            Club | Dagger | Greatclub | Handaxe | Javelin | LightHammer | Mace | Quarterstaff
            | Sickle | Spear => Cat::SimpleMelee,
            LightCrossbow | Dart | Shortbow | Sling => Cat::SimpleRanged,
            Battleaxe | Flail | Glaive | Greataxe | Greatsword | Halberd | Lance | Longsword
            | Maul | Morningstar | Pike | Rapier | Scimitar | Shortsword | Trident | WarPick
            | Warhammer | Whip => Cat::MartialMelee,
            Blowgun | HandCrossbow | HeavyCrossbow | Longbow | Net => Cat::MartialRanged,
            PaddedArmor | LeatherArmor | StuddedLeatherArmor => Cat::LightArmor,
            HideArmor | ChainShirt | ScaleMail | Breastplate | HalfPlate => Cat::MediumArmor,
            RingMail | ChainMail | SplintArmor | PlateArmor => Cat::HeavyArmor,
            Shield | WoodenShield => Cat::Shield,
            BurglarsPack | DiplomatsPack | DungeoneersPack | EntertainersPack | ExplorersPack
            | PriestsPack | ScholarsPack => Cat::Pack,
            Crystal | Orb | Rod | ArcaneStaff | Wand => Cat::ArcaneFocus,
            Amulet | Emblem | Reliquary => Cat::HolySymbol,
            SprigOfMistletoe | Totem | WoodenStaff | YewWand => Cat::DruidicFocus,
            Bagpipes | Drum | Dulcimer | Flute | Lute | Lyre | Horn | PanFlute | Shawm | Viol => {
                Cat::MusicalInstrument
            }
            Arrows | CrossbowBolts => Cat::Ammunition,
            ComponentPouch | Spellbook | Quiver => Cat::Gear,
        }
    }

    pub fn in_any(&self, categories: &[EquipmentCategory]) -> bool {
        categories.contains(&self.category())
    }

    /// All items belonging to one of `categories`, in declaration order.
    pub fn in_categories(categories: &[EquipmentCategory]) -> Vec<Equipment> {
        Equipment::ALL
            .iter()
            .copied()
            .filter(|e| e.in_any(categories))
            .collect()
    }
}
