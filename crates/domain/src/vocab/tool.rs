//! Tools, kits, gaming sets, vehicles and musical instruments.
//!
//! Instruments are tools for proficiency purposes, so they share the enum and
//! are told apart by [`ToolCategory`].

string_enum! {
    /// Broad grouping used by "any artisan's tool" style choices.
    pub enum ToolCategory ("tool category") {
        Artisan => "artisan-tools",
        GamingSet => "gaming-set",
        Kit => "kit",
        Vehicle => "vehicle",
        MusicalInstrument => "musical-instrument",
    }
}

string_enum! {
    /// A tool proficiency.
    pub enum Tool ("tool") {
        AlchemistsSupplies => "alchemists-supplies",
        BrewersSupplies => "brewers-supplies",
        CalligraphersSupplies => "calligraphers-supplies",
        CarpentersTools => "carpenters-tools",
        CartographersTools => "cartographers-tools",
        CobblersTools => "cobblers-tools",
        CooksUtensils => "cooks-utensils",
        GlassblowersTools => "glassblowers-tools",
        JewelersTools => "jewelers-tools",
        LeatherworkersTools => "leatherworkers-tools",
        MasonsTools => "masons-tools",
        PaintersSupplies => "painters-supplies",
        PottersTools => "potters-tools",
        SmithsTools => "smiths-tools",
        TinkersTools => "tinkers-tools",
        WeaversTools => "weavers-tools",
        WoodcarversTools => "woodcarvers-tools",
        DiceSet => "dice-set",
        DragonchessSet => "dragonchess-set",
        PlayingCardSet => "playing-card-set",
        ThreeDragonAnteSet => "three-dragon-ante-set",
        DisguiseKit => "disguise-kit",
        ForgeryKit => "forgery-kit",
        HerbalismKit => "herbalism-kit",
        NavigatorsTools => "navigators-tools",
        PoisonersKit => "poisoners-kit",
        ThievesTools => "thieves-tools",
        VehiclesLand => "vehicles-land",
        VehiclesWater => "vehicles-water",
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
    }
}

impl Tool {
    pub fn category(&self) -> ToolCategory {
        use Tool::*;
        match self {
            AlchemistsSupplies | BrewersSupplies | CalligraphersSupplies | CarpentersTools
            | CartographersTools | CobblersTools | CooksUtensils | GlassblowersTools
            | JewelersTools | LeatherworkersTools | MasonsTools | PaintersSupplies
            | PottersTools | SmithsTools | TinkersTools | WeaversTools | WoodcarversTools => {
                ToolCategory::Artisan
            }
            DiceSet | DragonchessSet | PlayingCardSet | ThreeDragonAnteSet => {
                ToolCategory::GamingSet
            }
            DisguiseKit | ForgeryKit | HerbalismKit | NavigatorsTools | PoisonersKit
            | ThievesTools => ToolCategory::Kit,
            VehiclesLand | VehiclesWater => ToolCategory::Vehicle,
            Bagpipes | Drum | Dulcimer | Flute | Lute | Lyre | Horn | PanFlute | Shawm | Viol => {
                ToolCategory::MusicalInstrument
            }
        }
    }

    pub fn is_instrument(&self) -> bool {
        self.category() == ToolCategory::MusicalInstrument
    }

    /// All tools in the given category, in declaration order.
    pub fn of_category(category: ToolCategory) -> Vec<Tool> {
        Tool::ALL
            .iter()
            .copied()
            .filter(|t| t.category() == category)
            .collect()
    }
}
