//! Races, sub-races and dragonborn ancestry.

string_enum! {
    /// A race or sub-race. Sub-races have their own ids and point at their
    /// parent through [`Race::parent`].
    pub enum Race ("race") {
        Human => "human",
        Elf => "elf",
        HighElf => "high-elf",
        WoodElf => "wood-elf",
        DarkElf => "dark-elf",
        Dwarf => "dwarf",
        HillDwarf => "hill-dwarf",
        MountainDwarf => "mountain-dwarf",
        Halfling => "halfling",
        LightfootHalfling => "lightfoot-halfling",
        StoutHalfling => "stout-halfling",
        Gnome => "gnome",
        ForestGnome => "forest-gnome",
        RockGnome => "rock-gnome",
        Dragonborn => "dragonborn",
        HalfElf => "half-elf",
        HalfOrc => "half-orc",
        Tiefling => "tiefling",
    }
}

impl Race {
    pub fn parent(&self) -> Option<Race> {
        match self {
            Race::HighElf | Race::WoodElf | Race::DarkElf => Some(Race::Elf),
            Race::HillDwarf | Race::MountainDwarf => Some(Race::Dwarf),
            Race::LightfootHalfling | Race::StoutHalfling => Some(Race::Halfling),
            Race::ForestGnome | Race::RockGnome => Some(Race::Gnome),
            _ => None,
        }
    }

    pub fn is_subrace(&self) -> bool {
        self.parent().is_some()
    }

    /// The race itself followed by its parent, if any.
    pub fn lineage(&self) -> impl Iterator<Item = Race> {
        std::iter::once(*self).chain(self.parent())
    }
}

string_enum! {
    /// Dragonborn draconic ancestry.
    pub enum DraconicAncestry ("draconic ancestry") {
        Black => "black",
        Blue => "blue",
        Brass => "brass",
        Bronze => "bronze",
        Copper => "copper",
        Gold => "gold",
        Green => "green",
        Red => "red",
        Silver => "silver",
        White => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subrace_parent() {
        assert_eq!(Race::HighElf.parent(), Some(Race::Elf));
        assert_eq!(Race::HalfElf.parent(), None);
        assert!(Race::HillDwarf.is_subrace());
        let lineage: Vec<Race> = Race::RockGnome.lineage().collect();
        assert_eq!(lineage, vec![Race::RockGnome, Race::Gnome]);
    }
}
