//! The eighteen 5e skills.

string_enum! {
    /// A skill proficiency.
    pub enum Skill ("skill") {
        Acrobatics => "acrobatics",
        AnimalHandling => "animal-handling",
        Arcana => "arcana",
        Athletics => "athletics",
        Deception => "deception",
        History => "history",
        Insight => "insight",
        Intimidation => "intimidation",
        Investigation => "investigation",
        Medicine => "medicine",
        Nature => "nature",
        Perception => "perception",
        Performance => "performance",
        Persuasion => "persuasion",
        Religion => "religion",
        SleightOfHand => "sleight-of-hand",
        Stealth => "stealth",
        Survival => "survival",
    }
}
