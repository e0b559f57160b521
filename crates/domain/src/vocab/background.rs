string_enum! {
    /// A character background.
    pub enum Background ("background") {
        Acolyte => "acolyte",
        Charlatan => "charlatan",
        Criminal => "criminal",
        Entertainer => "entertainer",
        FolkHero => "folk-hero",
        GuildArtisan => "guild-artisan",
        Hermit => "hermit",
        Noble => "noble",
        Outlander => "outlander",
        Sage => "sage",
        Sailor => "sailor",
        Soldier => "soldier",
        Urchin => "urchin",
    }
}
