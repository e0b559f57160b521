string_enum! {
    /// A martial fighting style.
    pub enum FightingStyle ("fighting style") {
        Archery => "archery",
        Defense => "defense",
        Dueling => "dueling",
        GreatWeaponFighting => "great-weapon-fighting",
        Protection => "protection",
        TwoWeaponFighting => "two-weapon-fighting",
    }
}
