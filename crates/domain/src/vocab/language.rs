string_enum! {
    /// A spoken language.
    pub enum Language ("language") {
        Common => "common",
        Dwarvish => "dwarvish",
        Elvish => "elvish",
        Giant => "giant",
        Gnomish => "gnomish",
        Goblin => "goblin",
        Halfling => "halfling",
        Orc => "orc",
        Abyssal => "abyssal",
        Celestial => "celestial",
        Draconic => "draconic",
        DeepSpeech => "deep-speech",
        Infernal => "infernal",
        Primordial => "primordial",
        Sylvan => "sylvan",
        Undercommon => "undercommon",
    }
}

impl Language {
    /// Exotic languages are normally learned from unusual sources.
    pub fn is_exotic(&self) -> bool {
        matches!(
            self,
            Language::Abyssal
                | Language::Celestial
                | Language::Draconic
                | Language::DeepSpeech
                | Language::Infernal
                | Language::Primordial
                | Language::Sylvan
                | Language::Undercommon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exotic_split() {
        let exotic = Language::ALL.iter().filter(|l| l.is_exotic()).count();
        assert_eq!(exotic, 8);
        assert!(!Language::Common.is_exotic());
    }
}
