//! Requirement model: what a player must choose for one source.

use serde::{Deserialize, Serialize};

use crate::ids::{ChoiceId, OptionId};
use crate::vocab::{
    DraconicAncestry, Equipment, EquipmentCategory, ExpertiseTarget, FightingStyle, Language,
    Skill, Spell, Subclass, Tool, Vocabulary,
};

/// A counted pick from one vocabulary.
///
/// `options: None` means any legal value of `T`. `options: Some(..)` is a
/// closed enumeration, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRequirement<T> {
    pub id: ChoiceId,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<T>>,
    pub label: String,
}

impl<T: Vocabulary> ChoiceRequirement<T> {
    /// Requirement open to any value of the vocabulary.
    pub fn any(id: impl Into<ChoiceId>, count: u32, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            count,
            options: None,
            label: label.into(),
        }
    }

    /// Requirement restricted to a closed set of values.
    pub fn from_options(
        id: impl Into<ChoiceId>,
        count: u32,
        options: impl IntoIterator<Item = T>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            count,
            options: Some(options.into_iter().collect()),
            label: label.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.options.is_none()
    }

    /// Whether `value` is a legal pick for this slot.
    pub fn allows(&self, value: &T) -> bool {
        self.options
            .as_ref()
            .map_or(true, |options| options.contains(value))
    }

    /// True when `other` allows at least every value this requirement allows.
    pub fn is_widened_by(&self, other: &Self) -> bool {
        match (&self.options, &other.options) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(mine), Some(theirs)) => mine.iter().all(|v| theirs.contains(v)),
        }
    }
}

pub type SkillRequirement = ChoiceRequirement<Skill>;
pub type LanguageRequirement = ChoiceRequirement<Language>;
pub type ToolRequirement = ChoiceRequirement<Tool>;
pub type InstrumentRequirement = ChoiceRequirement<Tool>;
pub type FightingStyleRequirement = ChoiceRequirement<FightingStyle>;
pub type ExpertiseRequirement = ChoiceRequirement<ExpertiseTarget>;
pub type SpellRequirement = ChoiceRequirement<Spell>;
pub type SubclassRequirement = ChoiceRequirement<Subclass>;
pub type AncestryRequirement = ChoiceRequirement<DraconicAncestry>;

/// A concrete item inside an equipment option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub item: Equipment,
    pub quantity: u32,
}

/// An open pick inside an option, e.g. "any martial weapon".
///
/// Answered by its own submission whose `choice_id` is this choice's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCategoryChoice {
    pub id: ChoiceId,
    pub choose: u32,
    pub categories: Vec<EquipmentCategory>,
    pub label: String,
}

impl EquipmentCategoryChoice {
    pub fn allows(&self, item: Equipment) -> bool {
        item.in_any(&self.categories)
    }

    pub fn allowed_items(&self) -> Vec<Equipment> {
        Equipment::in_categories(&self.categories)
    }
}

/// One bundle a player can take for an equipment requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentOption {
    pub id: OptionId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<EquipmentItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_choices: Vec<EquipmentCategoryChoice>,
}

impl EquipmentOption {
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items: Vec::new(),
            category_choices: Vec::new(),
        }
    }

    pub fn item(mut self, item: Equipment, quantity: u32) -> Self {
        self.items.push(EquipmentItem { item, quantity });
        self
    }

    /// Adds an open pick. Its choice id is derived from the option id.
    pub fn choice_of(
        mut self,
        choose: u32,
        categories: &[EquipmentCategory],
        label: impl Into<String>,
    ) -> Self {
        let suffix = self.category_choices.len() + 1;
        self.category_choices.push(EquipmentCategoryChoice {
            id: ChoiceId::new(format!("{}-choice-{}", self.id, suffix)),
            choose,
            categories: categories.to_vec(),
            label: label.into(),
        });
        self
    }
}

/// An ordered group of equipment bundles the player picks `choose` from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRequirement {
    pub id: ChoiceId,
    pub choose: u32,
    pub options: Vec<EquipmentOption>,
    pub label: String,
}

impl EquipmentRequirement {
    pub fn new(
        id: impl Into<ChoiceId>,
        label: impl Into<String>,
        options: Vec<EquipmentOption>,
    ) -> Self {
        Self {
            id: id.into(),
            choose: 1,
            options,
            label: label.into(),
        }
    }

    pub fn option(&self, id: &str) -> Option<&EquipmentOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

/// Everything a player must choose for one source (class, race or background).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_skills: Vec<SkillRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<EquipmentRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<InstrumentRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fighting_style: Option<FightingStyleRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expertise: Vec<ExpertiseRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantrips: Option<SpellRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spells: Option<SpellRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellbook: Option<SpellRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draconic_ancestry: Option<AncestryRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subclass: Option<SubclassRequirement>,
}

impl Requirements {
    /// True when nothing needs to be chosen.
    pub fn is_empty(&self) -> bool {
        self == &Requirements::default()
    }

    pub fn equipment_requirement(&self, id: &str) -> Option<&EquipmentRequirement> {
        self.equipment.iter().find(|req| req.id == id)
    }

    /// Every choice id declared, including equipment category choices.
    pub fn choice_ids(&self) -> Vec<&ChoiceId> {
        let mut ids = Vec::new();
        ids.extend(self.skills.as_ref().map(|r| &r.id));
        ids.extend(self.additional_skills.iter().map(|r| &r.id));
        for req in &self.equipment {
            ids.push(&req.id);
            for option in &req.options {
                ids.extend(option.category_choices.iter().map(|c| &c.id));
            }
        }
        ids.extend(self.languages.iter().map(|r| &r.id));
        ids.extend(self.tools.iter().map(|r| &r.id));
        ids.extend(self.instruments.as_ref().map(|r| &r.id));
        ids.extend(self.fighting_style.as_ref().map(|r| &r.id));
        ids.extend(self.expertise.iter().map(|r| &r.id));
        ids.extend(self.cantrips.as_ref().map(|r| &r.id));
        ids.extend(self.spells.as_ref().map(|r| &r.id));
        ids.extend(self.spellbook.as_ref().map(|r| &r.id));
        ids.extend(self.draconic_ancestry.as_ref().map(|r| &r.id));
        ids.extend(self.subclass.as_ref().map(|r| &r.id));
        ids
    }
}

/// Per-source requirements for a whole character.
///
/// Kept separate rather than merged so that nothing is lost when two sources
/// declare the same kind of choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRequirements {
    pub class: Requirements,
    pub race: Requirements,
    pub background: Requirements,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_requirement_allows_anything() {
        let req = LanguageRequirement::any("human-language", 1, "Choose 1 language");
        assert!(req.is_open());
        assert!(req.allows(&Language::Draconic));
    }

    #[test]
    fn test_closed_empty_options_allow_nothing() {
        let req = SkillRequirement::from_options("nothing", 1, [], "none");
        assert!(!req.is_open());
        assert!(!req.allows(&Skill::Arcana));
    }

    #[test]
    fn test_options_absent_vs_present_in_json() {
        let open = LanguageRequirement::any("human-language", 1, "Choose 1 language");
        let json = serde_json::to_value(&open).unwrap();
        assert!(json.get("options").is_none());

        let closed = SkillRequirement::from_options("x", 1, [Skill::Arcana], "x");
        let json = serde_json::to_value(&closed).unwrap();
        assert_eq!(json["options"], serde_json::json!(["arcana"]));
    }

    #[test]
    fn test_requirements_deserialize_open_and_closed_slots() {
        let json = serde_json::json!({
            "skills": {
                "id": "fighter-skills",
                "count": 2,
                "options": ["athletics", "history"],
                "label": "Choose 2 skills"
            },
            "languages": [{
                "id": "human-language",
                "count": 1,
                "label": "Choose 1 language"
            }]
        });
        let reqs: Requirements = serde_json::from_value(json).unwrap();
        let skills = reqs.skills.as_ref().unwrap();
        assert_eq!(skills.options, Some(vec![Skill::Athletics, Skill::History]));
        assert!(reqs.languages[0].is_open());

        let back: Requirements =
            serde_json::from_str(&serde_json::to_string(&reqs).unwrap()).unwrap();
        assert_eq!(back, reqs);
    }

    #[test]
    fn test_widening() {
        let narrow = SkillRequirement::from_options("x", 1, [Skill::Arcana], "x");
        let wide = SkillRequirement::from_options("x", 1, [Skill::Arcana, Skill::History], "x");
        let open = SkillRequirement::any("x", 1, "x");
        assert!(narrow.is_widened_by(&wide));
        assert!(narrow.is_widened_by(&open));
        assert!(!wide.is_widened_by(&narrow));
        assert!(!open.is_widened_by(&wide));
    }

    #[test]
    fn test_category_choice_ids_derive_from_option() {
        let option = EquipmentOption::new("fighter-weapon-b", "two martial weapons").choice_of(
            2,
            EquipmentCategory::MARTIAL_WEAPONS,
            "Choose 2 martial weapons",
        );
        assert_eq!(option.category_choices[0].id, "fighter-weapon-b-choice-1");
        assert!(option.category_choices[0].allows(Equipment::Longsword));
        assert!(!option.category_choices[0].allows(Equipment::Mace));
    }

    #[test]
    fn test_empty_requirements_serialize_to_empty_object() {
        let json = serde_json::to_string(&Requirements::default()).unwrap();
        assert_eq!(json, "{}");
        assert!(Requirements::default().is_empty());
    }
}
