//! Targets that expertise can double proficiency for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::vocab::{Skill, Tool, Vocabulary};

/// A skill or tool that expertise can apply to.
///
/// Serialised as the bare skill or tool id. Skill and tool ids never overlap,
/// so parsing is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpertiseTarget {
    Skill(Skill),
    Tool(Tool),
}

impl ExpertiseTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertiseTarget::Skill(skill) => skill.as_str(),
            ExpertiseTarget::Tool(tool) => tool.as_str(),
        }
    }

    /// Every skill, in order.
    pub fn all_skills() -> Vec<ExpertiseTarget> {
        Skill::ALL.iter().copied().map(ExpertiseTarget::Skill).collect()
    }
}

impl From<Skill> for ExpertiseTarget {
    fn from(skill: Skill) -> Self {
        ExpertiseTarget::Skill(skill)
    }
}

impl From<Tool> for ExpertiseTarget {
    fn from(tool: Tool) -> Self {
        ExpertiseTarget::Tool(tool)
    }
}

impl fmt::Display for ExpertiseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpertiseTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(skill) = s.parse::<Skill>() {
            return Ok(ExpertiseTarget::Skill(skill));
        }
        s.parse::<Tool>()
            .map(ExpertiseTarget::Tool)
            .map_err(|_| DomainError::parse(format!("Unknown skill or tool: '{}'", s)))
    }
}

impl Vocabulary for ExpertiseTarget {
    const KIND: &'static str = "expertise";

    fn id(&self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_or_tool() {
        assert_eq!(
            "stealth".parse::<ExpertiseTarget>().unwrap(),
            ExpertiseTarget::Skill(Skill::Stealth)
        );
        assert_eq!(
            "thieves-tools".parse::<ExpertiseTarget>().unwrap(),
            ExpertiseTarget::Tool(Tool::ThievesTools)
        );
        assert!("longsword".parse::<ExpertiseTarget>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_id() {
        let json = serde_json::to_string(&ExpertiseTarget::Tool(Tool::ThievesTools)).unwrap();
        assert_eq!(json, "\"thieves-tools\"");
    }
}
