//! Caller-supplied knowledge about the character being validated.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::choices::grants::{Grant, Proficiency, ProficiencyKind};
use crate::choices::submission::Source;
use crate::vocab::{ExpertiseTarget, Language, Skill, Spell, Tool};

/// Values the character receives without choosing, keyed to the granting
/// source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomaticGrants {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub skills: BTreeMap<Skill, Source>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<Language, Source>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tools: BTreeMap<Tool, Source>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cantrips: BTreeMap<Spell, Source>,
}

/// Proficiencies, grants and expertise already known for a character.
///
/// The first source recorded for a value wins; later records of the same
/// value are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationContext {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub skill_proficiencies: BTreeMap<Skill, Source>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_proficiencies: BTreeMap<Tool, Source>,
    pub automatic_grants: AutomaticGrants,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub existing_expertise: BTreeSet<ExpertiseTarget>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_grants<'a>(grants: impl IntoIterator<Item = &'a Grant>) -> Self {
        let mut ctx = Self::new();
        ctx.add_grants(grants);
        ctx
    }

    pub fn with_skill(mut self, skill: Skill, source: Source) -> Self {
        self.skill_proficiencies.entry(skill).or_insert(source);
        self
    }

    pub fn with_tool(mut self, tool: Tool, source: Source) -> Self {
        self.tool_proficiencies.entry(tool).or_insert(source);
        self
    }

    pub fn with_expertise(mut self, target: impl Into<ExpertiseTarget>) -> Self {
        self.existing_expertise.insert(target.into());
        self
    }

    pub fn with_grant(mut self, grant: Grant) -> Self {
        self.add_grant(&grant);
        self
    }

    pub fn add_grant(&mut self, grant: &Grant) {
        let grants = &mut self.automatic_grants;
        match grant.proficiency {
            Proficiency::Skill(v) => {
                grants.skills.entry(v).or_insert(grant.source);
            }
            Proficiency::Language(v) => {
                grants.languages.entry(v).or_insert(grant.source);
            }
            Proficiency::Tool(v) => {
                grants.tools.entry(v).or_insert(grant.source);
            }
            Proficiency::Spell(v) => {
                grants.cantrips.entry(v).or_insert(grant.source);
            }
        }
    }

    pub fn add_grants<'a>(&mut self, grants: impl IntoIterator<Item = &'a Grant>) {
        for grant in grants {
            self.add_grant(grant);
        }
    }

    /// Automatic grants as a flat list, ordered by kind then value.
    pub fn grants(&self) -> Vec<Grant> {
        let g = &self.automatic_grants;
        let skills = g.skills.iter().map(|(v, s)| Grant::new(*s, *v));
        let languages = g.languages.iter().map(|(v, s)| Grant::new(*s, *v));
        let tools = g.tools.iter().map(|(v, s)| Grant::new(*s, *v));
        let cantrips = g.cantrips.iter().map(|(v, s)| Grant::new(*s, *v));
        skills.chain(languages).chain(tools).chain(cantrips).collect()
    }

    /// Source that automatically grants `value`, if any.
    pub fn grant_source(&self, kind: ProficiencyKind, value: &str) -> Option<Source> {
        let g = &self.automatic_grants;
        match kind {
            ProficiencyKind::Skill => lookup(&g.skills, value),
            ProficiencyKind::Language => lookup(&g.languages, value),
            ProficiencyKind::Tool => lookup(&g.tools, value),
            ProficiencyKind::Spell => lookup(&g.cantrips, value),
        }
    }

    /// Source of an existing skill or tool proficiency.
    pub fn proficiency_source(&self, kind: ProficiencyKind, value: &str) -> Option<Source> {
        match kind {
            ProficiencyKind::Skill => lookup(&self.skill_proficiencies, value),
            ProficiencyKind::Tool => lookup(&self.tool_proficiencies, value),
            ProficiencyKind::Language | ProficiencyKind::Spell => None,
        }
    }

    /// Whether the character already holds proficiency in `target`, either
    /// recorded directly or through an automatic grant.
    pub fn has_proficiency(&self, target: ExpertiseTarget) -> bool {
        match target {
            ExpertiseTarget::Skill(skill) => {
                self.skill_proficiencies.contains_key(&skill)
                    || self.automatic_grants.skills.contains_key(&skill)
            }
            ExpertiseTarget::Tool(tool) => {
                self.tool_proficiencies.contains_key(&tool)
                    || self.automatic_grants.tools.contains_key(&tool)
            }
        }
    }

    pub fn has_expertise(&self, target: ExpertiseTarget) -> bool {
        self.existing_expertise.contains(&target)
    }
}

fn lookup<T: std::str::FromStr + Ord>(map: &BTreeMap<T, Source>, value: &str) -> Option<Source> {
    let key = value.parse::<T>().ok()?;
    map.get(&key).copied()
}
