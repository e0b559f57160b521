//! [`RuleCatalog`] backed by the built-in rule tables.

use chargen_domain::choices::{catalog, Grant, Requirements};
use chargen_domain::{Background, Class, DomainError, Level, Race, Subclass};

use super::ports::RuleCatalog;

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRuleCatalog;

impl RuleCatalog for StaticRuleCatalog {
    fn class_requirements(&self, class: Class, level: Level) -> Requirements {
        catalog::class_requirements_at_level(class, level)
    }

    fn class_requirements_with_subclass(
        &self,
        class: Class,
        level: Level,
        subclass: Subclass,
    ) -> Result<Requirements, DomainError> {
        catalog::class_requirements_with_subclass(class, level, subclass)
    }

    fn race_requirements(&self, race: Race) -> Requirements {
        catalog::race_requirements(race)
    }

    fn background_requirements(&self, background: Background) -> Requirements {
        catalog::background_requirements(background)
    }

    fn class_grants(&self, class: Class, level: Level, subclass: Option<Subclass>) -> Vec<Grant> {
        let mut grants = catalog::class_grants(class);
        if let Some(subclass) = subclass {
            grants.extend(catalog::subclass_grants(subclass, level));
        }
        grants
    }

    fn race_grants(&self, race: Race) -> Vec<Grant> {
        catalog::race_grants(race)
    }

    fn background_grants(&self, background: Background) -> Vec<Grant> {
        catalog::background_grants(background)
    }
}
