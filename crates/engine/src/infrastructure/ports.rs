//! Port traits for the choice engine.
//!
//! The service depends on [`RuleCatalog`] rather than calling the domain
//! catalog directly, so lookups can be cached and mocked in tests.

use chargen_domain::choices::{Grant, Requirements};
use chargen_domain::{Background, Class, DomainError, Level, Race, Subclass};

/// Source of requirement tables.
#[cfg_attr(test, mockall::automock)]
pub trait RuleCatalog: Send + Sync {
    fn class_requirements(&self, class: Class, level: Level) -> Requirements;

    /// Class requirements with a subclass applied.
    ///
    /// Fails when the subclass belongs to another class or is not yet
    /// unlocked at `level`.
    fn class_requirements_with_subclass(
        &self,
        class: Class,
        level: Level,
        subclass: Subclass,
    ) -> Result<Requirements, DomainError>;

    fn race_requirements(&self, race: Race) -> Requirements;

    fn background_requirements(&self, background: Background) -> Requirements;

    /// Automatic grants from the class, plus the subclass's when given.
    fn class_grants(&self, class: Class, level: Level, subclass: Option<Subclass>) -> Vec<Grant>;

    fn race_grants(&self, race: Race) -> Vec<Grant>;

    fn background_grants(&self, background: Background) -> Vec<Grant>;
}
