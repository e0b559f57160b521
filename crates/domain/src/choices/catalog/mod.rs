//! Requirement catalog: pure lookups from class, race and background to the
//! choices a player must make.

mod backgrounds;
mod classes;
mod equipment;
mod races;

pub use backgrounds::background_grants;
pub use classes::class_grants;
pub use equipment::starting_equipment;
pub use races::race_grants;

use crate::choices::grants::Grant;
use crate::choices::requirements::{CharacterRequirements, Requirements};
use crate::choices::subclass::{apply_subclass_modifications, subclass_modifications};
use crate::error::DomainError;
use crate::vocab::{Background, Class, Level, Race, Subclass};

/// Level 1 requirements for `class`.
pub fn class_requirements(class: Class) -> Requirements {
    class_requirements_at_level(class, Level::MIN)
}

/// Requirements for `class` at `level`. Level-gated slots (subclass,
/// fighting style, expertise, spellcasting) appear once unlocked.
pub fn class_requirements_at_level(class: Class, level: Level) -> Requirements {
    tracing::debug!(class = %class, level = %level, "Building class requirements");
    classes::requirements_at_level(class, level)
}

pub fn race_requirements(race: Race) -> Requirements {
    tracing::debug!(race = %race, "Building race requirements");
    races::race_requirements(race)
}

pub fn background_requirements(background: Background) -> Requirements {
    tracing::debug!(background = %background, "Building background requirements");
    backgrounds::background_requirements(background)
}

/// Per-source requirements for a whole character.
pub fn character_requirements(
    class: Class,
    race: Race,
    background: Background,
    level: Level,
) -> CharacterRequirements {
    CharacterRequirements {
        class: class_requirements_at_level(class, level),
        race: race_requirements(race),
        background: background_requirements(background),
    }
}

/// Checks that `subclass` can be taken by `class` at `level`.
pub fn check_subclass(class: Class, level: Level, subclass: Subclass) -> Result<(), DomainError> {
    if subclass.class() != class {
        return Err(DomainError::constraint(format!(
            "Subclass {} belongs to {}, not {}",
            subclass,
            subclass.class(),
            class
        )));
    }
    if level < class.subclass_level() {
        return Err(DomainError::constraint(format!(
            "{} cannot choose a subclass before level {}, got level {}",
            class,
            class.subclass_level(),
            level
        )));
    }
    Ok(())
}

/// Class requirements with the subclass already decided.
///
/// The subclass slot is dropped because the choice is fixed by `subclass`,
/// then the subclass's modifications are applied on top.
pub fn class_requirements_with_subclass(
    class: Class,
    level: Level,
    subclass: Subclass,
) -> Result<Requirements, DomainError> {
    check_subclass(class, level, subclass)?;
    let mut base = class_requirements_at_level(class, level);
    base.subclass = None;
    Ok(match subclass_modifications(subclass) {
        Some(mods) => {
            tracing::debug!(subclass = %subclass, "Applying subclass modifications");
            apply_subclass_modifications(&base, &mods.at_level(level))
        }
        None => base,
    })
}

/// Every automatic grant the character receives from its sources.
pub fn character_grants(
    class: Class,
    race: Race,
    background: Background,
    subclass: Option<(Subclass, Level)>,
) -> Vec<Grant> {
    let mut grants = race_grants(race);
    grants.extend(background_grants(background));
    grants.extend(class_grants(class));
    if let Some((subclass, level)) = subclass {
        grants.extend(subclass_grants(subclass, level));
    }
    grants
}

/// Proficiencies and spells a subclass grants by `level`.
pub fn subclass_grants(subclass: Subclass, level: Level) -> Vec<Grant> {
    subclass_modifications(subclass)
        .map(|mods| mods.grants(level))
        .unwrap_or_default()
}
