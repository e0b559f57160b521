//! Chargen Engine library.
//!
//! Service facade over the character-choice rules for a game server.
//!
//! ## Structure
//!
//! - `use_cases/` - `ChoiceService`: id parsing, caching and request dispatch
//! - `infrastructure/` - the `RuleCatalog` port, its static adapter and the memo cache
//! - `config` - environment configuration
//! - `telemetry` - tracing subscriber setup

pub mod config;
pub mod infrastructure;
pub mod telemetry;
pub mod use_cases;

pub use config::EngineConfig;
pub use use_cases::choices::{ChoiceError, ChoiceService};
