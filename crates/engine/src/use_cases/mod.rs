//! Use cases exposed by the engine.

pub mod choices;
