//! Chargen Protocol - wire types between a game service and the choice engine
//!
//! 1. **No business logic** - pure request/response envelopes
//! 2. **Vocabulary as strings** - ids are parsed by the engine so unknown ids
//!    come back as `not_found` instead of failing deserialisation

pub mod requests;
pub mod responses;

pub use requests::ChoiceRequest;
pub use responses::{ErrorCode, ResponseResult};
