//! Application layer
//!
//! Form actions that orchestrate validation, persistence and the follow-up
//! side effect (cache invalidation, navigation or an error state).

pub mod auth;
pub mod form_data;
pub mod invoice;
pub mod outcome;

pub use form_data::FormData;
pub use outcome::{ActionOutcome, ActionState};
