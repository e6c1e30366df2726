//! Surface abstraction trait definition

mod confirm_prompt;

pub use confirm_prompt::{ConfirmPrompt, DELETE_CONFIRMATION};
