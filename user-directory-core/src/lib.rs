//! User Directory Core Library
//!
//! Platform-independent front-end logic for a REST user directory:
//! - Record form model (Form Service)
//! - Collection view with optimistic deletion (List Service)
//! - Single-record view (Detail Service)
//! - Route parsing and form mode derivation (Navigation)
//!
//! Every controller offers an async API driven by a [`UserDirectory`] and a
//! split-phase `begin_*` / `finish_*` API for event-loop surfaces that run
//! the request elsewhere and hand the result back.
//!
//! [`UserDirectory`]: user_directory_client::UserDirectory

pub mod error;
pub mod navigation;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use navigation::{FormMode, Route};
pub use services::{
    FormService, LoadRequest, ListService, SubmitRequest, UserDetailController,
};
pub use traits::ConfirmPrompt;
pub use types::{FieldPath, UnknownFieldPath, UserDraft, ValidationError};
