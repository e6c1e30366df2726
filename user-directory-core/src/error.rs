//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::ValidationError;

// Re-export library error type
pub use user_directory_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Request to the user directory failed
    #[error("{0}")]
    Network(#[from] ClientError),

    /// Draft rejected before any request was made
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Network(e) => e.is_expected(),
        }
    }

    /// Log this error at the level [`is_expected`](Self::is_expected) calls for.
    pub fn log(&self, operation: &str) {
        if self.is_expected() {
            log::warn!("{operation}: {self}");
        } else {
            log::error!("{operation}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_expected() {
        let e = CoreError::from(ValidationError::NameRequired);
        assert!(e.is_expected());
        assert_eq!(e.to_string(), "Name is required");
    }

    #[test]
    fn network_defers_to_client_classification() {
        assert!(CoreError::from(ClientError::NotFound { record_id: 3 }).is_expected());
        assert!(
            !CoreError::from(ClientError::Timeout {
                detail: "30s".to_string()
            })
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_and_details() {
        let e = CoreError::from(ValidationError::PhoneRequired);
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["code"], "Validation");
        assert_eq!(value["details"], "PhoneRequired");
    }
}
