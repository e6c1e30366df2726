use serde::Serialize;
use thiserror::Error;

use super::FieldPath;

/// First rule a draft breaks, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Phone is required")]
    PhoneRequired,
}

impl ValidationError {
    /// Field the rule applies to.
    pub fn field(self) -> FieldPath {
        match self {
            Self::NameRequired => FieldPath::Name,
            Self::EmailRequired | Self::InvalidEmail => FieldPath::Email,
            Self::PhoneRequired => FieldPath::Phone,
        }
    }
}
