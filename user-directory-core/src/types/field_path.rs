use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of an editable leaf in a [`UserDraft`](super::UserDraft).
///
/// Either a top-level field (`name`) or `group.field` with exactly one level
/// of nesting (`address.city`). Only the fields the form exposes are
/// addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldPath {
    Name,
    Username,
    Email,
    Phone,
    Website,
    AddressStreet,
    AddressSuite,
    AddressCity,
    AddressZipcode,
    CompanyName,
}

/// Rejected field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field path: {0}")]
pub struct UnknownFieldPath(pub String);

impl FieldPath {
    /// All editable fields, in form order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Website,
        Self::AddressStreet,
        Self::AddressSuite,
        Self::AddressCity,
        Self::AddressZipcode,
        Self::CompanyName,
    ];

    /// Dotted path as used on the wire and in `set_field`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::AddressStreet => "address.street",
            Self::AddressSuite => "address.suite",
            Self::AddressCity => "address.city",
            Self::AddressZipcode => "address.zipcode",
            Self::CompanyName => "company.name",
        }
    }

    /// Whether the form requires a value for this field.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Phone)
    }

    /// Position in [`FieldPath::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = UnknownFieldPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFieldPath(s.to_string()))
    }
}

impl TryFrom<String> for FieldPath {
    type Error = UnknownFieldPath;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.as_str().to_string()
    }
}
