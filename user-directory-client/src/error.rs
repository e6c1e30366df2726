use serde::{Deserialize, Serialize};

/// Unified error type for all user-directory API calls.
///
/// Transport failures and non-2xx statuses are collapsed into this single
/// taxonomy so callers can report one condition per call. None of the variants
/// is retried by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused,
    /// interrupted body, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status other than 404.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        detail: String,
    },

    /// The addressed user record does not exist (HTTP 404).
    NotFound {
        /// Identifier that was requested.
        record_id: u64,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::HttpStatus { status, detail } => {
                if detail.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {detail}")
                }
            }
            Self::NotFound { record_id } => write!(f, "User {record_id} not found"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
