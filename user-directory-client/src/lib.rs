//! # user-directory-client
//!
//! Typed async client for a REST user directory exposing a `/users`
//! collection (by default the public `https://jsonplaceholder.typicode.com`).
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ```toml
//! [dependencies]
//! user-directory-client = { version = "0.1", default-features = false, features = ["native-tls"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use user_directory_client::{ClientConfig, HttpUserDirectory, UserDirectory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = HttpUserDirectory::new(&ClientConfig::default())?;
//!
//!     for user in directory.list_records().await? {
//!         println!("{} <{}>", user.label(), user.email);
//!     }
//!
//!     let user = directory.get_record(1).await?;
//!     println!("{}", user.phone);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError) and reports a
//! single failure per call:
//!
//! - [`ClientError::NotFound`]: the addressed record does not exist (404)
//! - [`ClientError::HttpStatus`]: any other non-2xx answer
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`]: no usable answer
//! - [`ClientError::ParseError`]: the body is not a user record
//!
//! Requests are never retried.

mod directory;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export the directory trait and its HTTP implementation
pub use directory::HttpUserDirectory;
pub use traits::UserDirectory;

// Re-export types
pub use types::{
    Address, ClientConfig, Company, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, Geo, UserRecord,
};

// Re-export utils module
pub use utils::log_sanitizer;
