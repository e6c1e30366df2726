//! HTTP implementation of [`UserDirectory`](crate::UserDirectory)

mod api;
mod http;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::types::ClientConfig;

/// Path of the user collection below the base URL.
pub(crate) const USERS_PATH: &str = "/users";

/// User directory backed by a REST `/users` resource.
#[derive(Debug)]
pub struct HttpUserDirectory {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpUserDirectory {
    /// Build a directory client from `config`.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed
    /// (for instance when no TLS backend is available).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config.timeout_secs)?,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// Base URL requests are sent to, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}{USERS_PATH}", self.base_url)
    }

    pub(crate) fn record_url(&self, record_id: u64) -> String {
        format!("{}{USERS_PATH}/{record_id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_normalized_base() {
        let directory = HttpUserDirectory::new(&ClientConfig::new("http://127.0.0.1:9/")).unwrap();
        assert_eq!(directory.base_url(), "http://127.0.0.1:9");
        assert_eq!(directory.collection_url(), "http://127.0.0.1:9/users");
        assert_eq!(directory.record_url(3), "http://127.0.0.1:9/users/3");
    }
}
