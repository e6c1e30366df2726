//! Generic HTTP client tools
//!
//! Shared request plumbing for [`HttpUserDirectory`](crate::HttpUserDirectory):
//! sending, logging, status mapping and JSON decoding.
//!
//! Requests are sent exactly once. Failures are reported to the caller as a
//! single [`ClientError`] and never retried.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(timeout_secs: u64) -> Result<Client, ClientError> {
    Client::builder()
        .user_agent(concat!("user-directory/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(
            DEFAULT_CONNECT_TIMEOUT_SECS.min(timeout_secs.max(1)),
        ))
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .build()
        .map_err(|e| ClientError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the server answered, whatever the status
    /// * `Err(ClientError::Timeout | ClientError::NetworkError)` - no usable answer
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {url} -> {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Map a non-2xx status to an error.
    ///
    /// 404 becomes [`ClientError::NotFound`] when the request addressed a single
    /// record (`record_id` is `Some`); every other non-2xx status becomes
    /// [`ClientError::HttpStatus`].
    pub fn ensure_success(
        status_code: u16,
        response_text: &str,
        record_id: Option<u64>,
    ) -> Result<(), ClientError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }

        if status_code == 404 {
            if let Some(record_id) = record_id {
                return Err(ClientError::NotFound { record_id });
            }
        }

        Err(ClientError::HttpStatus {
            status: status_code,
            detail: truncate_for_log(response_text.trim()),
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ensure_success ----

    #[test]
    fn success_range_accepted() {
        assert!(HttpUtils::ensure_success(200, "", None).is_ok());
        assert!(HttpUtils::ensure_success(201, "{}", None).is_ok());
        assert!(HttpUtils::ensure_success(204, "", Some(1)).is_ok());
    }

    #[test]
    fn not_found_on_keyed_request() {
        let result = HttpUtils::ensure_success(404, "{}", Some(99));
        assert_eq!(result, Err(ClientError::NotFound { record_id: 99 }));
    }

    #[test]
    fn not_found_on_collection_is_http_status() {
        let result = HttpUtils::ensure_success(404, "Not Found", None);
        assert_eq!(
            result,
            Err(ClientError::HttpStatus {
                status: 404,
                detail: "Not Found".to_string(),
            })
        );
    }

    #[test]
    fn server_error_is_http_status() {
        let result = HttpUtils::ensure_success(500, "  boom \n", Some(1));
        assert_eq!(
            result,
            Err(ClientError::HttpStatus {
                status: 500,
                detail: "boom".to_string(),
            })
        );
    }

    #[test]
    fn redirect_is_not_success() {
        assert!(matches!(
            HttpUtils::ensure_success(304, "", None),
            Err(ClientError::HttpStatus { status: 304, .. })
        ));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ClientError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- create_http_client ----

    #[test]
    fn client_builds_with_zero_timeout() {
        assert!(create_http_client(0).is_ok());
    }
}
