//! 用户目录 HTTP 请求方法

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;

use super::HttpUserDirectory;

impl HttpUserDirectory {
    /// 执行 GET 请求
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        record_id: Option<u64>,
    ) -> Result<T> {
        let (status, text) =
            HttpUtils::execute_request(self.client.get(url), "GET", url).await?;
        HttpUtils::ensure_success(status, &text, record_id)?;
        HttpUtils::parse_json(&text)
    }

    /// 执行带 JSON 请求体的 POST / PUT 请求
    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: &B,
        record_id: Option<u64>,
    ) -> Result<T> {
        let payload = serde_json::to_vec(body).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })?;

        let builder = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);

        let (status, text) = HttpUtils::execute_request(builder, method.as_str(), url).await?;
        HttpUtils::ensure_success(status, &text, record_id)?;
        HttpUtils::parse_json(&text)
    }

    /// 执行 DELETE 请求（忽略响应体）
    pub(crate) async fn delete(&self, url: &str, record_id: u64) -> Result<()> {
        let (status, text) =
            HttpUtils::execute_request(self.client.delete(url), "DELETE", url).await?;
        HttpUtils::ensure_success(status, &text, Some(record_id))
    }
}
