//! ConoHa HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpResponse, HttpUtils};
use crate::types::DeleteOutcome;

use super::{AUTH_TOKEN_HEADER, ConohaProvider};

impl ConohaProvider {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Accept", "application/json")
            .header(AUTH_TOKEN_HEADER, &self.token)
    }

    fn serialize_body<B: Serialize>(body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            detail: e.to_string(),
        })
    }

    async fn send(&self, builder: RequestBuilder, method: &str, url: &str) -> Result<HttpResponse> {
        let response = HttpUtils::execute_request(self.authorized(builder), method, url).await?;
        HttpUtils::ensure_success(response)
    }

    /// 执行 GET 请求
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.send(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&response.body)
    }

    /// 执行 POST 请求
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let body_json = Self::serialize_body(body)?;
        log::debug!("Request Body: {body_json}");

        let builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body_json);
        let response = self.send(builder, "POST", &url).await?;
        HttpUtils::parse_json(&response.body)
    }

    /// 执行 PUT 请求
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let body_json = Self::serialize_body(body)?;
        log::debug!("Request Body: {body_json}");

        let builder = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .body(body_json);
        let response = self.send(builder, "PUT", &url).await?;
        HttpUtils::parse_json(&response.body)
    }

    /// 执行 DELETE 请求
    ///
    /// 204 and empty 2xx bodies map to [`DeleteOutcome::NoContent`].
    pub async fn delete(&self, path: &str) -> Result<DeleteOutcome> {
        let url = self.url(path);
        let response = self.send(self.client.delete(&url), "DELETE", &url).await?;

        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(DeleteOutcome::NoContent);
        }
        HttpUtils::parse_json(&response.body).map(DeleteOutcome::Body)
    }
}
