//! Generic HTTP client tools
//!
//! Shared request plumbing for the DNS gateway and the identity call:
//! sending, logging, status checking and JSON decoding.
//!
//! Requests are sent exactly once. A timeout or connection failure is
//! returned to the caller like any other failure.

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ProviderConfig;
use crate::error::{ErrorBody, ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Status, headers and body text of a completed request.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Value of a header as UTF-8, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &ProviderConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ProviderError::InvalidConfig {
            detail: format!("failed to build HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - any status, the caller decides what counts as success
    /// * `Err(ProviderError::Timeout | ProviderError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<HttpResponse> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Turn a non-2xx response into [`ProviderError::ApiFailure`].
    pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }

        let error = ProviderError::ApiFailure {
            status: response.status,
            body: ErrorBody::parse(&response.body),
        };
        if error.is_expected() {
            log::warn!("API error: {error}");
        } else {
            log::error!("API error: {error}");
        }
        Err(error)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
