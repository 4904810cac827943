//! HTTP client shared by upstream adapters
//!
//! Every request carries the configured browser-like User-Agent and
//! `Accept: application/json`, and is bounded by a per-call timeout.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

const ERROR_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    user_agent: String,
}

impl UpstreamClient {
    pub fn new(user_agent: &str) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                AppError::InvalidInput(format!("Invalid user agent '{}': {}", user_agent, e))
            })?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Timeouts map to `UpstreamTimeout`, non-2xx statuses to `ApiError` and
    /// undecodable bodies to `SerializationError`.
    pub async fn get_json<T>(&self, site: &str, url: &str, timeout: Duration) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::UpstreamTimeout(format!("{} did not answer within {:?}", site, timeout))
                } else {
                    AppError::from(e)
                }
            })?;

        let status = response.status();
        LogContext::api_call(
            site,
            url,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "{} returned HTTP {}",
                site, status
            )));
        }

        self.parse_response(site, response).await
    }

    async fn parse_response<T>(&self, site: &str, response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::UpstreamTimeout(format!("{} body timed out: {}", site, e))
            } else {
                AppError::SerializationError(format!("Failed to read {} response: {}", site, e))
            }
        })?;

        serde_json::from_str(&body).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                site,
                e,
                preview(&body)
            ))
        })
    }
}

/// First characters of a body for error messages, cut on a char boundary
fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DEFAULT_USER_AGENT;

    #[test]
    fn test_client_creation() {
        let client = UpstreamClient::new(DEFAULT_USER_AGENT).unwrap();
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let result = UpstreamClient::new("bad\nagent");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_preview_truncates_multibyte_text() {
        let body = "分".repeat(300);
        let cut = preview(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), ERROR_PREVIEW_CHARS + 3);
        assert_eq!(preview("short"), "short");
    }
}
