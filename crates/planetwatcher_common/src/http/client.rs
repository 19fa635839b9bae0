// --- File: crates/planetwatcher_common/src/http/client.rs ---
//! Thin JSON transport over a shared `reqwest::Client`.
//!
//! Every verb comes in two flavours: `try_*` returns the error, the plain
//! form logs it and yields `None`. A non-success status is still a response;
//! only transport failures and timeouts become `None`.

use planetwatcher_config::RuntimePlatform;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{config_error, PlanetwatcherError};
use crate::logging::log_and_discard;

/// HTTP connector for the Planetwatcher API.
///
/// Clones share the underlying client, and with it the connection pool and
/// cookie jar.
#[derive(Debug, Clone)]
pub struct Connector {
    client: Client,
}

/// User agent sent with every request.
pub fn user_agent(platform: RuntimePlatform) -> String {
    format!("Planetwatcher Mobile Application - {}", platform.as_str())
}

impl Connector {
    /// Builds a connector with a cookie store and the application user agent.
    pub fn new(platform: RuntimePlatform) -> Result<Self, PlanetwatcherError> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(user_agent(platform))
            .build()
            .map_err(|e| config_error(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends a GET request.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL, usually taken from `Endpoints`
    /// * `timeout` - Abandon the request once this elapses
    pub async fn get(&self, endpoint: &str, timeout: Option<Duration>) -> Option<Response> {
        log_and_discard(
            self.try_get(endpoint, timeout).await,
            "Exception sending GET request",
        )
    }

    /// Sends a POST request with `body` serialized as JSON.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Option<Response> {
        log_and_discard(
            self.try_post(endpoint, body, timeout).await,
            "Exception sending POST request",
        )
    }

    /// Sends a PUT request with `body` serialized as JSON.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Option<Response> {
        log_and_discard(
            self.try_put(endpoint, body, timeout).await,
            "Exception sending PUT request",
        )
    }

    /// Sends a DELETE request carrying `body` as JSON.
    pub async fn delete<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Option<Response> {
        log_and_discard(
            self.try_delete(endpoint, body, timeout).await,
            "Exception sending DELETE request",
        )
    }

    /// GETs `endpoint` and returns the body text.
    ///
    /// The status code is not exposed, so a non-success status is treated
    /// as a failure. No timeout can be applied.
    pub async fn get_string(&self, endpoint: &str) -> Option<String> {
        log_and_discard(
            self.try_get_string(endpoint).await,
            "Exception sending GET request",
        )
    }

    pub async fn try_get(
        &self,
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<Response, PlanetwatcherError> {
        self.send(self.client.get(endpoint), endpoint, timeout).await
    }

    pub async fn try_post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Result<Response, PlanetwatcherError> {
        self.send(self.client.post(endpoint).json(body), endpoint, timeout)
            .await
    }

    pub async fn try_put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Result<Response, PlanetwatcherError> {
        self.send(self.client.put(endpoint).json(body), endpoint, timeout)
            .await
    }

    pub async fn try_delete<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Result<Response, PlanetwatcherError> {
        self.send(self.client.delete(endpoint).json(body), endpoint, timeout)
            .await
    }

    pub async fn try_get_string(&self, endpoint: &str) -> Result<String, PlanetwatcherError> {
        let response = self.try_get(endpoint, None).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlanetwatcherError::StatusError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }

    /// The timeout bounds the whole exchange, body included: reqwest's
    /// per-request timeout keeps running while the body is read, and
    /// dropping the send future on expiry cancels the request in flight.
    async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<Response, PlanetwatcherError> {
        debug!("sending request to {} (timeout: {:?})", endpoint, timeout);
        let response = match timeout {
            None => request.send().await?,
            Some(limit) => {
                match tokio::time::timeout(limit, request.timeout(limit).send()).await {
                    Ok(Ok(response)) => response,
                    Ok(Err(err)) if !err.is_timeout() => return Err(err.into()),
                    // Either deadline may fire first; both mean the same thing
                    _ => {
                        return Err(PlanetwatcherError::TimeoutError {
                            endpoint: endpoint.to_string(),
                            timeout: limit,
                        })
                    }
                }
            }
        };
        debug!("{} answered with {}", endpoint, response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_platform() {
        assert_eq!(
            user_agent(RuntimePlatform::Android),
            "Planetwatcher Mobile Application - Android"
        );
        assert_eq!(
            user_agent(RuntimePlatform::Ios),
            "Planetwatcher Mobile Application - iOS"
        );
    }
}
