//! HTTP implementation of `RegistrationService`.

use planetwatcher_common::{
    is_success, Connector, DeviceInfo, Endpoints, PlanetwatcherError, TokenRegistration,
};
use planetwatcher_config::AppConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::service::{BoxFuture, RegistrationService};

/// Registration client for the Planetwatcher backend.
#[derive(Debug, Clone)]
pub struct BackendService {
    connector: Connector,
    endpoints: Arc<Endpoints>,
    device: DeviceInfo,
    timeout: Option<Duration>,
}

impl BackendService {
    pub fn new(connector: Connector, endpoints: Arc<Endpoints>, device: DeviceInfo) -> Self {
        Self {
            connector,
            endpoints,
            device,
            timeout: None,
        }
    }

    /// Builds the service from configuration, sharing `connector` and
    /// `endpoints` with the caller.
    pub fn from_config(config: &AppConfig, connector: Connector, endpoints: Arc<Endpoints>) -> Self {
        let device = DeviceInfo::detect(&config.device);
        Self::new(connector, endpoints, device)
            .with_timeout(config.api.timeout_ms.map(Duration::from_millis))
    }

    /// Applies `timeout` to every registration request.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoints(&self) -> &Arc<Endpoints> {
        &self.endpoints
    }

    /// Platform details are derived per call, never cached.
    fn registration(&self, token: &str) -> TokenRegistration {
        TokenRegistration::new(token, self.device)
    }

    async fn check_registration(&self, token: &str) -> bool {
        let endpoint = self.endpoints.check_registration();
        let response = self
            .connector
            .post(&endpoint, &self.registration(token), self.timeout)
            .await;

        if is_success(response.as_ref()) {
            debug!("token is registered with {}", endpoint);
            return true;
        }

        match response {
            Some(response) => info!(
                "registration check at {} answered {}",
                endpoint,
                response.status()
            ),
            None => warn!(
                "registration check at {} failed, treating token as unregistered",
                endpoint
            ),
        }
        false
    }

    /// The configured timeout covers the POST and reading the body.
    async fn register(&self, token: &str) {
        let endpoint = self.endpoints.register_notification_token();
        let exchange = self.post_and_read(&endpoint, token);
        let result = match self.timeout {
            None => exchange.await,
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .unwrap_or_else(|_| {
                    Err(PlanetwatcherError::TimeoutError {
                        endpoint: endpoint.clone(),
                        timeout: limit,
                    })
                }),
        };

        match result {
            Ok((status, body)) => debug!("Response from registration ({}): {}", status, body),
            Err(err) => error!("Exception during token registration: {}", err),
        }
    }

    async fn post_and_read(
        &self,
        endpoint: &str,
        token: &str,
    ) -> Result<(u16, String), PlanetwatcherError> {
        let response = self
            .connector
            .try_post(endpoint, &self.registration(token), self.timeout)
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }
}

impl RegistrationService for BackendService {
    fn is_registered<'a>(&'a self, token: &'a str) -> BoxFuture<'a, bool> {
        Box::pin(self.check_registration(token))
    }

    fn register_token<'a>(&'a self, token: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(self.register(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planetwatcher_config::{DeviceConfig, DeviceIdiom, RuntimePlatform};

    #[test]
    fn test_from_config_applies_timeout_and_device() {
        let mut config = AppConfig::default();
        config.api.timeout_ms = Some(750);
        config.device = DeviceConfig {
            idiom: Some(DeviceIdiom::Tablet),
            platform: Some(RuntimePlatform::Ios),
        };

        let connector = Connector::new(RuntimePlatform::Ios).unwrap();
        let endpoints = Arc::new(Endpoints::from_config(&config.api));
        let service = BackendService::from_config(&config, connector, endpoints);

        assert_eq!(service.timeout, Some(Duration::from_millis(750)));
        let details = service.registration("abc123").platform_details;
        assert!(details.is_tablet);
        assert!(details.is_ios);
    }
}
