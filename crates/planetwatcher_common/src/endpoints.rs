//! Backend endpoint construction.
//!
//! URLs are `base_url + path` unless a user override is set, in which case
//! the override is used verbatim for every endpoint.

use planetwatcher_config::ApiConfig;
use std::sync::RwLock;

pub const CHECK_REGISTRATION_PATH: &str = "/check-registration";
pub const REGISTER_DEVICE_PATH: &str = "/register-device";

#[derive(Debug)]
pub struct Endpoints {
    base_url: String,
    user_api: RwLock<Option<String>>,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_api: RwLock::new(None),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let endpoints = Self::new(config.base_url.clone());
        if let Some(user_api) = &config.user_api {
            endpoints.set_user_api(user_api.clone());
        }
        endpoints
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The active override, if any. Empty strings are never returned.
    pub fn user_api(&self) -> Option<String> {
        match self.user_api.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Sets the override URL. An empty string clears it.
    pub fn set_user_api(&self, url: impl Into<String>) {
        let url = url.into();
        let value = if url.is_empty() { None } else { Some(url) };
        match self.user_api.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    pub fn clear_user_api(&self) {
        self.set_user_api(String::new());
    }

    pub fn check_registration(&self) -> String {
        self.api(CHECK_REGISTRATION_PATH)
    }

    pub fn register_notification_token(&self) -> String {
        self.api(REGISTER_DEVICE_PATH)
    }

    fn api(&self, path: &str) -> String {
        self.user_api()
            .unwrap_or_else(|| format!("{}{}", self.base_url, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_concatenation() {
        let endpoints = Endpoints::new("http://192.168.1.31:80");
        assert_eq!(
            endpoints.check_registration(),
            "http://192.168.1.31:80/check-registration"
        );
        assert_eq!(
            endpoints.register_notification_token(),
            "http://192.168.1.31:80/register-device"
        );
    }

    #[test]
    fn test_override_replaces_every_endpoint() {
        let endpoints = Endpoints::new("http://192.168.1.31:80");
        endpoints.set_user_api("http://override.local/api");

        assert_eq!(endpoints.check_registration(), "http://override.local/api");
        assert_eq!(endpoints.register_notification_token(), "http://override.local/api");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let endpoints = Endpoints::new("http://base");
        endpoints.set_user_api("http://override");
        endpoints.set_user_api("");

        assert!(endpoints.user_api().is_none());
        assert_eq!(endpoints.check_registration(), "http://base/check-registration");

        endpoints.set_user_api("http://override");
        endpoints.clear_user_api();
        assert_eq!(endpoints.register_notification_token(), "http://base/register-device");
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            base_url: "http://configured".to_string(),
            user_api: Some(String::new()),
            timeout_ms: None,
        };
        let endpoints = Endpoints::from_config(&config);
        assert_eq!(endpoints.base_url(), "http://configured");
        assert!(endpoints.user_api().is_none());

        let config = ApiConfig {
            user_api: Some("http://user".to_string()),
            ..config
        };
        assert_eq!(Endpoints::from_config(&config).check_registration(), "http://user");
    }
}
