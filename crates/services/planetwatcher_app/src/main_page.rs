//! The login screen.
//!
//! Logging in makes sure the push token is registered with the backend and
//! then moves to the home screen. Registration problems never keep the user
//! on the login screen.

use planetwatcher_common::Endpoints;
use planetwatcher_registration::RegistrationService;
use std::sync::Arc;
use tracing::{info, warn};

use crate::navigation::{Navigator, Screen};
use crate::token_store::NotificationTokenStore;

pub struct MainPage {
    registration: Arc<dyn RegistrationService>,
    tokens: Arc<NotificationTokenStore>,
    endpoints: Arc<Endpoints>,
}

impl MainPage {
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        tokens: Arc<NotificationTokenStore>,
        endpoints: Arc<Endpoints>,
    ) -> Self {
        Self {
            registration,
            tokens,
            endpoints,
        }
    }

    /// Status line shown under the login button.
    pub fn connection_text(&self) -> String {
        format!("Connecting to: {}", self.endpoints.base_url())
    }

    /// Login action: check the token, register it if unknown, go home.
    pub async fn login(&self, navigator: &mut Navigator) {
        match self.tokens.token() {
            Some(token) => {
                if !self.registration.is_registered(&token).await {
                    info!("notification token not registered yet, registering");
                    self.registration.register_token(&token).await;
                }
            }
            None => warn!("no notification token available, skipping registration"),
        }

        navigator.push(Screen::Home);
    }

    /// Connection settings action: applies `url` as the endpoint override
    /// (empty clears it) and opens the settings screen.
    pub fn connection_settings(&self, navigator: &mut Navigator, url: &str) {
        self.endpoints.set_user_api(url);
        match self.endpoints.user_api() {
            Some(url) => info!("all requests now go to {}", url),
            None => info!("endpoint override cleared"),
        }
        navigator.push(Screen::ConnectionSettings);
    }
}

#[cfg(test)]
pub mod mock {
    use planetwatcher_registration::{BoxFuture, RegistrationService};
    use std::sync::Mutex;

    /// Registration service that answers from a flag and records calls.
    #[derive(Default)]
    pub struct MockRegistrationService {
        pub registered: bool,
        pub checked: Mutex<Vec<String>>,
        pub registrations: Mutex<Vec<String>>,
    }

    impl MockRegistrationService {
        pub fn new(registered: bool) -> Self {
            Self {
                registered,
                ..Self::default()
            }
        }
    }

    impl RegistrationService for MockRegistrationService {
        fn is_registered<'a>(&'a self, token: &'a str) -> BoxFuture<'a, bool> {
            self.checked.lock().unwrap().push(token.to_string());
            let registered = self.registered;
            Box::pin(async move { registered })
        }

        fn register_token<'a>(&'a self, token: &'a str) -> BoxFuture<'a, ()> {
            self.registrations.lock().unwrap().push(token.to_string());
            Box::pin(async {})
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRegistrationService;
    use super::*;

    fn page(
        service: Arc<MockRegistrationService>,
        token: Option<&str>,
    ) -> (MainPage, Arc<Endpoints>) {
        let endpoints = Arc::new(Endpoints::new("http://192.168.1.31:80"));
        let tokens = Arc::new(NotificationTokenStore::new(token.map(str::to_string)));
        (MainPage::new(service, tokens, endpoints.clone()), endpoints)
    }

    #[test]
    fn test_connection_text() {
        let (page, _) = page(Arc::new(MockRegistrationService::new(true)), None);
        assert_eq!(page.connection_text(), "Connecting to: http://192.168.1.31:80");
    }

    #[tokio::test]
    async fn test_registered_token_is_not_registered_again() {
        let service = Arc::new(MockRegistrationService::new(true));
        let (page, _) = page(service.clone(), Some("abc123"));
        let mut navigator = Navigator::new();

        page.login(&mut navigator).await;

        assert_eq!(*service.checked.lock().unwrap(), vec!["abc123".to_string()]);
        assert!(service.registrations.lock().unwrap().is_empty());
        assert_eq!(navigator.current(), Screen::Home);
    }

    #[tokio::test]
    async fn test_unregistered_token_gets_registered() {
        let service = Arc::new(MockRegistrationService::new(false));
        let (page, _) = page(service.clone(), Some("abc123"));
        let mut navigator = Navigator::new();

        page.login(&mut navigator).await;

        assert_eq!(*service.registrations.lock().unwrap(), vec!["abc123".to_string()]);
        assert_eq!(navigator.current(), Screen::Home);
    }

    #[tokio::test]
    async fn test_missing_token_still_navigates_home() {
        let service = Arc::new(MockRegistrationService::new(false));
        let (page, _) = page(service.clone(), None);
        let mut navigator = Navigator::new();

        page.login(&mut navigator).await;

        assert!(service.checked.lock().unwrap().is_empty());
        assert!(service.registrations.lock().unwrap().is_empty());
        assert_eq!(navigator.current(), Screen::Home);
    }

    #[tokio::test]
    async fn test_login_uses_refreshed_token() {
        let service = Arc::new(MockRegistrationService::new(true));
        let endpoints = Arc::new(Endpoints::new("http://base"));
        let tokens = Arc::new(NotificationTokenStore::new(Some("old".to_string())));
        let page = MainPage::new(service.clone(), tokens.clone(), endpoints);

        tokens.on_token_refresh("new");
        page.login(&mut Navigator::new()).await;

        assert_eq!(*service.checked.lock().unwrap(), vec!["new".to_string()]);
    }

    #[test]
    fn test_connection_settings_sets_override() {
        let (page, endpoints) = page(Arc::new(MockRegistrationService::new(true)), None);
        let mut navigator = Navigator::new();

        page.connection_settings(&mut navigator, "http://10.0.2.2:8080");
        assert_eq!(navigator.current(), Screen::ConnectionSettings);
        assert_eq!(endpoints.check_registration(), "http://10.0.2.2:8080");

        page.connection_settings(&mut navigator, "");
        assert!(endpoints.user_api().is_none());
        assert_eq!(
            endpoints.check_registration(),
            "http://192.168.1.31:80/check-registration"
        );
    }
}
