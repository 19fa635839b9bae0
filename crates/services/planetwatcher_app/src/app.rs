//! Application wiring: one connector, one set of endpoints and one token
//! store shared by every screen.

use planetwatcher_common::{Connector, DeviceInfo, Endpoints, PlanetwatcherError};
use planetwatcher_config::AppConfig;
use planetwatcher_registration::{BackendService, RegistrationService};
use std::sync::Arc;
use tracing::info;

use crate::main_page::MainPage;
use crate::navigation::{Navigator, Screen};
use crate::token_store::NotificationTokenStore;

pub struct App {
    pub tokens: Arc<NotificationTokenStore>,
    pub endpoints: Arc<Endpoints>,
    pub main_page: MainPage,
    pub navigator: Navigator,
}

impl App {
    /// Builds the application against the real backend.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlanetwatcherError> {
        let device = DeviceInfo::detect(&config.device);
        let connector = Connector::new(device.platform)?;
        let endpoints = Arc::new(Endpoints::from_config(&config.api));
        let registration = BackendService::from_config(config, connector, endpoints.clone());

        info!(
            "device detected as {:?} on {}",
            device.idiom,
            device.platform.as_str()
        );

        Ok(Self::with_registration(
            config,
            Arc::new(registration),
            endpoints,
        ))
    }

    /// Builds the application around any registration service.
    pub fn with_registration(
        config: &AppConfig,
        registration: Arc<dyn RegistrationService>,
        endpoints: Arc<Endpoints>,
    ) -> Self {
        let tokens = Arc::new(NotificationTokenStore::new(config.notification.token.clone()));
        let main_page = MainPage::new(registration, tokens.clone(), endpoints.clone());

        Self {
            tokens,
            endpoints,
            main_page,
            navigator: Navigator::new(),
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Triggers the login button on the main page.
    pub async fn login(&mut self) -> Screen {
        self.main_page.login(&mut self.navigator).await;
        self.navigator.current()
    }
}
