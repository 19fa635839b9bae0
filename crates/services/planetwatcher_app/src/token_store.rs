//! Holder for the push notification token handed out by the push provider.

use std::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
pub struct NotificationTokenStore {
    token: RwLock<Option<String>>,
}

impl NotificationTokenStore {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            token: RwLock::new(initial.filter(|t| !t.is_empty())),
        }
    }

    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Called when the push provider issues a new token.
    pub fn on_token_refresh(&self, token: impl Into<String>) {
        let token = token.into();
        info!("notification token refreshed");
        let value = if token.is_empty() { None } else { Some(token) };
        match self.token.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}
