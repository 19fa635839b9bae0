//! Headless screen flow of the Planetwatcher client.
//!
//! The app starts on the login screen. Logging in checks whether the push
//! notification token is registered with the backend, registers it when it
//! is not, and always ends on the home screen.

pub mod app;
pub mod main_page;
pub mod navigation;
pub mod token_store;

pub use app::App;
pub use main_page::MainPage;
pub use navigation::{Navigator, Screen};
pub use token_store::NotificationTokenStore;
