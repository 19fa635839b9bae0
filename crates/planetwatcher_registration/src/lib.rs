//! Push notification token registration for the Planetwatcher client.
//!
//! The backend exposes two endpoints taking the same payload:
//!
//! - `POST /check-registration` - success status when the token is known
//! - `POST /register-device` - associates the token with this installation
//!
//! `BackendService` talks to them through a `Connector`. Callers depend on the
//! `RegistrationService` trait so the screen flow can be driven without a
//! backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use planetwatcher_common::{Connector, DeviceInfo, Endpoints, RuntimePlatform};
//! use planetwatcher_config::DeviceIdiom;
//! use planetwatcher_registration::{BackendService, RegistrationService};
//! use std::sync::Arc;
//!
//! async fn register() -> Result<(), planetwatcher_common::PlanetwatcherError> {
//!     let connector = Connector::new(RuntimePlatform::Android)?;
//!     let endpoints = Arc::new(Endpoints::new("http://192.168.1.31:80"));
//!     let device = DeviceInfo::new(DeviceIdiom::Phone, RuntimePlatform::Android);
//!     let service = BackendService::new(connector, endpoints, device);
//!
//!     if !service.is_registered("device-token").await {
//!         service.register_token("device-token").await;
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod service;

pub use backend::BackendService;
pub use service::{BoxFuture, RegistrationService};
