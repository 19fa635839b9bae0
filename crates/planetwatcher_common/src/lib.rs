// --- File: crates/planetwatcher_common/src/lib.rs ---

//! Shared building blocks of the Planetwatcher client: the HTTP connector,
//! endpoint construction, wire models, errors and logging.

pub mod endpoints; // Backend URL construction
pub mod error;     // Error handling
pub mod http;      // HTTP transport
pub mod logging;   // Logging utilities
pub mod models;    // Wire and device models

pub use endpoints::Endpoints;
pub use error::{config_error, PlanetwatcherError};
pub use http::{client::Connector, is_success};
pub use models::{DeviceInfo, PlatformDetails, TokenRegistration};

// Config types that appear in this crate's public API
pub use planetwatcher_config::{DeviceIdiom, RuntimePlatform};
