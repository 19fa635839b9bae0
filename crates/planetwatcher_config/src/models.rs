// --- File: crates/planetwatcher_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Base URL of the Planetwatcher backend when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.31:80";

// --- Device Introspection ---

/// Form factor of the device running the client.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceIdiom {
    Phone,
    Tablet,
    Desktop,
    Unsupported,
}

/// Operating system family the client is running on.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimePlatform {
    Android,
    Ios,
    Other,
}

impl RuntimePlatform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            RuntimePlatform::Android
        } else if cfg!(target_os = "ios") {
            RuntimePlatform::Ios
        } else {
            RuntimePlatform::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimePlatform::Android => "Android",
            RuntimePlatform::Ios => "iOS",
            RuntimePlatform::Other => "Other",
        }
    }
}

// --- Backend API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Replaces every endpoint URL when set and non-empty.
    #[serde(default)]
    pub user_api: Option<String>,
    /// Per-request timeout for registration calls, in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_api: None,
            timeout_ms: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// --- Device Config ---
// Both fields fall back to runtime detection when absent.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DeviceConfig {
    #[serde(default)]
    pub idiom: Option<DeviceIdiom>,
    #[serde(default)]
    pub platform: Option<RuntimePlatform>,
}

// --- Push Notification Config ---
// The token is normally handed over by the push provider; this seeds it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NotificationConfig {
    #[serde(default)]
    pub token: Option<String>,
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
