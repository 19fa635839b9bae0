// --- File: crates/planetwatcher_common/src/models.rs ---

use planetwatcher_config::{DeviceConfig, DeviceIdiom, RuntimePlatform};
use serde::{Deserialize, Serialize};

/// What the client knows about the device it runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    pub idiom: DeviceIdiom,
    pub platform: RuntimePlatform,
}

impl DeviceInfo {
    pub fn new(idiom: DeviceIdiom, platform: RuntimePlatform) -> Self {
        Self { idiom, platform }
    }

    /// Detects the device, letting configured values take precedence.
    ///
    /// Android and iOS builds are assumed to be phones unless configured
    /// otherwise; every other target reports a desktop.
    pub fn detect(config: &DeviceConfig) -> Self {
        let platform = config.platform.unwrap_or_else(RuntimePlatform::current);
        let idiom = config.idiom.unwrap_or(match platform {
            RuntimePlatform::Android | RuntimePlatform::Ios => DeviceIdiom::Phone,
            RuntimePlatform::Other => DeviceIdiom::Desktop,
        });
        Self { idiom, platform }
    }
}

/// Descriptive platform flags sent alongside a token.
///
/// Anything that is not a phone counts as a tablet, so exactly one of
/// `is_phone`/`is_tablet` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetails {
    pub is_phone: bool,
    pub is_tablet: bool,
    pub is_android: bool,
    pub is_ios: bool,
}

impl From<DeviceInfo> for PlatformDetails {
    fn from(device: DeviceInfo) -> Self {
        let is_phone = device.idiom == DeviceIdiom::Phone;
        Self {
            is_phone,
            is_tablet: !is_phone,
            is_android: device.platform == RuntimePlatform::Android,
            is_ios: device.platform == RuntimePlatform::Ios,
        }
    }
}

/// Payload for both the registration check and the registration itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRegistration {
    pub token: String,
    pub platform_details: PlatformDetails,
}

impl TokenRegistration {
    pub fn new(token: impl Into<String>, device: DeviceInfo) -> Self {
        Self {
            token: token.into(),
            platform_details: device.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registration_wire_shape() {
        let registration = TokenRegistration::new(
            "abc123",
            DeviceInfo::new(DeviceIdiom::Phone, RuntimePlatform::Android),
        );

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            value,
            json!({
                "token": "abc123",
                "platformDetails": {
                    "isPhone": true,
                    "isTablet": false,
                    "isAndroid": true,
                    "isIos": false
                }
            })
        );
    }

    #[test]
    fn test_non_phone_idioms_count_as_tablet() {
        for idiom in [DeviceIdiom::Tablet, DeviceIdiom::Desktop, DeviceIdiom::Unsupported] {
            let details = PlatformDetails::from(DeviceInfo::new(idiom, RuntimePlatform::Ios));
            assert!(!details.is_phone);
            assert!(details.is_tablet);
            assert!(details.is_ios);
            assert!(!details.is_android);
        }
    }

    #[test]
    fn test_other_platform_sets_neither_os_flag() {
        let details = PlatformDetails::from(DeviceInfo::new(DeviceIdiom::Phone, RuntimePlatform::Other));
        assert!(!details.is_android);
        assert!(!details.is_ios);
    }

    #[test]
    fn test_detect_prefers_configured_values() {
        let config = DeviceConfig {
            idiom: Some(DeviceIdiom::Tablet),
            platform: Some(RuntimePlatform::Android),
        };
        let device = DeviceInfo::detect(&config);
        assert_eq!(device, DeviceInfo::new(DeviceIdiom::Tablet, RuntimePlatform::Android));
    }

    #[test]
    fn test_detect_defaults_idiom_from_platform() {
        let config = DeviceConfig {
            idiom: None,
            platform: Some(RuntimePlatform::Ios),
        };
        assert_eq!(DeviceInfo::detect(&config).idiom, DeviceIdiom::Phone);

        let config = DeviceConfig {
            idiom: None,
            platform: Some(RuntimePlatform::Other),
        };
        assert_eq!(DeviceInfo::detect(&config).idiom, DeviceIdiom::Desktop);
    }
}
