use yew::prelude::*;
use web_sys::{js_sys, window};
use wasm_bindgen::JsValue;
use log::{debug, warn};

/// Coarse client platform, used to pick which store badges to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceKind {
    Ios,
    Android,
    #[default]
    Other,
}

impl DeviceKind {
    pub fn shows_ios_badge(self) -> bool {
        matches!(self, DeviceKind::Ios | DeviceKind::Other)
    }

    pub fn shows_android_badge(self) -> bool {
        matches!(self, DeviceKind::Android | DeviceKind::Other)
    }
}

/// What the client tells us about itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientSignals {
    pub user_agent: Option<String>,
    /// IE on Windows Phone exposes `window.MSStream` and claims to be an iPhone.
    pub legacy_windows_mobile: bool,
}

impl ClientSignals {
    #[cfg(test)]
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            legacy_windows_mobile: false,
        }
    }

    /// Reads the signals from the running browser. Missing APIs give the default.
    pub fn from_browser() -> Self {
        let Some(window) = window() else {
            warn!("No window available, skipping device detection");
            return Self::default();
        };

        let user_agent = match window.navigator().user_agent() {
            Ok(ua) => Some(ua),
            Err(e) => {
                warn!("Failed to read user agent: {:?}", e);
                None
            }
        };
        let legacy_windows_mobile =
            js_sys::Reflect::has(&window, &JsValue::from_str("MSStream")).unwrap_or(false);

        Self { user_agent, legacy_windows_mobile }
    }
}

pub fn detect(signals: &ClientSignals) -> DeviceKind {
    let Some(ua) = signals.user_agent.as_deref() else {
        return DeviceKind::Other;
    };

    if ua.to_ascii_lowercase().contains("android") {
        return DeviceKind::Android;
    }

    let apple = ["iPad", "iPhone", "iPod"].iter().any(|m| ua.contains(m));
    let legacy = signals.legacy_windows_mobile
        || ua.contains("Windows Phone")
        || ua.contains("IEMobile");
    if apple && !legacy {
        DeviceKind::Ios
    } else {
        DeviceKind::Other
    }
}

/// `Other` on first render, then the detected kind once the page has painted.
#[hook]
pub fn use_device_kind() -> DeviceKind {
    let device = use_state(DeviceKind::default);

    {
        let device = device.clone();
        use_effect_with_deps(
            move |_| {
                let detected = detect(&ClientSignals::from_browser());
                debug!("Detected device kind: {:?}", detected);
                device.set(detected);
                || ()
            },
            (), // Once per page load
        );
    }

    *device
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Mobile Safari/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
    const WINDOWS_PHONE_UA: &str = "Mozilla/5.0 (Mobile; Windows Phone 8.1; Android 4.0; ARM; Trident/7.0; Touch; rv:11.0; IEMobile/11.0; NOKIA; Lumia 635) like iPhone OS 7_0_3 Mac OS X AppleWebKit/537 (KHTML, like Gecko) Mobile Safari/537";

    #[test]
    fn android_user_agent() {
        assert_eq!(detect(&ClientSignals::from_user_agent(ANDROID_UA)), DeviceKind::Android);
        assert_eq!(detect(&ClientSignals::from_user_agent("some ANDROID browser")), DeviceKind::Android);
    }

    #[test]
    fn apple_user_agents() {
        assert_eq!(detect(&ClientSignals::from_user_agent(IPHONE_UA)), DeviceKind::Ios);
        assert_eq!(detect(&ClientSignals::from_user_agent(IPAD_UA)), DeviceKind::Ios);
        assert_eq!(detect(&ClientSignals::from_user_agent("Mozilla/5.0 (iPod touch)")), DeviceKind::Ios);
    }

    #[test]
    fn apple_match_is_case_sensitive() {
        assert_eq!(detect(&ClientSignals::from_user_agent("my iphone")), DeviceKind::Other);
    }

    #[test]
    fn legacy_windows_mobile_is_not_ios() {
        let signals = ClientSignals {
            user_agent: Some(IPHONE_UA.to_string()),
            legacy_windows_mobile: true,
        };
        assert_eq!(detect(&signals), DeviceKind::Other);

        let spoofing = ClientSignals::from_user_agent("Mozilla/5.0 (Windows Phone 10.0) like iPhone OS");
        assert_eq!(detect(&spoofing), DeviceKind::Other);
    }

    #[test]
    fn android_marker_wins() {
        // The Windows Phone UA mentions Android too.
        assert_eq!(detect(&ClientSignals::from_user_agent(WINDOWS_PHONE_UA)), DeviceKind::Android);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(detect(&ClientSignals::from_user_agent(DESKTOP_UA)), DeviceKind::Other);
        assert_eq!(detect(&ClientSignals::from_user_agent("")), DeviceKind::Other);
        assert_eq!(detect(&ClientSignals::default()), DeviceKind::Other);
    }

    #[test]
    fn badge_policy() {
        assert!(DeviceKind::Ios.shows_ios_badge());
        assert!(!DeviceKind::Ios.shows_android_badge());
        assert!(DeviceKind::Android.shows_android_badge());
        assert!(!DeviceKind::Android.shows_ios_badge());
        assert!(DeviceKind::Other.shows_ios_badge());
        assert!(DeviceKind::Other.shows_android_badge());
        assert_eq!(DeviceKind::default(), DeviceKind::Other);
    }
}
