//! Device profile captured once per resolution call.

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, DriverResult};

/// Platform family of the automation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android native app (UiAutomator2)
    Android,
    /// iOS native app (XCUITest)
    Ios,
    /// Desktop or mobile browser
    Web,
}

impl Platform {
    /// Android hides invisible elements from the element tree unless the
    /// `allowInvisibleElements` setting is enabled.
    pub fn requires_visibility_toggle(self) -> bool {
        matches!(self, Platform::Android)
    }

    /// Only Android draws a system navigation bar into the screenshot.
    pub fn has_navigation_bar(self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
        };
        f.write_str(name)
    }
}

/// Device geometry and family flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub platform: Platform,
    /// Ratio between logical driver pixels and physical screenshot pixels
    pub dpr: f64,
    /// Width of the screenshot in physical pixels
    pub screenshot_width: f64,
    /// Logical screen height reported by the driver
    pub screen_height: f64,
    /// Device has a display cutout and a home indicator bar
    #[serde(default, alias = "isIphoneXSeries")]
    pub is_notch_series: bool,
    /// Bigger-screen notch model with a taller home indicator bar
    #[serde(default, alias = "isLargeIphoneXSeries")]
    pub is_large_notch_series: bool,
}

impl DeviceProfile {
    /// Physical screenshot height derived from the logical screen height.
    pub fn screenshot_height(&self) -> f64 {
        self.screen_height * self.dpr
    }

    /// Rejects geometry that would place chrome bars outside the screenshot.
    ///
    /// `screen_height` only positions bottom bars, so it is checked when
    /// `bottom_bars` is set.
    pub fn validate(&self, bottom_bars: bool) -> DriverResult<()> {
        if !(self.dpr.is_finite() && self.dpr > 0.0) {
            return Err(DriverError::Device(format!(
                "dpr must be a positive number, got {}",
                self.dpr
            )));
        }
        if !(self.screenshot_width.is_finite() && self.screenshot_width > 0.0) {
            return Err(DriverError::Device(format!(
                "screenshotWidth must be positive, got {}",
                self.screenshot_width
            )));
        }
        if bottom_bars && !(self.screen_height.is_finite() && self.screen_height > 0.0) {
            return Err(DriverError::Device(format!(
                "screenHeight must be positive to place bottom bars, got {}",
                self.screen_height
            )));
        }
        Ok(())
    }
}
