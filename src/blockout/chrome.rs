//! Fixed geometry for OS chrome.
//!
//! Bar heights are logical pixels and are multiplied by the device pixel
//! ratio. Widths are taken from the screenshot, which is already in physical
//! pixels. Nothing here touches the driver.

use serde::{Deserialize, Serialize};

use crate::types::{DeviceProfile, Rectangle};

/// Default Android status bar height.
pub const DEFAULT_STATUS_BAR_HEIGHT: f64 = 24.0;

/// Default Android navigation bar height.
pub const DEFAULT_NAVIGATION_BAR_HEIGHT: f64 = 48.0;

/// Default home indicator bar height on notch devices.
pub const DEFAULT_NOTCH_BOTTOM_BAR_HEIGHT: f64 = 34.0;

/// Default home indicator bar height on large notch devices.
pub const DEFAULT_LARGE_NOTCH_BOTTOM_BAR_HEIGHT: f64 = 40.0;

/// Logical bar heights used to build chrome rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeGeometry {
    pub status_bar_height: f64,
    pub navigation_bar_height: f64,
    pub notch_bottom_bar_height: f64,
    pub large_notch_bottom_bar_height: f64,
}

impl Default for ChromeGeometry {
    fn default() -> Self {
        Self {
            status_bar_height: DEFAULT_STATUS_BAR_HEIGHT,
            navigation_bar_height: DEFAULT_NAVIGATION_BAR_HEIGHT,
            notch_bottom_bar_height: DEFAULT_NOTCH_BOTTOM_BAR_HEIGHT,
            large_notch_bottom_bar_height: DEFAULT_LARGE_NOTCH_BOTTOM_BAR_HEIGHT,
        }
    }
}

impl ChromeGeometry {
    /// Status bar across the top of the screenshot.
    pub fn status_bar(&self, dpr: f64, screenshot_width: f64) -> Rectangle {
        Rectangle::new(0.0, 0.0, screenshot_width, self.status_bar_height * dpr)
    }

    /// Navigation bar anchored to the bottom of a screen `screen_height`
    /// logical pixels tall.
    pub fn navigation_bar(&self, dpr: f64, screenshot_width: f64, screen_height: f64) -> Rectangle {
        bottom_bar(dpr, screenshot_width, screen_height, self.navigation_bar_height)
    }

    /// Home indicator bar, only for notch-series devices.
    pub fn notch_bottom_bar(&self, profile: &DeviceProfile) -> Option<Rectangle> {
        if !profile.is_notch_series {
            return None;
        }
        let height = if profile.is_large_notch_series {
            self.large_notch_bottom_bar_height
        } else {
            self.notch_bottom_bar_height
        };
        Some(bottom_bar(
            profile.dpr,
            profile.screenshot_width,
            profile.screen_height,
            height,
        ))
    }
}

fn bottom_bar(dpr: f64, screenshot_width: f64, screen_height: f64, bar_height: f64) -> Rectangle {
    let height = bar_height * dpr;
    Rectangle::new(0.0, screen_height * dpr - height, screenshot_width, height)
}

pub fn determine_status_bar_rectangles(dpr: f64, screenshot_width: f64) -> Rectangle {
    ChromeGeometry::default().status_bar(dpr, screenshot_width)
}

pub fn determine_navigation_bar_rectangles(
    dpr: f64,
    screenshot_width: f64,
    screen_height: f64,
) -> Rectangle {
    ChromeGeometry::default().navigation_bar(dpr, screenshot_width, screen_height)
}

pub fn determine_notch_bottom_bar_rectangles(profile: &DeviceProfile) -> Option<Rectangle> {
    ChromeGeometry::default().notch_bottom_bar(profile)
}
