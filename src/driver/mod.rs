//! Automation driver seam.
//!
//! The resolver never talks to WebDriver/Appium directly. Everything it needs
//! from the session goes through [`AutomationDriver`]:
//!
//! - device introspection ([`AutomationDriver::device_profile`])
//! - element queries and geometry
//! - the `allowInvisibleElements` setting
//!
//! [`FixtureDriver`] implements the trait from a JSON session description and
//! records every settings write.

mod fixture;

pub use fixture::{FixtureDriver, FixtureElement, FixtureSession};

use crate::error::DriverResult;
use crate::types::{DeviceProfile, LogicalRect, Platform};
use serde::{Deserialize, Serialize};

/// Opaque reference to a live element in the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementHandle {
    pub element_id: String,
}

impl ElementHandle {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.element_id)
    }
}

/// Narrow view of an automation session used by the block-out resolver.
///
/// Calls are awaited strictly one after another; implementations do not need
/// to support concurrent use of the same session.
#[allow(async_fn_in_trait)]
pub trait AutomationDriver {
    fn platform(&self) -> Platform;

    async fn device_profile(&self) -> DriverResult<DeviceProfile>;

    /// Returns every element matching `selector`, in document order.
    async fn query_elements(&self, selector: &str) -> DriverResult<Vec<ElementHandle>>;

    /// Element bounding box in logical pixels.
    async fn element_rect(&self, element: &ElementHandle) -> DriverResult<LogicalRect>;

    async fn allow_invisible_elements(&self) -> DriverResult<bool>;

    async fn set_allow_invisible_elements(&self, allow: bool) -> DriverResult<()>;
}
