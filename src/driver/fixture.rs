//! JSON-described automation session.
//!
//! Used by the CLI to resolve block-outs against a recorded device state and
//! by tests to observe settings traffic.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{AutomationDriver, ElementHandle};
use crate::error::{DriverError, DriverResult};
use crate::types::{DeviceProfile, LogicalRect, Platform};

/// One element of the recorded element tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureElement {
    #[serde(flatten)]
    pub rect: LogicalRect,
    /// Invisible elements are only returned on Android while
    /// `allowInvisibleElements` is enabled
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl From<LogicalRect> for FixtureElement {
    fn from(rect: LogicalRect) -> Self {
        Self {
            rect,
            visible: true,
        }
    }
}

/// Serializable description of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSession {
    pub profile: DeviceProfile,
    /// Elements keyed by the selector that finds them
    #[serde(default)]
    pub elements: BTreeMap<String, Vec<FixtureElement>>,
    #[serde(default)]
    pub allow_invisible_elements: bool,
    /// Selectors whose query fails with a driver error
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failing_selectors: Vec<String>,
    /// Selectors whose elements are matched but gone by the time their
    /// rectangle is fetched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stale_selectors: Vec<String>,
    /// Setting values the driver refuses to write
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected_setting_values: Vec<bool>,
}

impl FixtureSession {
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            profile,
            elements: BTreeMap::new(),
            allow_invisible_elements: false,
            failing_selectors: Vec::new(),
            stale_selectors: Vec::new(),
            rejected_setting_values: Vec::new(),
        }
    }

    pub fn with_elements<I, E>(mut self, selector: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<FixtureElement>,
    {
        self.elements
            .insert(selector.into(), elements.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_failing_selector(mut self, selector: impl Into<String>) -> Self {
        self.failing_selectors.push(selector.into());
        self
    }

    pub fn with_stale_selector(mut self, selector: impl Into<String>) -> Self {
        self.stale_selectors.push(selector.into());
        self
    }

    pub fn with_rejected_setting(mut self, value: bool) -> Self {
        self.rejected_setting_values.push(value);
        self
    }
}

#[derive(Debug)]
struct FixtureState {
    allow_invisible_elements: bool,
    settings_reads: usize,
    settings_writes: Vec<bool>,
    queries: Vec<String>,
}

/// [`AutomationDriver`] backed by a [`FixtureSession`].
#[derive(Debug)]
pub struct FixtureDriver {
    session: FixtureSession,
    rects: HashMap<String, LogicalRect>,
    state: Mutex<FixtureState>,
}

impl FixtureDriver {
    pub fn new(session: FixtureSession) -> Self {
        let rects = session
            .elements
            .iter()
            .filter(|(selector, _)| !session.stale_selectors.contains(*selector))
            .flat_map(|(selector, elements)| {
                elements
                    .iter()
                    .enumerate()
                    .map(move |(idx, el)| (element_id(selector, idx), el.rect))
            })
            .collect();
        let state = Mutex::new(FixtureState {
            allow_invisible_elements: session.allow_invisible_elements,
            settings_reads: 0,
            settings_writes: Vec::new(),
            queries: Vec::new(),
        });
        Self {
            session,
            rects,
            state,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn session(&self) -> &FixtureSession {
        &self.session
    }

    /// Every value written to `allowInvisibleElements`, in order.
    pub async fn settings_writes(&self) -> Vec<bool> {
        self.state.lock().await.settings_writes.clone()
    }

    pub async fn settings_reads(&self) -> usize {
        self.state.lock().await.settings_reads
    }

    /// Current value of `allowInvisibleElements`.
    pub async fn current_setting(&self) -> bool {
        self.state.lock().await.allow_invisible_elements
    }

    /// Selectors queried so far, in order.
    pub async fn queries(&self) -> Vec<String> {
        self.state.lock().await.queries.clone()
    }
}

fn element_id(selector: &str, idx: usize) -> String {
    format!("{selector}#{idx}")
}

impl AutomationDriver for FixtureDriver {
    fn platform(&self) -> Platform {
        self.session.profile.platform
    }

    async fn device_profile(&self) -> DriverResult<DeviceProfile> {
        Ok(self.session.profile)
    }

    async fn query_elements(&self, selector: &str) -> DriverResult<Vec<ElementHandle>> {
        let mut state = self.state.lock().await;
        state.queries.push(selector.to_string());

        if self.session.failing_selectors.iter().any(|s| s == selector) {
            return Err(DriverError::query(selector, "no such session"));
        }

        let hides_invisible =
            self.platform().requires_visibility_toggle() && !state.allow_invisible_elements;
        let handles = self
            .session
            .elements
            .get(selector)
            .map(|elements| {
                elements
                    .iter()
                    .enumerate()
                    .filter(|(_, el)| el.visible || !hides_invisible)
                    .map(|(idx, _)| ElementHandle::new(element_id(selector, idx)))
                    .collect()
            })
            .unwrap_or_default();
        Ok(handles)
    }

    async fn element_rect(&self, element: &ElementHandle) -> DriverResult<LogicalRect> {
        self.rects
            .get(&element.element_id)
            .copied()
            .ok_or_else(|| DriverError::element_rect(&element.element_id, "stale element reference"))
    }

    async fn allow_invisible_elements(&self) -> DriverResult<bool> {
        let mut state = self.state.lock().await;
        state.settings_reads += 1;
        Ok(state.allow_invisible_elements)
    }

    async fn set_allow_invisible_elements(&self, allow: bool) -> DriverResult<()> {
        let mut state = self.state.lock().await;
        state.settings_writes.push(allow);
        if self.session.rejected_setting_values.contains(&allow) {
            return Err(DriverError::Settings(format!(
                "updateSettings rejected allowInvisibleElements={allow}"
            )));
        }
        state.allow_invisible_elements = allow;
        Ok(())
    }
}
