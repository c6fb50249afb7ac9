//! Ignore options supplied per resolution call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untrusted, hand-authored static block-out.
///
/// Any JSON value is accepted here; validity is decided later by
/// [`crate::blockout::is_valid_block_out`] so a single bad entry never
/// rejects the whole options document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBlockOut(pub Value);

impl RawBlockOut {
    /// Returns the numeric value stored under `key`, if any.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.as_object()?.get(key)?.as_f64()
    }
}

impl From<Value> for RawBlockOut {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Selector-based block-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ElementBlockOutRepr")]
pub struct ElementBlockOut {
    pub selector: String,
    /// 1-indexed position among the matched elements; all matches when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_number: Option<usize>,
    /// Extra physical pixels around each element; config default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

impl ElementBlockOut {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            element_number: None,
            margin: None,
        }
    }

    pub fn nth(selector: impl Into<String>, element_number: usize) -> Self {
        Self {
            element_number: Some(element_number),
            ..Self::new(selector)
        }
    }
}

// Accepts `selector`, `elementSelector`, or the nested `{ "element": { "selector": ... } }`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementBlockOutRepr {
    #[serde(default, alias = "elementSelector")]
    selector: Option<String>,
    #[serde(default)]
    element: Option<ElementRef>,
    #[serde(default)]
    element_number: Option<usize>,
    #[serde(default)]
    margin: Option<f64>,
}

#[derive(Deserialize)]
struct ElementRef {
    selector: String,
}

impl TryFrom<ElementBlockOutRepr> for ElementBlockOut {
    type Error = String;

    fn try_from(repr: ElementBlockOutRepr) -> Result<Self, Self::Error> {
        let selector = repr
            .selector
            .or_else(|| repr.element.map(|e| e.selector))
            .ok_or_else(|| "element block-out requires a selector".to_string())?;
        Ok(Self {
            selector,
            element_number: repr.element_number,
            margin: repr.margin,
        })
    }
}

/// Declarative description of everything that should be blocked out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IgnoreOptions {
    #[serde(alias = "blockOuts")]
    pub static_block_outs: Vec<RawBlockOut>,
    pub element_block_outs: Vec<ElementBlockOut>,
    pub block_out_status_bar: bool,
    pub block_out_navigation_bar: bool,
    #[serde(alias = "blockOutIphoneXBottomBar")]
    pub block_out_notch_bottom_bar: bool,
}

impl IgnoreOptions {
    /// True when nothing at all was requested.
    pub fn is_empty(&self) -> bool {
        self.static_block_outs.is_empty()
            && self.element_block_outs.is_empty()
            && !self.block_out_status_bar
            && !self.block_out_navigation_bar
            && !self.block_out_notch_bottom_bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_block_out_reads_numbers_only() {
        let raw = RawBlockOut(json!({ "x": 1, "y": "2" }));
        assert_eq!(raw.number("x"), Some(1.0));
        assert_eq!(raw.number("y"), None);
        assert_eq!(RawBlockOut(json!(42)).number("x"), None);
    }

    #[test]
    fn element_block_out_accepts_all_selector_shapes() {
        let entries: Vec<ElementBlockOut> = serde_json::from_value(json!([
            { "selector": "~banner" },
            { "elementSelector": "#ad", "elementNumber": 2 },
            { "element": { "selector": ".clock" }, "margin": 4 }
        ]))
        .unwrap();

        assert_eq!(entries[0], ElementBlockOut::new("~banner"));
        assert_eq!(entries[1], ElementBlockOut::nth("#ad", 2));
        assert_eq!(entries[2].selector, ".clock");
        assert_eq!(entries[2].margin, Some(4.0));
    }

    #[test]
    fn element_block_out_without_selector_is_rejected() {
        let err = serde_json::from_value::<ElementBlockOut>(json!({ "elementNumber": 1 }))
            .unwrap_err();
        assert!(err.to_string().contains("requires a selector"));
    }

    #[test]
    fn ignore_options_default_and_legacy_keys() {
        let opts: IgnoreOptions = serde_json::from_value(json!({
            "blockOuts": [{ "x": 1, "y": 2, "width": 3, "height": 4 }, "garbage"],
            "blockOutIphoneXBottomBar": true
        }))
        .unwrap();

        assert_eq!(opts.static_block_outs.len(), 2);
        assert!(opts.block_out_notch_bottom_bar);
        assert!(!opts.block_out_status_bar);
        assert!(opts.element_block_outs.is_empty());
        assert!(!opts.is_empty());
        assert!(IgnoreOptions::default().is_empty());
    }
}
