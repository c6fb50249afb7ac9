use crate::error::ErrorPayload;
use crate::types::{Platform, Rectangle};
use serde::{Deserialize, Serialize};

/// Schema version for output payloads.
pub const BLOCKOUT_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum BlockoutOutput {
    Resolve(ResolveOutput),
    Chrome(ChromeOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    pub version: String,
    pub platform: Platform,
    pub dpr: f64,
    pub count: usize,
    pub rectangles: Vec<Rectangle>,
}

impl ResolveOutput {
    pub fn new(platform: Platform, dpr: f64, rectangles: Vec<Rectangle>) -> Self {
        Self {
            version: BLOCKOUT_OUTPUT_VERSION.to_string(),
            platform,
            dpr,
            count: rectangles.len(),
            rectangles,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeOutput {
    pub version: String,
    pub status_bar: Rectangle,
    pub navigation_bar: Rectangle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notch_bottom_bar: Option<Rectangle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
