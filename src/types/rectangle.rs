//! Rectangle value types.
//!
//! [`Rectangle`] is always expressed in physical screenshot pixels. The
//! automation driver reports element geometry in logical pixels as a
//! [`LogicalRect`], which must be scaled by the device pixel ratio before it
//! can be mixed with static block-outs.

use serde::{Deserialize, Serialize};

/// A block-out region in physical screenshot pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns a copy with all four fields multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Grows the rectangle outward by `margin` on every side.
    ///
    /// A negative margin shrinks it. The result is not clamped, so `x`/`y`
    /// may become negative near the image edge.
    pub fn with_margin(self, margin: f64) -> Self {
        if margin == 0.0 {
            return self;
        }
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }
}

/// Element geometry as reported by the driver, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LogicalRect {
    /// Converts into physical screenshot pixels.
    pub fn to_physical(self, dpr: f64) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height).scaled(dpr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_multiplies_every_field() {
        let rect = Rectangle::new(1.0, 2.0, 10.0, 20.0).scaled(3.0);
        assert_eq!(rect, Rectangle::new(3.0, 6.0, 30.0, 60.0));
    }

    #[test]
    fn logical_rect_converts_with_dpr() {
        let logical = LogicalRect {
            x: 1.0,
            y: 2.0,
            width: 10.0,
            height: 20.0,
        };
        assert_eq!(logical.to_physical(2.0), Rectangle::new(2.0, 4.0, 20.0, 40.0));
        assert_eq!(logical.to_physical(1.0), Rectangle::new(1.0, 2.0, 10.0, 20.0));
    }

    #[test]
    fn with_margin_allows_negative_origin() {
        let rect = Rectangle::new(5.0, 5.0, 10.0, 10.0).with_margin(8.0);
        assert_eq!(rect, Rectangle::new(-3.0, -3.0, 26.0, 26.0));
    }

    #[test]
    fn serializes_as_camel_case_object() {
        let json = serde_json::to_value(Rectangle::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0 })
        );
    }
}
