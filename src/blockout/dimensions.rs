use crate::types::Rectangle;

/// Expands `rect` by `margin` on all sides, or contracts it for negative margins.
///
/// Coordinates are not clamped to the image; callers masking a screenshot
/// must intersect the result with the image bounds themselves.
pub fn determine_dimensions(rect: Rectangle, margin: f64) -> Rectangle {
    rect.with_margin(margin)
}
