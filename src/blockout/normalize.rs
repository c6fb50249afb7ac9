//! Static block-out validation.
//!
//! Static block-outs come from hand-written test configuration, so malformed
//! entries are expected. They are dropped, never reported as errors.

use tracing::debug;

use crate::types::{RawBlockOut, Rectangle};

const REQUIRED_KEYS: [&str; 4] = ["x", "y", "width", "height"];

/// Returns true when `raw` describes a usable rectangle.
///
/// All of `x`, `y`, `width` and `height` must be finite numbers, the origin
/// non-negative and the size strictly positive.
pub fn is_valid_block_out(raw: &RawBlockOut) -> bool {
    to_rectangle(raw).is_some()
}

fn to_rectangle(raw: &RawBlockOut) -> Option<Rectangle> {
    let mut values = [0.0; 4];
    for (slot, key) in values.iter_mut().zip(REQUIRED_KEYS) {
        let value = raw.number(key)?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    let [x, y, width, height] = values;
    if x < 0.0 || y < 0.0 || width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Rectangle::new(x, y, width, height))
}

/// Keeps the valid static block-outs, in input order.
pub fn determine_valid_block_outs(entries: &[RawBlockOut]) -> Vec<Rectangle> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let rect = to_rectangle(raw);
            if rect.is_none() {
                debug!(index = idx, block_out = %raw.0, "dropping malformed block-out");
            }
            rect
        })
        .collect()
}
