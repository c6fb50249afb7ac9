//! Selector-based block-outs.

use tracing::{debug, trace};

use super::dimensions::determine_dimensions;
use crate::driver::{AutomationDriver, ElementHandle};
use crate::error::Result;
use crate::types::{DeviceProfile, ElementBlockOut, Rectangle};

/// Fetches the element's bounding box and converts it to screenshot pixels.
pub async fn get_element_rectangles<D: AutomationDriver>(
    driver: &D,
    element: &ElementHandle,
    dpr: f64,
) -> Result<Rectangle> {
    let logical = driver.element_rect(element).await?;
    Ok(logical.to_physical(dpr))
}

/// Resolves every entry to zero or more rectangles, entry by entry and in match order.
///
/// A selector without matches, or an `elementNumber` past the end of the
/// match list, contributes nothing. Driver failures are returned unchanged.
pub async fn determine_element_block_outs<D: AutomationDriver>(
    driver: &D,
    entries: &[ElementBlockOut],
    profile: &DeviceProfile,
) -> Result<Vec<Rectangle>> {
    resolve_element_block_outs(driver, entries, profile, 0.0).await
}

pub(crate) async fn resolve_element_block_outs<D: AutomationDriver>(
    driver: &D,
    entries: &[ElementBlockOut],
    profile: &DeviceProfile,
    default_margin: f64,
) -> Result<Vec<Rectangle>> {
    let mut rectangles = Vec::new();

    for entry in entries {
        let matches = driver.query_elements(&entry.selector).await?;
        let selected: Vec<&ElementHandle> = match entry.element_number {
            Some(number) => number
                .checked_sub(1)
                .and_then(|idx| matches.get(idx))
                .into_iter()
                .collect(),
            None => matches.iter().collect(),
        };

        if selected.is_empty() {
            debug!(
                selector = %entry.selector,
                matched = matches.len(),
                element_number = ?entry.element_number,
                "element block-out resolved to nothing"
            );
            continue;
        }

        let margin = entry.margin.unwrap_or(default_margin);
        for element in selected {
            let rect = get_element_rectangles(driver, element, profile.dpr).await?;
            trace!(selector = %entry.selector, %element, ?rect, "element block-out");
            rectangles.push(determine_dimensions(rect, margin));
        }
    }

    Ok(rectangles)
}
