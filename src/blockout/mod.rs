//! Block-out rectangle resolution.
//!
//! # Module Structure
//!
//! - [`normalize`] - Validation of hand-authored static rectangles
//! - [`element`] - Selector-based rectangles scaled by the device pixel ratio
//! - [`chrome`] - Status bar, navigation bar and notch bottom bar geometry
//! - [`visibility`] - Scoped `allowInvisibleElements` toggle
//! - [`orchestrator`] - Composition of all sources into the final list
//!
//! # Example
//!
//! ```no_run
//! use blockout_lib::{determine_ignore_rectangles, FixtureDriver, IgnoreOptions};
//!
//! # async fn example(driver: FixtureDriver) -> blockout_lib::Result<()> {
//! let options = IgnoreOptions {
//!     block_out_status_bar: true,
//!     ..Default::default()
//! };
//! let rectangles = determine_ignore_rectangles(&driver, &options).await?;
//! println!("{} block-outs", rectangles.len());
//! # Ok(())
//! # }
//! ```

pub mod chrome;
pub mod dimensions;
pub mod element;
pub mod normalize;
pub mod orchestrator;
pub mod visibility;

pub use chrome::{
    determine_navigation_bar_rectangles, determine_notch_bottom_bar_rectangles,
    determine_status_bar_rectangles, ChromeGeometry,
};
pub use dimensions::determine_dimensions;
pub use element::{determine_element_block_outs, get_element_rectangles};
pub use normalize::{determine_valid_block_outs, is_valid_block_out};
pub use orchestrator::{determine_ignore_rectangles, BlockOutResolver, BlockOutSource};
pub use visibility::with_relaxed_visibility;
