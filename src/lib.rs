//! Block-out rectangle resolution for visual regression screenshots.
//!
//! Before two screenshots are compared, noisy regions (clocks, ads, OS
//! chrome) are masked out. This library turns declarative
//! [`IgnoreOptions`] plus live device state into the list of rectangles, in
//! physical screenshot pixels, that should be masked.
//!
//! # Module Overview
//!
//! - [`blockout`] - Normalizer, element resolver, chrome geometry, visibility toggle, orchestrator
//! - [`driver`] - The [`AutomationDriver`] seam and a JSON-backed [`FixtureDriver`]
//! - [`config`] - Configuration file support
//! - [`types`] - Rectangles, device profile, ignore options
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use blockout_lib::{BlockOutResolver, Config, FixtureDriver, IgnoreOptions};
//!
//! # async fn example() -> blockout_lib::Result<()> {
//! let session = std::fs::read_to_string("session.json")?;
//! let driver = FixtureDriver::from_json(&session)?;
//! let options: IgnoreOptions = serde_json::from_str(
//!     r#"{"blockOutStatusBar": true, "elementBlockOuts": [{"selector": "~clock"}]}"#,
//! )?;
//!
//! let config = Config::load(None)?;
//! let rectangles = BlockOutResolver::with_config(&driver, &config)
//!     .determine_ignore_rectangles(&options)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod blockout;
pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod screen;
pub mod types;

pub use blockout::{
    determine_dimensions, determine_element_block_outs, determine_ignore_rectangles,
    determine_navigation_bar_rectangles, determine_notch_bottom_bar_rectangles,
    determine_status_bar_rectangles, determine_valid_block_outs, get_element_rectangles,
    is_valid_block_out, with_relaxed_visibility, BlockOutResolver, BlockOutSource,
    ChromeGeometry,
};
pub use config::Config;
pub use driver::{AutomationDriver, ElementHandle, FixtureDriver, FixtureElement, FixtureSession};
pub use error::{BlockoutError, DriverError, DriverResult, Result};
pub use output::{
    BlockoutOutput, ChromeOutput, ErrorOutput, ResolveOutput, BLOCKOUT_OUTPUT_VERSION,
};
pub use screen::ScreenSize;
pub use types::{
    DeviceProfile, ElementBlockOut, IgnoreOptions, LogicalRect, Platform, RawBlockOut, Rectangle,
};
