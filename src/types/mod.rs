//! Data types shared by the block-out resolver.
//!
//! - [`rectangle`] - Physical and logical rectangles
//! - [`device`] - Device profile and platform family
//! - [`options`] - Ignore options and raw block-out inputs

pub mod device;
pub mod options;
pub mod rectangle;

pub use device::{DeviceProfile, Platform};
pub use options::{ElementBlockOut, IgnoreOptions, RawBlockOut};
pub use rectangle::{LogicalRect, Rectangle};
