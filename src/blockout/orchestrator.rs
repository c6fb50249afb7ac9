//! Composition of every block-out source into the final rectangle list.

use tracing::debug;

use super::chrome::ChromeGeometry;
use super::element::resolve_element_block_outs;
use super::normalize::determine_valid_block_outs;
use super::visibility::with_relaxed_visibility;
use crate::config::Config;
use crate::driver::AutomationDriver;
use crate::error::Result;
use crate::types::{DeviceProfile, ElementBlockOut, IgnoreOptions, RawBlockOut, Rectangle};

/// A producer of block-out rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockOutSource<'a> {
    Static(&'a [RawBlockOut]),
    Elements(&'a [ElementBlockOut]),
    StatusBar,
    NavigationBar,
    NotchBottomBar,
}

impl BlockOutSource<'_> {
    /// Sources resolved with invisible elements allowed on platforms that hide them.
    pub fn needs_relaxed_visibility(&self) -> bool {
        matches!(
            self,
            BlockOutSource::Elements(_) | BlockOutSource::StatusBar | BlockOutSource::NavigationBar
        )
    }

    /// Bottom bars are positioned from the screen height.
    pub fn is_bottom_bar(&self) -> bool {
        matches!(self, BlockOutSource::NavigationBar | BlockOutSource::NotchBottomBar)
    }

    /// Selects the sources requested by `options`, in output order.
    pub fn plan<'a>(options: &'a IgnoreOptions, profile: &DeviceProfile) -> Vec<BlockOutSource<'a>> {
        let mut sources = Vec::new();
        if !options.static_block_outs.is_empty() {
            sources.push(BlockOutSource::Static(&options.static_block_outs));
        }
        if !options.element_block_outs.is_empty() {
            sources.push(BlockOutSource::Elements(&options.element_block_outs));
        }
        if options.block_out_status_bar {
            sources.push(BlockOutSource::StatusBar);
        }
        if options.block_out_navigation_bar {
            if profile.platform.has_navigation_bar() {
                sources.push(BlockOutSource::NavigationBar);
            } else {
                debug!(platform = %profile.platform, "no navigation bar on this platform");
            }
        }
        if options.block_out_notch_bottom_bar {
            if profile.is_notch_series {
                sources.push(BlockOutSource::NotchBottomBar);
            } else {
                debug!("device has no notch bottom bar");
            }
        }
        sources
    }
}

/// Resolves [`IgnoreOptions`] against one automation session.
#[derive(Debug)]
pub struct BlockOutResolver<'d, D> {
    driver: &'d D,
    geometry: ChromeGeometry,
    element_margin: f64,
}

impl<'d, D: AutomationDriver> BlockOutResolver<'d, D> {
    pub fn new(driver: &'d D) -> Self {
        Self {
            driver,
            geometry: ChromeGeometry::default(),
            element_margin: 0.0,
        }
    }

    /// Uses the chrome geometry and default element margin from `config`.
    pub fn with_config(driver: &'d D, config: &Config) -> Self {
        Self {
            driver,
            geometry: config.chrome,
            element_margin: config.element_margin,
        }
    }

    /// Computes the ordered block-out list: static, element, status bar,
    /// navigation bar, notch bottom bar.
    ///
    /// On platforms that hide invisible elements, the element, status bar
    /// and navigation bar sources share a single toggle scope, so the setting
    /// is written once and restored once per call.
    pub async fn determine_ignore_rectangles(&self, options: &IgnoreOptions) -> Result<Vec<Rectangle>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let profile = self.driver.device_profile().await?;
        let sources = BlockOutSource::plan(options, &profile);
        profile.validate(sources.iter().any(|s| s.is_bottom_bar()))?;
        debug!(
            platform = %profile.platform,
            dpr = profile.dpr,
            sources = sources.len(),
            "resolving block-outs"
        );

        let toggle = profile.platform.requires_visibility_toggle();
        let mut rectangles = Vec::new();
        let mut idx = 0;
        while idx < sources.len() {
            if toggle && sources[idx].needs_relaxed_visibility() {
                let end = sources[idx..]
                    .iter()
                    .position(|s| !s.needs_relaxed_visibility())
                    .map_or(sources.len(), |offset| idx + offset);
                let batch = &sources[idx..end];
                let resolved =
                    with_relaxed_visibility(self.driver, || self.resolve_all(batch, &profile))
                        .await?;
                rectangles.extend(resolved);
                idx = end;
            } else {
                rectangles.extend(self.resolve(sources[idx], &profile).await?);
                idx += 1;
            }
        }

        debug!(count = rectangles.len(), "block-outs resolved");
        Ok(rectangles)
    }

    async fn resolve_all(
        &self,
        sources: &[BlockOutSource<'_>],
        profile: &DeviceProfile,
    ) -> Result<Vec<Rectangle>> {
        let mut rectangles = Vec::new();
        for source in sources {
            rectangles.extend(self.resolve(*source, profile).await?);
        }
        Ok(rectangles)
    }

    async fn resolve(
        &self,
        source: BlockOutSource<'_>,
        profile: &DeviceProfile,
    ) -> Result<Vec<Rectangle>> {
        debug!(?source, "resolving block-out source");
        let rectangles = match source {
            BlockOutSource::Static(entries) => determine_valid_block_outs(entries),
            BlockOutSource::Elements(entries) => {
                resolve_element_block_outs(self.driver, entries, profile, self.element_margin)
                    .await?
            }
            BlockOutSource::StatusBar => {
                vec![self.geometry.status_bar(profile.dpr, profile.screenshot_width)]
            }
            BlockOutSource::NavigationBar => vec![self.geometry.navigation_bar(
                profile.dpr,
                profile.screenshot_width,
                profile.screen_height,
            )],
            BlockOutSource::NotchBottomBar => {
                self.geometry.notch_bottom_bar(profile).into_iter().collect()
            }
        };
        Ok(rectangles)
    }
}

/// Resolves `options` with the default chrome geometry.
pub async fn determine_ignore_rectangles<D: AutomationDriver>(
    driver: &D,
    options: &IgnoreOptions,
) -> Result<Vec<Rectangle>> {
    BlockOutResolver::new(driver)
        .determine_ignore_rectangles(options)
        .await
}
