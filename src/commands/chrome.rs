use std::path::PathBuf;
use std::process::ExitCode;

use blockout_lib::{
    BlockoutError, BlockoutOutput, ChromeGeometry, ChromeOutput, DeviceProfile, Platform,
    ScreenSize, BLOCKOUT_OUTPUT_VERSION,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

/// Run the chrome command.
pub fn run_chrome(
    config_path: Option<PathBuf>,
    dpr: f64,
    screen: ScreenSize,
    notch: bool,
    large_notch: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    if !dpr.is_finite() || dpr <= 0.0 {
        return render_error(
            BlockoutError::config(format!("--dpr must be positive, got {dpr}")),
            format,
            output,
        );
    }
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };

    let body = BlockoutOutput::Chrome(chrome_output(
        &config.chrome,
        dpr,
        screen,
        notch || large_notch,
        large_notch,
    ));
    match write_output(&body, format, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => render_error(err, format, None),
    }
}

fn chrome_output(
    geometry: &ChromeGeometry,
    dpr: f64,
    screen: ScreenSize,
    notch: bool,
    large_notch: bool,
) -> ChromeOutput {
    let profile = DeviceProfile {
        platform: Platform::Android,
        dpr,
        screenshot_width: f64::from(screen.width) * dpr,
        screen_height: f64::from(screen.height),
        is_notch_series: notch,
        is_large_notch_series: large_notch,
    };
    ChromeOutput {
        version: BLOCKOUT_OUTPUT_VERSION.to_string(),
        status_bar: geometry.status_bar(dpr, profile.screenshot_width),
        navigation_bar: geometry.navigation_bar(dpr, profile.screenshot_width, profile.screen_height),
        notch_bottom_bar: geometry.notch_bottom_bar(&profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockout_lib::Rectangle;

    #[test]
    fn chrome_output_scales_logical_screen() {
        let out = chrome_output(
            &ChromeGeometry::default(),
            3.0,
            ScreenSize {
                width: 375,
                height: 812,
            },
            true,
            false,
        );

        assert_eq!(out.status_bar, Rectangle::new(0.0, 0.0, 1125.0, 72.0));
        assert_eq!(out.navigation_bar, Rectangle::new(0.0, 2292.0, 1125.0, 144.0));
        assert_eq!(
            out.notch_bottom_bar,
            Some(Rectangle::new(0.0, 2334.0, 1125.0, 102.0))
        );
    }

    #[test]
    fn chrome_output_without_notch() {
        let out = chrome_output(
            &ChromeGeometry::default(),
            1.0,
            ScreenSize {
                width: 360,
                height: 640,
            },
            false,
            false,
        );
        assert!(out.notch_bottom_bar.is_none());
    }
}
