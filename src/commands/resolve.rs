use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blockout_lib::{
    BlockOutResolver, BlockoutError, BlockoutOutput, FixtureDriver, FixtureSession, IgnoreOptions,
    ResolveOutput, ScreenSize,
};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

/// Run the resolve command.
pub async fn run_resolve(
    config_path: Option<PathBuf>,
    options_path: PathBuf,
    device_path: PathBuf,
    screenshot: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let body = match resolve(
        config_path.as_deref(),
        &options_path,
        &device_path,
        screenshot.as_deref(),
    )
    .await
    {
        Ok(body) => body,
        Err(err) => return render_error(err, format, output),
    };

    match write_output(&body, format, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => render_error(err, format, None),
    }
}

async fn resolve(
    config_path: Option<&Path>,
    options_path: &Path,
    device_path: &Path,
    screenshot: Option<&Path>,
) -> Result<BlockoutOutput, BlockoutError> {
    let config = load_config(config_path)?;
    let options = load_options(options_path)?;
    let mut session = load_session(device_path)?;

    if let Some(path) = screenshot {
        let size = ScreenSize::of_image(path)?;
        let profile = &mut session.profile;
        let height = f64::from(size.height);
        if height != profile.screenshot_height() {
            debug!(
                recorded = profile.screenshot_height(),
                actual = height,
                "screenshot height differs from the recorded screen"
            );
        }
        info!(screenshot = %path.display(), %size, "using screenshot dimensions");
        profile.screenshot_width = f64::from(size.width);
        profile.screen_height = height / profile.dpr;
    }

    let profile = session.profile;
    let driver = FixtureDriver::new(session);
    let rectangles = BlockOutResolver::with_config(&driver, &config)
        .determine_ignore_rectangles(&options)
        .await?;

    Ok(BlockoutOutput::Resolve(ResolveOutput::new(
        profile.platform,
        profile.dpr,
        rectangles,
    )))
}

/// Reads ignore options as YAML for `.yaml`/`.yml` files and JSON otherwise.
pub fn load_options(path: &Path) -> Result<IgnoreOptions, BlockoutError> {
    let data = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);
    debug!(path = %path.display(), yaml = is_yaml, "loading ignore options");

    if is_yaml {
        Ok(serde_yaml::from_str(&data)?)
    } else {
        Ok(serde_json::from_str(&data)?)
    }
}

fn load_session(path: &Path) -> Result<FixtureSession, BlockoutError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
