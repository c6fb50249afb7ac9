use std::path::Path;

use blockout_lib::{BlockoutError, Config};
use tracing::debug;

/// Loads and validates the resolver config for the CLI.
///
/// Errors name the file they came from: the explicit `--config` path, the
/// central config when it exists, or built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, BlockoutError> {
    let source = config_source(path);
    let cfg = Config::load(path)
        .map_err(|err| BlockoutError::config(format!("Failed to read config {source}: {err}")))?;
    cfg.validate()
        .map_err(|err| BlockoutError::config(format!("Invalid config ({source}): {err}")))?;

    debug!("{}", format_effective_config(&cfg, path));
    Ok(cfg)
}

fn config_source(path: Option<&Path>) -> String {
    path.map(Path::to_path_buf)
        .or_else(|| Config::central_config_path().filter(|central| central.is_file()))
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, path: Option<&Path>) -> String {
    let source = config_source(path);
    format!(
        "Effective config [{source}]: status_bar={}, navigation_bar={}, notch_bottom_bar={}, large_notch_bottom_bar={}, element_margin={}",
        config.chrome.status_bar_height,
        config.chrome.navigation_bar_height,
        config.chrome.notch_bottom_bar_height,
        config.chrome.large_notch_bottom_bar_height,
        config.element_margin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_effective_config_includes_all_fields() {
        let cfg = Config {
            element_margin: 2.5,
            ..Config::default()
        };
        let summary = format_effective_config(&cfg, Some(Path::new("blockout.toml")));

        assert!(summary.contains("status_bar=24"));
        assert!(summary.contains("navigation_bar=48"));
        assert!(summary.contains("notch_bottom_bar=34"));
        assert!(summary.contains("large_notch_bottom_bar=40"));
        assert!(summary.contains("element_margin=2.5"));
        assert!(summary.contains("blockout.toml"));
    }

    #[test]
    fn load_config_wraps_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chrome]\nstatus_bar_height = -1\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid config"));
        assert!(msg.contains("status_bar_height"));
    }

    #[test]
    fn config_source_prefers_explicit_path() {
        assert_eq!(config_source(Some(Path::new("/etc/blockout.toml"))), "/etc/blockout.toml");
    }

    #[test]
    fn load_config_wraps_read_errors() {
        let err = load_config(Some(Path::new("/no/such/blockout.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config /no/such/blockout.toml"));
    }
}
