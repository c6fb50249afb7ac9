use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blockout_lib::{BlockoutError, BlockoutOutput, ErrorOutput, Rectangle, BLOCKOUT_OUTPUT_VERSION};
use tracing::{error, warn};

use crate::cli::OutputFormat;

/// Write `body` to `output`, or stdout when no path is given.
///
/// Pretty output is only human-formatted on an interactive stdout; files and
/// pipes get indented JSON.
pub fn write_output(
    body: &BlockoutOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), BlockoutError> {
    let human = output.is_none() && io::stdout().is_terminal();
    let content = render(body, format, human)?;
    emit(&content, output.as_deref())?;
    Ok(())
}

/// Print `err` as an error payload and return exit code 2.
///
/// If the payload cannot be written to `output` it goes to stdout instead.
pub fn render_error(err: BlockoutError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error = err.to_payload();
    let body = BlockoutOutput::Error(ErrorOutput {
        version: BLOCKOUT_OUTPUT_VERSION.to_string(),
        message: Some(error.message.clone()),
        error,
    });

    let written = match output {
        Some(path) => write_output(&body, format, Some(path)).or_else(|write_err| {
            warn!(error = %write_err, "error output not written, using stdout");
            write_output(&body, format, None)
        }),
        None => write_output(&body, format, None),
    };
    if let Err(write_err) = written {
        error!(error = %write_err, "failed to write error output");
    }

    ExitCode::from(2)
}

fn render(body: &BlockoutOutput, format: OutputFormat, human: bool) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(body),
        OutputFormat::Pretty if human => Ok(format_pretty(body, true)),
        OutputFormat::Pretty => serde_json::to_string_pretty(body),
    }
}

fn emit(content: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content),
        None => writeln!(io::stdout().lock(), "{content}"),
    }
}

fn color(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}

fn format_rect(rect: &Rectangle) -> String {
    format!(
        "x={} y={} width={} height={}",
        rect.x, rect.y, rect.width, rect.height
    )
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &BlockoutOutput, colorize: bool) -> String {
    let mut buf = String::new();
    match body {
        BlockoutOutput::Resolve(out) => {
            let header = color("[RESOLVE]", "36", colorize);
            writeln!(
                buf,
                "{header} {} block-out(s) for {} (dpr {})",
                out.count, out.platform, out.dpr
            )
            .ok();
            for (idx, rect) in out.rectangles.iter().enumerate() {
                writeln!(buf, "{:>3}. {}", idx + 1, format_rect(rect)).ok();
            }
        }
        BlockoutOutput::Chrome(out) => {
            let header = color("[CHROME]", "36", colorize);
            writeln!(buf, "{header} OS chrome geometry").ok();
            writeln!(buf, "- {:16} {}", "statusBar", format_rect(&out.status_bar)).ok();
            writeln!(
                buf,
                "- {:16} {}",
                "navigationBar",
                format_rect(&out.navigation_bar)
            )
            .ok();
            if let Some(rect) = &out.notch_bottom_bar {
                writeln!(buf, "- {:16} {}", "notchBottomBar", format_rect(rect)).ok();
            }
        }
        BlockoutOutput::Error(out) => {
            let header = color("[ERROR]", "31", colorize);
            writeln!(buf, "{header} {}", out.error.message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {remediation}").ok();
            }
        }
    }
    buf.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockout_lib::{ChromeOutput, Platform, ResolveOutput};

    #[test]
    fn pretty_resolve_lists_rectangles() {
        let body = BlockoutOutput::Resolve(ResolveOutput::new(
            Platform::Android,
            2.0,
            vec![
                Rectangle::new(0.0, 0.0, 720.0, 48.0),
                Rectangle::new(5.0, 6.0, 7.0, 8.0),
            ],
        ));
        let text = format_pretty(&body, false);

        assert!(text.starts_with("[RESOLVE] 2 block-out(s) for android (dpr 2)"));
        assert!(text.contains("  1. x=0 y=0 width=720 height=48"));
        assert!(text.contains("  2. x=5 y=6 width=7 height=8"));
    }

    #[test]
    fn pretty_error_includes_hint() {
        let payload = BlockoutError::config("bad height").to_payload();
        let body = BlockoutOutput::Error(ErrorOutput {
            version: BLOCKOUT_OUTPUT_VERSION.to_string(),
            message: Some(payload.message.clone()),
            error: payload,
        });
        let text = format_pretty(&body, false);
        assert!(text.starts_with("[ERROR] bad height"));
        assert!(text.contains("Hint:"));
    }

    fn chrome_body() -> BlockoutOutput {
        BlockoutOutput::Chrome(ChromeOutput {
            version: BLOCKOUT_OUTPUT_VERSION.to_string(),
            status_bar: Rectangle::new(0.0, 0.0, 720.0, 48.0),
            navigation_bar: Rectangle::new(0.0, 1184.0, 720.0, 96.0),
            notch_bottom_bar: None,
        })
    }

    #[test]
    fn render_picks_shape_per_format() {
        let body = chrome_body();

        let compact = render(&body, OutputFormat::Json, true).unwrap();
        assert!(compact.starts_with(r#"{"mode":"chrome""#));
        assert!(!compact.contains('\n'));

        let indented = render(&body, OutputFormat::Pretty, false).unwrap();
        assert!(indented.contains('\n'));
        let parsed: BlockoutOutput = serde_json::from_str(&indented).unwrap();
        assert!(matches!(parsed, BlockoutOutput::Chrome(_)));

        let human = render(&body, OutputFormat::Pretty, true).unwrap();
        assert!(human.starts_with("[CHROME]"));
    }

    #[test]
    fn write_output_to_file_never_uses_human_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_output(&chrome_body(), OutputFormat::Pretty, Some(path.clone())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.trim_start().starts_with('{'));
    }

    #[test]
    fn render_error_writes_payload_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.json");

        render_error(
            BlockoutError::config("bad height"),
            OutputFormat::Json,
            Some(path.clone()),
        );
        let parsed: BlockoutOutput =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        match parsed {
            BlockoutOutput::Error(out) => assert_eq!(out.error.message, "bad height"),
            other => panic!("expected error output, got {other:?}"),
        }
    }

    #[test]
    fn color_is_optional() {
        assert_eq!(color("x", "31", false), "x");
        assert_eq!(color("x", "31", true), "\u{1b}[31mx\u{1b}[0m");
    }
}
