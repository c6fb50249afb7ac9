use blockout_lib::ScreenSize;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blockout")]
#[command(
    version,
    about = "Resolve block-out rectangles for visual regression screenshots",
    long_about = "blockout\n\nModes:\n- resolve: compute the ordered block-out list for ignore options against a recorded device session.\n- chrome: print status bar, navigation bar and notch bottom bar geometry for a screen.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) with chrome bar heights and the default element margin"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve ignore options into block-out rectangles
    Resolve {
        #[arg(
            long,
            value_name = "PATH",
            help = "Ignore options (JSON, or YAML with a .yaml/.yml extension)"
        )]
        options: PathBuf,

        #[arg(
            long,
            value_name = "PATH",
            help = "Recorded device session (JSON: profile, elements, allowInvisibleElements)"
        )]
        device: PathBuf,

        #[arg(
            long,
            value_name = "PATH",
            help = "Screenshot whose pixel size replaces the recorded screenshot width and screen height"
        )]
        screenshot: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Print OS chrome rectangles for a screen
    Chrome {
        #[arg(long, default_value = "1", help = "Device pixel ratio")]
        dpr: f64,

        #[arg(long, help = "Logical screen size (WIDTHxHEIGHT)")]
        screen: ScreenSize,

        #[arg(long, help = "Device has a notch and home indicator bar")]
        notch: bool,

        #[arg(long, help = "Large notch variant (implies --notch)")]
        large_notch: bool,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat};
    use clap::Parser;

    #[test]
    fn resolve_command_uses_defaults() {
        let cli = Cli::parse_from([
            "blockout",
            "resolve",
            "--options",
            "options.json",
            "--device",
            "session.json",
        ]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Resolve {
                options,
                device,
                screenshot,
                format,
                output,
            } => {
                assert_eq!(options.to_str(), Some("options.json"));
                assert_eq!(device.to_str(), Some("session.json"));
                assert!(screenshot.is_none());
                assert!(matches!(format, OutputFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn chrome_command_parses_screen_and_flags() {
        let cli = Cli::parse_from([
            "blockout",
            "--verbose",
            "chrome",
            "--dpr",
            "3",
            "--screen",
            "414x896",
            "--large-notch",
            "--format",
            "pretty",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Chrome {
                dpr,
                screen,
                notch,
                large_notch,
                format,
                ..
            } => {
                assert!((dpr - 3.0).abs() < f64::EPSILON);
                assert_eq!(screen.width, 414);
                assert_eq!(screen.height, 896);
                assert!(!notch);
                assert!(large_notch);
                assert!(matches!(format, OutputFormat::Pretty));
            }
            _ => panic!("expected chrome command"),
        }
    }

    #[test]
    fn chrome_command_rejects_bad_screen() {
        assert!(Cli::try_parse_from(["blockout", "chrome", "--screen", "414"]).is_err());
    }
}
