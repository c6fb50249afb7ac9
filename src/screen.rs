use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::Result;

/// Width and height of a screen or screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    /// Reads the pixel dimensions of a screenshot without decoding it.
    pub fn of_image(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self { width, height })
    }
}

/// Rejected `WIDTHxHEIGHT` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScreenSizeParseError {
    #[error("expected WIDTHxHEIGHT (e.g. 375x812), got '{0}'")]
    Format(String),
    #[error("{side} must be a positive integer, got '{value}'")]
    Side { side: &'static str, value: String },
}

fn parse_side(side: &'static str, raw: &str) -> std::result::Result<u32, ScreenSizeParseError> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| ScreenSizeParseError::Side {
            side,
            value: raw.to_string(),
        })
}

impl FromStr for ScreenSize {
    type Err = ScreenSizeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut sides = s.split(['x', 'X']);
        match (sides.next(), sides.next(), sides.next()) {
            (Some(width), Some(height), None) => Ok(Self {
                width: parse_side("width", width)?,
                height: parse_side("height", height)?,
            }),
            _ => Err(ScreenSizeParseError::Format(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let size: ScreenSize = "375x812".parse().unwrap();
        assert_eq!(size.width, 375);
        assert_eq!(size.height, 812);
    }

    #[test]
    fn test_parse_with_spaces() {
        let size: ScreenSize = " 412 x 915 ".parse().unwrap();
        assert_eq!(size, ScreenSize { width: 412, height: 915 });
    }

    #[test]
    fn test_parse_upper_case_separator() {
        assert_eq!("1080X2340".parse::<ScreenSize>(), Ok(ScreenSize { width: 1080, height: 2340 }));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "375".parse::<ScreenSize>(),
            Err(ScreenSizeParseError::Format("375".into()))
        );
        assert!(matches!(
            "375x812x3".parse::<ScreenSize>(),
            Err(ScreenSizeParseError::Format(_))
        ));
        assert_eq!(
            "x812".parse::<ScreenSize>(),
            Err(ScreenSizeParseError::Side { side: "width", value: String::new() })
        );
        assert!("abcx812".parse::<ScreenSize>().is_err());
        assert!("0x812".parse::<ScreenSize>().is_err());
        let err = "375x0".parse::<ScreenSize>().unwrap_err();
        assert_eq!(err.to_string(), "height must be a positive integer, got '0'");
    }

    #[test]
    fn test_display() {
        assert_eq!(ScreenSize { width: 1080, height: 2340 }.to_string(), "1080x2340");
    }

    #[test]
    fn reads_dimensions_from_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        image::RgbaImage::new(6, 4).save(&path).unwrap();

        assert_eq!(ScreenSize::of_image(&path).unwrap(), ScreenSize { width: 6, height: 4 });
    }
}
