//! Hex color parsing for configurable style colors.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Accepts both the long (`#RRGGBB`) and the short CSS form (`#RGB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftmap::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#f1c40f").unwrap();
    /// assert_eq!(color, RgbColor::new(0xf1, 0xc4, 0x0f));
    ///
    /// let color = RgbColor::from_hex("#666").unwrap();
    /// assert_eq!(color, RgbColor::new(0x66, 0x66, 0x66));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected #RGB or #RRGGBB"
            ),
        };

        let channel = |range: std::ops::Range<usize>, label: &str| {
            expanded
                .get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .with_context(|| format!("Invalid {label} channel in hex color '{hex}'"))
        };

        Ok(Self::new(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Converts the color to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_and_short() {
        assert_eq!(
            RgbColor::from_hex("#FFFFFF").unwrap(),
            RgbColor::new(255, 255, 255)
        );
        assert_eq!(
            RgbColor::from_hex("  f1c40f ").unwrap(),
            RgbColor::new(0xf1, 0xc4, 0x0f)
        );
        assert_eq!(RgbColor::from_hex("#abc").unwrap(), RgbColor::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("gray").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(RgbColor::new(0xF1, 0xC4, 0x0F).to_hex(), "#f1c40f");
        assert_eq!(RgbColor::new(0, 0, 0).to_string(), "#000000");
    }
}
