//! RGB colors and the deck palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case hex form without a leading `#`, as `a:srgbClr` expects.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a six-digit hex color, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let component = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::rgb(component(0)?, component(2)?, component(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// The fixed set of named colors a deck draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Slide background.
    pub background: Color,
    pub white: Color,
    pub light_gray: Color,
    /// Footer and arrow text.
    pub mid_gray: Color,
    pub electric_blue: Color,
    pub teal: Color,
    pub purple: Color,
    pub red: Color,
    pub green: Color,
    pub amber: Color,
    /// Default card fill.
    pub card_bg: Color,
    /// Table headers and flow boxes.
    pub card_bg_light: Color,
    /// Alternate table row stripe.
    pub card_bg_dark: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color::rgb(15, 23, 42).hex(), "0F172A");
        assert_eq!(Color::WHITE.hex(), "FFFFFF");
        assert_eq!(Color::rgb(59, 130, 246).to_string(), "#3B82F6");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("06B6D4"), Some(Color::rgb(6, 182, 212)));
        assert_eq!(Color::from_hex("#8b5cf6"), Some(Color::rgb(139, 92, 246)));
        assert_eq!(Color::from_hex("FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }
}
