use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Severity;

/// An opaque RGB color for drawing route segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    /// Routes without any nearby incidents.
    pub const CLEAR: Color = Color::GREEN;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Parses "#RRGGBB". Returns None for anything else.
    pub fn hex(raw: &str) -> Option<Color> {
        let digits = raw.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Color::rgb(r, g, b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// How a stretch of route near an incident of this severity is drawn. Light congestion looks
    /// the same as a clear road.
    pub fn for_congestion(severity: Severity) -> Color {
        match severity {
            Severity::Severe => Color::RED,
            Severity::Moderate => Color::ORANGE,
            Severity::Light => Color::CLEAR,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(Color::hex("#ffa500"), Some(Color::ORANGE));
        assert_eq!(Color::hex("#008000"), Some(Color::CLEAR));
        assert_eq!(Color::RED.to_hex(), "#FF0000");
        assert_eq!(Color::hex("ff0000"), None);
        assert_eq!(Color::hex("#ff00"), None);
        assert_eq!(Color::hex("#gg0000"), None);
    }

    #[test]
    fn congestion_palette() {
        assert_eq!(Color::for_congestion(Severity::Severe), Color::RED);
        assert_eq!(Color::for_congestion(Severity::Moderate), Color::ORANGE);
        assert_eq!(Color::for_congestion(Severity::Light), Color::CLEAR);
    }
}
