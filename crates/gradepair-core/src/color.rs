//! White-to-blue color scale for normalized cell weights.

use std::fmt;

use serde::Serialize;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// `#rrggbb`, lowercase, two digits per channel.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Map a weight in [0, 1] onto the scale: 0 is white, 1 is pure blue.
///
/// Red and green share the value `round(255 * (1 - weight))`; blue stays at
/// 255. Out-of-range weights are clamped and NaN counts as 0.
pub fn weight_to_color(weight: f64) -> Rgb {
    let w = if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    };
    let level = (255.0 * (1.0 - w)).round() as u8;
    Rgb::new(level, level, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(weight_to_color(0.0), Rgb::WHITE);
        assert_eq!(weight_to_color(1.0), Rgb::BLUE);
    }

    #[test]
    fn test_midpoint_rounds() {
        // 255 * 0.5 = 127.5 rounds up.
        assert_eq!(weight_to_color(0.5), Rgb::new(128, 128, 255));
        assert_eq!(weight_to_color(0.25), Rgb::new(191, 191, 255));
    }

    #[test]
    fn test_monotonic() {
        let mut prev = weight_to_color(0.0);
        for i in 1..=1000 {
            let c = weight_to_color(i as f64 / 1000.0);
            assert!(c.r <= prev.r);
            assert_eq!(c.r, c.g);
            assert_eq!(c.b, 255);
            prev = c;
        }
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(weight_to_color(-0.5), Rgb::WHITE);
        assert_eq!(weight_to_color(3.0), Rgb::BLUE);
        assert_eq!(weight_to_color(f64::NAN), Rgb::WHITE);
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Rgb::BLUE.to_hex(), "#0000ff");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
        assert_eq!(weight_to_color(0.99).to_hex(), "#0303ff");
    }
}
