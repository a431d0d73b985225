/// Color utilities: parsing, random generation and brightness classification.
use std::fmt;
use std::str::FromStr;

use rand::RngExt;
use thiserror::Error;

/// Weights of the broadcast luminance formula, scaled by 1000.
const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;

/// A color is "light" when its weighted luminance is above this value (0-255 scale).
pub const LIGHT_THRESHOLD: u32 = 155;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color '{0}': expected a hex code like #RRGGBB")]
    InvalidHex(String),
}

/// A 24-bit RGB color, displayed as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Formats the channels as `rgb(R, G, B)` for display.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Weighted luminance multiplied by 1000, so the threshold check stays exact.
    pub fn luminance_milli(&self) -> u32 {
        RED_WEIGHT * u32::from(self.r)
            + GREEN_WEIGHT * u32::from(self.g)
            + BLUE_WEIGHT * u32::from(self.b)
    }

    /// Whether dark foreground elements should be drawn on top of this color.
    pub fn is_light(&self) -> bool {
        self.luminance_milli() > LIGHT_THRESHOLD * 1000
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Generate a uniformly random color using the thread-local generator.
pub fn random_color() -> Color {
    let mut rng = rand::rng();
    random_color_with(&mut rng)
}

/// Generate a random color by picking its six hex digits independently.
pub fn random_color_with<R: RngExt + ?Sized>(rng: &mut R) -> Color {
    let mut digit = || rng.random_range(0..16u8);
    let mut channel = || (digit() << 4) | digit();
    Color::new(channel(), channel(), channel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_canonical_hex(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'))
    }

    #[test]
    fn random_colors_are_uppercase_hex() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let hex = random_color_with(&mut rng).to_hex();
            assert!(is_canonical_hex(&hex), "{hex}");
        }
        assert!(is_canonical_hex(&random_color().to_hex()));
    }

    #[test]
    fn random_colors_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = random_color_with(&mut rng);
        let differs = (0..20).any(|_| random_color_with(&mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn parses_with_and_without_hash() {
        let expected = Color::new(0xA1, 0xB2, 0xC3);
        assert_eq!("#A1B2C3".parse::<Color>(), Ok(expected));
        assert_eq!("a1b2c3".parse::<Color>(), Ok(expected));
        assert_eq!(expected.to_string(), "#A1B2C3");
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "#", "#FFF", "#GGGGGG", "#1234567", "rgb(1,2,3)"] {
            assert_eq!(
                bad.parse::<Color>(),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn classifies_brightness() {
        assert!("#FFFFFF".parse::<Color>().unwrap().is_light());
        assert!(!"#000000".parse::<Color>().unwrap().is_light());
        assert!(!"#808080".parse::<Color>().unwrap().is_light());
    }

    #[test]
    fn threshold_is_strict() {
        // Grays have luminance equal to their channel value.
        assert!(!Color::new(155, 155, 155).is_light());
        assert!(Color::new(156, 156, 156).is_light());
        // Pure green alone stays just under the cutoff; a little blue tips it over.
        assert!(!Color::new(0, 255, 0).is_light());
        assert!(Color::new(0, 255, 64).is_light());
        assert!(!Color::new(0, 0, 255).is_light());
    }

    #[test]
    fn formats_rgb_string() {
        let red: Color = "#FF0000".parse().unwrap();
        assert_eq!(red.to_rgb_string(), "rgb(255, 0, 0)");
        let mixed: Color = "#0A7F10".parse().unwrap();
        assert_eq!(mixed.to_rgb_string(), "rgb(10, 127, 16)");
    }
}
