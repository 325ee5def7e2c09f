//! The packed `Argb` color exchanged through the public API.
//!
//! Stores four 8-bit channels. Hex parsing accepts the `RGB`, `ARGB`, `RRGGBB`
//! and `AARRGGBB` forms; formatting always produces `AARRGGBB`.

use std::fmt;
use std::str::FromStr;

use floem::peniko::Color;
use serde::{Deserialize, Serialize};

use crate::error::HexParseError;

/// Color with alpha, red, green and blue channels in the 0–255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl Argb {
    pub const WHITE: Argb = Argb::new(255, 255, 255, 255);
    pub const BLACK: Argb = Argb::new(255, 0, 0, 0);
    pub const TRANSPARENT: Argb = Argb::new(0, 0, 0, 0);

    /// Alpha channel.
    pub const fn a(&self) -> u8 {
        self.a
    }
    /// Red channel.
    pub const fn r(&self) -> u8 {
        self.r
    }
    /// Green channel.
    pub const fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel.
    pub const fn b(&self) -> u8 {
        self.b
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Argb {
    /// Create from four 0–255 channel values.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Create from f64 RGBA (all 0.0–1.0). Out of range values are clamped.
    pub fn from_rgba_f64(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            a: unit_to_byte(a),
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    /// Convert to an f64 RGBA tuple (all 0.0–1.0).
    pub fn to_rgba_f64(&self) -> (f64, f64, f64, f64) {
        (
            byte_to_unit(self.r),
            byte_to_unit(self.g),
            byte_to_unit(self.b),
            byte_to_unit(self.a),
        )
    }

    /// Pack into `0xAARRGGBB`.
    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Unpack from `0xAARRGGBB`.
    pub const fn from_u32(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Copy of this color with another alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse a hex string (with or without `#`, 3, 4, 6, or 8 digits).
    ///
    /// 4 and 8-digit hex carry alpha first (ARGB). 3 and 6-digit hex are opaque.
    pub fn from_hex(hex: &str) -> Result<Self, HexParseError> {
        let stripped = hex.trim_start_matches('#');
        let mut digits = Vec::with_capacity(8);
        for c in stripped.chars() {
            let d = c.to_digit(16).ok_or(HexParseError::InvalidDigit(c))?;
            digits.push(d as u8);
        }
        let pair = |hi: u8, lo: u8| (hi << 4) | lo;
        match digits[..] {
            [r, g, b] => Ok(Self::new(255, r * 17, g * 17, b * 17)),
            [a, r, g, b] => Ok(Self::new(a * 17, r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::from_rgb(
                pair(r1, r2),
                pair(g1, g2),
                pair(b1, b2),
            )),
            [a1, a2, r1, r2, g1, g2, b1, b2] => Ok(Self::new(
                pair(a1, a2),
                pair(r1, r2),
                pair(g1, g2),
                pair(b1, b2),
            )),
            _ => Err(HexParseError::InvalidLength(digits.len())),
        }
    }

    /// Format as uppercase `AARRGGBB` (no `#` prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn byte_to_unit(v: u8) -> f64 {
    v as f64 / 255.0
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Argb {
    type Error = HexParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(value: Argb) -> Self {
        value.to_string()
    }
}

impl From<Argb> for Color {
    fn from(c: Argb) -> Self {
        Color::rgba8(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Argb::from_hex("#FFF").unwrap(), Argb::WHITE);
        assert_eq!(Argb::from_hex("8F00").unwrap(), Argb::new(0x88, 0xFF, 0, 0));
        assert_eq!(
            Argb::from_hex("123456").unwrap(),
            Argb::new(255, 0x12, 0x34, 0x56)
        );
        assert_eq!(
            Argb::from_hex("#80aBcDeF").unwrap(),
            Argb::new(0x80, 0xAB, 0xCD, 0xEF)
        );
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(Argb::from_hex("12345"), Err(HexParseError::InvalidLength(5)));
        assert_eq!(Argb::from_hex(""), Err(HexParseError::InvalidLength(0)));
        assert_eq!(
            Argb::from_hex("12345G"),
            Err(HexParseError::InvalidDigit('G'))
        );
    }

    #[test]
    fn hex_output_is_uppercase_argb() {
        assert_eq!(Argb::new(0x0A, 0xBC, 0xDE, 0xF0).to_hex(), "0ABCDEF0");
        assert_eq!(Argb::BLACK.to_string(), "#FF000000");
    }

    #[test]
    fn packs_alpha_in_high_byte() {
        let c = Argb::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_u32(), 0x1122_3344);
        assert_eq!(Argb::from_u32(0x1122_3344), c);
    }

    #[test]
    fn unit_channels_round_and_clamp() {
        let c = Argb::from_rgba_f64(0.5, 1.5, -0.2, 1.0);
        assert_eq!(c, Argb::new(255, 128, 255, 0));
        let (r, _, _, a) = Argb::from_rgb(51, 0, 0).to_rgba_f64();
        assert!((r - 0.2).abs() < 1e-9);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Argb::new(0x40, 0, 0, 0)).unwrap();
        assert_eq!(json, "\"#40000000\"");
        let back: Argb = serde_json::from_str("\"#fff\"").unwrap();
        assert_eq!(back, Argb::WHITE);
        assert!(serde_json::from_str::<Argb>("\"#ggg\"").is_err());
    }
}
