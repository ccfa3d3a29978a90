use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An embed side-bar color. Discord reads it as `0xRRGGBB`.
///
/// Any 64-bit integer is accepted and sent unchanged, including values
/// outside the 24-bit RGB range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(i64);

impl Color {
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let r = r as i64;
        let g = g as i64;
        let b = b as i64;
        Self((r << 16) | (g << 8) | b)
    }

    #[must_use]
    pub const fn to_discord(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a plain base-10 integer with an optional sign, e.g. `"7506394"`.
impl FromStr for Color {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_discord())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_rgb_components() {
        assert_eq!(Color::new(0x34, 0x98, 0xdb).to_discord(), 3_447_003);
        assert_eq!(Color::new(0, 0, 0).to_discord(), 0);
        assert_eq!(Color::new(255, 255, 255).to_discord(), 0xff_ff_ff);
    }

    #[test]
    fn parses_base_10() {
        assert_eq!("7506394".parse::<Color>(), Ok(Color::from_raw(7_506_394)));
        assert_eq!("+42".parse::<Color>(), Ok(Color::from_raw(42)));
        assert_eq!("-5".parse::<Color>(), Ok(Color::from_raw(-5)));
        assert_eq!(
            "4294967296".parse::<Color>(),
            Ok(Color::from_raw(4_294_967_296))
        );
        assert!("0x7289da".parse::<Color>().is_err());
        assert!("9223372036854775808".parse::<Color>().is_err());
        assert!(" 1".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&Color::from_raw(15_158_332)).unwrap();
        assert_eq!(json, "15158332");
        assert_eq!(serde_json::to_string(&Color::from_raw(-5)).unwrap(), "-5");

        let parsed: Color = serde_json::from_str("-5").unwrap();
        assert_eq!(parsed, Color::from_raw(-5));
    }
}
