//! Packed ARGB colors and per-channel interpolation

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 32-bit packed color, `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    fn channels(self) -> [i32; 4] {
        [
            self.alpha() as i32,
            self.red() as i32,
            self.green() as i32,
            self.blue() as i32,
        ]
    }
}

/// Linear per-channel interpolation between two packed colors.
///
/// Each channel is computed as `start + trunc(fraction * (end - start))`.
/// `fraction` is not clamped; channels are shifted into place and OR-ed
/// without masking, so a channel pushed outside `0..=255` bleeds into its
/// neighbours.
pub fn interpolate_color(fraction: f32, start: Argb, end: Argb) -> Argb {
    let s = start.channels();
    let e = end.channels();

    let mut packed = 0u32;
    for (shift, (from, to)) in [24u32, 16, 8, 0].into_iter().zip(s.into_iter().zip(e)) {
        let channel = from.wrapping_add((fraction * (to - from) as f32) as i32);
        packed |= (channel as u32) << shift;
    }

    Argb(packed)
}

impl From<Argb> for iced::Color {
    fn from(argb: Argb) -> Self {
        iced::Color::from_rgba8(
            argb.red(),
            argb.green(),
            argb.blue(),
            argb.alpha() as f32 / 255.0,
        )
    }
}

impl From<iced::Color> for Argb {
    fn from(color: iced::Color) -> Self {
        let [r, g, b, a] = color.into_rgba8();
        Argb::from_channels(a, r, g, b)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Failure to parse a `#RRGGBB` / `#AARRGGBB` color string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArgbError(String);

impl fmt::Display for ParseArgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}', expected #RRGGBB or #AARRGGBB", self.0)
    }
}

impl std::error::Error for ParseArgbError {}

impl FromStr for Argb {
    type Err = ParseArgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let err = || ParseArgbError(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            // Opaque when alpha is omitted
            6 => Ok(Argb(0xFF00_0000 | value)),
            8 => Ok(Argb(value)),
            _ => Err(err()),
        }
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArgbVisitor;

        impl Visitor<'_> for ArgbVisitor {
            type Value = Argb;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a color string like \"#AARRGGBB\" or a packed 32-bit integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Argb, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Argb, E> {
                u32::try_from(v)
                    .map(Argb)
                    .map_err(|_| E::custom(format!("color {v} does not fit in 32 bits")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Argb, E> {
                // Signed packed ints (e.g. -16777216 for opaque black)
                i32::try_from(v)
                    .map(|v| Argb(v as u32))
                    .map_err(|_| E::custom(format!("color {v} does not fit in 32 bits")))
            }
        }

        deserializer.deserialize_any(ArgbVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u32; 8] = [
        0x0000_0000,
        0xFFFF_FFFF,
        0xFF00_0000,
        0x00FF_FFFF,
        0x80FF_1493,
        0x1234_5678,
        0xFE01_7F80,
        0xDEAD_BEEF,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for &start in &SAMPLES {
            for &end in &SAMPLES {
                assert_eq!(interpolate_color(0.0, Argb(start), Argb(end)), Argb(start));
                assert_eq!(interpolate_color(1.0, Argb(start), Argb(end)), Argb(end));
            }
        }
    }

    #[test]
    fn test_midpoint_truncates() {
        let mid = interpolate_color(0.5, Argb::BLACK, Argb::WHITE);
        assert_eq!(mid, Argb(0xFF7F_7F7F));

        // Decreasing channel truncates toward the start value
        let mid = interpolate_color(0.5, Argb::WHITE, Argb::BLACK);
        assert_eq!(mid, Argb(0xFF80_8080));
    }

    #[test]
    fn test_out_of_range_fraction_bleeds_into_neighbours() {
        // Blue overshoots to 0x100 and carries into green
        let c = interpolate_color(2.0, Argb(0), Argb(0x0000_0080));
        assert_eq!(c, Argb(0x0000_0100));

        // A negative blue channel sets every bit
        let c = interpolate_color(-1.0, Argb(0), Argb(0x0000_0001));
        assert_eq!(c, Argb(0xFFFF_FFFF));

        let c = interpolate_color(2.0, Argb::BLACK, Argb::WHITE);
        assert_eq!(c, Argb(0xFFFF_FFFE));
    }

    #[test]
    fn test_channels_are_independent() {
        let start = Argb::from_channels(0x00, 0x10, 0x80, 0xFF);
        let end = Argb::from_channels(0xFF, 0x10, 0x00, 0x7F);
        let c = interpolate_color(0.25, start, end);
        assert_eq!(c.alpha(), 63);
        assert_eq!(c.red(), 0x10);
        assert_eq!(c.green(), 0x80 - 32);
        assert_eq!(c.blue(), 0xFF - 32);
    }

    #[test]
    fn test_per_channel_monotonic() {
        let start = Argb(0x1020_F030);
        let end = Argb(0xF0E0_1040);
        let mut prev = start;
        for step in 1..100 {
            let f = step as f32 / 100.0;
            let c = interpolate_color(f, start, end);
            assert!(c.alpha() >= prev.alpha());
            assert!(c.red() >= prev.red());
            assert!(c.green() <= prev.green());
            assert!(c.blue() >= prev.blue());
            prev = c;
        }
    }

    #[test]
    fn test_parse_color_strings() {
        assert_eq!("#FF1493".parse::<Argb>().unwrap(), Argb(0xFFFF_1493));
        assert_eq!("#80ff1493".parse::<Argb>().unwrap(), Argb(0x80FF_1493));
        assert_eq!("00000000".parse::<Argb>().unwrap(), Argb(0));
        assert!("#FFF".parse::<Argb>().is_err());
        assert!("#GGGGGG".parse::<Argb>().is_err());
    }

    #[test]
    fn test_deserialize_color_forms() {
        let c: Argb = serde_json::from_str("\"#FF888888\"").unwrap();
        assert_eq!(c, Argb(0xFF88_8888));
        let c: Argb = serde_json::from_str("4278190080").unwrap();
        assert_eq!(c, Argb::BLACK);
        let c: Argb = serde_json::from_str("-16777216").unwrap();
        assert_eq!(c, Argb::BLACK);
        assert!(serde_json::from_str::<Argb>("true").is_err());
    }

    #[test]
    fn test_display_and_iced_conversion() {
        assert_eq!(Argb(0xFFFF_1493).to_string(), "#FFFF1493");
        let color: iced::Color = Argb(0xFFFF_1493).into();
        assert_eq!(Argb::from(color), Argb(0xFFFF_1493));
    }
}
