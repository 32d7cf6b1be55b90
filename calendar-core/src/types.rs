use crate::error::{Result, SimError};

/// Index of a month in the registry, `0` for January through `11` for December.
pub type MonthIndex = usize;

/// Number of months held by a [`crate::month::MonthRegistry`].
pub const MONTH_COUNT: usize = 12;

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Parses a `#RRGGBB` colour string.
    ///
    /// ### Errors
    /// Returns [`SimError::InvalidConfiguration`] if the string is not
    /// exactly a `#` followed by six hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bad = || SimError::InvalidConfiguration(format!("malformed colour `{s}`"));
        let digits = s.strip_prefix('#').ok_or_else(bad)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1), clamped.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Size of the drawing canvas in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
