//! 8-bit RGB color type

use std::fmt;

/// An 8-bit per channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from unit-range channels.
    ///
    /// Rounds to nearest and clamps values to the 0..=255 range.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    /// Format as a lowercase, zero-padded `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use hsl_color::Rgb8;
    /// assert_eq!(Rgb8::new(0, 10, 255).to_hex(), "#000aff");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
