//! Color types and conversion functions
//!
//! - **Hsl**: cylindrical hue/saturation/lightness, the input side.
//! - **Rgb8**: 8-bit sRGB channels, the output side, with hex formatting.

mod hsl;
mod rgb8;

pub use hsl::Hsl;
pub use rgb8::Rgb8;

/// Convert an HSL triple to 8-bit RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (wrapped modulo 360)
/// * `s` - Saturation in percent (0..=100)
/// * `l` - Lightness in percent (0..=100)
#[inline]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb8 {
    Rgb8::from(Hsl::new(h, s, l))
}

/// Convert an HSL triple to a `#rrggbb` hex string.
///
/// # Example
/// ```
/// use hsl_color::hsl_to_hex;
/// assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
/// assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
/// ```
#[inline]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}
