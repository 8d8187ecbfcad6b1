//! hsl-color: HSL to RGB/hex conversion
//!
//! A small, dependency-free helper for turning hue/saturation/lightness
//! triples into 8-bit RGB and `#rrggbb` strings.
//!
//! # Quick Start
//!
//! ```
//! use hsl_color::hsl_to_hex;
//!
//! assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
//! assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
//! ```
//!
//! # Conventions
//!
//! - Hue is in degrees. It is normalized modulo 360 before conversion, so
//!   `360.0` is the same color as `0.0` and negative hues wrap around.
//! - Saturation and lightness are percentages (`0.0..=100.0`). Values outside
//!   that range are clamped.
//! - Channels are rounded to the nearest integer and clamped to `0..=255`.

mod color;

pub use color::{hsl_to_hex, hsl_to_rgb, Hsl, Rgb8};
