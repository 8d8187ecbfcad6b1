//! Huewheel - walk the color wheel in cached batches
//!
//! Fetches analogous color schemes from a remote provider, either as a single
//! random scheme or as consecutive hue batches memoized per hue.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use hsl_color::{hsl_to_hex, hsl_to_rgb};
