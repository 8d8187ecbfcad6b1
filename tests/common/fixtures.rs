//! Test fixtures and constants.

use huewheel::models::{AppConfig, ProviderConfig};
use huewheel::services::{ColorApiProvider, ColorFetcher};

/// Path of the scheme endpoint on the mock server
pub const SCHEME_PATH: &str = "/scheme";

/// A color object in The Color API shape
pub fn color_json(hue: u16, saturation: u32, lightness: u32) -> serde_json::Value {
    let hex = huewheel::hsl_to_hex(hue as f64, saturation as f64, lightness as f64);
    serde_json::json!({
        "hex": { "value": hex.to_uppercase(), "clean": hex[1..].to_uppercase() },
        "hsl": { "h": hue, "s": saturation, "l": lightness },
        "name": { "value": format!("Hue {hue}") },
    })
}

/// A full scheme response body with `count` consecutive hues from `hue`
pub fn scheme_json(hue: u16, saturation: u32, lightness: u32, count: usize) -> serde_json::Value {
    let colors: Vec<_> = (0..count)
        .map(|i| color_json(((hue as usize + i) % 360) as u16, saturation, lightness))
        .collect();
    serde_json::json!({
        "mode": "analogic",
        "count": count,
        "colors": colors,
    })
}

/// Configuration pointing at the mock server
pub fn config_for(server_url: &str, batch_size: usize) -> AppConfig {
    AppConfig {
        provider: ProviderConfig {
            endpoint: format!("{server_url}{SCHEME_PATH}"),
            timeout_secs: 5,
        },
        batch_size,
        ..Default::default()
    }
}

/// Fetcher wired to the real HTTP provider against the mock server
pub fn fetcher_for(server_url: &str, batch_size: usize) -> ColorFetcher<ColorApiProvider> {
    let config = config_for(server_url, batch_size);
    let provider = ColorApiProvider::new(&config.provider).expect("Failed to build provider");
    ColorFetcher::from_config(provider, &config).expect("Failed to build fetcher")
}
