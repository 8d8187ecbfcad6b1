use serde::{Deserialize, Serialize};
use std::fmt;

use super::hue::Hue;

/// Number of colors requested by a single-shot scheme fetch
pub const DEFAULT_SCHEME_COUNT: usize = 6;

/// Scheme generation mode understood by The Color API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeMode {
    Monochrome,
    MonochromeDark,
    MonochromeLight,
    /// Neighbouring hues around the seed color
    #[default]
    Analogic,
    Complement,
    AnalogicComplement,
    Triad,
    Quad,
}

impl SchemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeMode::Monochrome => "monochrome",
            SchemeMode::MonochromeDark => "monochrome-dark",
            SchemeMode::MonochromeLight => "monochrome-light",
            SchemeMode::Analogic => "analogic",
            SchemeMode::Complement => "complement",
            SchemeMode::AnalogicComplement => "analogic-complement",
            SchemeMode::Triad => "triad",
            SchemeMode::Quad => "quad",
        }
    }
}

impl fmt::Display for SchemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Saturation/lightness pair a cache is populated for.
///
/// Values are percentages but are not validated; out-of-range values are
/// passed to the provider as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeConfig {
    pub saturation: u32,
    pub lightness: u32,
}

impl SchemeConfig {
    pub fn new(saturation: u32, lightness: u32) -> Self {
        Self {
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for SchemeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s={}% l={}%", self.saturation, self.lightness)
    }
}

/// A request for one color scheme from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRequest {
    pub mode: SchemeMode,
    pub count: usize,
    pub hue: Hue,
    pub config: SchemeConfig,
}

impl SchemeRequest {
    /// Analogous scheme of `count` colors seeded at `hue`
    pub fn analogic(hue: Hue, config: SchemeConfig, count: usize) -> Self {
        Self {
            mode: SchemeMode::Analogic,
            count,
            hue,
            config,
        }
    }

    /// Seed color in CSS notation, e.g. `hsl(120, 50%, 50%)`
    pub fn hsl_param(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.config.saturation, self.config.lightness
        )
    }

    /// Query parameters for the scheme endpoint
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("mode", self.mode.to_string()),
            ("count", self.count.to_string()),
            ("hsl", self.hsl_param()),
        ]
    }
}
