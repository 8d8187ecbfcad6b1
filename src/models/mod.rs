pub mod color_record;
pub mod config;
pub mod hue;
pub mod scheme;

pub use color_record::ColorRecord;
pub use config::{AppConfig, ProviderConfig, DEFAULT_ENDPOINT};
pub use hue::{Hue, HUE_COUNT};
pub use scheme::{SchemeConfig, SchemeMode, SchemeRequest, DEFAULT_SCHEME_COUNT};
