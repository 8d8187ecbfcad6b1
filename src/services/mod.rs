pub mod batch_sequencer;
pub mod color_fetcher;
pub mod color_provider;
pub mod hue_cache;

pub use batch_sequencer::{Batch, BatchSequencer};
pub use color_fetcher::ColorFetcher;
pub use color_provider::{parse_scheme_response, ColorApiProvider, ColorProvider};
pub use hue_cache::HueCache;
