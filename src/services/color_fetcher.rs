use crate::error::{ColorError, ConfigError};
use crate::models::{
    AppConfig, ColorRecord, Hue, SchemeConfig, SchemeRequest, DEFAULT_SCHEME_COUNT,
};
use crate::services::batch_sequencer::{Batch, BatchSequencer};
use crate::services::color_provider::ColorProvider;

/// Entry point for fetching colors, either one random scheme at a time or
/// batch by batch around the wheel.
///
/// Single-shot fetches are stateless and never touch the batch cache.
pub struct ColorFetcher<P> {
    provider: P,
    sequencer: BatchSequencer,
    scheme_count: usize,
}

impl<P: ColorProvider> ColorFetcher<P> {
    pub fn new(provider: P, batch_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            provider,
            sequencer: BatchSequencer::new(batch_size)?,
            scheme_count: DEFAULT_SCHEME_COUNT,
        })
    }

    /// Build a fetcher using batch and scheme sizes from the configuration
    pub fn from_config(provider: P, config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(provider, config.batch_size)?.with_scheme_count(config.scheme_count))
    }

    /// Override the number of colors in a single-shot scheme
    pub fn with_scheme_count(mut self, scheme_count: usize) -> Self {
        self.scheme_count = scheme_count;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn sequencer(&self) -> &BatchSequencer {
        &self.sequencer
    }

    /// Fetch one analogous scheme seeded at a random hue
    pub async fn fetch_colors(
        &self,
        saturation: u32,
        lightness: u32,
    ) -> Result<Vec<ColorRecord>, ColorError> {
        self.fetch_colors_at(Hue::random(), saturation, lightness).await
    }

    /// Fetch one analogous scheme seeded at `hue`
    pub async fn fetch_colors_at(
        &self,
        hue: Hue,
        saturation: u32,
        lightness: u32,
    ) -> Result<Vec<ColorRecord>, ColorError> {
        let request = SchemeRequest::analogic(
            hue,
            SchemeConfig::new(saturation, lightness),
            self.scheme_count,
        );
        self.provider.fetch_scheme(&request).await.map_err(|e| {
            tracing::warn!(hsl = %request.hsl_param(), error = %e, "Error fetching colors");
            ColorError::from(e)
        })
    }

    /// Serve the next batch of the wheel; see [`BatchSequencer::fetch_next_batch`]
    pub async fn fetch_next_batch(
        &mut self,
        saturation: u32,
        lightness: u32,
    ) -> Result<Batch, ColorError> {
        self.sequencer
            .fetch_next_batch(&self.provider, saturation, lightness)
            .await
    }

    pub fn reset_batch_state(&mut self) {
        self.sequencer.reset_batch_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::color_provider::mock::MockProvider;
    use std::sync::Arc;

    fn fetcher(batch_size: usize) -> (Arc<MockProvider>, ColorFetcher<Arc<MockProvider>>) {
        let provider = Arc::new(MockProvider::new());
        let fetcher = ColorFetcher::new(provider.clone(), batch_size).unwrap();
        (provider, fetcher)
    }

    #[tokio::test]
    async fn test_fetch_colors_requests_six_analogic_colors() {
        let (provider, fetcher) = fetcher(36);

        let colors = fetcher.fetch_colors(40, 60).await.unwrap();

        assert_eq!(colors.len(), 6);
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].count, 6);
        assert_eq!(requests[0].config, SchemeConfig::new(40, 60));
        assert!(requests[0].hue.degrees() < 360);
    }

    #[tokio::test]
    async fn test_fetch_colors_at_hue() {
        let (provider, fetcher) = fetcher(36);

        let colors = fetcher.fetch_colors_at(Hue::new(200), 50, 50).await.unwrap();

        assert_eq!(colors[0], MockProvider::record_for(200, 50, 50));
        assert_eq!(provider.requests()[0].hsl_param(), "hsl(200, 50%, 50%)");
    }

    #[tokio::test]
    async fn test_fetch_colors_does_not_touch_batch_state() {
        let (_provider, fetcher) = fetcher(36);

        fetcher.fetch_colors(50, 50).await.unwrap();

        assert_eq!(fetcher.sequencer().current_batch(), 0);
        assert!(fetcher.sequencer().cache().is_empty());
        assert_eq!(fetcher.sequencer().active_config(), None);
    }

    #[tokio::test]
    async fn test_fetch_colors_failure() {
        let (provider, fetcher) = fetcher(36);
        provider.set_failing(true);

        let result = fetcher.fetch_colors(50, 50).await;
        assert!(matches!(result, Err(ColorError::FetchFailed { .. })));
    }

    #[tokio::test]
    async fn test_custom_scheme_count() {
        let (provider, fetcher) = fetcher(36);
        let fetcher = fetcher.with_scheme_count(3);

        let colors = fetcher.fetch_colors(50, 50).await.unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(provider.requests()[0].count, 3);
    }

    #[tokio::test]
    async fn test_batches_and_reset() {
        let (provider, mut fetcher) = fetcher(120);

        for n in 0..3 {
            let batch = fetcher.fetch_next_batch(50, 50).await.unwrap();
            assert_eq!(batch.index, n);
        }
        assert!(matches!(
            fetcher.fetch_next_batch(50, 50).await,
            Err(ColorError::Exhausted)
        ));

        fetcher.reset_batch_state();
        let batch = fetcher.fetch_next_batch(50, 50).await.unwrap();
        assert_eq!(batch.index, 0);
        assert_eq!(provider.call_count(), 4);
    }

    #[test]
    fn test_from_config() {
        let provider = MockProvider::new();
        let config = AppConfig {
            batch_size: 72,
            scheme_count: 4,
            ..Default::default()
        };

        let fetcher = ColorFetcher::from_config(provider, &config).unwrap();
        assert_eq!(fetcher.sequencer().batch_size(), 72);
        assert_eq!(fetcher.scheme_count, 4);
    }

    #[test]
    fn test_from_config_invalid() {
        let config = AppConfig {
            scheme_count: 0,
            ..Default::default()
        };

        let result = ColorFetcher::from_config(MockProvider::new(), &config);
        assert!(matches!(result, Err(ConfigError::InvalidSchemeCount(0))));
    }
}
