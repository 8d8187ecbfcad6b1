//! Batched walk around the color wheel.
//!
//! The wheel is split into consecutive runs of `batch_size` hues. Each call to
//! [`BatchSequencer::fetch_next_batch`] serves the next run, either from the
//! [`HueCache`] or with a single scheme request to the provider. Once the
//! cursor passes hue 360 the sequencer is exhausted until it is reset.
//!
//! The cache only holds colors for one saturation/lightness pair. A call with
//! a different pair resets the sequencer before anything else happens.

use crate::error::{ColorError, ConfigError};
use crate::models::{ColorRecord, Hue, SchemeConfig, SchemeRequest, HUE_COUNT};
use crate::services::color_provider::ColorProvider;
use crate::services::hue_cache::HueCache;

/// One served batch of colors
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Zero-based index of this batch
    pub index: usize,
    /// First hue of the batch
    pub start_hue: Hue,
    /// Colors paired with their hue, in wheel order
    pub entries: Vec<(Hue, ColorRecord)>,
    /// Whether the batch was served without contacting the provider
    pub from_cache: bool,
}

impl Batch {
    pub fn hues(&self) -> impl Iterator<Item = Hue> + '_ {
        self.entries.iter().map(|(hue, _)| *hue)
    }

    pub fn colors(&self) -> impl Iterator<Item = &ColorRecord> + '_ {
        self.entries.iter().map(|(_, record)| record)
    }

    pub fn into_colors(self) -> Vec<ColorRecord> {
        self.entries.into_iter().map(|(_, record)| record).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cursor over the hue wheel with a per-hue cache
#[derive(Debug, Clone)]
pub struct BatchSequencer {
    batch_size: usize,
    current_batch: usize,
    cache: HueCache,
    active_config: Option<SchemeConfig>,
}

impl BatchSequencer {
    /// Create a sequencer serving `batch_size` hues per batch (1..=360)
    pub fn new(batch_size: usize) -> Result<Self, ConfigError> {
        if batch_size == 0 || batch_size > HUE_COUNT as usize {
            return Err(ConfigError::InvalidBatchSize(batch_size));
        }
        Ok(Self {
            batch_size,
            current_batch: 0,
            cache: HueCache::new(),
            active_config: None,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Index of the next batch to serve
    pub fn current_batch(&self) -> usize {
        self.current_batch
    }

    pub fn cache(&self) -> &HueCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut HueCache {
        &mut self.cache
    }

    /// Configuration the cache currently belongs to
    pub fn active_config(&self) -> Option<SchemeConfig> {
        self.active_config
    }

    /// Number of batches needed to cover the wheel
    pub fn total_batches(&self) -> usize {
        (HUE_COUNT as usize).div_ceil(self.batch_size)
    }

    fn start_degrees(&self) -> usize {
        self.current_batch * self.batch_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.start_degrees() >= HUE_COUNT as usize
    }

    /// Hues of the next batch, or `None` once the wheel is used up
    pub fn next_batch_hues(&self) -> Option<Vec<Hue>> {
        if self.is_exhausted() {
            return None;
        }
        let start = Hue::new(self.start_degrees() as i64);
        Some((0..self.batch_size).map(|i| start.offset(i)).collect())
    }

    /// True when the next batch can be served from the cache alone
    pub fn next_batch_cached(&self) -> bool {
        self.next_batch_hues()
            .is_some_and(|hues| self.cache.contains_all(&hues))
    }

    /// Serve the next batch of colors for the given saturation and lightness.
    ///
    /// Fails with [`ColorError::Exhausted`] once every hue has been served and
    /// with [`ColorError::FetchFailed`] when the provider call fails. Neither
    /// failure advances the cursor or touches the cache.
    pub async fn fetch_next_batch<P>(
        &mut self,
        provider: &P,
        saturation: u32,
        lightness: u32,
    ) -> Result<Batch, ColorError>
    where
        P: ColorProvider + ?Sized,
    {
        let config = SchemeConfig::new(saturation, lightness);
        self.activate(config);

        let hues = self.next_batch_hues().ok_or_else(|| {
            tracing::debug!(batch = self.current_batch, %config, "Hue space exhausted");
            ColorError::Exhausted
        })?;
        let start_hue = hues[0];
        let index = self.current_batch;

        if let Some(colors) = self.cache.get_all(&hues) {
            tracing::debug!(batch = index, start_hue = %start_hue, "Batch served from cache");
            self.current_batch += 1;
            return Ok(Batch {
                index,
                start_hue,
                entries: hues.into_iter().zip(colors).collect(),
                from_cache: true,
            });
        }

        tracing::debug!(
            batch = index,
            start_hue = %start_hue,
            count = self.batch_size,
            %config,
            "Batch cache miss, fetching from provider"
        );
        let request = SchemeRequest::analogic(start_hue, config, self.batch_size);
        let colors = provider.fetch_scheme(&request).await.map_err(|e| {
            tracing::warn!(batch = index, start_hue = %start_hue, error = %e, "Error fetching colors");
            ColorError::from(e)
        })?;

        if colors.len() != self.batch_size {
            tracing::warn!(
                batch = index,
                expected = self.batch_size,
                received = colors.len(),
                "Provider returned a different number of colors than requested"
            );
        }

        let entries: Vec<(Hue, ColorRecord)> = hues
            .into_iter()
            .zip(colors)
            .map(|(hue, record)| (hue, self.cache.insert(hue, record).clone()))
            .collect();

        self.current_batch += 1;
        Ok(Batch {
            index,
            start_hue,
            entries,
            from_cache: false,
        })
    }

    /// Clear the cache and rewind to the first batch
    pub fn reset_batch_state(&mut self) {
        self.cache.clear();
        self.current_batch = 0;
        self.active_config = None;
        tracing::debug!("Batch state reset");
    }

    fn activate(&mut self, config: SchemeConfig) {
        match self.active_config {
            Some(active) if active == config => {}
            Some(active) => {
                tracing::info!(from = %active, to = %config, "Configuration changed, resetting batch state");
                self.reset_batch_state();
                self.active_config = Some(config);
            }
            None => self.active_config = Some(config),
        }
    }
}
