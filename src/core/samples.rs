//! Random sample data for the scatter
//!
//! Values are uniform in [0, 1). Each point also gets a vertical jitter
//! offset, normally distributed around the middle of the plotting band,
//! which only matters for drawing.

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// One scattered point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Position on the axis, in [0, 1)
    pub value: f64,
    /// Vertical position inside the band, in pixels from the top
    pub offset: f32,
}

/// Immutable set of samples owned by one demo instance
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Draw `count` samples for a band `band_height` pixels tall.
    pub fn generate<R: Rng + ?Sized>(count: usize, band_height: f32, rng: &mut R) -> Self {
        let mean = band_height / 2.0;
        let std_dev = band_height / 8.0;
        let jitter = Normal::new(mean, std_dev.max(0.0)).ok();

        let samples = (0..count)
            .map(|_| Sample {
                value: rng.gen::<f64>(),
                offset: jitter.map_or(mean, |n| n.sample(rng)),
            })
            .collect::<Vec<_>>();

        debug!(count, band_height, "Generated samples");
        Self { samples }
    }

    /// Seeded generation; `None` draws the seed from OS entropy.
    pub fn generate_seeded(count: usize, band_height: f32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(count, band_height, &mut rng)
    }

    /// Samples at fixed values with zero offset.
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            samples: values
                .iter()
                .map(|&value| Sample { value, offset: 0.0 })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}
