use serde::{Deserialize, Serialize};

use super::distance::nearest_center;
use crate::error::QuantizeError;
use crate::raster::Rgb;

/// A running color estimate and the number of samples that shaped it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub center: Rgb,
    pub size: u64,
}

impl Cluster {
    /// A freshly seeded cluster of size 1
    pub fn new(center: Rgb) -> Self {
        Self { center, size: 1 }
    }

    /// Pull the center toward `sample` with rate `(size + 1)^-exponent`
    pub fn absorb(&mut self, sample: &Rgb, exponent: f64) {
        let new_size = self.size.saturating_add(1);
        let rate = (new_size as f64).powf(-exponent);

        self.center.red += rate * (sample.red - self.center.red);
        self.center.green += rate * (sample.green - self.center.green);
        self.center.blue += rate * (sample.blue - self.center.blue);
        self.size = new_size;
    }
}

/// Ordered set of clusters; indices follow seeding order and never change
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Palette {
    clusters: Vec<Cluster>,
}

impl Palette {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            clusters: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub(crate) fn clusters_mut(&mut self) -> &mut [Cluster] {
        &mut self.clusters
    }

    /// Center colors in palette order
    pub fn centers(&self) -> Vec<Rgb> {
        self.clusters.iter().map(|c| c.center).collect()
    }

    /// Index of the nearest center and its squared distance
    pub fn nearest(&self, pixel: &Rgb) -> (usize, f64) {
        nearest_center(&self.clusters, pixel)
    }

    /// Fail unless the palette can be clustered against
    pub(crate) fn ensure_usable(&self) -> Result<(), QuantizeError> {
        if self.clusters.len() < 2 {
            return Err(QuantizeError::PaletteTooSmall(self.clusters.len()));
        }
        Ok(())
    }
}

impl From<Vec<Cluster>> for Palette {
    fn from(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }
}

/// Parameters of online (MacQueen) clustering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnlineParams {
    /// Learning rate exponent in `[0.5, 1.0]`; 1.0 gives a plain running mean
    pub learning_exponent: f64,
    /// Fraction of the pixel count to present, in `(0, 1]`
    pub sample_rate: f64,
}

impl OnlineParams {
    pub fn new(learning_exponent: f64, sample_rate: f64) -> Result<Self, QuantizeError> {
        let params = Self {
            learning_exponent,
            sample_rate,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), QuantizeError> {
        if !(0.5..=1.0).contains(&self.learning_exponent) {
            return Err(QuantizeError::InvalidLearningExponent(
                self.learning_exponent,
            ));
        }
        if !(self.sample_rate > 0.0 && self.sample_rate <= 1.0) {
            return Err(QuantizeError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }

    /// Number of samples presented for an image of `pixel_count` pixels
    pub fn presentations(&self, pixel_count: usize) -> u64 {
        (pixel_count as f64 * self.sample_rate).floor() as u64
    }
}

impl Default for OnlineParams {
    fn default() -> Self {
        Self {
            learning_exponent: 0.5,
            sample_rate: 1.0,
        }
    }
}

/// Objective value and membership churn of one Lloyd iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    pub iteration: u32,
    /// Sum of squared distances from each pixel to its assigned center
    pub objective: f64,
    pub changes: usize,
}

#[derive(Debug, Clone)]
pub struct ClusterResult {
    pub palette: Palette,
    pub iterations: u32,
    /// True when the last iteration moved no pixel
    pub converged: bool,
    pub trace: Vec<IterationStats>,
}
