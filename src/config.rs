use chrono::Utc;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::clusterer::OnlineParams;
use crate::error::QuantizeError;

/// Clustering algorithm refining the maximin seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Online k-means, one sampled pixel at a time
    Macqueen,
    /// Batch k-means, full passes until no pixel moves
    Lloyd,
}

/// Order in which online clustering visits pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PresentationOrder {
    /// Sobol points over the pixel grid
    Quasi,
    /// Mersenne Twister draws over all pixels
    Pseudo,
}

/// Validated parameters of a quantization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizeConfig {
    pub num_colors: usize,
    pub algorithm: Algorithm,
    pub order: PresentationOrder,
    pub learning_exponent: f64,
    pub sample_rate: f64,
    pub num_runs: u32,
    pub seed: Option<u32>,
    pub max_iters: u32,
}

impl QuantizeConfig {
    pub fn builder() -> QuantizeConfigBuilder {
        QuantizeConfigBuilder::new()
    }

    /// Check every parameter domain and the run-count combination rule
    pub fn validate(&self) -> Result<(), QuantizeError> {
        if self.num_colors < 2 {
            return Err(QuantizeError::PaletteTooSmall(self.num_colors));
        }
        self.online_params().validate()?;
        if self.num_runs == 0 {
            return Err(QuantizeError::InvalidRunCount(self.num_runs));
        }
        if self.num_runs > 1 && !self.uses_prng() {
            return Err(QuantizeError::RunsRequirePseudoRandom);
        }
        if self.max_iters == 0 {
            return Err(QuantizeError::InvalidMaxIterations(self.max_iters));
        }
        Ok(())
    }

    pub fn online_params(&self) -> OnlineParams {
        OnlineParams {
            learning_exponent: self.learning_exponent,
            sample_rate: self.sample_rate,
        }
    }

    /// The explicit seed, or the current Unix time in seconds
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| Utc::now().timestamp() as u32)
    }

    /// Whether the run draws from the Mersenne Twister
    pub fn uses_prng(&self) -> bool {
        self.algorithm == Algorithm::Macqueen && self.order == PresentationOrder::Pseudo
    }
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            num_colors: 256,
            algorithm: Algorithm::Macqueen,
            order: PresentationOrder::Quasi,
            learning_exponent: 0.5,
            sample_rate: 1.0,
            num_runs: 1,
            seed: None,
            max_iters: u32::MAX,
        }
    }
}

/// Fluent builder for [`QuantizeConfig`]
pub struct QuantizeConfigBuilder {
    config: QuantizeConfig,
}

impl QuantizeConfigBuilder {
    /// Start from the defaults (256 colors, MacQueen, quasi-random order)
    pub fn new() -> Self {
        Self {
            config: QuantizeConfig::default(),
        }
    }

    pub fn num_colors(mut self, num_colors: usize) -> Self {
        self.config.num_colors = num_colors;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    pub fn order(mut self, order: PresentationOrder) -> Self {
        self.config.order = order;
        self
    }

    pub fn learning_exponent(mut self, exponent: f64) -> Self {
        self.config.learning_exponent = exponent;
        self
    }

    pub fn sample_rate(mut self, rate: f64) -> Self {
        self.config.sample_rate = rate;
        self
    }

    pub fn num_runs(mut self, runs: u32) -> Self {
        self.config.num_runs = runs;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn max_iters(mut self, max_iters: u32) -> Self {
        self.config.max_iters = max_iters;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<QuantizeConfig, QuantizeError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for QuantizeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
