use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{PhaseTimings, QuantizeOutcome};
use crate::config::QuantizeConfig;
use crate::quantize::Summary;
use crate::raster::Rgb;

/// Machine-readable record of a quantization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub input: Option<String>,
    pub output: Option<String>,
    pub width: u32,
    pub height: u32,
    pub config: QuantizeConfig,
    pub seed: Option<u32>,
    pub mse: Summary,
    pub run_mse: Vec<f64>,
    pub iterations: Option<u32>,
    pub converged: Option<bool>,
    pub palette: Vec<Rgb>,
    pub timings: TimingReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub init_ms: f64,
    pub cluster_ms: f64,
    pub map_ms: f64,
}

impl From<&PhaseTimings> for TimingReport {
    fn from(timings: &PhaseTimings) -> Self {
        Self {
            init_ms: timings.init.as_secs_f64() * 1000.0,
            cluster_ms: timings.cluster.as_secs_f64() * 1000.0,
            map_ms: timings.map.as_secs_f64() * 1000.0,
        }
    }
}

impl RunReport {
    pub fn new(
        config: &QuantizeConfig,
        outcome: &QuantizeOutcome,
        width: u32,
        height: u32,
        input: Option<String>,
        output: Option<String>,
    ) -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("kquant v{}", env!("CARGO_PKG_VERSION")),
            input,
            output,
            width,
            height,
            config: config.clone(),
            seed: outcome.seed,
            mse: outcome.mse,
            run_mse: outcome.run_mse.clone(),
            iterations: outcome.iterations,
            converged: outcome.converged,
            palette: outcome.palette.centers(),
            timings: TimingReport::from(&outcome.timings),
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run report")?;
        fs::write(path, json).context(format!("Failed to write run report: {}", path.display()))?;
        Ok(())
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read run report: {}", path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse run report")
    }
}
