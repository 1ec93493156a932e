mod report;

#[cfg(test)]
mod tests;

pub use report::{RunReport, TimingReport};

use std::time::{Duration, Instant};

use tracing::info;

use crate::clusterer::{lloyd_refine, macqueen_refine, maximin, IterationStats, Palette};
use crate::config::{Algorithm, PresentationOrder, QuantizeConfig};
use crate::error::QuantizeError;
use crate::quantize::{map_image, mean_stdev, mse, Summary};
use crate::raster::Image;
use crate::sequence::{Mt19937, Sobol2d};

/// Wall-clock time spent in each phase, summed over runs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseTimings {
    pub init: Duration,
    pub cluster: Duration,
    pub map: Duration,
}

impl PhaseTimings {
    pub fn total(&self) -> Duration {
        self.init + self.cluster + self.map
    }
}

/// Everything a quantization produced
#[derive(Debug, Clone)]
pub struct QuantizeOutcome {
    /// Palette of the last run
    pub palette: Palette,
    /// Quantized image; `None` when several runs were made
    pub output: Option<Image>,
    /// MSE of each run, in run order
    pub run_mse: Vec<f64>,
    pub mse: Summary,
    /// Lloyd iteration count
    pub iterations: Option<u32>,
    pub converged: Option<bool>,
    pub trace: Vec<IterationStats>,
    /// Seed of the Mersenne Twister, when one was used
    pub seed: Option<u32>,
    pub timings: PhaseTimings,
}

impl QuantizeOutcome {
    pub fn is_multi_run(&self) -> bool {
        self.run_mse.len() > 1
    }
}

/// Runs initialization, clustering and mapping for one configuration
pub struct Quantizer {
    config: QuantizeConfig,
}

impl Quantizer {
    pub fn new(config: QuantizeConfig) -> Result<Self, QuantizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QuantizeConfig {
        &self.config
    }

    pub fn run(&self, image: &Image) -> Result<QuantizeOutcome, QuantizeError> {
        let mut timings = PhaseTimings::default();

        let start = Instant::now();
        let initial = maximin(image, self.config.num_colors)?;
        timings.init = start.elapsed();
        info!(
            colors = initial.len(),
            elapsed_ms = timings.init.as_millis() as u64,
            "maximin initialization done"
        );

        match self.config.algorithm {
            Algorithm::Lloyd => self.run_lloyd(image, initial, timings),
            Algorithm::Macqueen => match self.config.order {
                PresentationOrder::Quasi => self.run_quasi(image, initial, timings),
                PresentationOrder::Pseudo => self.run_pseudo(image, initial, timings),
            },
        }
    }

    fn run_lloyd(
        &self,
        image: &Image,
        initial: Palette,
        mut timings: PhaseTimings,
    ) -> Result<QuantizeOutcome, QuantizeError> {
        let start = Instant::now();
        let result = lloyd_refine(image, initial, self.config.max_iters)?;
        timings.cluster = start.elapsed();
        info!(
            iterations = result.iterations,
            converged = result.converged,
            elapsed_ms = timings.cluster.as_millis() as u64,
            "lloyd clustering done"
        );

        let (output, error) = map_and_measure(image, &result.palette, &mut timings)?;

        Ok(QuantizeOutcome {
            palette: result.palette,
            output: Some(output),
            run_mse: vec![error],
            mse: mean_stdev(&[error])?,
            iterations: Some(result.iterations),
            converged: Some(result.converged),
            trace: result.trace,
            seed: None,
            timings,
        })
    }

    fn run_quasi(
        &self,
        image: &Image,
        initial: Palette,
        mut timings: PhaseTimings,
    ) -> Result<QuantizeOutcome, QuantizeError> {
        let params = self.config.online_params();
        let mut order = Sobol2d::new();

        let start = Instant::now();
        let palette = macqueen_refine(image, initial, &params, &mut order)?;
        timings.cluster = start.elapsed();
        info!(
            points = order.position(),
            elapsed_ms = timings.cluster.as_millis() as u64,
            "macqueen clustering done (quasi-random order)"
        );

        let (output, error) = map_and_measure(image, &palette, &mut timings)?;

        Ok(QuantizeOutcome {
            palette,
            output: Some(output),
            run_mse: vec![error],
            mse: mean_stdev(&[error])?,
            iterations: None,
            converged: None,
            trace: Vec::new(),
            seed: None,
            timings,
        })
    }

    /// One generator, seeded once, drives every run in sequence.
    fn run_pseudo(
        &self,
        image: &Image,
        initial: Palette,
        mut timings: PhaseTimings,
    ) -> Result<QuantizeOutcome, QuantizeError> {
        let params = self.config.online_params();
        let seed = self.config.resolve_seed();
        let mut rng = Mt19937::new(seed);
        let runs = self.config.num_runs;

        let mut run_mse = Vec::with_capacity(runs as usize);
        let mut palette = initial.clone();
        let mut output = None;

        for run in 0..runs {
            let start = Instant::now();
            palette = macqueen_refine(image, initial.clone(), &params, &mut rng)?;
            timings.cluster += start.elapsed();

            let (mapped, error) = map_and_measure(image, &palette, &mut timings)?;
            info!(run = run + 1, runs, seed, mse = error, "macqueen run done");

            run_mse.push(error);
            if runs == 1 {
                output = Some(mapped);
            }
        }

        Ok(QuantizeOutcome {
            palette,
            output,
            mse: mean_stdev(&run_mse)?,
            run_mse,
            iterations: None,
            converged: None,
            trace: Vec::new(),
            seed: Some(seed),
            timings,
        })
    }
}

fn map_and_measure(
    image: &Image,
    palette: &Palette,
    timings: &mut PhaseTimings,
) -> Result<(Image, f64), QuantizeError> {
    let start = Instant::now();
    let output = map_image(image, palette)?;
    timings.map += start.elapsed();

    let error = mse(image, &output)?;
    Ok((output, error))
}
