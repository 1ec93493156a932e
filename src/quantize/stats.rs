use serde::{Deserialize, Serialize};

use crate::clusterer::squared_distance;
use crate::error::QuantizeError;
use crate::raster::Image;

/// Mean over pixels of the summed per-channel squared difference
pub fn mse(a: &Image, b: &Image) -> Result<f64, QuantizeError> {
    if !a.same_dimensions(b) {
        return Err(QuantizeError::DimensionMismatch {
            left_width: a.width(),
            left_height: a.height(),
            right_width: b.width(),
            right_height: b.height(),
        });
    }

    let total: f64 = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(p, q)| squared_distance(p, q))
        .sum();

    Ok(total / a.len() as f64)
}

/// Sample mean and standard deviation of a set of measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub stdev: f64,
    pub count: usize,
}

/// Sample mean and sample standard deviation (`n - 1` denominator).
///
/// A single value has zero deviation.
pub fn mean_stdev(values: &[f64]) -> Result<Summary, QuantizeError> {
    let count = values.len();
    if count == 0 {
        return Err(QuantizeError::EmptySample);
    }
    if count == 1 {
        return Ok(Summary {
            mean: values[0],
            stdev: 0.0,
            count,
        });
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();

    Ok(Summary {
        mean,
        stdev: (ss / (count - 1) as f64).sqrt(),
        count,
    })
}
