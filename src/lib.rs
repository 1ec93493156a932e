// Public API exports
pub mod clusterer;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod quantize;
pub mod raster;
pub mod sequence;

#[cfg(test)]
mod testutil;

// Re-export main types for convenience
pub use error::QuantizeError;

pub use raster::{read_ppm, write_ppm, Image, Rgb};

pub use sequence::{bounded, Mt19937, PixelOrder, Sobol2d};

pub use clusterer::{
    lloyd, macqueen, maximin, Cluster, ClusterResult, IterationStats, OnlineParams, Palette,
};

pub use quantize::{map_image, mean_stdev, mse, Summary};

pub use config::{Algorithm, PresentationOrder, QuantizeConfig, QuantizeConfigBuilder};

pub use pipeline::{PhaseTimings, QuantizeOutcome, Quantizer, RunReport};
