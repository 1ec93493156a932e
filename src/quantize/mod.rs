mod mapper;
mod stats;

#[cfg(test)]
mod tests;

pub use mapper::{assign, map_image};
pub use stats::{mean_stdev, mse, Summary};
