use super::{bounded, grid_index, Mt19937, Sobol2d};
use crate::error::QuantizeError;

/// Source of pixel indices for online clustering
pub trait PixelOrder {
    /// Pick the next flat pixel index in a `width x height` image
    fn next_index(&mut self, width: u32, height: u32) -> Result<usize, QuantizeError>;
}

/// Quasi-random order: Sobol points mapped onto the pixel grid
impl PixelOrder for Sobol2d {
    fn next_index(&mut self, width: u32, height: u32) -> Result<usize, QuantizeError> {
        let (x, y) = self.next_pair()?;
        Ok(grid_index(x, y, width, height))
    }
}

/// Pseudo-random order: uniform draws over all pixels
impl PixelOrder for Mt19937 {
    fn next_index(&mut self, width: u32, height: u32) -> Result<usize, QuantizeError> {
        let range = width
            .checked_mul(height)
            .ok_or(QuantizeError::TooManyPixels(u64::from(width) * u64::from(height)))?;
        Ok(bounded(self, range)? as usize)
    }
}
