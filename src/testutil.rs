use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::QuantizeError;
use crate::raster::{Image, Rgb};
use crate::sequence::PixelOrder;

/// Image of uniformly random 8-bit colors
pub fn random_image(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bytes: Vec<u8> = (0..width * height * 3).map(|_| rng.gen()).collect();
    Image::from_rgb8(width, height, &bytes).unwrap()
}

/// Single-row image of gray levels
pub fn gray_row(levels: &[f64]) -> Image {
    let pixels = levels.iter().map(|&v| Rgb::new(v, v, v)).collect();
    Image::new(levels.len() as u32, 1, pixels).unwrap()
}

/// Replays a fixed index list, cycling when it runs out
pub struct Scripted {
    indices: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl PixelOrder for Scripted {
    fn next_index(&mut self, _width: u32, _height: u32) -> Result<usize, QuantizeError> {
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        Ok(index)
    }
}

/// Wraps another order and remembers every index it hands out
pub struct Recording<O> {
    inner: O,
    pub seen: Vec<usize>,
}

impl<O> Recording<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            seen: Vec::new(),
        }
    }
}

impl<O: PixelOrder> PixelOrder for Recording<O> {
    fn next_index(&mut self, width: u32, height: u32) -> Result<usize, QuantizeError> {
        let index = self.inner.next_index(width, height)?;
        self.seen.push(index);
        Ok(index)
    }
}
