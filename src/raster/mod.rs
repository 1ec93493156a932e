mod pixel;
mod ppm;


pub use pixel::{MAX_CHANNEL, Rgb};
pub use ppm::{decode_ppm, encode_ppm, read_ppm, write_ppm};

use crate::error::QuantizeError;

/// Row-major RGB image with its global mean color, computed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    mean: Rgb,
}

impl Image {
    /// Create an image from a row-major pixel vector
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, QuantizeError> {
        let expected = width as u64 * height as u64;
        if expected == 0 {
            return Err(QuantizeError::EmptyImage);
        }
        if expected > u64::from(u32::MAX) {
            return Err(QuantizeError::TooManyPixels(expected));
        }
        if pixels.len() as u64 != expected {
            return Err(QuantizeError::BufferSizeMismatch {
                expected: expected as usize,
                actual: pixels.len(),
            });
        }

        let mean = mean_color(&pixels);

        Ok(Self {
            width,
            height,
            pixels,
            mean,
        })
    }

    /// Create an image from packed 8-bit RGB triples
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, QuantizeError> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(QuantizeError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::from_bytes([c[0], c[1], c[2]]))
            .collect();

        Self::new(width, height, pixels)
    }

    /// Pack the image into 8-bit RGB triples, rounding every channel
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`)
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: empty images are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Arithmetic mean of every pixel's channels
    pub fn mean(&self) -> Rgb {
        self.mean
    }

    /// Whether both images share width and height
    pub fn same_dimensions(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height
    }
}

fn mean_color(pixels: &[Rgb]) -> Rgb {
    let mut sum = Rgb::BLACK;
    for p in pixels {
        sum.red += p.red;
        sum.green += p.green;
        sum.blue += p.blue;
    }

    let n = pixels.len() as f64;
    Rgb::new(sum.red / n, sum.green / n, sum.blue / n)
}
