use crate::raster::Rgb;

/// Channel sums and member count of one cluster during a Lloyd pass
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    sum: Rgb,
    size: u64,
}

impl Accumulator {
    pub fn add(&mut self, pixel: &Rgb) {
        self.sum.red += pixel.red;
        self.sum.green += pixel.green;
        self.sum.blue += pixel.blue;
        self.size += 1;
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Member mean, or `None` for an empty cluster
    pub fn mean(&self) -> Option<Rgb> {
        if self.size == 0 {
            return None;
        }

        let n = self.size as f64;
        Some(Rgb::new(
            self.sum.red / n,
            self.sum.green / n,
            self.sum.blue / n,
        ))
    }
}
