use crate::error::QuantizeError;

/// Bit depth of the direction numbers
const MAX_BIT: usize = 30;

/// Scale from 30-bit integers to `[0, 1)`
const FAC: f64 = 1.0 / (1u64 << MAX_BIT) as f64;

/// Two-dimensional Sobol sequence in Gray-code order.
///
/// Dimension 1 uses the degree-1 primitive polynomial, dimension 2 the
/// degree-2 one, both seeded with unit initial direction integers.
#[derive(Debug, Clone)]
pub struct Sobol2d {
    directions: [[u32; MAX_BIT]; 2],
    x: u32,
    y: u32,
    index: u64,
}

impl Sobol2d {
    pub fn new() -> Self {
        Self {
            directions: [
                direction_numbers(1, 0, &[1]),
                direction_numbers(2, 1, &[1, 1]),
            ],
            x: 0,
            y: 0,
            index: 0,
        }
    }

    /// Number of points produced so far
    pub fn position(&self) -> u64 {
        self.index
    }

    /// Next point of the sequence, both coordinates in `[0, 1)`.
    ///
    /// Fails once all `2^30 - 1` points have been produced.
    pub fn next_pair(&mut self) -> Result<(f64, f64), QuantizeError> {
        // Position of the lowest zero bit of the index
        let mut bits = self.index;
        let mut j = 0;
        while j < MAX_BIT && bits & 1 == 1 {
            bits >>= 1;
            j += 1;
        }
        if j == MAX_BIT {
            return Err(QuantizeError::SequenceExhausted(self.index));
        }

        self.x ^= self.directions[0][j];
        self.y ^= self.directions[1][j];
        self.index += 1;

        Ok((f64::from(self.x) * FAC, f64::from(self.y) * FAC))
    }
}

impl Default for Sobol2d {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand initial direction integers through the polynomial recurrence.
///
/// Bit `k` of `coefficients` selects the term `v[j - (degree - 1 - k)]`.
fn direction_numbers(degree: usize, coefficients: u32, initial: &[u32]) -> [u32; MAX_BIT] {
    let mut v = [0u32; MAX_BIT];

    for j in 0..degree {
        v[j] = initial[j] << (MAX_BIT - 1 - j);
    }

    for j in degree..MAX_BIT {
        let mut i = v[j - degree];
        i ^= i >> degree;

        let mut poly = coefficients;
        for l in (1..degree).rev() {
            if poly & 1 == 1 {
                i ^= v[j - l];
            }
            poly >>= 1;
        }

        v[j] = i;
    }

    v
}

/// Map a point of the unit square onto a flat row-major pixel index.
///
/// Coordinates are rounded half up and clamped to the last row/column.
pub fn grid_index(x: f64, y: f64, width: u32, height: u32) -> usize {
    let mut row = (y * f64::from(height) + 0.5) as u32;
    if row >= height {
        row = height - 1;
    }

    let mut col = (x * f64::from(width) + 0.5) as u32;
    if col >= width {
        col = width - 1;
    }

    row as usize * width as usize + col as usize
}
