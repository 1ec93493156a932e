use rand_core::RngCore;

use crate::error::QuantizeError;

/// Draw an integer uniformly from `[0, range)`.
///
/// Multiplies a 32-bit draw by `range` and keeps the high word, rejecting
/// draws whose low word falls under `2^32 mod range` so no value is favored.
/// See <https://www.pcg-random.org/posts/bounded-rands.html>.
pub fn bounded<R: RngCore + ?Sized>(rng: &mut R, range: u32) -> Result<u32, QuantizeError> {
    if range == 0 {
        return Err(QuantizeError::ZeroRange);
    }

    let mut m = u64::from(rng.next_u32()) * u64::from(range);
    let mut low = m as u32;

    if low < range {
        let threshold = range.wrapping_neg() % range;
        while low < threshold {
            m = u64::from(rng.next_u32()) * u64::from(range);
            low = m as u32;
        }
    }

    Ok((m >> 32) as u32)
}
