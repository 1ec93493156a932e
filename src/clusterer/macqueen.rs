use tracing::debug;

use super::maximin::maximin;
use super::types::{OnlineParams, Palette};
use crate::error::QuantizeError;
use crate::raster::Image;
use crate::sequence::PixelOrder;

/// Online k-means (MacQueen) from a maximin seed
pub fn macqueen<O: PixelOrder + ?Sized>(
    image: &Image,
    num_colors: usize,
    params: &OnlineParams,
    order: &mut O,
) -> Result<Palette, QuantizeError> {
    params.validate()?;
    let palette = maximin(image, num_colors)?;
    macqueen_refine(image, palette, params, order)
}

/// Refine an already seeded palette with online k-means.
///
/// Presents `floor(pixels * sample_rate)` pixels in the order drawn from
/// `order`; each one moves only its nearest center, strictly one after
/// another, so a fixed order always yields the same palette.
pub fn macqueen_refine<O: PixelOrder + ?Sized>(
    image: &Image,
    mut palette: Palette,
    params: &OnlineParams,
    order: &mut O,
) -> Result<Palette, QuantizeError> {
    params.validate()?;
    palette.ensure_usable()?;

    let pixels = image.pixels();
    let presentations = params.presentations(pixels.len());

    for _ in 0..presentations {
        let index = order.next_index(image.width(), image.height())?;
        let pixel = pixels
            .get(index)
            .ok_or(QuantizeError::PixelOutOfRange {
                index,
                len: pixels.len(),
            })?;

        let (nearest, _) = palette.nearest(pixel);
        palette.clusters_mut()[nearest].absorb(pixel, params.learning_exponent);
    }

    debug!(
        presentations,
        learning_exponent = params.learning_exponent,
        "online refinement done"
    );
    Ok(palette)
}
