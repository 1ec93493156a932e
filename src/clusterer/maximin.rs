use tracing::debug;

use super::distance::{squared_distance, MAX_RGB_DIST};
use super::types::{Cluster, Palette};
use crate::error::QuantizeError;
use crate::raster::Image;

/// Seed a palette by farthest-point (maximin) selection.
///
/// The first center is the image mean; each following center is the pixel
/// farthest from its nearest already chosen center, the first such pixel
/// in scan order on ties. Every cluster starts with size 1. No randomness
/// is involved.
pub fn maximin(image: &Image, num_colors: usize) -> Result<Palette, QuantizeError> {
    if num_colors < 2 {
        return Err(QuantizeError::PaletteTooSmall(num_colors));
    }

    let pixels = image.pixels();
    let mut palette = Palette::with_capacity(num_colors);
    palette.push(Cluster::new(image.mean()));

    // Distance from each pixel to its nearest chosen center
    let mut nearest_dist = vec![MAX_RGB_DIST; pixels.len()];
    let mut previous = image.mean();

    for _ in 1..num_colors {
        let mut max_dist = -MAX_RGB_DIST;
        let mut max_index = 0;

        for (j, (pixel, nearest)) in pixels.iter().zip(nearest_dist.iter_mut()).enumerate() {
            let dist = squared_distance(pixel, &previous);
            if dist < *nearest {
                *nearest = dist;
            }
            if max_dist < *nearest {
                max_dist = *nearest;
                max_index = j;
            }
        }

        previous = pixels[max_index];
        palette.push(Cluster::new(previous));
    }

    debug!(num_colors, pixels = pixels.len(), "maximin seeding done");
    Ok(palette)
}
