use tracing::debug;

use crate::clusterer::{
    centroid::Accumulator,
    maximin::maximin,
    types::{ClusterResult, IterationStats, Palette},
};
use crate::error::QuantizeError;
use crate::raster::Image;

/// Batch k-means (Lloyd) from a maximin seed
pub fn lloyd(
    image: &Image,
    num_colors: usize,
    max_iters: u32,
) -> Result<ClusterResult, QuantizeError> {
    if max_iters == 0 {
        return Err(QuantizeError::InvalidMaxIterations(max_iters));
    }
    let palette = maximin(image, num_colors)?;
    lloyd_refine(image, palette, max_iters)
}

/// Refine an already seeded palette with batch k-means.
///
/// Stops once an iteration reassigns no pixel or after `max_iters`
/// iterations. Clusters that end up empty keep their previous center.
pub fn lloyd_refine(
    image: &Image,
    mut palette: Palette,
    max_iters: u32,
) -> Result<ClusterResult, QuantizeError> {
    if max_iters == 0 {
        return Err(QuantizeError::InvalidMaxIterations(max_iters));
    }
    palette.ensure_usable()?;

    let pixels = image.pixels();
    let mut membership = vec![0usize; pixels.len()];
    let mut accumulators = vec![Accumulator::default(); palette.len()];
    let mut trace = Vec::new();
    let mut iterations = 0;

    loop {
        iterations += 1;
        accumulators.fill(Accumulator::default());

        // 1. Assign each pixel to its nearest center
        let mut changes = 0;
        let mut objective = 0.0;
        for (pixel, member) in pixels.iter().zip(membership.iter_mut()) {
            let (nearest, dist) = palette.nearest(pixel);
            objective += dist;

            if iterations == 1 || *member != nearest {
                *member = nearest;
                changes += 1;
            }

            accumulators[nearest].add(pixel);
        }

        // 2. Move every non-empty cluster to its members' mean
        for (cluster, acc) in palette.clusters_mut().iter_mut().zip(&accumulators) {
            if let Some(mean) = acc.mean() {
                cluster.center = mean;
                cluster.size = acc.size();
            }
        }

        debug!(iteration = iterations, objective, changes, "lloyd iteration");
        trace.push(IterationStats {
            iteration: iterations,
            objective,
            changes,
        });

        if changes == 0 || iterations >= max_iters {
            break; // converged or out of budget
        }
    }

    let converged = trace.last().is_some_and(|t| t.changes == 0);

    Ok(ClusterResult {
        palette,
        iterations,
        converged,
        trace,
    })
}
