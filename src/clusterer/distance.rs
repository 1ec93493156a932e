use super::types::Cluster;
use crate::raster::Rgb;

/// Largest squared distance between two 8-bit colors, `3 * 255^2`
pub const MAX_RGB_DIST: f64 = 195_075.0;

#[inline]
pub fn squared_distance(a: &Rgb, b: &Rgb) -> f64 {
    let dr = a.red - b.red;
    let dg = a.green - b.green;
    let db = a.blue - b.blue;
    dr * dr + dg * dg + db * db
}

/// Nearest cluster by squared distance.
///
/// Starts from the `MAX_RGB_DIST` sentinel and only a strictly smaller
/// distance replaces the incumbent, so the lowest index wins ties.
pub fn nearest_center(clusters: &[Cluster], pixel: &Rgb) -> (usize, f64) {
    let mut best = 0;
    let mut min_dist = MAX_RGB_DIST;

    for (j, cluster) in clusters.iter().enumerate() {
        let dist = squared_distance(pixel, &cluster.center);
        if dist < min_dist {
            min_dist = dist;
            best = j;
        }
    }

    (best, min_dist)
}
