mod centroid;
mod distance;
mod kmeans;
mod macqueen;
mod maximin;
mod types;


pub use distance::{nearest_center, squared_distance, MAX_RGB_DIST};
pub use kmeans::{lloyd, lloyd_refine};
pub use macqueen::{macqueen, macqueen_refine};
pub use maximin::maximin;
pub use types::{Cluster, ClusterResult, IterationStats, OnlineParams, Palette};
