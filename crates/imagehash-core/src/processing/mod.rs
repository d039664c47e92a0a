//! The fingerprint pipeline: normalize, transform, quantize, compare

pub mod batch;
pub mod compare;
pub mod normalize;
pub mod quantize;
pub mod transform;
pub mod types;

use crate::config::ResizeFilter;
use crate::error::Result;
use image::DynamicImage;

pub use batch::{distance_matrix, fingerprint_batch};
pub use compare::{hamming_distance, hamming_distance_bits, is_similar, similarity};
pub use normalize::{normalize, normalize_with, IntensityGrid, GRID_SIZE};
pub use quantize::{quantize, HASH_SIDE};
pub use transform::{transform, FrequencyGrid};
pub use types::{Distance, Fingerprint, HASH_BITS};

/// Run the full pipeline with an explicit resampling filter
pub fn fingerprint_with(img: &DynamicImage, filter: ResizeFilter) -> Result<Fingerprint> {
    let grid = normalize_with(img, filter)?;
    let freq = transform(grid);
    Ok(quantize(&freq))
}
