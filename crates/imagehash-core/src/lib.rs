//! Perceptual fingerprints for near-duplicate image detection.
//!
//! This library provides the pipeline that turns a decoded image into a
//! 64-bit fingerprint and the metric used to compare two of them:
//! - Normalization to a 32x32 luminance grid
//! - 2D orthonormal DCT-II
//! - Quantization of the low-frequency 8x8 block
//! - Hamming distance between fingerprints
//!
//! ## Hamming Distance Interpretation
//!
//! - 0-3: Nearly identical images (recompression, rescaling)
//! - 4-10: Similar images
//! - >10: Different images

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::{Config, LogLevel, ResizeFilter};
pub use error::{Error, Result};
pub use processing::{
    distance_matrix, fingerprint_batch, hamming_distance, hamming_distance_bits, Distance,
    Fingerprint, HASH_BITS,
};

// -- Public Modules --
pub mod config;
pub mod logging;
pub mod processing;

use image::DynamicImage;
use processing::fingerprint_with;

/// Compute the fingerprint of a decoded image with the default settings
pub fn compute_fingerprint(img: &DynamicImage) -> Result<Fingerprint> {
    fingerprint_with(img, ResizeFilter::Triangle)
}

/// Outcome of comparing two images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub first: Fingerprint,
    pub second: Fingerprint,
    pub distance: Distance,
    /// Whether the distance is within the configured threshold
    pub similar: bool,
}

/// Main entry point for fingerprinting with a given configuration
#[derive(Debug, Clone, Default)]
pub struct PerceptualHasher {
    config: Config,
}

impl PerceptualHasher {
    /// Create a new PerceptualHasher, validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fingerprint a single image
    pub fn fingerprint(&self, img: &DynamicImage) -> Result<Fingerprint> {
        fingerprint_with(img, self.config.filter)
    }

    /// Fingerprint many images in parallel, preserving order
    pub fn fingerprint_all(&self, images: &[DynamicImage]) -> Vec<Result<Fingerprint>> {
        fingerprint_batch(images, &self.config)
    }

    /// Fingerprint two images and compare them against the threshold
    pub fn compare(&self, first: &DynamicImage, second: &DynamicImage) -> Result<Comparison> {
        let first = self.fingerprint(first)?;
        let second = self.fingerprint(second)?;
        let distance = hamming_distance(&first, &second);

        Ok(Comparison {
            first,
            second,
            distance,
            similar: distance <= self.config.similarity_threshold,
        })
    }
}
