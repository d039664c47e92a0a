use super::types::{Distance, Fingerprint, HASH_BITS};
use crate::error::{Error, Result};

/// Calculate the Hamming distance between two fingerprints
pub fn hamming_distance(a: &Fingerprint, b: &Fingerprint) -> Distance {
    (a.as_u64() ^ b.as_u64()).count_ones()
}

/// Hamming distance over arbitrary bit sequences of equal length
pub fn hamming_distance_bits(a: &[bool], b: &[bool]) -> Result<Distance> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count() as Distance)
}

/// Check if two images are perceptually similar based on a threshold
pub fn is_similar(a: &Fingerprint, b: &Fingerprint, threshold: Distance) -> bool {
    hamming_distance(a, b) <= threshold
}

/// Fraction of matching bits, 1.0 for identical fingerprints
pub fn similarity(a: &Fingerprint, b: &Fingerprint) -> f64 {
    1.0 - hamming_distance(a, b) as f64 / HASH_BITS as f64
}

impl Fingerprint {
    /// Calculate the Hamming distance to another fingerprint
    pub fn distance(&self, other: &Fingerprint) -> Distance {
        hamming_distance(self, other)
    }
}
