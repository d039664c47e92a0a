//! Thresholding of the low-frequency DCT block into a 64-bit fingerprint

use super::transform::FrequencyGrid;
use super::types::{Fingerprint, HASH_BITS};
use log::debug;
use ndarray::s;

/// Side length of the low-frequency block that is hashed
pub const HASH_SIDE: usize = 8;

/// Quantize the top-left 8x8 block of a frequency grid into a fingerprint.
///
/// The threshold is the mean of rows 1-7 of the block (row 0 is left out
/// because the DC term dominates it). A bit is set only when its
/// coefficient is strictly greater than the threshold; ties produce 0.
///
/// # Panics
///
/// Panics if the grid is smaller than 8x8, which the fixed 32x32 pipeline
/// never produces.
pub fn quantize(freq: &FrequencyGrid) -> Fingerprint {
    assert!(
        freq.size() >= HASH_SIDE,
        "frequency grid must be at least {0}x{0}, got {1}x{1}",
        HASH_SIDE,
        freq.size()
    );

    let block = freq.coefficients().slice(s![..HASH_SIDE, ..HASH_SIDE]);
    let reference =
        block.slice(s![1.., ..]).iter().sum::<f64>() / ((HASH_SIDE - 1) * HASH_SIDE) as f64;

    // Row-major iteration, first coefficient ends up in the most significant bit
    let mut hash: u64 = 0;
    for &coefficient in block.iter() {
        hash = (hash << 1) | u64::from(coefficient > reference);
    }

    let fingerprint = Fingerprint::from_u64(hash);
    debug!(
        "Quantized {} coefficients against {:.4}: {}",
        HASH_BITS, reference, fingerprint
    );
    fingerprint
}
