//! Parallel fingerprinting and pairwise distances for many images
//!
//! Every image is processed independently, so the results are identical to a
//! sequential loop and keep the input order.

use super::compare::hamming_distance;
use super::types::{Distance, Fingerprint};
use super::fingerprint_with;
use crate::config::Config;
use crate::error::Result;
use crate::logging::log_fingerprint_error;
use image::DynamicImage;
use log::{info, warn};
use rayon::prelude::*;
use std::time::Instant;

/// Run `op` on a pool sized by `threads` (0 = rayon's global pool)
fn with_pool<T, F>(threads: usize, op: F) -> T
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    if threads == 0 {
        return op();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(op),
        Err(e) => {
            warn!("Failed to build {}-thread pool, using global pool: {}", threads, e);
            op()
        }
    }
}

/// Fingerprint every image in parallel; one result per input, in input order
pub fn fingerprint_batch(images: &[DynamicImage], config: &Config) -> Vec<Result<Fingerprint>> {
    let start = Instant::now();
    let filter = config.filter;

    let results: Vec<Result<Fingerprint>> = with_pool(config.threads, || {
        images
            .par_iter()
            .enumerate()
            .map(|(index, img)| {
                let result = fingerprint_with(img, filter);
                if let Err(e) = &result {
                    log_fingerprint_error(&format!("#{}", index), e);
                }
                result
            })
            .collect()
    });

    let failures = results.iter().filter(|r| r.is_err()).count();
    info!(
        "Batch completed: {} successful, {} errors in {:.2?}",
        results.len() - failures,
        failures,
        start.elapsed()
    );

    results
}

/// Symmetric N x N matrix of pairwise Hamming distances
pub fn distance_matrix(fingerprints: &[Fingerprint]) -> Vec<Vec<Distance>> {
    fingerprints
        .par_iter()
        .map(|a| fingerprints.iter().map(|b| hamming_distance(a, b)).collect())
        .collect()
}
