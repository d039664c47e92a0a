//! Two-dimensional orthonormal DCT-II over an intensity grid

use super::normalize::IntensityGrid;
use crate::error::{Error, Result};
use log::debug;
use ndarray::{Array2, Axis};
use rustdct::{DctPlanner, TransformType2And3};

/// A square grid of DCT-II coefficients, indexed `[row, col]`.
///
/// `[0, 0]` is the DC term; frequency grows with the row and column index.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid(Array2<f64>);

impl FrequencyGrid {
    /// Wrap an existing square, non-empty coefficient array
    pub fn from_array(coefficients: Array2<f64>) -> Result<Self> {
        let (rows, cols) = coefficients.dim();
        if rows == 0 || rows != cols {
            return Err(Error::InvalidImage(format!(
                "frequency grid must be square and non-empty, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self(coefficients))
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.0.nrows()
    }

    pub fn coefficients(&self) -> &Array2<f64> {
        &self.0
    }

    /// Coefficient at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[[row, col]]
    }
}

/// Apply the 2D orthonormal DCT-II: every row first, then every column.
pub fn transform(grid: IntensityGrid) -> FrequencyGrid {
    let size = grid.size();
    let mut coefficients = grid.into_inner();

    let mut planner = DctPlanner::<f64>::new();
    let dct = planner.plan_dct2(size);
    let mut buffer = vec![0.0; size];

    // Lanes along axis 1 are rows, lanes along axis 0 are columns
    for axis in [Axis(1), Axis(0)] {
        for mut lane in coefficients.lanes_mut(axis) {
            for (dst, &src) in buffer.iter_mut().zip(lane.iter()) {
                *dst = src;
            }
            dct2_ortho(&*dct, &mut buffer);
            for (dst, &src) in lane.iter_mut().zip(buffer.iter()) {
                *dst = src;
            }
        }
    }

    debug!(
        "Transformed {}x{} grid, DC = {:.3}",
        size,
        size,
        coefficients[[0, 0]]
    );
    FrequencyGrid(coefficients)
}

/// In-place 1D DCT-II with orthonormal scaling.
///
/// The AC terms are computed on the lane offset by its first sample; the
/// cosine sums vanish for k >= 1, so the result is unchanged, and a
/// constant lane yields AC terms of exactly zero.
fn dct2_ortho(dct: &dyn TransformType2And3<f64>, buffer: &mut [f64]) {
    let n = buffer.len() as f64;
    let sum: f64 = buffer.iter().sum();
    let offset = buffer[0];

    for x in buffer.iter_mut() {
        *x -= offset;
    }

    // rustdct computes the unnormalized sum X[k] = sum x[n] cos(pi (2n+1) k / 2N)
    dct.process_dct2(buffer);

    let ac_scale = (2.0 / n).sqrt();
    buffer[0] = sum * (1.0 / n).sqrt();
    for x in buffer[1..].iter_mut() {
        *x *= ac_scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalize::GRID_SIZE;
    use std::f64::consts::PI;

    /// Direct double-sum DCT-II, orthonormal
    fn dct1d_direct(input: &[f64]) -> Vec<f64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                let sum: f64 = input
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| {
                        x * (PI * (2 * i + 1) as f64 * k as f64 / (2 * n) as f64).cos()
                    })
                    .sum();
                let scale = if k == 0 {
                    (1.0 / n as f64).sqrt()
                } else {
                    (2.0 / n as f64).sqrt()
                };
                scale * sum
            })
            .collect()
    }

    fn dct2d_direct(input: &Array2<f64>) -> Array2<f64> {
        let mut out = input.clone();
        for axis in [Axis(1), Axis(0)] {
            for mut lane in out.lanes_mut(axis) {
                let values: Vec<f64> = lane.iter().copied().collect();
                for (dst, src) in lane.iter_mut().zip(dct1d_direct(&values)) {
                    *dst = src;
                }
            }
        }
        out
    }

    fn textured_grid() -> IntensityGrid {
        IntensityGrid::from_fn(|(r, c)| ((r * 37 + c * 11 + r * c * 3) % 256) as f64)
    }

    #[test]
    fn test_matches_direct_formula() {
        let grid = textured_grid();
        let expected = dct2d_direct(grid.samples());
        let actual = transform(grid);

        for ((r, c), &e) in expected.indexed_iter() {
            let a = actual.get(r, c);
            assert!((a - e).abs() < 1e-8, "[{}, {}]: {} vs {}", r, c, a, e);
        }
    }

    #[test]
    fn test_dimension_preserved() {
        let freq = transform(textured_grid());
        assert_eq!(freq.size(), GRID_SIZE);
        assert_eq!(freq.coefficients().dim(), (GRID_SIZE, GRID_SIZE));
    }

    #[test]
    fn test_constant_grid_has_only_dc() {
        for c in [0.0, 1.0, 77.0, 128.5, 255.0] {
            let freq = transform(IntensityGrid::from_fn(|_| c));

            for ((r, col), &v) in freq.coefficients().indexed_iter() {
                if (r, col) == (0, 0) {
                    // Orthonormal DC of an N x N constant grid is N * c
                    assert!((v - GRID_SIZE as f64 * c).abs() < 1e-9);
                } else {
                    assert_eq!(v, 0.0, "AC term [{}, {}] for c = {}", r, col, c);
                }
            }
        }
    }

    #[test]
    fn test_energy_preserved() {
        let grid = textured_grid();
        let spatial: f64 = grid.samples().iter().map(|v| v * v).sum();
        let freq = transform(grid);
        let spectral: f64 = freq.coefficients().iter().map(|v| v * v).sum();

        assert!((spatial - spectral).abs() / spatial < 1e-10);
    }

    #[test]
    fn test_horizontal_cosine_lands_in_row_zero() {
        // A pure horizontal cosine at frequency 3 only excites column 3 of row 0
        let n = GRID_SIZE as f64;
        let grid =
            IntensityGrid::from_fn(|(_, c)| (PI * (2 * c + 1) as f64 * 3.0 / (2.0 * n)).cos());
        let freq = transform(grid);

        for ((r, c), &v) in freq.coefficients().indexed_iter() {
            if (r, c) == (0, 3) {
                assert!(v.abs() > 1.0);
            } else {
                assert!(v.abs() < 1e-9, "[{}, {}] = {}", r, c, v);
            }
        }
    }
}
