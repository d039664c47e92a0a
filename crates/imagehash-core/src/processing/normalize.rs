//! Image normalization: luminance conversion and resampling to a fixed grid

use crate::config::ResizeFilter;
use crate::error::{Error, Result};
use image::{imageops, DynamicImage, GrayImage, Luma, Rgb};
use log::debug;
use ndarray::Array2;

/// Side length of the intensity grid
pub const GRID_SIZE: usize = 32;

/// A square grid of luminance samples (0-255 as reals), indexed `[row, col]`
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid(Array2<f64>);

impl IntensityGrid {
    /// Wrap an existing square, non-empty array
    pub fn from_array(samples: Array2<f64>) -> Result<Self> {
        let (rows, cols) = samples.dim();
        if rows == 0 || rows != cols {
            return Err(Error::InvalidImage(format!(
                "intensity grid must be square and non-empty, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self(samples))
    }

    /// Build a `GRID_SIZE` x `GRID_SIZE` grid from a function of `(row, col)`
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut((usize, usize)) -> f64,
    {
        Self(Array2::from_shape_fn((GRID_SIZE, GRID_SIZE), f))
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.0.nrows()
    }

    pub fn samples(&self) -> &Array2<f64> {
        &self.0
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.0
    }
}

/// ITU-R 601-2 luma in integer arithmetic, rounded to nearest
#[inline]
fn luminance(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((weighted + 500) / 1000) as u8
}

/// Normalize an image with the default (triangle) filter
pub fn normalize(img: &DynamicImage) -> Result<IntensityGrid> {
    normalize_with(img, ResizeFilter::Triangle)
}

/// Convert to a single luminance channel and resample to `GRID_SIZE` x `GRID_SIZE`.
///
/// Alpha is dropped before the luminance is computed, so transparency never
/// influences the result.
pub fn normalize_with(img: &DynamicImage, filter: ResizeFilter) -> Result<IntensityGrid> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage(format!(
            "image has zero dimension ({}x{})",
            width, height
        )));
    }

    let rgb = img.to_rgb8();
    let gray = GrayImage::from_fn(width, height, |x, y| {
        Luma([luminance(rgb.get_pixel(x, y))])
    });

    let size = GRID_SIZE as u32;
    let small = imageops::resize(&gray, size, size, filter.into());

    debug!(
        "Normalized {}x{} image to {}x{} with {:?}",
        width, height, size, size, filter
    );

    Ok(IntensityGrid::from_fn(|(row, col)| {
        small.get_pixel(col as u32, row as u32)[0] as f64
    }))
}
