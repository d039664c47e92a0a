//! Synthetic image builders shared by the integration tests
#![allow(dead_code)]

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// Smooth, structured colour image with enough low-frequency content to
/// give a non-degenerate fingerprint
pub fn smooth_pattern(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let u = x as f64 / width as f64;
        let v = y as f64 / height as f64;
        let base = 128.0
            + 60.0 * (u * 7.0).sin()
            + 40.0 * (v * 11.0).cos()
            + 20.0 * ((u + v) * 17.0).sin();
        let value = base.clamp(0.0, 255.0) as u8;
        Rgb([value, value.saturating_add(10), value.saturating_sub(10)])
    });
    DynamicImage::ImageRgb8(img)
}

/// Left-to-right (horizontal) or top-to-bottom (vertical) grey ramp
pub fn gradient(width: u32, height: u32, horizontal: bool) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        let t = if horizontal {
            x * 255 / (width - 1).max(1)
        } else {
            y * 255 / (height - 1).max(1)
        };
        Luma([t as u8])
    }))
}

/// Copy of `img` with `count` isolated pixels brightened by `delta`.
///
/// Pixels are picked with a fixed stride so the result is reproducible.
pub fn perturb(img: &DynamicImage, count: u32, delta: u8) -> DynamicImage {
    let mut rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let total = width * height;
    let stride = 7919; // prime, spreads picks across the image

    for i in 0..count {
        let index = (i * stride) % total;
        let pixel = rgb.get_pixel_mut(index % width, index / width);
        for channel in pixel.0.iter_mut() {
            *channel = channel.saturating_add(delta);
        }
    }
    DynamicImage::ImageRgb8(rgb)
}
