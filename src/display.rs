//! Display/output sink: float → 8-bit conversion, fixed-factor downscale,
//! and the overwrite-on-every-recompute file save.
use crate::image::io::{save_grayscale_u8, GrayImageU8};
use crate::image::{ImageF32, ImageView};
use serde::Deserialize;
use std::path::Path;

/// Rendering options for the output sink.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Uniform downscale factor applied before saving.
    pub scale: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { scale: 0.3 }
    }
}

/// Convert a float image (0..255 intensities) to an 8-bit buffer with
/// round-and-saturate semantics.
pub fn to_gray_u8(image: &ImageF32) -> GrayImageU8 {
    let data: Vec<u8> = match image.as_slice() {
        Some(slice) => slice
            .iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect(),
        None => image
            .rows()
            .flat_map(|row| row.iter().map(|&v| v.round().clamp(0.0, 255.0) as u8))
            .collect(),
    };
    GrayImageU8::new(image.w, image.h, data)
}

/// Downscale by a uniform factor with bilinear sampling.
///
/// Output dimensions are `round(w·scale) × round(h·scale)`, at least 1×1.
pub fn downscale(image: &ImageF32, scale: f32) -> ImageF32 {
    assert!(scale > 0.0, "downscale factor must be positive");
    let ow = (((image.w as f32) * scale).round() as usize).max(1);
    let oh = (((image.h as f32) * scale).round() as usize).max(1);
    let sx = image.w as f32 / ow as f32;
    let sy = image.h as f32 / oh as f32;

    let mut out = ImageF32::new(ow, oh);
    for oy in 0..oh {
        let fy = ((oy as f32 + 0.5) * sy - 0.5).clamp(0.0, (image.h - 1) as f32);
        let y0 = fy.floor() as usize;
        let y1 = (y0 + 1).min(image.h - 1);
        let wy = fy - y0 as f32;
        for ox in 0..ow {
            let fx = ((ox as f32 + 0.5) * sx - 0.5).clamp(0.0, (image.w - 1) as f32);
            let x0 = fx.floor() as usize;
            let x1 = (x0 + 1).min(image.w - 1);
            let wx = fx - x0 as f32;

            let top = image.get(x0, y0) * (1.0 - wx) + image.get(x1, y0) * wx;
            let bot = image.get(x0, y1) * (1.0 - wx) + image.get(x1, y1) * wx;
            out.set(ox, oy, top * (1.0 - wy) + bot * wy);
        }
    }
    out
}

/// Render a filtered image for display: saturate to 8 bits and downscale.
pub fn render(image: &ImageF32, options: &DisplayOptions) -> GrayImageU8 {
    to_gray_u8(&downscale(image, options.scale))
}

/// Render and unconditionally overwrite `path` with the scaled result.
pub fn save_preview(
    image: &ImageF32,
    options: &DisplayOptions,
    path: &Path,
) -> Result<(), String> {
    save_grayscale_u8(&render(image, options), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_saturates_and_rounds() {
        let mut img = ImageF32::new(4, 1);
        img.data.copy_from_slice(&[-5.0, 300.0, 127.4, 127.6]);
        let out = to_gray_u8(&img);
        assert_eq!(out.as_view().data, &[0u8, 255, 127, 128][..]);
    }

    #[test]
    fn downscale_dimensions_follow_the_factor() {
        let img = ImageF32::new(100, 60);
        let out = downscale(&img, 0.3);
        assert_eq!((out.w, out.h), (30, 18));

        // Degenerate factors never collapse below a single pixel.
        let tiny = downscale(&img, 0.001);
        assert_eq!((tiny.w, tiny.h), (1, 1));
    }

    #[test]
    fn downscale_preserves_a_flat_image() {
        let mut img = ImageF32::new(40, 40);
        img.data.fill(80.0);
        let out = downscale(&img, 0.3);
        assert!(out.data.iter().all(|&v| (v - 80.0).abs() < 1e-4));
    }
}
