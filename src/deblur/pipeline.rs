//! The [`Deblurrer`] controller and the frequency-domain convolution applier.
//!
//! Typical usage:
//! ```no_run
//! use wiener_deblur::{Deblurrer, DeblurParams};
//! use wiener_deblur::image::ImageU8;
//!
//! # fn example(gray: ImageU8) {
//! let mut deblurrer = Deblurrer::new(gray, DeblurParams::default());
//! let result = deblurrer.update_parameters(48, 1500);
//! println!("recomputed in {:.3} ms", result.trace.total_ms);
//! # }
//! ```
use super::params::DeblurParams;
use crate::diagnostics::{InputDescriptor, RecomputeTrace};
use crate::fft::Fft2d;
use crate::image::{ImageF32, ImageU8};
use crate::wiener::{inverse_snr, wiener_filter};
use log::debug;
use rustfft::num_complex::Complex;
use std::time::Instant;

/// Deblurred image plus the per-recompute trace.
#[derive(Clone, Debug)]
pub struct RecomputeResult {
    /// Deblurred output, same dimensions as the original image.
    pub image: ImageF32,
    pub trace: RecomputeTrace,
}

/// Controller holding the original image and the current parameters.
pub struct Deblurrer {
    original: ImageF32,
    params: DeblurParams,
    fft: Fft2d,
}

impl Deblurrer {
    /// Create a controller from an 8-bit grayscale view.
    pub fn new(gray: ImageU8, params: DeblurParams) -> Self {
        Self::from_f32(gray.to_f32(), params)
    }

    /// Create a controller from an already-widened float image
    /// (0..255 intensity domain).
    pub fn from_f32(original: ImageF32, params: DeblurParams) -> Self {
        let fft = Fft2d::new(original.w, original.h);
        Self {
            original,
            params: params.clamped(),
            fft,
        }
    }

    /// Current (clamped) parameters.
    pub fn params(&self) -> DeblurParams {
        self.params
    }

    /// Original image dimensions.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.original.w, self.original.h)
    }

    /// Store new parameter values (clamped to range) and rerun the full
    /// pipeline from the original image.
    pub fn update_parameters(&mut self, radius: u32, snr: u32) -> RecomputeResult {
        self.params = DeblurParams { radius, snr }.clamped();
        self.recompute()
    }

    /// Rerun the pipeline with the current parameters.
    pub fn recompute(&self) -> RecomputeResult {
        let DeblurParams { radius, snr } = self.params;
        debug!(
            "Deblurrer::recompute start w={} h={} radius={} snr={}",
            self.original.w, self.original.h, radius, snr
        );
        let total_start = Instant::now();

        let filter_start = Instant::now();
        let filter = wiener_filter(&self.fft, radius, snr);
        let filter_ms = filter_start.elapsed().as_secs_f64() * 1000.0;

        let apply_start = Instant::now();
        let image = apply_filter(&self.fft, &self.original, &filter);
        let apply_ms = apply_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Deblurrer::recompute done filter_ms={:.3} apply_ms={:.3} total_ms={:.3}",
            filter_ms, apply_ms, total_ms
        );

        RecomputeResult {
            image,
            trace: RecomputeTrace {
                input: InputDescriptor {
                    width: self.original.w,
                    height: self.original.h,
                },
                radius,
                snr,
                inv_snr: inverse_snr(snr),
                filter_ms,
                apply_ms,
                total_ms,
            },
        }
    }
}

/// Multiply the image spectrum by a frequency-domain filter and transform
/// back.
///
/// The filter grid is paired with a zero imaginary plane and multiplied
/// element-wise against the image spectrum (full complex multiplication, no
/// conjugation); it is already a frequency-domain grid and is not
/// transformed again. Output dimensions equal input dimensions exactly.
pub fn apply_filter(fft: &Fft2d, image: &ImageF32, filter: &ImageF32) -> ImageF32 {
    assert_eq!(
        (image.w, image.h),
        (filter.w, filter.h),
        "filter must match the image dimensions"
    );
    let mut spectrum = fft.forward(image);
    for (c, &f) in spectrum.data.iter_mut().zip(&filter.data) {
        *c *= Complex::new(f, 0.0);
    }
    fft.inverse_real(&spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(w: usize, h: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, ((x + 2 * y) % 256) as f32);
            }
        }
        img
    }

    #[test]
    fn output_dimensions_match_input_exactly() {
        // Includes odd sizes: no padding to a transform-friendly size.
        for (w, h) in [(64usize, 48usize), (45, 33), (37, 64)] {
            let deblurrer = Deblurrer::from_f32(
                gradient_image(w, h),
                DeblurParams {
                    radius: 8,
                    snr: 500,
                },
            );
            let result = deblurrer.recompute();
            assert_eq!((result.image.w, result.image.h), (w, h));
            assert_eq!(result.trace.input.width, w);
            assert_eq!(result.trace.input.height, h);
        }
    }

    #[test]
    fn all_pass_filter_reproduces_the_input() {
        let img = gradient_image(48, 32);
        let fft = Fft2d::new(48, 32);
        let mut ones = ImageF32::new(48, 32);
        ones.data.fill(1.0);
        let out = apply_filter(&fft, &img, &ones);
        for (&a, &b) in img.data.iter().zip(&out.data) {
            assert!((a - b).abs() < 0.1, "{} vs {}", a, b);
        }
    }

    #[test]
    fn update_clamps_and_stores_parameters() {
        let mut deblurrer = Deblurrer::from_f32(gradient_image(32, 32), DeblurParams::default());
        let result = deblurrer.update_parameters(400, 5000);
        assert_eq!(deblurrer.params().radius, crate::deblur::RADIUS_MAX);
        assert_eq!(deblurrer.params().snr, crate::deblur::SNR_MAX);
        assert_eq!(result.trace.radius, crate::deblur::RADIUS_MAX);
        assert_eq!(result.trace.snr, crate::deblur::SNR_MAX);
    }
}
