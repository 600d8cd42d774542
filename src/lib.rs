#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod deblur;
pub mod diagnostics;
pub mod display;
pub mod image;

// Numeric building blocks – public so tools can compose them directly.
pub mod fft;
pub mod psf;
pub mod wiener;

// --- High-level re-exports -------------------------------------------------

// Main entry points: controller + results.
pub use crate::deblur::{apply_filter, DeblurParams, Deblurrer, RecomputeResult};

// Per-recompute diagnostics returned alongside the image.
pub use crate::diagnostics::RecomputeTrace;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use wiener_deblur::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let mut deblurrer = Deblurrer::new(img, DeblurParams::default());
/// let result = deblurrer.recompute();
/// println!("total_ms={:.3}", result.trace.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{DeblurParams, Deblurrer, RecomputeResult};
}
