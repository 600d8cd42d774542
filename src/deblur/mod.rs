//! Deblurring controller orchestrating the recompute pipeline end-to-end.
//!
//! Overview
//! - Owns the original grayscale image (loaded once, read-only thereafter)
//!   and the current tunable parameters.
//! - Every parameter update synchronously reruns the full pipeline from the
//!   original image: Wiener filter construction, spectrum multiplication,
//!   inverse transform. No intermediate grid is cached between recomputes;
//!   only the FFT plan for the fixed image size is reused.
//! - The UI layer is an external caller feeding new parameter values; the
//!   controller knows nothing about windows or sliders.
//!
//! Modules
//! - [`params`] – tunable parameters and their clamping ranges.
//! - `pipeline` – the [`Deblurrer`] implementation and the convolution
//!   applier.

pub mod params;
mod pipeline;

pub use params::{DeblurParams, RADIUS_MAX, SNR_MAX};
pub use pipeline::{apply_filter, Deblurrer, RecomputeResult};
