//! Serializable diagnostics describing a single recompute.
//!
//! The trace is intended for JSON reports written by the demo binary;
//! timings are wall-clock milliseconds per stage.
use serde::Serialize;

/// Dimensions of the image the pipeline ran on.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Stage timings and parameter echo for one full recompute.
#[derive(Clone, Debug, Serialize)]
pub struct RecomputeTrace {
    pub input: InputDescriptor,
    /// PSF disk radius the filter was built with.
    pub radius: u32,
    /// Signal-to-noise ratio the filter was built with.
    pub snr: u32,
    /// Effective noise term `1/snr` after the zero-SNR cap.
    pub inv_snr: f32,
    /// Wiener filter construction (PSF, quadrant swap, forward DFT).
    pub filter_ms: f64,
    /// Spectrum multiplication and inverse DFT.
    pub apply_ms: f64,
    pub total_ms: f64,
}
