//! Wiener deconvolution filter built from the disk PSF spectrum.
//!
//! The filter is a real-valued frequency-domain grid `H / (H² + 1/snr)`,
//! where `H` is the real plane of the forward-transformed (and
//! quadrant-swapped) PSF. The imaginary plane is discarded at this step: the
//! PSF is real and symmetric about the grid centre, so its spectrum is real
//! up to floating-point noise.
use crate::fft::{quadrant_swap, Fft2d};
use crate::image::ImageF32;
use crate::psf::disk_psf;
use log::debug;

/// Substitute for `1/snr` when `snr == 0`; avoids an infinite noise term.
pub const INV_SNR_CAP: f32 = 1e6;

/// Inverse signal-to-noise ratio used as the additive noise term.
#[inline]
pub fn inverse_snr(snr: u32) -> f32 {
    if snr == 0 {
        INV_SNR_CAP
    } else {
        1.0 / snr as f32
    }
}

/// Construct the Wiener filter for the planned grid size.
///
/// Pipeline: disk PSF at full grid size → quadrant swap → forward DFT →
/// `H_re / (H_re² + 1/snr)` element-wise. The result is a frequency-domain
/// grid; it is multiplied against image spectra directly, never transformed
/// again.
pub fn wiener_filter(fft: &Fft2d, radius: u32, snr: u32) -> ImageF32 {
    let (w, h) = (fft.width(), fft.height());
    let mut psf = disk_psf(w, h, radius);
    quadrant_swap(&mut psf);
    let spectrum = fft.forward(&psf);

    let nsr = inverse_snr(snr);
    debug!("wiener_filter {}x{} radius={} snr={} nsr={:.6}", w, h, radius, snr, nsr);

    let mut filter = ImageF32::new(w, h);
    for (dst, c) in filter.data.iter_mut().zip(&spectrum.data) {
        let re = c.re;
        *dst = re / (re * re + nsr);
    }
    filter
}
