//! Tunable parameters driving the Wiener filter recompute.
use serde::Deserialize;

/// Largest accepted PSF disk radius in pixels.
pub const RADIUS_MAX: u32 = 130;
/// Largest accepted signal-to-noise ratio value.
pub const SNR_MAX: u32 = 2000;

/// Deblurring parameters. Both knobs are independent; updating either one
/// re-triggers a full recompute using the current value of the other.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeblurParams {
    /// Disk radius of the assumed point-spread function, in pixels.
    pub radius: u32,
    /// Signal-to-noise ratio; the filter uses `1/snr` as its noise term.
    pub snr: u32,
}

impl Default for DeblurParams {
    fn default() -> Self {
        Self {
            radius: 64,
            snr: 1200,
        }
    }
}

impl DeblurParams {
    /// Clamp both knobs to their accepted ranges.
    pub fn clamped(self) -> Self {
        Self {
            radius: self.radius.min(RADIUS_MAX),
            snr: self.snr.min(SNR_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        let p = DeblurParams {
            radius: 500,
            snr: 9000,
        }
        .clamped();
        assert_eq!(p.radius, RADIUS_MAX);
        assert_eq!(p.snr, SNR_MAX);
    }

    #[test]
    fn defaults_match_the_slider_defaults() {
        let p = DeblurParams::default();
        assert_eq!(p.radius, 64);
        assert_eq!(p.snr, 1200);
    }
}
