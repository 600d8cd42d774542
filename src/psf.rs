//! Disk-shaped point-spread function modelling out-of-focus blur.
//!
//! The PSF always spans the full image size (not a small kernel): the
//! frequency-domain filter construction needs its spectrum on the same grid
//! as the image spectrum.
use crate::image::ImageF32;

/// Width in pixels of the linear feather band at the disk boundary.
const EDGE_FEATHER: f32 = 5.0;

/// Build a normalized disk PSF of the given radius on a `w × h` grid.
///
/// The disk is centred at `(w/2, h/2)`, value 1 inside, 0 outside, with the
/// boundary feathered linearly over [`EDGE_FEATHER`] pixels. The grid is
/// scaled so its values sum to 1 (energy-preserving blur kernel).
///
/// A degenerate zero-sum grid falls back to a unit impulse at the centre,
/// which makes the downstream Wiener filter an identity (up to the SNR
/// term) instead of dividing by zero.
pub fn disk_psf(w: usize, h: usize, radius: u32) -> ImageF32 {
    let mut psf = ImageF32::new(w, h);
    let cx = (w / 2) as f32;
    let cy = (h / 2) as f32;
    let r = radius as f32;
    let half = EDGE_FEATHER * 0.5;

    let mut sum = 0.0f64;
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let v = ((r + half - dist) / EDGE_FEATHER).clamp(0.0, 1.0);
            if v > 0.0 {
                psf.set(x, y, v);
                sum += v as f64;
            }
        }
    }

    if sum <= f64::EPSILON {
        psf.set(w / 2, h / 2, 1.0);
        return psf;
    }

    let inv = (1.0 / sum) as f32;
    for v in &mut psf.data {
        *v *= inv;
    }
    psf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_sum(img: &ImageF32) -> f64 {
        img.data.iter().map(|&v| v as f64).sum()
    }

    #[test]
    fn disk_psf_sums_to_one() {
        for radius in [1u32, 5, 10, 64, 130] {
            let psf = disk_psf(128, 96, radius);
            let sum = grid_sum(&psf);
            assert!(
                (sum - 1.0).abs() < 1e-4,
                "radius={} sum={:.6}",
                radius,
                sum
            );
        }
    }

    #[test]
    fn zero_radius_still_normalized() {
        // The feather band keeps a few positive samples around the centre.
        let psf = disk_psf(64, 64, 0);
        let sum = grid_sum(&psf);
        assert!((sum - 1.0).abs() < 1e-4, "sum={:.6}", sum);
        assert!(psf.get(32, 32) > 0.0);
    }

    #[test]
    fn disk_psf_is_symmetric_about_centre() {
        let w = 64usize;
        let h = 64usize;
        let psf = disk_psf(w, h, 12);
        for dy in 0..16usize {
            for dx in 0..16usize {
                let a = psf.get(w / 2 + dx, h / 2 + dy);
                let b = psf.get(w / 2 - dx, h / 2 - dy);
                assert!(
                    (a - b).abs() < 1e-6,
                    "asymmetry at ({dx},{dy}): {a} vs {b}"
                );
            }
        }
    }
}
