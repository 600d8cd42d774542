//! 2D discrete Fourier transform over `rustfft`, plus the spatial quadrant
//! swap used to centre a kernel's zero-frequency component.
//!
//! Convention: the forward transform is unnormalized and the inverse is
//! scaled by `1/(w·h)`, so forward-then-inverse reproduces the input with no
//! separate rescale step. Keeping the forward pass unnormalized also keeps a
//! unit-sum kernel's DC coefficient at exactly 1, which the Wiener filter
//! formula relies on.
use crate::image::ImageF32;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Complex-valued frequency grid, row-major, same dimensions as its source.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub w: usize,
    pub h: usize,
    pub data: Vec<Complex<f32>>,
}

/// Planned 2D DFT for a fixed grid size.
///
/// Plans are built once per image size and reused across recomputes; the
/// transforms themselves allocate only the transpose scratch buffer.
pub struct Fft2d {
    w: usize,
    h: usize,
    row_fwd: Arc<dyn Fft<f32>>,
    col_fwd: Arc<dyn Fft<f32>>,
    row_inv: Arc<dyn Fft<f32>>,
    col_inv: Arc<dyn Fft<f32>>,
}

impl Fft2d {
    /// Plan forward and inverse transforms for a `w × h` grid.
    pub fn new(w: usize, h: usize) -> Self {
        assert!(w > 0 && h > 0, "transform requires a non-empty grid");
        let mut planner = FftPlanner::<f32>::new();
        Self {
            w,
            h,
            row_fwd: planner.plan_fft_forward(w),
            col_fwd: planner.plan_fft_forward(h),
            row_inv: planner.plan_fft_inverse(w),
            col_inv: planner.plan_fft_inverse(h),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Forward-transform a real-valued grid (zero imaginary plane).
    pub fn forward(&self, image: &ImageF32) -> Spectrum {
        assert_eq!(
            (image.w, image.h),
            (self.w, self.h),
            "image size does not match the planned transform"
        );
        let mut data: Vec<Complex<f32>> =
            image.data.iter().map(|&v| Complex::new(v, 0.0)).collect();
        self.transform(&mut data, &self.row_fwd, &self.col_fwd);
        Spectrum {
            w: self.w,
            h: self.h,
            data,
        }
    }

    /// Inverse-transform a spectrum, discarding the imaginary plane.
    pub fn inverse_real(&self, spectrum: &Spectrum) -> ImageF32 {
        assert_eq!(
            (spectrum.w, spectrum.h),
            (self.w, self.h),
            "spectrum size does not match the planned transform"
        );
        let mut data = spectrum.data.clone();
        self.transform(&mut data, &self.row_inv, &self.col_inv);
        let norm = 1.0 / (self.w * self.h) as f32;
        let mut out = ImageF32::new(self.w, self.h);
        for (dst, c) in out.data.iter_mut().zip(&data) {
            *dst = c.re * norm;
        }
        out
    }

    /// Row-column decomposition: transform rows in place, then columns via a
    /// transpose round trip.
    fn transform(&self, data: &mut [Complex<f32>], row: &Arc<dyn Fft<f32>>, col: &Arc<dyn Fft<f32>>) {
        for r in data.chunks_exact_mut(self.w) {
            row.process(r);
        }
        let mut t = transpose(data, self.w, self.h);
        for c in t.chunks_exact_mut(self.h) {
            col.process(c);
        }
        for y in 0..self.h {
            for x in 0..self.w {
                data[y * self.w + x] = t[x * self.h + y];
            }
        }
    }
}

fn transpose(src: &[Complex<f32>], w: usize, h: usize) -> Vec<Complex<f32>> {
    let mut t = vec![Complex::new(0.0, 0.0); w * h];
    for y in 0..h {
        for x in 0..w {
            t[x * h + y] = src[y * w + x];
        }
    }
    t
}

/// Swap diagonal quadrants of a spatial grid in place (1↔4, 2↔3).
///
/// Moves a kernel centred at `(w/2, h/2)` so that its centre lands on the
/// grid origin before the forward transform. Quadrants are the `(w/2)×(h/2)`
/// corner blocks; for odd sizes the middle row/column stays put. Applying
/// the swap twice restores the grid.
pub fn quadrant_swap(image: &mut ImageF32) {
    let cx = image.w / 2;
    let cy = image.h / 2;
    for y in 0..cy {
        for x in 0..cx {
            let a = image.idx(x, y);
            let b = image.idx(x + cx, y + cy);
            image.data.swap(a, b);
            let c = image.idx(x + cx, y);
            let d = image.idx(x, y + cy);
            image.data.swap(c, d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_image(w: usize, h: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, ((x * 31 + y * 17) % 97) as f32);
            }
        }
        img
    }

    #[test]
    fn forward_inverse_round_trip() {
        for (w, h) in [(32usize, 24usize), (45, 33)] {
            let img = ramp_image(w, h);
            let fft = Fft2d::new(w, h);
            let restored = fft.inverse_real(&fft.forward(&img));
            assert_eq!((restored.w, restored.h), (w, h));
            for (i, (&a, &b)) in img.data.iter().zip(&restored.data).enumerate() {
                assert!(
                    (a - b).abs() < 0.1,
                    "mismatch at {}: {} vs {}",
                    i,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn quadrant_swap_is_an_involution() {
        for (w, h) in [(16usize, 12usize), (33, 21)] {
            let img = ramp_image(w, h);
            let mut swapped = img.clone();
            quadrant_swap(&mut swapped);
            quadrant_swap(&mut swapped);
            assert_eq!(img.data, swapped.data, "{}x{}", w, h);
        }
    }

    #[test]
    fn quadrant_swap_moves_centre_to_origin() {
        let mut img = ImageF32::new(16, 16);
        img.set(8, 8, 1.0);
        quadrant_swap(&mut img);
        assert_eq!(img.get(0, 0), 1.0);
        assert_eq!(img.get(8, 8), 0.0);
    }
}
