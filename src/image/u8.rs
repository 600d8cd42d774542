//! Borrowed 8-bit grayscale view used at the API boundary.
//!
//! The pipeline computes in f32; [`ImageU8::to_f32`] widens a view into the
//! owned float buffer the recompute runs on, keeping the 0..255 intensity
//! range of the 8-bit source.
use super::f32::ImageF32;
use super::traits::ImageView;

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Widen into an owned float buffer without rescaling intensities.
    pub fn to_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            let dst = &mut out.data[y * self.w..(y + 1) * self.w];
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f32;
            }
        }
        out
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_keeps_the_intensity_range() {
        let bytes = [0u8, 17, 128, 255, 64, 3];
        let view = ImageU8 {
            w: 3,
            h: 2,
            stride: 3,
            data: &bytes,
        };
        let img = view.to_f32();
        assert_eq!((img.w, img.h), (3, 2));
        assert_eq!(img.data, vec![0.0, 17.0, 128.0, 255.0, 64.0, 3.0]);
    }

    #[test]
    fn widening_respects_a_padded_stride() {
        // Two rows of width 2 padded to stride 4; padding bytes must not
        // leak into the float buffer.
        let bytes = [10u8, 20, 99, 99, 30, 40, 99, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 4,
            data: &bytes,
        };
        let img = view.to_f32();
        assert_eq!(img.data, vec![10.0, 20.0, 30.0, 40.0]);
    }
}
