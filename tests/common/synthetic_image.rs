use wiener_deblur::fft::{quadrant_swap, Fft2d};
use wiener_deblur::image::ImageF32;
use wiener_deblur::psf::disk_psf;

/// Generates an image with a single bright pixel at the centre.
pub fn point_source(width: usize, height: usize, peak: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageF32::new(width, height);
    img.set(width / 2, height / 2, peak);
    img
}

/// Simulates out-of-focus blur: circular convolution with a centred disk
/// PSF of the given radius, done in the frequency domain.
pub fn blur_with_disk(image: &ImageF32, radius: u32) -> ImageF32 {
    let fft = Fft2d::new(image.w, image.h);
    let mut psf = disk_psf(image.w, image.h, radius);
    quadrant_swap(&mut psf);
    let psf_spectrum = fft.forward(&psf);
    let mut spectrum = fft.forward(image);
    for (c, p) in spectrum.data.iter_mut().zip(&psf_spectrum.data) {
        *c *= *p;
    }
    fft.inverse_real(&spectrum)
}

/// Sum of intensities inside a `(2*half+1)²` window centred on `(cx, cy)`.
pub fn window_sum(image: &ImageF32, cx: usize, cy: usize, half: usize) -> f32 {
    let x0 = cx.saturating_sub(half);
    let y0 = cy.saturating_sub(half);
    let x1 = (cx + half).min(image.w - 1);
    let y1 = (cy + half).min(image.h - 1);
    let mut sum = 0.0f32;
    for y in y0..=y1 {
        for x in x0..=x1 {
            sum += image.get(x, y);
        }
    }
    sum
}

/// Largest intensity inside the same window.
pub fn window_max(image: &ImageF32, cx: usize, cy: usize, half: usize) -> f32 {
    let x0 = cx.saturating_sub(half);
    let y0 = cy.saturating_sub(half);
    let x1 = (cx + half).min(image.w - 1);
    let y1 = (cy + half).min(image.h - 1);
    let mut max = f32::MIN;
    for y in y0..=y1 {
        for x in x0..=x1 {
            max = max.max(image.get(x, y));
        }
    }
    max
}
