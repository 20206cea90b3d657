use image::{DynamicImage, GrayImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::separable_filter_equal;

/// 5-tap binomial approximation of a Gaussian, the kernel used when a 5x5
/// blur is requested without an explicit sigma.
const GAUSSIAN_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Binarize a grayscale image at the Otsu level computed from its own
/// histogram. Pixels strictly above the level become 255, the rest 0.
pub fn otsu_binarize(gray: &GrayImage) -> GrayImage {
    let level = otsu_level(gray);
    tracing::debug!(level, "Otsu threshold selected");

    threshold(gray, level, ThresholdType::Binary)
}

/// Smooth every channel with a fixed 5x5 Gaussian kernel.
///
/// Filtered values are truncated to `u8`, not rounded, so results can sit one
/// level below a rounding implementation.
///
/// Images are expected in the normalized layouts produced by
/// [`super::decode_upload`]; any other layout is blurred as RGB.
pub fn gaussian_blur_5x5(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(gray) => {
            DynamicImage::ImageLuma8(separable_filter_equal(gray, &GAUSSIAN_5))
        }
        DynamicImage::ImageRgb8(rgb) => {
            DynamicImage::ImageRgb8(separable_filter_equal(rgb, &GAUSSIAN_5))
        }
        other => DynamicImage::ImageRgb8(separable_filter_equal(&other.to_rgb8(), &GAUSSIAN_5)),
    }
}
