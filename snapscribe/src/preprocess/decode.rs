use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::error::{Result, SnapscribeError};

/// File extensions offered by the upload form.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tiff", "bmp"];

/// Decode uploaded bytes into an RGB8 or Luma8 image.
///
/// The format is sniffed from magic bytes rather than trusted from the file
/// name. Anything that is not PNG, JPEG, TIFF or BMP, or that fails to
/// decode, is reported as [`SnapscribeError::Decode`].
pub fn decode_upload(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(SnapscribeError::Decode("Uploaded file is empty".to_string()));
    }

    let format = sniff_format(bytes)?;

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| SnapscribeError::Decode(format!("Failed to decode image: {e}")))?;

    Ok(normalize(img))
}

fn sniff_format(bytes: &[u8]) -> Result<ImageFormat> {
    let kind = infer::get(bytes).ok_or_else(|| {
        SnapscribeError::Decode("Unrecognized file type; upload a png, jpg, tiff or bmp image".to_string())
    })?;

    match kind.mime_type() {
        "image/png" => Ok(ImageFormat::Png),
        "image/jpeg" => Ok(ImageFormat::Jpeg),
        "image/tiff" => Ok(ImageFormat::Tiff),
        "image/bmp" => Ok(ImageFormat::Bmp),
        other => Err(SnapscribeError::Decode(format!(
            "Unsupported file type {other}; upload a png, jpg, tiff or bmp image"
        ))),
    }
}

/// Drop alpha and widen exotic layouts so every image downstream is either
/// 3-channel RGB8 or 1-channel Luma8.
fn normalize(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img,
        other if other.color().has_color() => DynamicImage::ImageRgb8(other.to_rgb8()),
        other => DynamicImage::ImageLuma8(other.to_luma8()),
    }
}

pub fn channel_count(img: &DynamicImage) -> u8 {
    img.color().channel_count()
}

pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| SnapscribeError::Internal(format!("Failed to encode image: {e}")))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};

    fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut output = Vec::new();
        img.write_to(&mut Cursor::new(&mut output), format).unwrap();
        output
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode(&DynamicImage::new_rgb8(30, 20), ImageFormat::Png);
        let img = decode_upload(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (30, 20));
        assert_eq!(channel_count(&img), 3);
    }

    #[test]
    fn test_decode_jpeg_bmp_tiff() {
        let source = DynamicImage::new_rgb8(16, 12);
        for format in [ImageFormat::Jpeg, ImageFormat::Bmp, ImageFormat::Tiff] {
            let bytes = encode(&source, format);
            let img = decode_upload(&bytes)
                .unwrap_or_else(|e| panic!("{format:?} should decode: {e}"));
            assert_eq!((img.width(), img.height()), (16, 12));
        }
    }

    #[test]
    fn test_rgba_is_flattened_to_rgb() {
        let rgba = RgbaImage::from_pixel(10, 10, Rgba([10, 20, 30, 128]));
        let bytes = encode(&DynamicImage::ImageRgba8(rgba), ImageFormat::Png);

        let img = decode_upload(&bytes).unwrap();
        assert!(matches!(img, DynamicImage::ImageRgb8(_)));
        assert_eq!(img.to_rgb8().get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_gray_alpha_is_flattened_to_luma() {
        let la = GrayAlphaImage::from_pixel(10, 10, LumaA([77, 0]));
        let bytes = encode(&DynamicImage::ImageLumaA8(la), ImageFormat::Png);

        let img = decode_upload(&bytes).unwrap();
        assert!(matches!(img, DynamicImage::ImageLuma8(_)));
        assert_eq!(channel_count(&img), 1);
    }

    #[test]
    fn test_empty_upload_is_decode_error() {
        assert!(matches!(decode_upload(&[]), Err(SnapscribeError::Decode(_))));
    }

    #[test]
    fn test_text_upload_is_decode_error() {
        let result = decode_upload(b"definitely not an image");
        assert!(matches!(result, Err(SnapscribeError::Decode(_))));
    }

    #[test]
    fn test_unsupported_image_type_is_rejected() {
        // GIF magic bytes
        let result = decode_upload(b"GIF89a\x01\x00\x01\x00\x00\x00\x00;");
        let err = result.unwrap_err();
        assert!(matches!(err, SnapscribeError::Decode(_)));
        assert!(err.to_string().contains("image/gif"));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let bytes = encode(&DynamicImage::new_rgb8(40, 40), ImageFormat::Png);
        let result = decode_upload(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(SnapscribeError::Decode(_))));
    }

    #[test]
    fn test_encode_png_round_trips_dimensions() {
        let img = DynamicImage::new_luma8(7, 9);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(decode_upload(&bytes).unwrap().height(), 9);
    }
}
