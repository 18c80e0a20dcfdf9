//! PNG encoding for rendered icons.
//!
//! Icons are encoded to an in-memory buffer and written in one shot, so a
//! failed encode never leaves a truncated file on disk.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{IconError, Result};

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(IconError::Encode {
            message: format!(
                "cannot encode a {}x{} image",
                image.width(),
                image.height()
            ),
        });
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::Encode {
            message: e.to_string(),
        })?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_encode_round_trip() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 255, 128]));

        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

        assert_eq!((decoded.width(), decoded.height()), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 1).0, [0, 0, 255, 128]);
    }

    #[test]
    fn test_encode_empty_image_fails() {
        let err = encode_png(&RgbaImage::new(0, 0)).unwrap_err();
        assert!(matches!(err, IconError::Encode { .. }));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 40]));
        assert_eq!(encode_png(&img).unwrap(), encode_png(&img).unwrap());
    }
}
