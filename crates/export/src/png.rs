use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::ExportError;

/// MIME type of every exported artifact.
pub const PNG_MIME: &str = "image/png";

/// First eight bytes of any PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode a packed RGB8 buffer as PNG.
pub fn encode_rgb(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(ExportError::Encoding(format!(
            "buffer holds {} bytes, {width}x{height} RGB needs {expected}",
            pixels.len()
        )));
    }
    let mut out = Vec::with_capacity(expected / 8);
    PngEncoder::new(&mut out).write_image(pixels, width, height, ExtendedColorType::Rgb8)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_buffer() {
        let pixels = [255u8; 4 * 3 * 3];
        let bytes = encode_rgb(&pixels, 4, 3).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(3, 2).0, [255, 255, 255]);
    }

    #[test]
    fn test_encode_rejects_short_buffer() {
        let pixels = [0u8; 5];
        let err = encode_rgb(&pixels, 4, 3).unwrap_err();
        assert!(matches!(err, ExportError::Encoding(_)), "got: {err:?}");
    }
}
