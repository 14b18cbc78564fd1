// RGB raster -> JPEG bytes -> base64 text, all in memory

use crate::error::RenderError;
use base64::Engine as _;
use std::io::Cursor;

pub fn encode_jpeg(rgb: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let img = image::RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        RenderError::Draw(format!("raster buffer does not match {}x{}", width, height))
    })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Jpeg)?;
    Ok(out.into_inner())
}

pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_starts_with_soi_marker() {
        let jpeg = encode_jpeg(vec![255; 8 * 4 * 3], 8, 4).unwrap();
        assert_eq!(&jpeg[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn short_buffer_is_rejected() {
        assert!(encode_jpeg(vec![0; 10], 8, 4).is_err());
    }
}
