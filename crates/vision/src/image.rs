use crate::error::{Result, VisionError};

/// 10 MiB cap, matching the upload limit of the capture client.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Sniff the image format from magic bytes and return its MIME type.
///
/// JPEG, PNG and WebP are accepted; anything else is rejected before the
/// bytes ever reach the vision API.
pub fn detect_image_format(data: &[u8]) -> Result<&'static str> {
    if data.len() > MAX_IMAGE_BYTES {
        return Err(VisionError::InvalidImage(format!(
            "image is {} bytes, maximum is {} bytes",
            data.len(),
            MAX_IMAGE_BYTES
        )));
    }

    if data.starts_with(&[0xFF, 0xD8]) {
        return Ok("image/jpeg");
    }
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Ok("image/png");
    }
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Ok("image/webp");
    }

    Err(VisionError::InvalidImage(
        "unsupported format, expected JPEG, PNG or WebP".to_string(),
    ))
}
