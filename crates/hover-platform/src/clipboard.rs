use hover_common::PlatformError;

/// Cross-platform clipboard abstraction backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Creates a new clipboard handle.
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn get_text(&mut self) -> Result<String, PlatformError> {
        self.inner
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    /// Empties the clipboard so a later image read only sees fresh content.
    pub fn clear(&mut self) -> Result<(), PlatformError> {
        self.inner
            .clear()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    /// Reads the clipboard image, if any, encoded as PNG.
    ///
    /// Returns `Ok(None)` when the clipboard holds no image.
    pub fn get_image_png(&mut self) -> Result<Option<Vec<u8>>, PlatformError> {
        match self.inner.get_image() {
            Ok(image) => encode_png(image.width, image.height, &image.bytes).map(Some),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(PlatformError::ClipboardError(e.to_string())),
        }
    }
}

/// Encode 8-bit RGBA pixels as a PNG file.
pub fn encode_png(width: usize, height: usize, rgba: &[u8]) -> Result<Vec<u8>, PlatformError> {
    if width == 0 || height == 0 || rgba.len() != width * height * 4 {
        return Err(PlatformError::ClipboardError(format!(
            "image buffer of {} bytes does not match {width}x{height} RGBA",
            rgba.len()
        )));
    }
    let png_err = |e: png::EncodingError| PlatformError::ClipboardError(format!("png: {e}"));

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(png_err)?;
    writer.write_image_data(rgba).map_err(png_err)?;
    writer.finish().map_err(png_err)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encodes_rgba_as_png() {
        let pixels = vec![255u8; 2 * 3 * 4];
        let png = encode_png(2, 3, &pixels).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let decoder = png::Decoder::new(png.as_slice());
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 2);
        assert_eq!(reader.info().height, 3);
    }

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(encode_png(2, 2, &[0u8; 15]).is_err());
        assert!(encode_png(0, 4, &[]).is_err());
    }
}
