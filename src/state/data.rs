/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the backend boundary and the UI layer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

/// The capture the user picked, already accepted by the validator
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Filename only (e.g., "capture1.iq")
    name: String,
    /// Raw capture bytes, shared between in-flight requests
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    /// Wrap a file that has passed validation.
    /// Construction is crate-private so every instance went through
    /// [`crate::capture::validator`] first.
    pub(crate) fn new(name: String, bytes: Vec<u8>) -> Self {
        Self {
            name,
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Backend-assigned identifier of a saved file. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(String);

impl CatalogId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file persisted server-side, as listed by `GET /files`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// Unique backend ID (`_id` on the wire)
    #[serde(rename = "_id")]
    pub id: CatalogId,
    /// Original filename of the capture
    pub filename: String,
}

/// Errors while turning the encoded payload into displayable pixels
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("spectrogram payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("spectrogram payload is not a PNG image")]
    NotPng,
    #[error("failed to decode spectrogram PNG: {0}")]
    Decode(#[from] image::ImageError),
}

/// A rendered spectrogram exactly as the backend sent it (base64 PNG).
///
/// The encoded text is the source of truth; decoding happens only when
/// the viewer needs pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrogramImage {
    encoded: String,
}

/// Decoded PNG bytes together with the image dimensions
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SpectrogramImage {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// The payload as received, still base64-encoded
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Decode the base64 payload and verify it really is a PNG.
    ///
    /// Only the PNG header is parsed for the dimensions; pixel decoding
    /// is left to the renderer.
    pub fn decode_png(&self) -> Result<DecodedPng, ImageError> {
        let bytes = STANDARD.decode(self.encoded().trim())?;

        if image::guess_format(&bytes).ok() != Some(image::ImageFormat::Png) {
            return Err(ImageError::NotPng);
        }

        let (width, height) =
            image::ImageReader::with_format(Cursor::new(&bytes), image::ImageFormat::Png)
                .into_dimensions()?;

        Ok(DecodedPng {
            bytes,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a tiny in-memory PNG the way the backend would
    fn encoded_png(width: u32, height: u32) -> String {
        let img = image::RgbImage::new(width, height);
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        STANDARD.encode(buf.into_inner())
    }

    #[test]
    fn test_catalog_entry_reads_underscore_id() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"_id": "a1", "filename": "capture1.iq"}"#).unwrap();

        assert_eq!(entry.id, CatalogId::new("a1"));
        assert_eq!(entry.filename, "capture1.iq");
    }

    #[test]
    fn test_decode_png_reports_dimensions() {
        let image = SpectrogramImage::new(encoded_png(4, 3));
        let decoded = image.decode_png().unwrap();

        assert_eq!((decoded.width, decoded.height), (4, 3));
        assert!(decoded.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_decode_rejects_non_png_payload() {
        let image = SpectrogramImage::new(STANDARD.encode(b"definitely not an image"));
        assert!(matches!(image.decode_png(), Err(ImageError::NotPng)));

        let garbage = SpectrogramImage::new("%%%not base64%%%");
        assert!(matches!(garbage.decode_png(), Err(ImageError::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_truncated_png() {
        // Valid signature, no IHDR chunk behind it
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        bytes.extend_from_slice(b"garbage");
        let image = SpectrogramImage::new(STANDARD.encode(bytes));

        assert!(matches!(image.decode_png(), Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_data_url_payload_is_not_accepted() {
        let image = SpectrogramImage::new(format!("data:image/png;base64,{}", encoded_png(2, 2)));
        assert!(matches!(image.decode_png(), Err(ImageError::Base64(_))));
    }

    #[test]
    fn test_selected_file_keeps_bytes_intact() {
        let file = SelectedFile::new("capture1.iq".into(), vec![1, 2, 3, 255]);
        let copy = file.clone();

        assert_eq!(copy.name(), "capture1.iq");
        assert_eq!(copy.bytes(), &[1, 2, 3, 255]);
    }
}
