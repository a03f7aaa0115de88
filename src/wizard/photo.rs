//! Profile photo intake for CV websites
//!
//! The capture section only appears for the `cv` website type. Files must
//! be images and at most 5 MB; the bytes travel either as a multipart file
//! part or as a base64 data URL, matching the two wire shapes the form
//! used.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use tracing::debug;

/// Upper size limit for profile photos
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Why a photo was rejected
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Please select an image file (JPEG, PNG, GIF, etc.): {0}")]
    NotAnImage(String),

    #[error("Please select an image smaller than 5MB (got {size} bytes)")]
    TooLarge { size: usize },

    #[error("Could not read photo: {0}")]
    Io(#[from] std::io::Error),
}

/// A validated profile photo ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePhoto {
    file_name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl ProfilePhoto {
    /// Validate and wrap raw photo bytes.
    ///
    /// The image check goes by file extension, the closest stand-in for
    /// the browser-supplied MIME type the form checked.
    pub fn from_bytes(file_name: &str, bytes: Vec<u8>) -> Result<Self, PhotoError> {
        let mime = image_mime_for(file_name)
            .ok_or_else(|| PhotoError::NotAnImage(file_name.to_string()))?;
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(PhotoError::TooLarge { size: bytes.len() });
        }
        debug!(file = %file_name, mime = %mime, size = bytes.len(), "Captured profile photo");
        Ok(Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        })
    }

    /// Read and validate a photo from disk
    pub async fn from_path(path: &Path) -> Result<Self, PhotoError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(&file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base64 data URL encoding, the alternate wire shape
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// MIME type for a file name with a known image extension
fn image_mime_for(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
