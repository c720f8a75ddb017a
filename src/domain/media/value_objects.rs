use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_IMAGE_BYTES: usize = 2048 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/pjpeg"];

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(pub i64);

impl PhotoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("photo id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PhotoId> for i64 {
    fn from(value: PhotoId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvatarId(pub i64);

impl AvatarId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("avatar id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AvatarId> for i64 {
    fn from(value: AvatarId) -> Self {
        value.0
    }
}

/// Name of a file inside the upload directory. Never contains a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub const MAX_LENGTH: usize = 191;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("file name cannot be empty"));
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::validation(format!(
                "file name must be at most {} characters long",
                Self::MAX_LENGTH
            )));
        }
        if value.contains(['/', '\\']) || value.starts_with('.') {
            return Err(DomainError::validation(format!(
                "'{value}' is not a valid file name"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoredFileName> for String {
    fn from(value: StoredFileName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&JPEG_SIGNATURE) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }
}

/// Checks an uploaded image against the accepted formats and size limit.
///
/// The format is taken from the file signature; a declared content type, when
/// present, must also be one of the accepted types.
pub fn validate_image(declared_type: Option<&str>, bytes: &[u8]) -> DomainResult<ImageFormat> {
    if bytes.is_empty() {
        return Err(DomainError::validation("uploaded file is empty"));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DomainError::validation(format!(
            "the file is too large, allowed maximum size is {} KiB",
            MAX_IMAGE_BYTES / 1024
        )));
    }
    if let Some(declared) = declared_type {
        let essence = declared.split(';').next().unwrap_or_default().trim();
        if !ALLOWED_IMAGE_TYPES.contains(&essence) {
            return Err(DomainError::validation(format!(
                "unsupported image type '{essence}', allowed types are {}",
                ALLOWED_IMAGE_TYPES.join(", ")
            )));
        }
    }
    ImageFormat::sniff(bytes)
        .ok_or_else(|| DomainError::validation("file is not a valid PNG or JPEG image"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0u8; 16]);
        bytes
    }

    #[test]
    fn accepts_png_and_jpeg_signatures() {
        assert_eq!(validate_image(Some("image/png"), &png_bytes()).unwrap(), ImageFormat::Png);
        assert_eq!(
            validate_image(Some("image/pjpeg"), &[0xFF, 0xD8, 0xFF, 0xE0]).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn rejects_unsupported_declared_type() {
        assert!(validate_image(Some("image/gif"), &png_bytes()).is_err());
    }

    #[test]
    fn rejects_unknown_signature() {
        assert!(validate_image(None, b"GIF89a....").is_err());
    }

    #[test]
    fn rejects_oversized_upload() {
        let mut bytes = png_bytes();
        bytes.resize(MAX_IMAGE_BYTES + 1, 0);
        assert!(validate_image(Some("image/png"), &bytes).is_err());
    }

    #[test]
    fn stored_file_names_cannot_escape_directory() {
        assert!(StoredFileName::new("../etc/passwd").is_err());
        assert!(StoredFileName::new(".hidden").is_err());
        assert!(StoredFileName::new("a/b.png").is_err());
        assert!(StoredFileName::new("3f2a.png").is_ok());
    }
}
