//! Upload guards for product images

use serde::{Deserialize, Serialize};

use crate::upload::FileUpload;

/// At most this many images per product, stored and new together.
pub const MAX_IMAGES: usize = 3;

/// 1 MiB per image.
pub const MAX_IMAGE_BYTES: u64 = 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Check one image against the type and size guards.
pub fn check_image(file: &FileUpload) -> Result<(), String> {
    if !ALLOWED_IMAGE_TYPES.contains(&file.content_type.as_str()) {
        return Err("Invalid file type. Only JPG, JPEG, and PNG are allowed.".to_string());
    }

    if file.size() > MAX_IMAGE_BYTES {
        let size_mb = file.size() as f64 / (1024.0 * 1024.0);
        return Err(format!(
            "File too large ({:.2}MB). Maximum size is 1MB.",
            size_mb
        ));
    }

    Ok(())
}

/// A new image in the form. Failing images stay in the list, flagged,
/// so the user can see why and remove them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    #[serde(flatten)]
    pub file: FileUpload,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ImageUpload {
    pub fn new(file: FileUpload) -> Self {
        match check_image(&file) {
            Ok(()) => Self {
                file,
                is_valid: true,
                error_message: None,
            },
            Err(message) => Self {
                file,
                is_valid: false,
                error_message: Some(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content_type: &str, size: usize) -> FileUpload {
        FileUpload::new("shot.png", content_type, vec![0u8; size])
    }

    #[test]
    fn test_accepts_small_png_and_jpeg() {
        assert!(check_image(&file("image/png", 10)).is_ok());
        assert!(check_image(&file("image/jpeg", 10)).is_ok());
        assert!(check_image(&file("image/jpg", 1024 * 1024)).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let err = check_image(&file("image/gif", 10)).unwrap_err();
        assert!(err.contains("Only JPG, JPEG, and PNG"));
    }

    #[test]
    fn test_rejects_large_files() {
        let err = check_image(&file("image/png", 1024 * 1024 + 1)).unwrap_err();
        assert_eq!(err, "File too large (1.00MB). Maximum size is 1MB.");
    }

    #[test]
    fn test_image_upload_flags_invalid() {
        let upload = ImageUpload::new(file("image/webp", 10));
        assert!(!upload.is_valid);
        assert!(upload.error_message.is_some());

        let upload = ImageUpload::new(file("image/png", 10));
        assert!(upload.is_valid);
        assert!(upload.error_message.is_none());
    }
}
