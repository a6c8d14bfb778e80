//! Files carried inside JSON request bodies.
//!
//! The browser sends uploads base64-encoded (`dataBase64`); they leave this
//! service again as multipart parts towards the catalog API.

use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};

/// A file chosen in the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    #[serde(rename = "dataBase64", with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Multipart part carrying the file name and content type
    pub fn into_part(self) -> Result<Part, reqwest::Error> {
        Part::bytes(self.data)
            .file_name(self.name)
            .mime_str(&self.content_type)
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        // Data URLs from FileReader.readAsDataURL carry a "data:...;base64," prefix
        let payload = encoded
            .split_once(";base64,")
            .map(|(_, data)| data)
            .unwrap_or(&encoded);
        STANDARD.decode(payload.trim()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_plain_base64() {
        let upload: FileUpload = serde_json::from_value(serde_json::json!({
            "name": "a.png",
            "contentType": "image/png",
            "dataBase64": "aGVsbG8="
        }))
        .unwrap();
        assert_eq!(upload.data, b"hello");
        assert_eq!(upload.size(), 5);
    }

    #[test]
    fn test_decodes_data_url() {
        let upload: FileUpload = serde_json::from_value(serde_json::json!({
            "name": "a.pdf",
            "contentType": "application/pdf",
            "dataBase64": "data:application/pdf;base64,aGVsbG8="
        }))
        .unwrap();
        assert_eq!(upload.data, b"hello");
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let result: Result<FileUpload, _> = serde_json::from_value(serde_json::json!({
            "name": "a.png",
            "contentType": "image/png",
            "dataBase64": "***"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_base64() {
        let upload = FileUpload::new("a.png", "image/png", b"hello".to_vec());
        let json = serde_json::to_value(&upload).unwrap();
        assert_eq!(json["dataBase64"], "aGVsbG8=");
    }
}
