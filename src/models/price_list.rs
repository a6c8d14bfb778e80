//! Price list document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User who uploaded the price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListOwner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// The single price list PDF managed by the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    #[serde(rename = "_id")]
    pub id: String,
    pub document_name: String,
    pub pdf_url: String,
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<PriceListOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable file size with up to two decimals (`1.5 MB`, `0 Bytes`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut threshold = 1024u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    // Two decimals, trailing zeros dropped
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_price_list_deserializes() {
        let list: PriceList = serde_json::from_value(serde_json::json!({
            "_id": "pl1",
            "documentName": "Diwali 2026",
            "pdfUrl": "https://cdn/pl1.pdf",
            "publicId": "pl1",
            "fileSize": 2048,
            "isActive": true,
            "uploadedBy": {"_id": "u1", "username": "admin", "email": "a@b.c"},
            "createdAt": "2026-10-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(list.document_name, "Diwali 2026");
        assert!(list.is_active);
        assert_eq!(list.uploaded_by.unwrap().username, "admin");
    }
}
