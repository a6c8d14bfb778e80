//! Price list upload form

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::upload::FileUpload;

use super::{FormError, FormMode};

/// 1 GiB
pub const MAX_PDF_BYTES: u64 = 1024 * 1024 * 1024;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Document name plus an optional replacement PDF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListUpload {
    pub document_name: String,
    #[serde(default)]
    pub pdf: Option<FileUpload>,
}

impl PriceListUpload {
    /// A new price list needs a PDF; an update may keep the stored one.
    pub fn validate(&self, mode: FormMode) -> Result<(), FormError> {
        if self.document_name.trim().is_empty() {
            return Err(FormError::MissingDocumentName);
        }

        match &self.pdf {
            None if mode.is_edit() => Ok(()),
            None => Err(FormError::MissingPdf),
            Some(pdf) if pdf.content_type != PDF_CONTENT_TYPE => Err(FormError::NotPdf),
            Some(pdf) if pdf.size() > MAX_PDF_BYTES => Err(FormError::PdfTooLarge),
            Some(_) => Ok(()),
        }
    }

    pub fn into_multipart(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new().text("documentName", self.document_name);
        if let Some(pdf) = self.pdf {
            form = form.part("pdf", pdf.into_part()?);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(pdf: Option<FileUpload>) -> PriceListUpload {
        PriceListUpload {
            document_name: "Diwali 2026".into(),
            pdf,
        }
    }

    fn pdf() -> FileUpload {
        FileUpload::new("list.pdf", "application/pdf", b"%PDF-1.7".to_vec())
    }

    #[test]
    fn test_create_requires_pdf() {
        assert_eq!(upload(None).validate(FormMode::Create), Err(FormError::MissingPdf));
        assert_eq!(upload(Some(pdf())).validate(FormMode::Create), Ok(()));
    }

    #[test]
    fn test_update_may_keep_pdf() {
        assert_eq!(upload(None).validate(FormMode::Edit), Ok(()));
    }

    #[test]
    fn test_rejects_non_pdf() {
        let png = FileUpload::new("list.png", "image/png", vec![1]);
        assert_eq!(
            upload(Some(png)).validate(FormMode::Edit),
            Err(FormError::NotPdf)
        );
    }

    #[test]
    fn test_requires_document_name() {
        let form = PriceListUpload {
            document_name: "  ".into(),
            pdf: Some(pdf()),
        };
        assert_eq!(
            form.validate(FormMode::Create),
            Err(FormError::MissingDocumentName)
        );
    }
}
