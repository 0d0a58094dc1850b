//! Multipart PDF upload extraction

use axum::extract::Multipart;
use domain::Document;
use tracing::debug;

use crate::error::ApiError;

/// Multipart field carrying the agreement
pub const FILE_FIELD: &str = "file";

const PDF_CONTENT_TYPE: &str = "application/pdf";
const GENERIC_CONTENT_TYPE: &str = "application/octet-stream";

/// Whether a part's declared type admits a PDF
///
/// Generic or missing types are accepted when the file name ends in `.pdf`;
/// the bytes are checked for a PDF header later either way.
fn is_pdf_part(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let has_pdf_name = file_name.is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
    match content_type.map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_lowercase()) {
        Some(ct) if ct == PDF_CONTENT_TYPE => true,
        Some(ct) if ct == GENERIC_CONTENT_TYPE => has_pdf_name,
        Some(_) => false,
        None => has_pdf_name,
    }
}

/// Read the `file` part of a multipart upload into a [`Document`]
///
/// Other parts are ignored.
pub async fn read_pdf_upload(mut multipart: Multipart) -> Result<Document, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        if !is_pdf_part(field.content_type(), file_name.as_deref()) {
            return Err(ApiError::BadRequest(format!(
                "Expected a PDF upload, got content type '{}'",
                field.content_type().unwrap_or("none")
            )));
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
        }
        debug!(bytes = bytes.len(), file = ?file_name, "Received upload");

        let document = Document::new(bytes);
        return Ok(match file_name {
            Some(name) => document.with_file_name(name),
            None => document,
        });
    }

    Err(ApiError::BadRequest(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_content_type_is_accepted() {
        assert!(is_pdf_part(Some("application/pdf"), None));
        assert!(is_pdf_part(Some("Application/PDF; charset=binary"), Some("x.bin")));
    }

    #[test]
    fn generic_type_needs_pdf_name() {
        assert!(is_pdf_part(Some("application/octet-stream"), Some("Agreement.PDF")));
        assert!(!is_pdf_part(Some("application/octet-stream"), Some("agreement.docx")));
        assert!(is_pdf_part(None, Some("agreement.pdf")));
        assert!(!is_pdf_part(None, None));
    }

    #[test]
    fn other_types_are_rejected() {
        assert!(!is_pdf_part(Some("text/plain"), Some("agreement.pdf")));
        assert!(!is_pdf_part(Some("image/png"), None));
    }
}
