// src/file/download.rs
use std::fs;
use std::path::Path;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::info;

use crate::error::DashboardError;
use crate::report::GeneratedDocument;

/// Transport encoding for the generated document; the bytes themselves are
/// passed through untouched.
pub fn data_uri(document: &GeneratedDocument) -> String {
    format!("data:application/octet-stream;base64,{}", STANDARD.encode(&document.bytes))
}

pub fn save_document(document: &GeneratedDocument, path: &Path) -> Result<(), DashboardError> {
    fs::write(path, &document.bytes)?;
    info!(path = %path.display(), size = document.len(), "saved report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> GeneratedDocument {
        GeneratedDocument {
            bytes: b"%PDF-1.4\nbody\n%%EOF\n".to_vec(),
            file_name: "AAL_Sales_Report.pdf".to_string(),
        }
    }

    #[test]
    fn test_data_uri_decodes_to_original_bytes() {
        let doc = document();
        let uri = data_uri(&doc);
        let encoded = uri
            .strip_prefix("data:application/octet-stream;base64,")
            .unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), doc.bytes);
    }

    #[test]
    fn test_saved_file_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        let doc = document();

        save_document(&doc, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), doc.bytes);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_document(&document(), &dir.path().join("nope").join("r.pdf")).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
