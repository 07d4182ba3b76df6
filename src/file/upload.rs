// src/file/upload.rs

use std::fs;
use std::path::Path;
use std::sync::Arc;
use chrono::{DateTime, Local};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::DashboardError;

/// File types the appendix accepts. Anything else is turned away here,
/// before it can reach the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Xlsx,
    Pdf,
    Png,
    Jpeg,
    Text,
}

impl UploadKind {
    pub const ACCEPTED_EXTENSIONS: [&'static str; 6] = ["csv", "xlsx", "pdf", "png", "jpg", "txt"];

    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(UploadKind::Csv),
            "xlsx" => Some(UploadKind::Xlsx),
            "pdf" => Some(UploadKind::Pdf),
            "png" => Some(UploadKind::Png),
            "jpg" | "jpeg" => Some(UploadKind::Jpeg),
            "txt" => Some(UploadKind::Text),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            UploadKind::Csv => "text/csv",
            UploadKind::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            UploadKind::Pdf => "application/pdf",
            UploadKind::Png => "image/png",
            UploadKind::Jpeg => "image/jpeg",
            UploadKind::Text => "text/plain",
        }
    }

    pub fn is_image(self) -> bool {
        matches!(self, UploadKind::Png | UploadKind::Jpeg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub kind: UploadKind,
    pub bytes: Arc<[u8]>,
    pub received_at: DateTime<Local>,
    pub csv_preview: Option<CsvPreview>,
}

impl UploadedFile {
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    /// Unique `bytes://` URI for the image loaders; keeps the original file
    /// name last so the extension can be sniffed.
    pub fn image_uri(&self) -> String {
        format!("bytes://upload/{}/{}", self.id, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct UploadIntake {
    preview_rows: usize,
}

impl UploadIntake {
    pub fn new(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    pub fn accept(&self, name: &str, bytes: Vec<u8>) -> Result<UploadedFile, DashboardError> {
        let kind = UploadKind::from_file_name(name).ok_or_else(|| DashboardError::UnsupportedUpload {
            name: name.to_string(),
        })?;

        let csv_preview = if kind == UploadKind::Csv {
            match csv_preview(&bytes, self.preview_rows) {
                Ok(preview) => Some(preview),
                Err(e) => {
                    warn!(file = name, "no preview for malformed csv: {}", e);
                    None
                }
            }
        } else {
            None
        };

        debug!(file = name, mime = kind.mime_type(), size = bytes.len(), "accepted upload");
        Ok(UploadedFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            bytes: bytes.into(),
            received_at: Local::now(),
            csv_preview,
        })
    }

    pub fn accept_path(&self, path: &Path) -> Result<UploadedFile, DashboardError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        // Check the type before touching the file contents.
        if UploadKind::from_file_name(&name).is_none() {
            return Err(DashboardError::UnsupportedUpload { name });
        }
        let bytes = fs::read(path)?;
        self.accept(&name, bytes)
    }
}

pub fn csv_preview(bytes: &[u8], max_rows: usize) -> Result<CsvPreview, DashboardError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in reader.records().take(max_rows) {
        rows.push(record?.iter().map(String::from).collect());
    }

    Ok(CsvPreview { headers, rows })
}
