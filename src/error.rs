// src/error.rs
use thiserror::Error;

use crate::report::ReportError;

/// Failures scoped to a single dashboard command. None of these end the
/// session; the host reports them and keeps running.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Please enter some comments before saving.")]
    EmptyComment,

    #[error("The report options form is not open")]
    ReportModalClosed,

    #[error("Report generation failed: {0}")]
    Generation(#[from] ReportError),

    #[error("Unsupported file type: {name}")]
    UnsupportedUpload { name: String },

    #[error("No uploaded file at position {0}")]
    NoSuchUpload(usize),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DashboardError {
    /// Validation problems are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, DashboardError::EmptyComment)
    }
}
