// src/report/mod.rs
pub mod pdf;

use thiserror::Error;
use tracing::debug;

use pdf::{Align, Font, PdfWriter};

pub const DEFAULT_REPORT_FILE_NAME: &str = "AAL_Sales_Report.pdf";
pub const REPORT_TITLE: &str = "AAL Sales Analysis Report";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report document: {0}")]
    Write(#[from] std::io::Error),
}

/// Sections the generator is asked to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContents {
    pub include_summary: bool,
    pub include_analytics: bool,
    pub include_charts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

impl GeneratedDocument {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub trait ReportGenerator {
    fn generate(&self, contents: ReportContents) -> Result<GeneratedDocument, ReportError>;
}

#[derive(Debug, Clone)]
pub struct PdfReportGenerator {
    file_name: String,
}

impl PdfReportGenerator {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for PdfReportGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE_NAME)
    }
}

impl ReportGenerator for PdfReportGenerator {
    fn generate(&self, contents: ReportContents) -> Result<GeneratedDocument, ReportError> {
        let mut writer = PdfWriter::new(REPORT_TITLE);
        writer.set_font(Font::Regular, 12.0);

        // Section content is placeholder text for now; the flags are echoed.
        writer.cell("Test dummy content for PDF generation", 10.0, Align::Left)?;
        writer.ln(10.0);
        writer.cell("Report generated with the following options:", 10.0, Align::Left)?;
        writer.cell(&format!("- Include Summary: {}", contents.include_summary), 10.0, Align::Left)?;
        writer.cell(&format!("- Include Analytics: {}", contents.include_analytics), 10.0, Align::Left)?;
        writer.cell(&format!("- Include Charts: {}", contents.include_charts), 10.0, Align::Left)?;

        let pages = writer.page_count();
        let bytes = writer.finish()?;
        debug!(pages, size = bytes.len(), file = %self.file_name, "rendered report pdf");

        Ok(GeneratedDocument {
            bytes,
            file_name: self.file_name.clone(),
        })
    }
}
