// src/config/dashboard.rs
use serde::{Serialize, Deserialize};
use crate::report::DEFAULT_REPORT_FILE_NAME;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub report_file_name: String,
    pub csv_preview_rows: usize,
    pub image_preview_width: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_title: "AAL Sales Dashboard".to_string(),
            window_size: [1280.0, 860.0],
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            csv_preview_rows: 5,
            image_preview_width: 300.0,
        }
    }
}
