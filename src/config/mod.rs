// src/config/mod.rs
pub mod dashboard;
pub mod content;

// Re-export commonly used types
pub use dashboard::DashboardConfig;
