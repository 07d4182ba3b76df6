// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod error;
mod file;
mod input;
mod report;
mod state;
mod ui;

use app::DashboardApp;

/// Log filter from `var` (normally RUST_LOG), or `info` when it is unset
/// or unparsable.
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::DEFAULT_ENV))
        .init();

    let config = file::load_config();
    let title = config.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, &config))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info_and_honours_env() {
        let var = "AAL_DASHBOARD_TEST_LOG";
        std::env::remove_var(var);
        assert_eq!(log_filter(var).to_string(), "info");

        for level in ["warn", "debug", "error"] {
            std::env::set_var(var, level);
            assert_eq!(log_filter(var).to_string(), level);
        }
        std::env::remove_var(var);
    }
}
