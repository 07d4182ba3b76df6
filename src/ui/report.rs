// src/ui/report.rs
use eframe::egui;
use rfd::FileDialog;

use crate::file::download;
use crate::input::command::{
    CloseReportCommand, NotifyInfoCommand, ReportErrorCommand, SubmitReportCommand, ToggleOptionCommand,
};
use crate::input::CommandQueue;
use crate::state::{ReportSection, UiState};

/// The report options form. Only drawn while the session has it open.
pub fn show_report_dialog(ctx: &egui::Context, state: &UiState, commands: &mut CommandQueue) {
    if !state.report_modal_open() {
        return;
    }

    let options = state.report_options();
    egui::Window::new("📋 Select what to include in report")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 120.0])
        .show(ctx, |ui| {
            ui.strong("Report Options:");
            ui.add_space(4.0);

            egui::Grid::new("report_options_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for (i, section) in ReportSection::ALL.into_iter().enumerate() {
                        let mut checked = options.get(section);
                        if ui.checkbox(&mut checked, section.label()).changed() {
                            commands.push(ToggleOptionCommand(section, checked));
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let generate = egui::Button::new(egui::RichText::new("📄 Generate PDF").strong());
                if ui.add(generate).clicked() {
                    commands.push(SubmitReportCommand);
                }
                if ui.button("❌ Close").clicked() {
                    commands.push(CloseReportCommand);
                }
            });
        });
}

/// Download affordances for the most recent report.
pub fn show_download_panel(ui: &mut egui::Ui, state: &UiState, commands: &mut CommandQueue) {
    let Some(document) = state.last_document() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!("{} ({} bytes)", document.file_name, document.len()));

        if ui.button("⬇ Download PDF Report").clicked() {
            let target = FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .set_file_name(&document.file_name)
                .set_title("Save Report")
                .save_file();

            if let Some(path) = target {
                match download::save_document(document, &path) {
                    Ok(()) => commands.push(NotifyInfoCommand(format!("Report saved to {}", path.display()))),
                    Err(e) => commands.push(ReportErrorCommand(e)),
                }
            }
        }

        if ui.button("🔗 Copy download link").clicked() {
            let uri = download::data_uri(document);
            ui.output_mut(|o| o.copied_text = uri);
            commands.push(NotifyInfoCommand("Download link copied to clipboard".to_string()));
        }
    });
}
