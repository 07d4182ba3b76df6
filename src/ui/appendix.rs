// src/ui/appendix.rs
use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;

use crate::config::{content, DashboardConfig};
use crate::file::upload::{CsvPreview, UploadIntake, UploadKind, UploadedFile};
use crate::input::command::{AddUploadsCommand, RemoveUploadCommand, ReportErrorCommand, SaveCommentsCommand};
use crate::input::CommandQueue;
use crate::state::UiState;
use super::{info_box, success_box, tab_header};

/// Appendix tab. Owns the intake boundary and the unsaved comment text;
/// everything that outlives a frame goes through commands.
pub struct AppendixView {
    intake: UploadIntake,
    image_width: f32,
    comment_draft: String,
}

impl AppendixView {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            intake: UploadIntake::new(config.csv_preview_rows),
            image_width: config.image_preview_width,
            comment_draft: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &UiState, commands: &mut CommandQueue) {
        tab_header(ui, "📎 Appendix");

        ui.columns(2, |columns| {
            self.show_uploads(&mut columns[0], state, commands);
            self.show_comments(&mut columns[1], state, commands);
        });

        // Technical specifications section
        ui.add_space(8.0);
        ui.separator();
        ui.heading("🔧 Technical Specifications");
        ui.columns(content::TECHNICAL_SPECS.len(), |columns| {
            for (column, (title, items)) in columns.iter_mut().zip(content::TECHNICAL_SPECS.iter()) {
                column.strong(format!("{}:", title));
                super::bullet_list(column, items);
            }
        });
    }

    /// Files dropped onto the window while the appendix is showing.
    pub fn accept_dropped(&self, ctx: &egui::Context, commands: &mut CommandQueue) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let mut accepted = Vec::new();
        for file in dropped {
            let result = match (&file.path, &file.bytes) {
                (Some(path), _) => self.intake.accept_path(path),
                (None, Some(bytes)) => self.intake.accept(&file.name, bytes.to_vec()),
                (None, None) => continue,
            };
            match result {
                Ok(upload) => accepted.push(upload),
                Err(e) => commands.push(ReportErrorCommand(e)),
            }
        }
        if !accepted.is_empty() {
            commands.push(AddUploadsCommand(accepted));
        }
    }

    fn pick_files(&self, commands: &mut CommandQueue) {
        let picked: Vec<PathBuf> = FileDialog::new()
            .add_filter("Supported files", &UploadKind::ACCEPTED_EXTENSIONS)
            .set_title("Choose files")
            .pick_files()
            .unwrap_or_default();

        let mut accepted = Vec::new();
        for path in picked {
            match self.intake.accept_path(&path) {
                Ok(upload) => accepted.push(upload),
                Err(e) => commands.push(ReportErrorCommand(e)),
            }
        }
        if !accepted.is_empty() {
            commands.push(AddUploadsCommand(accepted));
        }
    }

    fn show_uploads(&self, ui: &mut egui::Ui, state: &UiState, commands: &mut CommandQueue) {
        ui.heading("📁 File Upload");
        ui.label("Upload additional files for analysis or reference:");
        ui.horizontal(|ui| {
            if ui.button("Choose files").clicked() {
                self.pick_files(commands);
            }
            ui.weak(format!("or drop files here ({})", UploadKind::ACCEPTED_EXTENSIONS.join(", ")));
        });
        ui.add_space(8.0);

        if state.uploads().is_empty() {
            return;
        }

        ui.strong("Uploaded Files:");
        for (index, file) in state.uploads().iter().enumerate() {
            success_box(ui, format!("✅ {} ({})", file.name, file.mime_type()));
            ui.horizontal(|ui| {
                ui.weak(format!("received {}", file.received_at.format("%H:%M:%S")));
                if ui.small_button("🗑 Remove").clicked() {
                    commands.push(RemoveUploadCommand(index));
                }
            });

            if let Some(preview) = &file.csv_preview {
                ui.strong(format!("Preview of {}:", file.name));
                csv_table(ui, file, preview);
            } else if file.kind.is_image() {
                self.image_preview(ui, file);
            }
            ui.add_space(8.0);
        }
    }

    fn image_preview(&self, ui: &mut egui::Ui, file: &UploadedFile) {
        ui.add(
            egui::Image::from_bytes(file.image_uri(), file.bytes.clone())
                .max_width(self.image_width),
        );
        ui.weak(&file.name);
    }

    fn show_comments(&mut self, ui: &mut egui::Ui, state: &UiState, commands: &mut CommandQueue) {
        ui.heading("💬 Comments & Notes");
        ui.label("Add your observations, questions, or additional insights:");
        ui.add(
            egui::TextEdit::multiline(&mut self.comment_draft)
                .hint_text("Add any additional notes, observations, or questions about the analysis...")
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );

        if ui.button("💾 Save Comments").clicked() {
            commands.push(SaveCommentsCommand(self.comment_draft.clone()));
        }

        if let Some(saved) = state.saved_comments() {
            ui.add_space(8.0);
            ui.strong(format!("Previously Saved Comments ({}):", saved.saved_at.format("%Y-%m-%d %H:%M")));
            info_box(ui, saved.text.as_str());
        }
    }
}

fn csv_table(ui: &mut egui::Ui, file: &UploadedFile, preview: &CsvPreview) {
    egui::ScrollArea::horizontal()
        .id_source(file.id)
        .show(ui, |ui| {
            egui::Grid::new(("csv_preview", file.id))
                .striped(true)
                .show(ui, |ui| {
                    for header in &preview.headers {
                        ui.strong(header);
                    }
                    ui.end_row();
                    for row in &preview.rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}
