// src/app.rs
use eframe::egui;
use tracing::{info_span, Span};

use crate::config::{content, DashboardConfig};
use crate::input::command::{OpenReportCommand, SelectTabCommand};
use crate::input::{CommandQueue, InputHandler};
use crate::report::{PdfReportGenerator, ReportGenerator};
use crate::state::{Tab, UiState};
use crate::ui::appendix::AppendixView;

pub struct DashboardApp {
    state: UiState,
    generator: Box<dyn ReportGenerator>,
    input_handler: InputHandler,
    commands: CommandQueue,
    appendix: AppendixView,
    span: Span,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DashboardConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let state = UiState::new();
        let span = info_span!("session", id = %state.session_id());
        span.in_scope(|| tracing::info!("dashboard session started"));

        Self {
            state,
            generator: Box::new(PdfReportGenerator::new(config.report_file_name.clone())),
            input_handler: InputHandler::new(),
            commands: CommandQueue::default(),
            appendix: AppendixView::new(config),
            span,
        }
    }

    fn show_navigation(&mut self, ui: &mut egui::Ui) {
        ui.heading("Navigation");
        ui.add_space(4.0);

        let mut selected = self.state.current_tab();
        egui::ComboBox::from_label("Select Tab:")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut selected, tab, tab.label());
                }
            });

        if selected != self.state.current_tab() {
            self.commands.push(SelectTabCommand(selected));
        }

        ui.add_space(12.0);
        ui.weak("Ctrl+PgUp / Ctrl+PgDn switch tabs");
        ui.weak("Ctrl+G opens the report form");
    }

}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let span = self.span.clone();
        let _entered = span.enter();

        self.commands.extend(self.input_handler.handle_input(ctx, &self.state));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            crate::ui::main_header(ui, content::MAIN_TITLE);
            ui.separator();

            // Generate Report Button (always visible at top)
            ui.vertical_centered(|ui| {
                let button = egui::Button::new(egui::RichText::new("🔧 Generate Report").strong())
                    .min_size(egui::vec2(240.0, 28.0));
                if ui.add(button).clicked() {
                    self.commands.push(OpenReportCommand);
                }
            });
            crate::ui::report::show_download_panel(ui, &self.state, &mut self.commands);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.weak(content::FOOTER);
            });
        });

        egui::SidePanel::left("navigation")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.show_navigation(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::ui::show_notification(ui, &self.state, &mut self.commands);

            egui::ScrollArea::vertical()
                .id_source("tab_content_scroll")
                .show(ui, |ui| match self.state.current_tab() {
                    Tab::Home => crate::ui::home::show_home_view(ui, &mut self.commands),
                    Tab::Analytics => crate::ui::analytics::show_analytics_view(ui, &mut self.commands),
                    Tab::Appendix => self.appendix.show(ui, &self.state, &mut self.commands),
                });
        });

        if self.state.current_tab() == Tab::Appendix {
            self.appendix.accept_dropped(ctx, &mut self.commands);
        }

        crate::ui::report::show_report_dialog(ctx, &self.state, &mut self.commands);
        crate::ui::show_error_window(ctx, &self.state, &mut self.commands);

        if self.commands.run(&mut self.state, self.generator.as_ref()) {
            ctx.request_repaint();
        }
    }
}
