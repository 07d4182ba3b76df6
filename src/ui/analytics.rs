// src/ui/analytics.rs
use eframe::egui;

use crate::config::content;
use crate::input::command::NavigateHomeCommand;
use crate::input::CommandQueue;
use super::{bullet_list, info_box, tab_header};

pub fn show_analytics_view(ui: &mut egui::Ui, commands: &mut CommandQueue) {
    tab_header(ui, "📊 Analytics Dashboard");

    info_box(ui, content::ANALYTICS_NOTICE);

    ui.columns(2, |columns| {
        columns[0].strong("📈 Performance Analysis:");
        bullet_list(&mut columns[0], &content::PERFORMANCE_ANALYSIS);

        columns[1].strong("📋 Interactive Features:");
        bullet_list(&mut columns[1], &content::INTERACTIVE_FEATURES);
    });

    // Sections stay empty until there is data to chart.
    for section in content::ANALYTICS_SECTIONS {
        ui.add_space(8.0);
        ui.separator();
        ui.heading(section);
        ui.add_space(48.0);
    }

    ui.separator();
    if ui.link("🏠 Back to Executive Summary").clicked() {
        commands.push(NavigateHomeCommand);
    }
}
