// src/ui/home.rs
use eframe::egui;

use crate::config::content::{self, Metric};
use crate::input::command::NavigateToAnalyticsCommand;
use crate::input::CommandQueue;
use super::{bullet_list, info_box, tab_header, warning_box};

pub fn show_home_view(ui: &mut egui::Ui, commands: &mut CommandQueue) {
    tab_header(ui, "🏠 Executive Summary");

    // Key Metrics Row
    ui.columns(content::HOME_METRICS.len(), |columns| {
        for (column, metric) in columns.iter_mut().zip(content::HOME_METRICS.iter()) {
            metric_card(column, metric);
        }
    });

    ui.add_space(8.0);
    ui.separator();

    let available = ui.available_width();
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(available * 0.62);

            ui.heading("📈 Key Findings");
            ui.strong("Top Performance Highlights:");
            bullet_list(ui, &content::KEY_FINDINGS);

            ui.add_space(12.0);
            ui.heading("🎯 Strategic Recommendations");
            for (i, (title, detail)) in content::RECOMMENDATIONS.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{}.", i + 1));
                    ui.strong(*title);
                    ui.label(*detail);
                });
            }
        });

        ui.vertical(|ui| {
            ui.heading("📊 Quick Stats");
            for (label, value) in content::QUICK_STATS {
                info_box(ui, format!("{}: {}", label, value));
            }
            warning_box(ui, content::QUICK_STATS_WARNING);
        });
    });

    // Navigation to Analytics
    ui.add_space(8.0);
    ui.separator();
    ui.heading("🔍 Dive Deeper");
    ui.vertical_centered(|ui| {
        if ui.button("📊 View Detailed Analytics").clicked() {
            commands.push(NavigateToAnalyticsCommand);
        }
    });
}

fn metric_card(ui: &mut egui::Ui, metric: &Metric) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.weak(metric.label);
            ui.label(egui::RichText::new(metric.value).size(26.0).strong());
            ui.colored_label(egui::Color32::from_rgb(0x21, 0x8C, 0x4F), format!("↑ {}", metric.delta));
        });
    });
}
