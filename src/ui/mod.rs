// src/ui/mod.rs
use eframe::egui;

use crate::input::command::DismissNotificationCommand;
use crate::input::CommandQueue;
use crate::state::{NotificationLevel, UiState};

pub mod home;
pub mod analytics;
pub mod appendix;
pub mod report;

pub const HEADER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2E, 0x86, 0xAB);
pub const TAB_HEADER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xA2, 0x3B, 0x72);
const INFO_FILL: egui::Color32 = egui::Color32::from_rgb(0xDB, 0xEA, 0xFE);
const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(0xD4, 0xED, 0xDA);
const WARNING_FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xF3, 0xCD);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(0xF8, 0xD7, 0xDA);

pub fn main_header(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).size(32.0).strong().color(HEADER_COLOR));
    });
}

pub fn tab_header(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(24.0).strong().color(TAB_HEADER_COLOR));
    ui.add_space(8.0);
}

pub fn bullet_list(ui: &mut egui::Ui, items: &[&str]) {
    for item in items {
        ui.label(format!("• {}", item));
    }
}

pub fn info_box(ui: &mut egui::Ui, text: impl Into<egui::RichText>) {
    message_box(ui, INFO_FILL, text);
}

pub fn success_box(ui: &mut egui::Ui, text: impl Into<egui::RichText>) {
    message_box(ui, SUCCESS_FILL, text);
}

pub fn warning_box(ui: &mut egui::Ui, text: impl Into<egui::RichText>) {
    message_box(ui, WARNING_FILL, text);
}

fn message_box(ui: &mut egui::Ui, fill: egui::Color32, text: impl Into<egui::RichText>) {
    egui::Frame::none()
        .fill(fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(egui::Color32::from_gray(30), text);
        });
    ui.add_space(4.0);
}

/// The strip under the header showing the latest message. Errors also get
/// their own window from the app, so they are not repeated here.
pub fn show_notification(ui: &mut egui::Ui, state: &UiState, commands: &mut CommandQueue) {
    let Some(notification) = state.notification() else {
        return;
    };
    let fill = match notification.level {
        NotificationLevel::Success => SUCCESS_FILL,
        NotificationLevel::Info => INFO_FILL,
        NotificationLevel::Warning => WARNING_FILL,
        NotificationLevel::Error => return,
    };

    egui::Frame::none()
        .fill(fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(
                    egui::Color32::from_gray(30),
                    format!("{} {}", notification.icon(), notification.message),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        commands.push(DismissNotificationCommand);
                    }
                });
            });
        });
}

pub fn show_error_window(ctx: &egui::Context, state: &UiState, commands: &mut CommandQueue) {
    let Some(notification) = state.notification() else {
        return;
    };
    if notification.level != NotificationLevel::Error {
        return;
    }

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("{} {}", notification.icon(), notification.message));
            if ui.button("OK").clicked() {
                commands.push(DismissNotificationCommand);
            }
        });
}
