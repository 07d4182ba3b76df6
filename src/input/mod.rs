// src/input/mod.rs
use eframe::egui;
use tracing::debug;
use crate::report::ReportGenerator;
use crate::state::UiState;
use crate::input::command::Command;
pub mod command;

/// Commands gathered while drawing one frame.
#[derive(Default)]
pub struct CommandQueue {
    pending: Vec<Box<dyn Command>>,
}

impl CommandQueue {
    pub fn push(&mut self, command: impl Command + 'static) {
        self.pending.push(Box::new(command));
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = Box<dyn Command>>) {
        self.pending.extend(commands);
    }

    /// Applies everything queued, in order. A failing command has already
    /// updated the notification area, so it is only logged here and the
    /// rest still run. Returns whether anything ran.
    pub fn run(&mut self, state: &mut UiState, generator: &dyn ReportGenerator) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        for command in self.pending.drain(..) {
            if let Err(e) = command.execute(state, generator) {
                debug!("command rejected: {}", e);
            }
        }
        true
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&self, ctx: &egui::Context, state: &UiState) -> Vec<Box<dyn Command>> {
        let pressed: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, modifiers, .. } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });

        pressed
            .into_iter()
            .filter_map(|(key, modifiers)| self.handle_key(key, modifiers, state))
            .collect()
    }

    pub fn handle_key(&self, key: egui::Key, modifiers: egui::Modifiers, state: &UiState) -> Option<Box<dyn Command>> {
        match key {
            egui::Key::PageDown if modifiers.command => Some(Box::new(command::NextTabCommand)),
            egui::Key::PageUp if modifiers.command => Some(Box::new(command::PrevTabCommand)),
            egui::Key::G if modifiers.command => Some(Box::new(command::OpenReportCommand)),
            egui::Key::Escape if state.report_modal_open() => Some(Box::new(command::CloseReportCommand)),
            egui::Key::Escape if state.notification().is_some() => {
                Some(Box::new(command::DismissNotificationCommand))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{GeneratedDocument, PdfReportGenerator, ReportContents, ReportError};
    use crate::state::{NotificationLevel, Tab};

    struct FailingGenerator;

    impl ReportGenerator for FailingGenerator {
        fn generate(&self, _contents: ReportContents) -> Result<GeneratedDocument, ReportError> {
            Err(ReportError::Write(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
        }
    }

    fn run(handler: &InputHandler, key: egui::Key, modifiers: egui::Modifiers, state: &mut UiState) -> bool {
        match handler.handle_key(key, modifiers, state) {
            Some(cmd) => {
                cmd.execute(state, &PdfReportGenerator::default()).unwrap();
                true
            }
            None => false,
        }
    }

    #[test]
    fn test_tab_shortcuts_cycle_tabs() {
        let handler = InputHandler::new();
        let mut state = UiState::new();

        assert!(run(&handler, egui::Key::PageDown, egui::Modifiers::COMMAND, &mut state));
        assert_eq!(state.current_tab(), Tab::Analytics);
        assert!(run(&handler, egui::Key::PageUp, egui::Modifiers::COMMAND, &mut state));
        assert!(run(&handler, egui::Key::PageUp, egui::Modifiers::COMMAND, &mut state));
        assert_eq!(state.current_tab(), Tab::Appendix);

        // Without the modifier the keys belong to scroll areas.
        assert!(!run(&handler, egui::Key::PageDown, egui::Modifiers::NONE, &mut state));
    }

    #[test]
    fn test_escape_closes_form_before_dismissing_notification() {
        let handler = InputHandler::new();
        let mut state = UiState::new();
        assert!(!run(&handler, egui::Key::Escape, egui::Modifiers::NONE, &mut state));

        assert!(run(&handler, egui::Key::G, egui::Modifiers::COMMAND, &mut state));
        assert!(state.report_modal_open());

        let _ = state.save_comments("");
        assert!(state.notification().is_some());

        assert!(run(&handler, egui::Key::Escape, egui::Modifiers::NONE, &mut state));
        assert!(!state.report_modal_open());
        assert!(state.notification().is_some());

        assert!(run(&handler, egui::Key::Escape, egui::Modifiers::NONE, &mut state));
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_queue_runs_commands_in_order() {
        let mut queue = CommandQueue::default();
        queue.push(command::OpenReportCommand);
        queue.push(command::ToggleOptionCommand(crate::state::ReportSection::Charts, false));
        queue.push(command::SubmitReportCommand);
        queue.push(command::SelectTabCommand(Tab::Appendix));
        queue.push(command::SaveCommentsCommand("looks good".to_string()));

        let generator = PdfReportGenerator::default();
        let mut state = UiState::new();
        assert!(queue.run(&mut state, &generator));

        assert!(!queue.run(&mut state, &generator));
        assert_eq!(state.current_tab(), Tab::Appendix);
        assert!(!state.report_modal_open());
        assert!(state.last_document().is_some());
        assert_eq!(state.saved_comments().unwrap().text, "looks good");
    }

    #[test]
    fn test_failed_command_keeps_its_own_notification() {
        let mut state = UiState::new();
        let mut queue = CommandQueue::default();

        // Submitting with the form closed changes nothing, not even the
        // notification area.
        queue.push(command::SubmitReportCommand);
        assert!(queue.run(&mut state, &FailingGenerator));
        assert!(state.notification().is_none());

        queue.push(command::OpenReportCommand);
        queue.push(command::SubmitReportCommand);
        queue.push(command::SelectTabCommand(Tab::Analytics));
        assert!(queue.run(&mut state, &FailingGenerator));

        let notification = state.notification().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Report generation failed: failed to write report document: disk full");
        assert!(state.report_modal_open());
        assert_eq!(state.current_tab(), Tab::Analytics);
        assert!(!queue.run(&mut state, &FailingGenerator));
    }
}
