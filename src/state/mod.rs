// src/state/mod.rs
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::DashboardError;
use crate::file::upload::UploadedFile;
use crate::report::{GeneratedDocument, ReportContents, ReportGenerator};

pub mod notification;

pub use notification::{Notification, NotificationLevel};

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Analytics,
    Appendix,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Analytics, Tab::Appendix];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Analytics => "Analytics",
            Tab::Appendix => "Appendix",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Analytics,
            Tab::Analytics => Tab::Appendix,
            Tab::Appendix => Tab::Home,
        }
    }

    pub fn previous(self) -> Tab {
        match self {
            Tab::Home => Tab::Appendix,
            Tab::Analytics => Tab::Home,
            Tab::Appendix => Tab::Analytics,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Summary,
    Analytics,
    Charts,
    Appendix,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::Summary,
        ReportSection::Analytics,
        ReportSection::Charts,
        ReportSection::Appendix,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportSection::Summary => "Executive Summary",
            ReportSection::Analytics => "Analytics Data",
            ReportSection::Charts => "Charts & Visualizations",
            ReportSection::Appendix => "Appendix",
        }
    }
}

/// Checkbox values of the report form. Only meaningful while the form is
/// open; closing it in any way resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub summary: bool,
    pub analytics: bool,
    pub charts: bool,
    pub appendix: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            summary: true,
            analytics: true,
            charts: true,
            appendix: false,
        }
    }
}

impl ReportOptions {
    pub fn get(&self, section: ReportSection) -> bool {
        match section {
            ReportSection::Summary => self.summary,
            ReportSection::Analytics => self.analytics,
            ReportSection::Charts => self.charts,
            ReportSection::Appendix => self.appendix,
        }
    }

    pub fn set(&mut self, section: ReportSection, value: bool) {
        match section {
            ReportSection::Summary => self.summary = value,
            ReportSection::Analytics => self.analytics = value,
            ReportSection::Charts => self.charts = value,
            ReportSection::Appendix => self.appendix = value,
        }
    }

    /// What the generator gets asked for. The appendix choice is collected
    /// by the form but the generator has no appendix section, so it is not
    /// passed on.
    pub fn contents(&self) -> ReportContents {
        ReportContents {
            include_summary: self.summary,
            include_analytics: self.analytics,
            include_charts: self.charts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedComments {
    pub text: String,
    pub saved_at: DateTime<Local>,
}

/// Everything one dashboard session knows. Created at startup, changed only
/// through the methods below, dropped on exit.
#[derive(Debug)]
pub struct UiState {
    session_id: Uuid,
    current_tab: Tab,
    report_modal_open: bool,
    report_options: ReportOptions,
    saved_comments: Option<SavedComments>,
    last_document: Option<GeneratedDocument>,
    uploads: Vec<UploadedFile>,
    notification: Option<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            current_tab: Tab::Home,
            report_modal_open: false,
            report_options: ReportOptions::default(),
            saved_comments: None,
            last_document: None,
            uploads: Vec::new(),
            notification: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    pub fn report_modal_open(&self) -> bool {
        self.report_modal_open
    }

    pub fn report_options(&self) -> ReportOptions {
        self.report_options
    }

    pub fn saved_comments(&self) -> Option<&SavedComments> {
        self.saved_comments.as_ref()
    }

    pub fn last_document(&self) -> Option<&GeneratedDocument> {
        self.last_document.as_ref()
    }

    pub fn uploads(&self) -> &[UploadedFile] {
        &self.uploads
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    // Navigation

    pub fn select_tab(&mut self, target: Tab) {
        if self.current_tab != target {
            debug!(from = self.current_tab.label(), to = target.label(), "tab changed");
        }
        self.current_tab = target;
    }

    pub fn navigate_home(&mut self) {
        self.select_tab(Tab::Home);
    }

    pub fn navigate_to_analytics(&mut self) {
        self.select_tab(Tab::Analytics);
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.current_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.current_tab.previous());
    }

    // Report workflow

    /// Opening an already open form keeps whatever has been ticked so far.
    pub fn open_report_modal(&mut self) {
        if !self.report_modal_open {
            debug!("report options opened");
        }
        self.report_modal_open = true;
    }

    pub fn toggle_option(&mut self, section: ReportSection, value: bool) {
        self.report_options.set(section, value);
    }

    pub fn close_report_modal(&mut self) {
        debug!("report options closed without generating");
        self.report_modal_open = false;
        self.report_options = ReportOptions::default();
    }

    /// Generates a report from the current options. On failure the form
    /// stays open with its options intact so the user can retry.
    ///
    /// Every operation here surfaces its own failures in the notification
    /// area; callers only need the returned error for control flow.
    pub fn submit_report(
        &mut self,
        generator: &dyn ReportGenerator,
    ) -> Result<&GeneratedDocument, DashboardError> {
        if !self.report_modal_open {
            return Err(DashboardError::ReportModalClosed);
        }

        let options = self.report_options;
        if options.appendix {
            debug!("appendix requested; generator has no appendix section");
        }

        let document = match generator.generate(options.contents()) {
            Ok(document) => document,
            Err(e) => {
                let err = DashboardError::from(e);
                warn!(session = %self.session_id, "report generation failed: {}", err);
                self.notify(NotificationLevel::Error, err.to_string());
                return Err(err);
            }
        };

        info!(
            session = %self.session_id,
            summary = options.summary,
            analytics = options.analytics,
            charts = options.charts,
            size = document.len(),
            "report generated"
        );
        self.report_modal_open = false;
        self.report_options = ReportOptions::default();
        self.notify(NotificationLevel::Success, "Report generated successfully!");
        Ok(&*self.last_document.insert(document))
    }

    // Appendix

    pub fn save_comments(&mut self, text: &str) -> Result<(), DashboardError> {
        if text.trim().is_empty() {
            let err = DashboardError::EmptyComment;
            self.notify(NotificationLevel::Warning, err.to_string());
            return Err(err);
        }

        self.saved_comments = Some(SavedComments {
            text: text.to_string(),
            saved_at: Local::now(),
        });
        info!(session = %self.session_id, chars = text.chars().count(), "comments saved");
        self.notify(NotificationLevel::Success, "Comments saved successfully!");
        Ok(())
    }

    pub fn add_uploads(&mut self, files: Vec<UploadedFile>) {
        if files.is_empty() {
            return;
        }
        let count = files.len();
        for file in &files {
            info!(session = %self.session_id, file = %file.name, mime = file.mime_type(), "file uploaded");
        }
        self.uploads.extend(files);
        let message = if count == 1 {
            "1 file uploaded".to_string()
        } else {
            format!("{} files uploaded", count)
        };
        self.notify(NotificationLevel::Success, message);
    }

    pub fn remove_upload(&mut self, index: usize) -> Result<UploadedFile, DashboardError> {
        if index >= self.uploads.len() {
            let err = DashboardError::NoSuchUpload(index);
            self.notify(NotificationLevel::Error, err.to_string());
            return Err(err);
        }
        let removed = self.uploads.remove(index);
        debug!(file = %removed.name, "upload removed");
        Ok(removed)
    }

    // Notifications

    /// Surfaces a failure raised outside the state (file intake, saving a
    /// download) the same way state transitions surface their own.
    pub fn report_error(&mut self, err: &DashboardError) {
        let level = if err.is_warning() {
            NotificationLevel::Warning
        } else {
            NotificationLevel::Error
        };
        self.notify(level, err.to_string());
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::file::upload::UploadIntake;
    use crate::report::{PdfReportGenerator, ReportError};

    #[derive(Default)]
    struct RecordingGenerator {
        calls: RefCell<Vec<ReportContents>>,
    }

    impl ReportGenerator for RecordingGenerator {
        fn generate(&self, contents: ReportContents) -> Result<GeneratedDocument, ReportError> {
            self.calls.borrow_mut().push(contents);
            Ok(GeneratedDocument {
                bytes: b"%PDF-stub".to_vec(),
                file_name: "stub.pdf".to_string(),
            })
        }
    }

    struct FailingGenerator;

    impl ReportGenerator for FailingGenerator {
        fn generate(&self, _contents: ReportContents) -> Result<GeneratedDocument, ReportError> {
            Err(ReportError::Write(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
        }
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::new();
        assert_eq!(state.current_tab(), Tab::Home);
        assert!(!state.report_modal_open());
        assert_eq!(state.report_options(), ReportOptions::default());
        assert!(state.saved_comments().is_none());
        assert!(state.last_document().is_none());
        assert!(state.uploads().is_empty());
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_select_tab_sets_current_tab() {
        let mut state = UiState::new();
        for tab in Tab::ALL {
            state.select_tab(tab);
            assert_eq!(state.current_tab(), tab);
        }
    }

    #[test]
    fn test_select_tab_is_idempotent() {
        let mut once = UiState::new();
        once.select_tab(Tab::Home);

        let mut twice = UiState::new();
        twice.select_tab(Tab::Home);
        twice.select_tab(Tab::Home);

        assert_eq!(once.current_tab(), twice.current_tab());
        assert_eq!(once.report_modal_open(), twice.report_modal_open());
        assert_eq!(once.report_options(), twice.report_options());
    }

    #[test]
    fn test_analytics_round_trip_returns_home() {
        let mut state = UiState::new();
        state.select_tab(Tab::Analytics);
        state.navigate_home();
        assert_eq!(state.current_tab(), Tab::Home);
        assert!(!state.report_modal_open());
        assert!(state.notification().is_none());

        state.navigate_to_analytics();
        assert_eq!(state.current_tab(), Tab::Analytics);
    }

    #[test]
    fn test_tab_cycling_visits_every_tab() {
        let mut state = UiState::new();
        state.next_tab();
        assert_eq!(state.current_tab(), Tab::Analytics);
        state.next_tab();
        assert_eq!(state.current_tab(), Tab::Appendix);
        state.next_tab();
        assert_eq!(state.current_tab(), Tab::Home);
        state.previous_tab();
        assert_eq!(state.current_tab(), Tab::Appendix);
    }

    #[test]
    fn test_modal_state_survives_tab_switches() {
        let mut state = UiState::new();
        state.open_report_modal();
        state.toggle_option(ReportSection::Summary, false);
        state.select_tab(Tab::Appendix);
        assert!(state.report_modal_open());
        assert!(!state.report_options().summary);
    }

    #[test]
    fn test_open_then_close_keeps_last_document() {
        let generator = RecordingGenerator::default();
        let mut state = UiState::new();
        state.open_report_modal();
        state.submit_report(&generator).unwrap();
        let before = state.last_document().cloned();

        state.open_report_modal();
        state.close_report_modal();
        assert!(!state.report_modal_open());
        assert_eq!(state.last_document().cloned(), before);
    }

    #[test]
    fn test_close_discards_option_edits() {
        let mut state = UiState::new();
        state.open_report_modal();
        state.toggle_option(ReportSection::Charts, false);
        state.toggle_option(ReportSection::Appendix, true);
        state.close_report_modal();

        state.open_report_modal();
        assert_eq!(state.report_options(), ReportOptions::default());
    }

    #[test]
    fn test_reopening_keeps_in_progress_edits() {
        let mut state = UiState::new();
        state.open_report_modal();
        state.toggle_option(ReportSection::Analytics, false);
        state.open_report_modal();
        assert!(!state.report_options().analytics);
    }

    #[test]
    fn test_submit_succeeds_for_every_combination() {
        let generator = PdfReportGenerator::default();
        for bits in 0..8u8 {
            let mut state = UiState::new();
            state.open_report_modal();
            state.toggle_option(ReportSection::Summary, bits & 1 != 0);
            state.toggle_option(ReportSection::Analytics, bits & 2 != 0);
            state.toggle_option(ReportSection::Charts, bits & 4 != 0);

            let document = state.submit_report(&generator).unwrap();
            assert!(!document.is_empty());
            assert!(!state.report_modal_open());
            assert!(state.last_document().is_some());
            assert_eq!(
                state.notification().map(|n| n.level),
                Some(NotificationLevel::Success)
            );
        }
    }

    #[test]
    fn test_unticking_charts_is_reflected_in_document() {
        let generator = PdfReportGenerator::default();
        let mut state = UiState::new();
        state.open_report_modal();
        state.toggle_option(ReportSection::Charts, false);
        state.submit_report(&generator).unwrap();

        assert!(!state.report_modal_open());
        let document = state.last_document().unwrap();
        let text = String::from_utf8_lossy(&document.bytes);
        assert!(text.contains("Include Summary: true"));
        assert!(text.contains("Include Analytics: true"));
        assert!(text.contains("Include Charts: false"));
        assert_eq!(state.report_options(), ReportOptions::default());
    }

    #[test]
    fn test_appendix_flag_is_not_forwarded() {
        let generator = RecordingGenerator::default();
        let mut state = UiState::new();
        state.open_report_modal();
        state.toggle_option(ReportSection::Appendix, true);
        state.toggle_option(ReportSection::Summary, false);
        state.submit_report(&generator).unwrap();

        let calls = generator.calls.borrow();
        assert_eq!(
            calls.as_slice(),
            &[ReportContents {
                include_summary: false,
                include_analytics: true,
                include_charts: true,
            }]
        );
    }

    #[test]
    fn test_all_false_report_is_legal() {
        let generator = RecordingGenerator::default();
        let mut state = UiState::new();
        state.open_report_modal();
        for section in ReportSection::ALL {
            state.toggle_option(section, false);
        }
        assert!(state.submit_report(&generator).is_ok());
    }

    #[test]
    fn test_failed_generation_keeps_form_open() {
        let mut state = UiState::new();
        state.open_report_modal();
        state.toggle_option(ReportSection::Charts, false);

        let err = state.submit_report(&FailingGenerator).unwrap_err();
        assert!(matches!(err, DashboardError::Generation(_)));
        assert!(state.report_modal_open());
        assert!(!state.report_options().charts);
        assert!(state.last_document().is_none());
        assert_eq!(
            state.notification().map(|n| n.level),
            Some(NotificationLevel::Error)
        );

        // Retry with a working generator.
        let generator = RecordingGenerator::default();
        state.submit_report(&generator).unwrap();
        assert!(!state.report_modal_open());
        assert!(!generator.calls.borrow()[0].include_charts);
    }

    #[test]
    fn test_submit_without_open_form_is_rejected() {
        let generator = RecordingGenerator::default();
        let mut state = UiState::new();
        let err = state.submit_report(&generator).unwrap_err();
        assert!(matches!(err, DashboardError::ReportModalClosed));
        assert!(generator.calls.borrow().is_empty());
        assert!(state.last_document().is_none());
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_next_generation_replaces_document() {
        let mut state = UiState::new();
        state.open_report_modal();
        state.submit_report(&RecordingGenerator::default()).unwrap();

        state.open_report_modal();
        state.submit_report(&PdfReportGenerator::new("second.pdf")).unwrap();
        assert_eq!(state.last_document().unwrap().file_name, "second.pdf");
    }

    #[test]
    fn test_blank_comments_are_rejected_with_warning() {
        let mut state = UiState::new();
        for text in ["", "   ", "\n\t"] {
            let err = state.save_comments(text).unwrap_err();
            assert!(matches!(err, DashboardError::EmptyComment));
            assert!(state.saved_comments().is_none());
            assert_eq!(
                state.notification().map(|n| n.level),
                Some(NotificationLevel::Warning)
            );
        }
    }

    #[test]
    fn test_comments_are_saved_and_overwritten() {
        let mut state = UiState::new();
        state.save_comments("note").unwrap();
        assert_eq!(state.saved_comments().unwrap().text, "note");

        state.save_comments("second thoughts").unwrap();
        assert_eq!(state.saved_comments().unwrap().text, "second thoughts");

        // A rejected save leaves the previous comment in place.
        assert!(state.save_comments(" ").is_err());
        assert_eq!(state.saved_comments().unwrap().text, "second thoughts");
    }

    #[test]
    fn test_uploads_can_be_added_and_removed() {
        let intake = UploadIntake::new(5);
        let mut state = UiState::new();
        state.add_uploads(vec![
            intake.accept("a.csv", b"x,y\n1,2\n".to_vec()).unwrap(),
            intake.accept("b.txt", b"hello".to_vec()).unwrap(),
        ]);
        assert_eq!(state.uploads().len(), 2);
        assert_eq!(state.notification().unwrap().message, "2 files uploaded");

        let removed = state.remove_upload(0).unwrap();
        assert_eq!(removed.name, "a.csv");
        assert_eq!(state.uploads()[0].name, "b.txt");
        assert!(matches!(state.remove_upload(5), Err(DashboardError::NoSuchUpload(5))));
        assert_eq!(state.notification().unwrap().level, NotificationLevel::Error);
        assert_eq!(state.uploads().len(), 1);
    }

    #[test]
    fn test_report_error_maps_level_and_dismiss_clears() {
        let mut state = UiState::new();
        state.report_error(&DashboardError::UnsupportedUpload { name: "x.exe".to_string() });
        assert_eq!(state.notification().unwrap().level, NotificationLevel::Error);
        assert!(state.notification().unwrap().message.contains("x.exe"));

        state.dismiss_notification();
        assert!(state.notification().is_none());
    }
}
