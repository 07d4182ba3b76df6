// src/input/command.rs
use crate::error::DashboardError;
use crate::file::upload::UploadedFile;
use crate::report::ReportGenerator;
use crate::state::{ReportSection, Tab, UiState};

/// One user gesture. The views queue commands while drawing and the app
/// executes them in order once the frame is done.
pub trait Command {
    fn execute(self: Box<Self>, state: &mut UiState, generator: &dyn ReportGenerator) -> Result<(), DashboardError>;
}

pub struct SelectTabCommand(pub Tab);
impl Command for SelectTabCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.select_tab(self.0);
        Ok(())
    }
}

pub struct NextTabCommand;
impl Command for NextTabCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.next_tab();
        Ok(())
    }
}

pub struct PrevTabCommand;
impl Command for PrevTabCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.previous_tab();
        Ok(())
    }
}

pub struct NavigateHomeCommand;
impl Command for NavigateHomeCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.navigate_home();
        Ok(())
    }
}

pub struct NavigateToAnalyticsCommand;
impl Command for NavigateToAnalyticsCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.navigate_to_analytics();
        Ok(())
    }
}

pub struct OpenReportCommand;
impl Command for OpenReportCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.open_report_modal();
        Ok(())
    }
}

pub struct ToggleOptionCommand(pub ReportSection, pub bool);
impl Command for ToggleOptionCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.toggle_option(self.0, self.1);
        Ok(())
    }
}

pub struct SubmitReportCommand;
impl Command for SubmitReportCommand {
    fn execute(self: Box<Self>, state: &mut UiState, generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.submit_report(generator).map(|_| ())
    }
}

pub struct CloseReportCommand;
impl Command for CloseReportCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.close_report_modal();
        Ok(())
    }
}

pub struct SaveCommentsCommand(pub String);
impl Command for SaveCommentsCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.save_comments(&self.0)
    }
}

pub struct AddUploadsCommand(pub Vec<UploadedFile>);
impl Command for AddUploadsCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.add_uploads(self.0);
        Ok(())
    }
}

pub struct RemoveUploadCommand(pub usize);
impl Command for RemoveUploadCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.remove_upload(self.0).map(|_| ())
    }
}

pub struct DismissNotificationCommand;
impl Command for DismissNotificationCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.dismiss_notification();
        Ok(())
    }
}

pub struct NotifyInfoCommand(pub String);
impl Command for NotifyInfoCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.notify_info(self.0);
        Ok(())
    }
}

/// Carries a failure from outside the state (file dialogs, intake) into the
/// notification area.
pub struct ReportErrorCommand(pub DashboardError);
impl Command for ReportErrorCommand {
    fn execute(self: Box<Self>, state: &mut UiState, _generator: &dyn ReportGenerator) -> Result<(), DashboardError> {
        state.report_error(&self.0);
        Ok(())
    }
}
