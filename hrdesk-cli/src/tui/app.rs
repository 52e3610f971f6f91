//! Core application state and mode management

use std::sync::Arc;

use chrono::Local;
use hrdesk_core::clock::ClockReading;
use hrdesk_core::login::LoginSimulator;
use hrdesk_core::screens::{
    AdminDashboard, AttachmentsScreen, AttendanceScreen, EmployeeDetailScreen, EmployeesScreen,
    LoginScreen, ManagerDashboard,
};
use hrdesk_core::{FixtureProvider, Route, ViewMode};
use tracing::debug;

use crate::commands::Context;

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation mode - switch tabs, move the selection, toggle the view
    #[default]
    Normal,
    /// Search input active; keystrokes edit the current tab's query
    Search,
    /// Login form has focus
    Form,
}

/// One tab per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Attendance,
    Employees,
    Attachments,
    AdminDashboard,
    ManagerDashboard,
    Login,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Attendance,
        Tab::Employees,
        Tab::Attachments,
        Tab::AdminDashboard,
        Tab::ManagerDashboard,
        Tab::Login,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn route(self) -> Route {
        match self {
            Tab::Attendance => Route::Attendance,
            Tab::Employees => Route::Employees,
            Tab::Attachments => Route::Attachments,
            Tab::AdminDashboard => Route::AdminDashboard,
            Tab::ManagerDashboard => Route::ManagerDashboard,
            Tab::Login => Route::Login,
        }
    }

    pub fn from_route(route: &Route) -> Tab {
        match route {
            Route::Attendance => Tab::Attendance,
            Route::Employees | Route::EmployeeDetail { .. } => Tab::Employees,
            Route::Attachments => Tab::Attachments,
            Route::AdminDashboard => Tab::AdminDashboard,
            Route::ManagerDashboard => Tab::ManagerDashboard,
            Route::Login => Tab::Login,
        }
    }

    /// Whether the tab has a searchable list
    pub fn searchable(self) -> bool {
        matches!(
            self,
            Tab::Attendance | Tab::Employees | Tab::Attachments | Tab::ManagerDashboard
        )
    }
}

/// Main application state
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Active tab
    pub tab: Tab,
    pub attendance: AttendanceScreen,
    pub employees: EmployeesScreen,
    pub attachments: AttachmentsScreen,
    pub admin: AdminDashboard,
    pub manager: ManagerDashboard,
    pub login: LoginScreen,
    /// Employee detail opened from a list, shown over the current tab
    pub detail: Option<EmployeeDetailScreen>,
    /// Currently selected item index in the active list
    pub selected_index: usize,
    /// Latest clock reading for the header
    pub clock: Option<ClockReading>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
    fixtures: Arc<dyn FixtureProvider>,
    simulator: LoginSimulator,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        let fixtures = Arc::clone(&ctx.fixtures);
        let opts = ctx.screen_options();
        let provider = fixtures.as_ref();
        Self {
            mode: Mode::Normal,
            tab: Tab::Attendance,
            attendance: AttendanceScreen::new(provider, None, opts),
            employees: EmployeesScreen::new(provider, opts),
            attachments: AttachmentsScreen::new(provider, opts),
            admin: AdminDashboard::build(provider, None),
            manager: ManagerDashboard::build(provider, &ctx.config.dashboard.manager, None, opts),
            login: LoginScreen::new(),
            detail: None,
            selected_index: 0,
            clock: None,
            should_quit: false,
            status_message: None,
            simulator: ctx.config.login_simulator(),
            fixtures,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.detail = None;
        self.selected_index = 0;
        self.mode = if tab == Tab::Login { Mode::Form } else { Mode::Normal };
        debug!(route = %tab.route(), "switched tab");
    }

    /// Number of rows in the active list
    pub fn list_len(&self) -> usize {
        match self.tab {
            Tab::Attendance => self.attendance.list().len(),
            Tab::Employees => self.employees.list().len(),
            Tab::Attachments => self.attachments.list().len(),
            Tab::ManagerDashboard => self.manager.team().len(),
            Tab::AdminDashboard | Tab::Login => 0,
        }
    }

    /// Select next item in list
    pub fn select_next(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Select previous item in list
    pub fn select_prev(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(len.saturating_sub(1));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Current query of the active list
    pub fn query(&self) -> &str {
        match self.tab {
            Tab::Attendance => self.attendance.list().query(),
            Tab::Employees => self.employees.list().query(),
            Tab::Attachments => self.attachments.list().query(),
            Tab::ManagerDashboard => self.manager.team().query(),
            Tab::AdminDashboard | Tab::Login => "",
        }
    }

    /// View mode of the active list
    pub fn view_mode(&self) -> ViewMode {
        match self.tab {
            Tab::Attendance => self.attendance.list().view_mode(),
            Tab::Employees => self.employees.list().view_mode(),
            Tab::Attachments => self.attachments.list().view_mode(),
            Tab::ManagerDashboard => self.manager.team().view_mode(),
            Tab::AdminDashboard | Tab::Login => ViewMode::default(),
        }
    }

    /// Enter search mode on a searchable tab
    pub fn enter_search(&mut self) {
        if self.tab.searchable() && self.detail.is_none() {
            self.mode = Mode::Search;
        }
    }

    /// Exit current mode back to normal
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Add a character to the active query
    pub fn search_insert(&mut self, c: char) {
        match self.tab {
            Tab::Attendance => self.attendance.list_mut().push_char(c),
            Tab::Employees => self.employees.list_mut().push_char(c),
            Tab::Attachments => self.attachments.list_mut().push_char(c),
            Tab::ManagerDashboard => self.manager.team_mut().push_char(c),
            Tab::AdminDashboard | Tab::Login => {}
        }
        self.clamp_selection();
    }

    /// Delete the last character of the active query
    pub fn search_backspace(&mut self) {
        match self.tab {
            Tab::Attendance => self.attendance.list_mut().pop_char(),
            Tab::Employees => self.employees.list_mut().pop_char(),
            Tab::Attachments => self.attachments.list_mut().pop_char(),
            Tab::ManagerDashboard => self.manager.team_mut().pop_char(),
            Tab::AdminDashboard | Tab::Login => {}
        }
        self.clamp_selection();
    }

    /// Clear the active query
    pub fn search_clear(&mut self) {
        match self.tab {
            Tab::Attendance => self.attendance.list_mut().clear_query(),
            Tab::Employees => self.employees.list_mut().clear_query(),
            Tab::Attachments => self.attachments.list_mut().clear_query(),
            Tab::ManagerDashboard => self.manager.team_mut().clear_query(),
            Tab::AdminDashboard | Tab::Login => {}
        }
        self.clamp_selection();
    }

    /// Toggle grid/table on the active list; selection is kept
    pub fn toggle_view(&mut self) {
        let mode = match self.tab {
            Tab::Attendance => self.attendance.list_mut().toggle_view_mode(),
            Tab::Employees => self.employees.list_mut().toggle_view_mode(),
            Tab::Attachments => self.attachments.list_mut().toggle_view_mode(),
            Tab::ManagerDashboard => self.manager.team_mut().toggle_view_mode(),
            Tab::AdminDashboard | Tab::Login => return,
        };
        self.set_status(format!("View: {mode}"));
    }

    /// Previous/next recorded day on the attendance tab
    pub fn step_date(&mut self, forward: bool) {
        if self.tab != Tab::Attendance {
            return;
        }
        if self.attendance.step_date(forward) {
            self.clamp_selection();
            let date = self.attendance.date();
            self.set_status(format!("Date: {date}"));
        } else {
            self.set_status("No more recorded days");
        }
    }

    /// Cycle the department filter on the employees tab
    pub fn cycle_department(&mut self) {
        if self.tab != Tab::Employees {
            return;
        }
        self.employees.cycle_department();
        self.clamp_selection();
        let label = self.employees.department().unwrap_or("All").to_string();
        self.set_status(format!("Department: {label}"));
    }

    /// Employee id behind the selected row, if the tab has one
    fn selected_employee_id(&self) -> Option<String> {
        let idx = self.selected_index;
        match self.tab {
            Tab::Attendance => self
                .attendance
                .list()
                .visible()
                .get(idx)
                .map(|e| e.employee_id.clone()),
            Tab::Employees => self.employees.list().visible().get(idx).map(|e| e.id.clone()),
            Tab::ManagerDashboard => self.manager.team().visible().get(idx).map(|e| e.id.clone()),
            Tab::Attachments => self
                .attachments
                .list()
                .visible()
                .get(idx)
                .map(|a| a.employee_id.clone()),
            Tab::AdminDashboard | Tab::Login => None,
        }
    }

    /// Open the detail page for the selected row
    pub fn open_detail(&mut self) {
        let Some(id) = self.selected_employee_id() else {
            return;
        };
        match EmployeeDetailScreen::load(self.fixtures.as_ref(), &id) {
            Ok(detail) => {
                self.set_status(format!("{}", Route::EmployeeDetail { id }));
                self.detail = Some(detail);
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Close the detail page; returns false if none was open
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// Submit the login form (needs a tokio runtime)
    pub fn submit_login(&mut self) {
        self.login.submit(&self.simulator);
        match self.login.error().map(str::to_string) {
            Some(msg) => self.set_status(msg),
            None => self.set_status("Signing in..."),
        }
    }

    /// Collect a finished sign-in and move to its landing screen
    pub fn poll_login(&mut self) {
        if !self.login.poll() {
            return;
        }
        if let Some(session) = self.login.session() {
            let landing = Tab::from_route(&session.landing);
            let msg = format!("Welcome, {}", session.display_name);
            self.switch_tab(landing);
            self.set_status(msg);
        } else if let Some(msg) = self.login.error().map(str::to_string) {
            self.set_status(msg);
        }
    }

    /// "Monday, January 15, 2024 09:05:03 AM" from the live clock
    pub fn clock_line(&self) -> String {
        match &self.clock {
            Some(reading) => format!("{} {}", reading.date_line(), reading.time_line()),
            None => Local::now().format("%A, %B %-d, %Y %I:%M:%S %p").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_core::{HrConfig, MockFixtures};

    fn app() -> App {
        let ctx = Context {
            config: HrConfig::default(),
            fixtures: Arc::new(MockFixtures::new()),
        };
        App::new(&ctx)
    }

    #[test]
    fn test_tab_digits() {
        assert_eq!(Tab::from_digit('1'), Some(Tab::Attendance));
        assert_eq!(Tab::from_digit('6'), Some(Tab::Login));
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('7'), None);
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut app = app();
        app.switch_tab(Tab::Employees);
        app.selected_index = 7;
        for c in "smith".chars() {
            app.search_insert(c);
        }
        assert_eq!(app.list_len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_view_keeps_rows() {
        let mut app = app();
        app.switch_tab(Tab::Attachments);
        let before = app.list_len();
        app.toggle_view();
        assert_eq!(app.view_mode(), ViewMode::Table);
        assert_eq!(app.list_len(), before);
    }

    #[test]
    fn test_open_detail_from_attendance() {
        let mut app = app();
        app.open_detail();
        assert_eq!(app.detail.as_ref().unwrap().employee().id, "EMP001");
        assert!(app.close_detail());
        assert!(!app.close_detail());
    }
}
