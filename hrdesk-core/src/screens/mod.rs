//! Per-screen view-models.
//!
//! Each screen owns its state explicitly and derives everything it shows from
//! the pure functions in [`crate::filter`] and [`crate::summary`]. Nothing here
//! knows how it is drawn.

pub mod attachments;
pub mod attendance;
pub mod dashboard;
pub mod employee_detail;
pub mod employees;
pub mod login;

pub use attachments::AttachmentsScreen;
pub use attendance::AttendanceScreen;
pub use dashboard::{AdminDashboard, ManagerDashboard};
pub use employee_detail::EmployeeDetailScreen;
pub use employees::EmployeesScreen;
pub use login::LoginScreen;

use chrono::NaiveDate;

use crate::config::HrConfig;
use crate::filter::MatchPolicy;
use crate::model::AttendanceEntry;
use crate::view::ViewMode;

/// Settings every list screen starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenOptions {
    pub policy: MatchPolicy,
    pub view_mode: ViewMode,
}

impl ScreenOptions {
    pub fn from_config(config: &HrConfig) -> Self {
        Self {
            policy: config.match_policy(),
            view_mode: config.search.default_view,
        }
    }
}

/// Most recent day present in `entries`
pub fn latest_date(entries: &[AttendanceEntry]) -> Option<NaiveDate> {
    entries.iter().map(|e| e.date).max()
}

/// Entries recorded on `date`, in source order
pub fn entries_on(entries: &[AttendanceEntry], date: NaiveDate) -> Vec<AttendanceEntry> {
    entries.iter().filter(|e| e.date == date).cloned().collect()
}
