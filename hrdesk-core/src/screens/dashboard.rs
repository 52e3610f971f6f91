//! Admin and manager dashboards.
//!
//! Both summarize the most recent attendance day, each under its own
//! [`StatusRules`](crate::summary::StatusRules).

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::filter::ListFilterView;
use crate::fixtures::FixtureProvider;
use crate::model::{Attachment, AttendanceEntry, AttendanceStatus, Employee};
use crate::summary::{
    attendance_rate, count_status, department_breakdown, headcount, summarize_with,
    AdminDashboardRules, Headcount, ManagerDashboardRules, Summary,
};

use super::{entries_on, latest_date, ScreenOptions};

/// Attachments listed under "recent uploads"
pub const RECENT_UPLOADS: usize = 5;

fn resolve_day(entries: &[AttendanceEntry], date: Option<NaiveDate>) -> NaiveDate {
    date.or_else(|| latest_date(entries))
        .unwrap_or_else(|| Local::now().date_naive())
}

/// Organisation-wide overview
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub date: NaiveDate,
    pub headcount: Headcount,
    pub today: Summary,
    pub attendance_rate: f64,
    pub departments: Vec<(String, usize)>,
    pub recent_uploads: Vec<Attachment>,
}

impl AdminDashboard {
    pub fn build(fixtures: &dyn FixtureProvider, date: Option<NaiveDate>) -> Self {
        let employees = fixtures.employees();
        let attendance = fixtures.attendance();
        let date = resolve_day(&attendance, date);

        let today = summarize_with(&entries_on(&attendance, date), &AdminDashboardRules);

        let mut recent_uploads = fixtures.attachments().to_vec();
        recent_uploads.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        recent_uploads.truncate(RECENT_UPLOADS);

        Self {
            date,
            headcount: headcount(&employees),
            attendance_rate: attendance_rate(&today),
            today,
            departments: department_breakdown(&employees),
            recent_uploads,
        }
    }
}

/// One manager's direct reports
#[derive(Debug, Clone)]
pub struct ManagerDashboard {
    manager: String,
    date: NaiveDate,
    team_attendance: Vec<AttendanceEntry>,
    team: ListFilterView<Employee>,
}

impl ManagerDashboard {
    /// Team of `manager` (exact name match). An unknown name yields an empty team.
    pub fn build(
        fixtures: &dyn FixtureProvider,
        manager: &str,
        date: Option<NaiveDate>,
        opts: ScreenOptions,
    ) -> Self {
        let team: Arc<[Employee]> = fixtures
            .employees()
            .iter()
            .filter(|e| e.manager.as_deref() == Some(manager))
            .cloned()
            .collect();

        let attendance = fixtures.attendance();
        let date = resolve_day(&attendance, date);
        let team_attendance = entries_on(&attendance, date)
            .into_iter()
            .filter(|entry| team.iter().any(|e| e.id == entry.employee_id))
            .collect();

        Self {
            manager: manager.to_string(),
            date,
            team_attendance,
            team: ListFilterView::new(team)
                .policy(opts.policy)
                .view_mode_initial(opts.view_mode),
        }
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn team(&self) -> &ListFilterView<Employee> {
        &self.team
    }

    pub fn team_mut(&mut self) -> &mut ListFilterView<Employee> {
        &mut self.team
    }

    pub fn team_attendance(&self) -> &[AttendanceEntry] {
        &self.team_attendance
    }

    pub fn summary(&self) -> Summary {
        summarize_with(&self.team_attendance, &ManagerDashboardRules)
    }

    pub fn on_leave(&self) -> usize {
        count_status(&self.team_attendance, AttendanceStatus::OnLeave)
    }

    /// Today's status for one team member, if recorded
    pub fn status_of(&self, employee_id: &str) -> Option<AttendanceStatus> {
        self.team_attendance
            .iter()
            .find(|e| e.employee_id == employee_id)
            .map(|e| e.status)
    }
}
