//! Derived counts for the attendance and dashboard screens.
//!
//! Each screen defines its own status categories, and the definitions overlap
//! differently, so the rules are explicit per screen rather than one shared
//! taxonomy.

use serde::Serialize;

use crate::model::{AttendanceEntry, AttendanceStatus, Employee, EmployeeStatus};

/// Attendance counts shown in the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

/// Which statuses land in which bucket for one screen
pub trait StatusRules {
    fn is_present(&self, status: AttendanceStatus) -> bool;
    fn is_absent(&self, status: AttendanceStatus) -> bool;
    fn is_late(&self, status: AttendanceStatus) -> bool;
}

/// Attendance screen: Late is counted as present and again as late.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceRules;

impl StatusRules for AttendanceRules {
    fn is_present(&self, status: AttendanceStatus) -> bool {
        matches!(status, AttendanceStatus::Present | AttendanceStatus::Late)
    }

    fn is_absent(&self, status: AttendanceStatus) -> bool {
        status == AttendanceStatus::Absent
    }

    fn is_late(&self, status: AttendanceStatus) -> bool {
        status == AttendanceStatus::Late
    }
}

/// Admin dashboard: present means on time; leave counts as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminDashboardRules;

impl StatusRules for AdminDashboardRules {
    fn is_present(&self, status: AttendanceStatus) -> bool {
        status == AttendanceStatus::Present
    }

    fn is_absent(&self, status: AttendanceStatus) -> bool {
        matches!(status, AttendanceStatus::Absent | AttendanceStatus::OnLeave)
    }

    fn is_late(&self, status: AttendanceStatus) -> bool {
        status == AttendanceStatus::Late
    }
}

/// Manager dashboard: anyone who showed up is present, half days included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerDashboardRules;

impl StatusRules for ManagerDashboardRules {
    fn is_present(&self, status: AttendanceStatus) -> bool {
        matches!(
            status,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::HalfDay
        )
    }

    fn is_absent(&self, status: AttendanceStatus) -> bool {
        status == AttendanceStatus::Absent
    }

    fn is_late(&self, status: AttendanceStatus) -> bool {
        status == AttendanceStatus::Late
    }
}

/// Summary under the attendance screen's rules
pub fn summarize(records: &[AttendanceEntry]) -> Summary {
    summarize_with(records, &AttendanceRules)
}

/// Summary under an explicit rule set
pub fn summarize_with<S: StatusRules>(records: &[AttendanceEntry], rules: &S) -> Summary {
    records.iter().fold(
        Summary {
            total: records.len(),
            ..Summary::default()
        },
        |mut acc, entry| {
            if rules.is_present(entry.status) {
                acc.present += 1;
            }
            if rules.is_absent(entry.status) {
                acc.absent += 1;
            }
            if rules.is_late(entry.status) {
                acc.late += 1;
            }
            acc
        },
    )
}

/// Entries with exactly `status`
pub fn count_status(records: &[AttendanceEntry], status: AttendanceStatus) -> usize {
    records.iter().filter(|e| e.status == status).count()
}

/// Percentage of `present` over `total`; 0 for an empty list
pub fn attendance_rate(summary: &Summary) -> f64 {
    if summary.total == 0 {
        0.0
    } else {
        summary.present as f64 * 100.0 / summary.total as f64
    }
}

/// Organisation headcount by employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Headcount {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub inactive: usize,
}

pub fn headcount(employees: &[Employee]) -> Headcount {
    let mut counts = Headcount {
        total: employees.len(),
        ..Headcount::default()
    };
    for employee in employees {
        match employee.status {
            EmployeeStatus::Active => counts.active += 1,
            EmployeeStatus::OnLeave => counts.on_leave += 1,
            EmployeeStatus::Inactive => counts.inactive += 1,
        }
    }
    counts
}

/// Headcount per department, in first-seen order
pub fn department_breakdown(employees: &[Employee]) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = Vec::new();
    for employee in employees {
        match out.iter_mut().find(|(dept, _)| *dept == employee.department) {
            Some((_, n)) => *n += 1,
            None => out.push((employee.department.clone(), 1)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(status: AttendanceStatus) -> AttendanceEntry {
        AttendanceEntry {
            id: format!("{status:?}"),
            employee_id: "EMP".into(),
            name: "Someone".into(),
            department: "Ops".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            check_in: None,
            check_out: None,
            status,
            work_hours: None,
        }
    }

    fn day() -> Vec<AttendanceEntry> {
        use AttendanceStatus::*;
        [Present, Late, HalfDay, OnLeave, Absent]
            .into_iter()
            .map(entry)
            .collect()
    }

    #[test]
    fn test_rule_sets_differ() {
        let records = day();
        assert_eq!(
            summarize_with(&records, &AttendanceRules),
            Summary { total: 5, present: 2, absent: 1, late: 1 }
        );
        assert_eq!(
            summarize_with(&records, &AdminDashboardRules),
            Summary { total: 5, present: 1, absent: 2, late: 1 }
        );
        assert_eq!(
            summarize_with(&records, &ManagerDashboardRules),
            Summary { total: 5, present: 3, absent: 1, late: 1 }
        );
    }

    #[test]
    fn test_empty_summary() {
        let s = summarize(&[]);
        assert_eq!(s, Summary::default());
        assert_eq!(attendance_rate(&s), 0.0);
    }

    #[test]
    fn test_attendance_rate() {
        let s = Summary { total: 4, present: 3, absent: 1, late: 1 };
        assert!((attendance_rate(&s) - 75.0).abs() < f64::EPSILON);
    }
}
