use chrono::NaiveDate;

use crate::error::Result;
use crate::fixtures::FixtureProvider;
use crate::model::{Attachment, AttendanceEntry, Employee};
use crate::record::{display_or, PLACEHOLDER};
use crate::summary::{summarize, Summary};

/// Profile page for one employee
#[derive(Debug, Clone)]
pub struct EmployeeDetailScreen {
    employee: Employee,
    attendance: Vec<AttendanceEntry>,
    attachments: Vec<Attachment>,
}

impl EmployeeDetailScreen {
    /// Fails with `EmployeeNotFound` for an unknown id
    pub fn load(fixtures: &dyn FixtureProvider, id: &str) -> Result<Self> {
        let employee = fixtures.employee(id)?;

        let mut attendance: Vec<AttendanceEntry> = fixtures
            .attendance()
            .iter()
            .filter(|e| e.employee_id == employee.id)
            .cloned()
            .collect();
        attendance.sort_by(|a, b| b.date.cmp(&a.date));

        let mut attachments: Vec<Attachment> = fixtures
            .attachments()
            .iter()
            .filter(|a| a.employee_id == employee.id)
            .cloned()
            .collect();
        attachments.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

        Ok(Self {
            employee,
            attendance,
            attachments,
        })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Attendance history, newest first
    pub fn attendance(&self) -> &[AttendanceEntry] {
        &self.attendance
    }

    /// Documents on file, newest first
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn attendance_summary(&self) -> Summary {
        summarize(&self.attendance)
    }

    pub fn manager_display(&self) -> &str {
        display_or(self.employee.manager.as_deref(), PLACEHOLDER)
    }

    /// Whole years of service as of `today`
    pub fn tenure_years(&self, today: NaiveDate) -> u32 {
        today.years_since(self.employee.join_date).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HrError;
    use crate::fixtures::MockFixtures;

    #[test]
    fn test_load_known_employee() {
        let s = EmployeeDetailScreen::load(&MockFixtures::new(), "EMP001").unwrap();
        assert_eq!(s.employee().name, "John Smith");
        assert_eq!(s.attendance().len(), 2);
        assert_eq!(s.attendance()[0].date, MockFixtures::today());
        assert_eq!(s.attachments().len(), 2);
        assert_eq!(s.attachments()[0].id, "DOC001");
        assert_eq!(s.manager_display(), "David Wilson");
        assert_eq!(s.attendance_summary().present, 2);
    }

    #[test]
    fn test_unknown_id() {
        let err = EmployeeDetailScreen::load(&MockFixtures::new(), "EMP999").unwrap_err();
        assert!(matches!(err, HrError::EmployeeNotFound { ref id } if id == "EMP999"));
    }

    #[test]
    fn test_no_manager_placeholder() {
        let s = EmployeeDetailScreen::load(&MockFixtures::new(), "EMP002").unwrap();
        assert_eq!(s.manager_display(), "--");
        assert_eq!(s.tenure_years(MockFixtures::today()), 4);
    }
}
