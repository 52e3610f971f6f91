//! Fixture data shared by every screen.
//!
//! All screens read from one [`FixtureProvider`] so the employee list, the
//! detail page and the dashboards describe each employee the same way.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HrError, Result};
use crate::model::{
    Attachment, AttendanceEntry, AttendanceStatus, Employee, EmployeeStatus,
};
use crate::record::Record;

/// Source of the three record collections
pub trait FixtureProvider: Send + Sync {
    fn employees(&self) -> Arc<[Employee]>;

    fn attendance(&self) -> Arc<[AttendanceEntry]>;

    fn attachments(&self) -> Arc<[Attachment]>;

    /// Look up one employee by id
    fn employee(&self, id: &str) -> Result<Employee> {
        self.employees()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| HrError::employee_not_found(id))
    }
}

/// The three collections as stored in a fixtures JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl FixtureSet {
    /// Reject duplicate identifiers within any collection
    pub fn validate(&self) -> Result<()> {
        ensure_unique(&self.employees)?;
        ensure_unique(&self.attendance)?;
        ensure_unique(&self.attachments)?;
        Ok(())
    }
}

fn ensure_unique<R: Record>(records: &[R]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(HrError::duplicate_id(R::KIND, record.id()));
        }
    }
    Ok(())
}

/// Immutable collections behind a provider
#[derive(Debug, Clone)]
struct Collections {
    employees: Arc<[Employee]>,
    attendance: Arc<[AttendanceEntry]>,
    attachments: Arc<[Attachment]>,
}

impl From<FixtureSet> for Collections {
    fn from(set: FixtureSet) -> Self {
        Self {
            employees: set.employees.into(),
            attendance: set.attendance.into(),
            attachments: set.attachments.into(),
        }
    }
}

static BUILTIN: Lazy<Collections> = Lazy::new(|| builtin_set().into());

/// Built-in demo data set
#[derive(Debug, Clone)]
pub struct MockFixtures {
    data: Collections,
}

impl Default for MockFixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFixtures {
    pub fn new() -> Self {
        Self {
            data: BUILTIN.clone(),
        }
    }

    /// Date of the most recent attendance day in the built-in set
    pub fn today() -> NaiveDate {
        date(2024, 1, 15)
    }
}

impl FixtureProvider for MockFixtures {
    fn employees(&self) -> Arc<[Employee]> {
        Arc::clone(&self.data.employees)
    }

    fn attendance(&self) -> Arc<[AttendanceEntry]> {
        Arc::clone(&self.data.attendance)
    }

    fn attachments(&self) -> Arc<[Attachment]> {
        Arc::clone(&self.data.attachments)
    }
}

/// Fixtures loaded from a JSON file
#[derive(Debug, Clone)]
pub struct FileFixtures {
    data: Collections,
}

impl FileFixtures {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let set: FixtureSet = serde_json::from_str(&content)
            .map_err(|e| HrError::json(path.display().to_string(), e))?;
        set.validate()?;

        info!(
            path = %path.display(),
            employees = set.employees.len(),
            attendance = set.attendance.len(),
            attachments = set.attachments.len(),
            "loaded fixtures"
        );

        Ok(Self { data: set.into() })
    }
}

impl FixtureProvider for FileFixtures {
    fn employees(&self) -> Arc<[Employee]> {
        Arc::clone(&self.data.employees)
    }

    fn attendance(&self) -> Arc<[AttendanceEntry]> {
        Arc::clone(&self.data.attendance)
    }

    fn attachments(&self) -> Arc<[Attachment]> {
        Arc::clone(&self.data.attachments)
    }
}

/// Provider for `path`, or the built-in set when no path is configured
pub fn provider_for(path: Option<&Path>) -> Result<Arc<dyn FixtureProvider>> {
    match path {
        Some(p) => Ok(Arc::new(FileFixtures::load(p)?)),
        None => Ok(Arc::new(MockFixtures::new())),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    department: &str,
    designation: &str,
    status: EmployeeStatus,
    join_date: NaiveDate,
    manager: Option<&str>,
    location: &str,
    phone: &str,
) -> Employee {
    let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email,
        phone: phone.to_string(),
        department: department.to_string(),
        designation: designation.to_string(),
        status,
        join_date,
        manager: manager.map(str::to_string),
        location: location.to_string(),
    }
}

fn attendance(
    id: &str,
    who: &Employee,
    day: NaiveDate,
    status: AttendanceStatus,
    times: (Option<&str>, Option<&str>),
    work_hours: Option<&str>,
) -> AttendanceEntry {
    AttendanceEntry {
        id: id.to_string(),
        employee_id: who.id.clone(),
        name: who.name.clone(),
        department: who.department.clone(),
        date: day,
        check_in: times.0.map(str::to_string),
        check_out: times.1.map(str::to_string),
        status,
        work_hours: work_hours.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn attachment(
    id: &str,
    who: &Employee,
    file_name: &str,
    category: &str,
    uploaded_by: &str,
    uploaded_at: NaiveDate,
    size: &str,
    description: Option<&str>,
) -> Attachment {
    Attachment {
        id: id.to_string(),
        employee_id: who.id.clone(),
        employee_name: who.name.clone(),
        file_name: file_name.to_string(),
        category: category.to_string(),
        uploaded_by: uploaded_by.to_string(),
        uploaded_at,
        size: size.to_string(),
        description: description.map(str::to_string),
    }
}

fn builtin_set() -> FixtureSet {
    use AttendanceStatus as A;
    use EmployeeStatus as E;

    let employees = vec![
        employee("EMP001", "John Smith", "Engineering", "Senior Developer", E::Active, date(2020, 3, 15), Some("David Wilson"), "New York", "+1 (555) 123-4567"),
        employee("EMP002", "Sarah Johnson", "HR", "HR Manager", E::Active, date(2019, 7, 1), None, "New York", "+1 (555) 234-5678"),
        employee("EMP003", "Michael Brown", "Marketing", "Marketing Specialist", E::Active, date(2021, 1, 10), Some("Sarah Johnson"), "Chicago", "+1 (555) 345-6789"),
        employee("EMP004", "Emily Davis", "Finance", "Financial Analyst", E::OnLeave, date(2020, 11, 20), Some("Sarah Johnson"), "Boston", "+1 (555) 456-7890"),
        employee("EMP005", "David Wilson", "Engineering", "Engineering Manager", E::Active, date(2018, 5, 14), None, "San Francisco", "+1 (555) 567-8901"),
        employee("EMP006", "Lisa Anderson", "Sales", "Sales Executive", E::Active, date(2022, 2, 1), Some("Sarah Johnson"), "Chicago", "+1 (555) 678-9012"),
        employee("EMP007", "James Taylor", "Engineering", "QA Engineer", E::Active, date(2021, 8, 23), Some("David Wilson"), "Austin", "+1 (555) 789-0123"),
        employee("EMP008", "Jennifer Martinez", "Design", "UI/UX Designer", E::Inactive, date(2019, 10, 5), Some("David Wilson"), "Remote", "+1 (555) 890-1234"),
    ];

    let today = MockFixtures::today();
    let yesterday = date(2024, 1, 14);
    let e = &employees;

    let attendance = vec![
        attendance("ATT001", &e[0], today, A::Present, (Some("09:00 AM"), Some("06:00 PM")), Some("9h 0m")),
        attendance("ATT002", &e[1], today, A::Present, (Some("08:45 AM"), Some("05:30 PM")), Some("8h 45m")),
        attendance("ATT003", &e[2], today, A::Late, (Some("10:15 AM"), Some("06:30 PM")), Some("8h 15m")),
        attendance("ATT004", &e[3], today, A::OnLeave, (None, None), None),
        attendance("ATT005", &e[4], today, A::Present, (Some("08:30 AM"), Some("06:15 PM")), Some("9h 45m")),
        attendance("ATT006", &e[5], today, A::Absent, (None, None), None),
        attendance("ATT007", &e[6], today, A::Late, (Some("09:45 AM"), None), None),
        attendance("ATT008", &e[7], today, A::HalfDay, (Some("09:00 AM"), Some("01:00 PM")), Some("4h 0m")),
        attendance("ATT009", &e[0], yesterday, A::Present, (Some("08:55 AM"), Some("05:50 PM")), Some("8h 55m")),
        attendance("ATT010", &e[2], yesterday, A::Present, (Some("09:05 AM"), Some("06:00 PM")), Some("8h 55m")),
        attendance("ATT011", &e[5], yesterday, A::Late, (Some("10:30 AM"), Some("07:00 PM")), Some("8h 30m")),
        attendance("ATT012", &e[6], yesterday, A::Absent, (None, None), None),
    ];

    let attachments = vec![
        attachment("DOC001", &e[0], "Resume_John_Smith.pdf", "Resume", "HR Admin", date(2024, 1, 10), "245 KB", Some("Updated resume")),
        attachment("DOC002", &e[0], "Offer_Letter.pdf", "Contract", "Sarah Johnson", date(2020, 3, 1), "180 KB", Some("Signed offer letter")),
        attachment("DOC003", &e[1], "ID_Proof.jpg", "ID Proof", "HR Admin", date(2023, 12, 5), "1.2 MB", None),
        attachment("DOC004", &e[2], "Marketing_Certification.pdf", "Certificate", "Michael Brown", date(2023, 11, 18), "520 KB", Some("Google Ads certification")),
        attachment("DOC005", &e[3], "Leave_Application.docx", "Leave", "Emily Davis", date(2024, 1, 12), "64 KB", Some("Medical leave request")),
        attachment("DOC006", &e[4], "Performance_Review_2023.pdf", "Review", "Sarah Johnson", date(2024, 1, 5), "310 KB", None),
        attachment("DOC007", &e[6], "Tax_Form_W4.pdf", "Tax", "HR Admin", date(2023, 12, 20), "150 KB", Some("Updated withholding")),
        attachment("DOC008", &e[5], "Sales_Contract.pdf", "Contract", "HR Admin", date(2022, 1, 25), "410 KB", None),
    ];

    FixtureSet {
        employees,
        attendance,
        attachments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_set_is_valid() {
        builtin_set().validate().unwrap();
    }

    #[test]
    fn test_employee_lookup() {
        let fixtures = MockFixtures::new();
        assert_eq!(fixtures.employee("EMP003").unwrap().name, "Michael Brown");
        assert!(matches!(
            fixtures.employee("EMP999"),
            Err(HrError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_attendance_names_match_employee_list() {
        let fixtures = MockFixtures::new();
        let employees = fixtures.employees();
        for entry in fixtures.attendance().iter() {
            let emp = employees.iter().find(|e| e.id == entry.employee_id).unwrap();
            assert_eq!(emp.name, entry.name);
            assert_eq!(emp.department, entry.department);
        }
    }

    #[test]
    fn test_file_fixtures_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&builtin_set()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = FileFixtures::load(file.path()).unwrap();
        assert_eq!(loaded.employees().len(), 8);
        assert_eq!(loaded.attachments()[0].file_name, "Resume_John_Smith.pdf");
    }

    #[test]
    fn test_file_fixtures_reject_duplicates() {
        let mut set = builtin_set();
        let dup = set.employees[0].clone();
        set.employees.push(dup);

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&set).unwrap().as_bytes())
            .unwrap();

        let err = FileFixtures::load(file.path()).unwrap_err();
        assert!(matches!(err, HrError::DuplicateId { .. }));
    }
}
