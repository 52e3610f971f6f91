use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HrError;
use crate::record::{FieldName, Record};

/// Attendance status for one employee on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    #[serde(rename = "Half Day")]
    HalfDay,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::HalfDay => "Half Day",
            AttendanceStatus::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            "Late" => Ok(AttendanceStatus::Late),
            "Half Day" => Ok(AttendanceStatus::HalfDay),
            "On Leave" => Ok(AttendanceStatus::OnLeave),
            other => Err(HrError::invalid_status("attendance", other)),
        }
    }
}

/// One row of the attendance register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub work_hours: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceField {
    Id,
    EmployeeId,
    Name,
    Department,
    Date,
    CheckIn,
    CheckOut,
    Status,
    WorkHours,
}

impl FieldName for AttendanceField {
    fn as_str(&self) -> &'static str {
        match self {
            AttendanceField::Id => "id",
            AttendanceField::EmployeeId => "employee_id",
            AttendanceField::Name => "name",
            AttendanceField::Department => "department",
            AttendanceField::Date => "date",
            AttendanceField::CheckIn => "check_in",
            AttendanceField::CheckOut => "check_out",
            AttendanceField::Status => "status",
            AttendanceField::WorkHours => "work_hours",
        }
    }
}

const ALL_FIELDS: [AttendanceField; 9] = [
    AttendanceField::Id,
    AttendanceField::EmployeeId,
    AttendanceField::Name,
    AttendanceField::Department,
    AttendanceField::Date,
    AttendanceField::CheckIn,
    AttendanceField::CheckOut,
    AttendanceField::Status,
    AttendanceField::WorkHours,
];

const SEARCH_FIELDS: [AttendanceField; 3] = [
    AttendanceField::Name,
    AttendanceField::EmployeeId,
    AttendanceField::Department,
];

impl Record for AttendanceEntry {
    type Field = AttendanceField;

    const KIND: &'static str = "attendance";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: AttendanceField) -> Option<Cow<'_, str>> {
        match field {
            AttendanceField::Id => Some(Cow::Borrowed(&self.id)),
            AttendanceField::EmployeeId => Some(Cow::Borrowed(&self.employee_id)),
            AttendanceField::Name => Some(Cow::Borrowed(&self.name)),
            AttendanceField::Department => Some(Cow::Borrowed(&self.department)),
            AttendanceField::Date => Some(Cow::Owned(self.date.to_string())),
            AttendanceField::CheckIn => self.check_in.as_deref().map(Cow::Borrowed),
            AttendanceField::CheckOut => self.check_out.as_deref().map(Cow::Borrowed),
            AttendanceField::Status => Some(Cow::Borrowed(self.status.as_str())),
            AttendanceField::WorkHours => self.work_hours.as_deref().map(Cow::Borrowed),
        }
    }

    fn all_fields() -> &'static [AttendanceField] {
        &ALL_FIELDS
    }

    fn default_search_fields() -> &'static [AttendanceField] {
        &SEARCH_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_display_strings() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::HalfDay,
            AttendanceStatus::OnLeave,
        ] {
            assert_eq!(status.as_str().parse::<AttendanceStatus>().unwrap(), status);
        }
        assert!("present".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_missing_check_out_is_null_field() {
        let entry = AttendanceEntry {
            id: "ATT004".into(),
            employee_id: "EMP004".into(),
            name: "Emily Davis".into(),
            department: "Finance".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            check_in: None,
            check_out: None,
            status: AttendanceStatus::Absent,
            work_hours: None,
        };
        assert!(entry.field(AttendanceField::CheckIn).is_none());
        assert_eq!(entry.field(AttendanceField::Status).as_deref(), Some("Absent"));
    }
}
