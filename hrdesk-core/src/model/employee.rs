use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HrError;
use crate::record::{FieldName, Record};

/// Employment status shown on the employee cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EmployeeStatus::Active),
            "On Leave" => Ok(EmployeeStatus::OnLeave),
            "Inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(HrError::invalid_status("employee", other)),
        }
    }
}

/// An employee as listed on the employees screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub manager: Option<String>,
    pub location: String,
}

impl Employee {
    /// Two-letter initials for avatar badges ("John Smith" -> "JS")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Id,
    Name,
    Email,
    Phone,
    Department,
    Designation,
    Status,
    JoinDate,
    Manager,
    Location,
}

impl FieldName for EmployeeField {
    fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::Id => "id",
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Phone => "phone",
            EmployeeField::Department => "department",
            EmployeeField::Designation => "designation",
            EmployeeField::Status => "status",
            EmployeeField::JoinDate => "join_date",
            EmployeeField::Manager => "manager",
            EmployeeField::Location => "location",
        }
    }
}

const ALL_FIELDS: [EmployeeField; 10] = [
    EmployeeField::Id,
    EmployeeField::Name,
    EmployeeField::Email,
    EmployeeField::Phone,
    EmployeeField::Department,
    EmployeeField::Designation,
    EmployeeField::Status,
    EmployeeField::JoinDate,
    EmployeeField::Manager,
    EmployeeField::Location,
];

const SEARCH_FIELDS: [EmployeeField; 3] = [
    EmployeeField::Name,
    EmployeeField::Department,
    EmployeeField::Designation,
];

impl Record for Employee {
    type Field = EmployeeField;

    const KIND: &'static str = "employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: EmployeeField) -> Option<Cow<'_, str>> {
        match field {
            EmployeeField::Id => Some(Cow::Borrowed(&self.id)),
            EmployeeField::Name => Some(Cow::Borrowed(&self.name)),
            EmployeeField::Email => Some(Cow::Borrowed(&self.email)),
            EmployeeField::Phone => Some(Cow::Borrowed(&self.phone)),
            EmployeeField::Department => Some(Cow::Borrowed(&self.department)),
            EmployeeField::Designation => Some(Cow::Borrowed(&self.designation)),
            EmployeeField::Status => Some(Cow::Borrowed(self.status.as_str())),
            EmployeeField::JoinDate => Some(Cow::Owned(self.join_date.to_string())),
            EmployeeField::Manager => self.manager.as_deref().map(Cow::Borrowed),
            EmployeeField::Location => Some(Cow::Borrowed(&self.location)),
        }
    }

    fn all_fields() -> &'static [EmployeeField] {
        &ALL_FIELDS
    }

    fn default_search_fields() -> &'static [EmployeeField] {
        &SEARCH_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: "EMP001".into(),
            name: "John Smith".into(),
            email: "john.smith@company.com".into(),
            phone: "+1 555-0101".into(),
            department: "Engineering".into(),
            designation: "Senior Developer".into(),
            status: EmployeeStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
            manager: None,
            location: "New York".into(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(sample().initials(), "JS");
    }

    #[test]
    fn test_null_manager_field() {
        assert!(sample().field(EmployeeField::Manager).is_none());
        assert_eq!(
            sample().field(EmployeeField::JoinDate).as_deref(),
            Some("2020-03-15")
        );
    }

    #[test]
    fn test_status_serde_uses_display_string() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
        assert_eq!("On Leave".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::OnLeave);
    }
}
