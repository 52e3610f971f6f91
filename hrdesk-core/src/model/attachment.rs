use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{FieldName, Record};

/// A document attached to an employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub file_name: String,
    pub category: String,
    pub uploaded_by: String,
    pub uploaded_at: NaiveDate,
    pub size: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Attachment {
    /// Lower-cased file extension, if any ("Resume.PDF" -> "pdf")
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentField {
    Id,
    EmployeeId,
    EmployeeName,
    FileName,
    Category,
    UploadedBy,
    UploadedAt,
    Size,
    Description,
}

impl FieldName for AttachmentField {
    fn as_str(&self) -> &'static str {
        match self {
            AttachmentField::Id => "id",
            AttachmentField::EmployeeId => "employee_id",
            AttachmentField::EmployeeName => "employee_name",
            AttachmentField::FileName => "file_name",
            AttachmentField::Category => "category",
            AttachmentField::UploadedBy => "uploaded_by",
            AttachmentField::UploadedAt => "uploaded_at",
            AttachmentField::Size => "size",
            AttachmentField::Description => "description",
        }
    }
}

const ALL_FIELDS: [AttachmentField; 9] = [
    AttachmentField::Id,
    AttachmentField::EmployeeId,
    AttachmentField::EmployeeName,
    AttachmentField::FileName,
    AttachmentField::Category,
    AttachmentField::UploadedBy,
    AttachmentField::UploadedAt,
    AttachmentField::Size,
    AttachmentField::Description,
];

const SEARCH_FIELDS: [AttachmentField; 3] = [
    AttachmentField::FileName,
    AttachmentField::EmployeeName,
    AttachmentField::Category,
];

impl Record for Attachment {
    type Field = AttachmentField;

    const KIND: &'static str = "attachment";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: AttachmentField) -> Option<Cow<'_, str>> {
        match field {
            AttachmentField::Id => Some(Cow::Borrowed(&self.id)),
            AttachmentField::EmployeeId => Some(Cow::Borrowed(&self.employee_id)),
            AttachmentField::EmployeeName => Some(Cow::Borrowed(&self.employee_name)),
            AttachmentField::FileName => Some(Cow::Borrowed(&self.file_name)),
            AttachmentField::Category => Some(Cow::Borrowed(&self.category)),
            AttachmentField::UploadedBy => Some(Cow::Borrowed(&self.uploaded_by)),
            AttachmentField::UploadedAt => Some(Cow::Owned(self.uploaded_at.to_string())),
            AttachmentField::Size => Some(Cow::Borrowed(&self.size)),
            AttachmentField::Description => self.description.as_deref().map(Cow::Borrowed),
        }
    }

    fn all_fields() -> &'static [AttachmentField] {
        &ALL_FIELDS
    }

    fn default_search_fields() -> &'static [AttachmentField] {
        &SEARCH_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        let mut a = Attachment {
            id: "DOC001".into(),
            employee_id: "EMP001".into(),
            employee_name: "John Smith".into(),
            file_name: "Resume.PDF".into(),
            category: "Resume".into(),
            uploaded_by: "HR Admin".into(),
            uploaded_at: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            size: "245 KB".into(),
            description: None,
        };
        assert_eq!(a.extension().as_deref(), Some("pdf"));

        a.file_name = "notes".into();
        assert_eq!(a.extension(), None);
    }
}
