//! Record abstraction shared by every screen.
//!
//! A record is a flat row of named fields. Each record type declares its own
//! closed set of field names so searchable fields are checked at compile time;
//! string names (from the CLI or config) go through [`parse_field`].

use std::borrow::Cow;
use std::fmt;

use crate::error::{HrError, Result};

/// A named field of some record type
pub trait FieldName: Copy + Eq + fmt::Debug + 'static {
    /// snake_case name used on the command line and in JSON fixtures
    fn as_str(&self) -> &'static str;
}

/// One row of domain data
pub trait Record: Clone {
    /// Closed set of field names for this record type
    type Field: FieldName;

    /// Human-readable record kind, used in error messages
    const KIND: &'static str;

    /// Identifier, unique within a collection
    fn id(&self) -> &str;

    /// Value of a field, or `None` when the value is null/absent
    fn field(&self, field: Self::Field) -> Option<Cow<'_, str>>;

    /// Every field this record type declares
    fn all_fields() -> &'static [Self::Field];

    /// Fields searched when the caller does not pick any
    fn default_search_fields() -> &'static [Self::Field];
}

/// Resolve a field name for record type `R`
pub fn parse_field<R: Record>(name: &str) -> Result<R::Field> {
    R::all_fields()
        .iter()
        .copied()
        .find(|f| f.as_str() == name)
        .ok_or_else(|| HrError::unknown_field(name, R::KIND))
}

/// Resolve several field names, keeping their order
pub fn parse_fields<R: Record, S: AsRef<str>>(names: &[S]) -> Result<Vec<R::Field>> {
    names.iter().map(|n| parse_field::<R>(n.as_ref())).collect()
}

/// Placeholder shown for missing check-in/check-out/work-hours values
pub const PLACEHOLDER: &str = "--";

/// Display a nullable value, substituting `placeholder` when absent
pub fn display_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}
