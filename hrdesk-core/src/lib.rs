//! Core library for hrdesk: record types, search filtering, per-screen
//! summaries and the view-models behind each HR screen.

pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod login;
pub mod model;
pub mod record;
pub mod route;
pub mod screens;
pub mod summary;
pub mod view;

pub use clock::{ClockReading, LiveClock};
pub use config::HrConfig;
pub use error::{HrError, Result};
pub use filter::{filter, filter_with_policy, ListFilterView, MatchPolicy};
pub use fixtures::{provider_for, FileFixtures, FixtureProvider, FixtureSet, MockFixtures};
pub use login::{LoginForm, LoginSimulator, MockOutcome, Role, Session};
pub use model::{
    Attachment, AttachmentField, AttendanceEntry, AttendanceField, AttendanceStatus, Employee,
    EmployeeField, EmployeeStatus,
};
pub use record::{FieldName, Record};
pub use route::Route;
pub use screens::ScreenOptions;
pub use summary::{summarize, summarize_with, Summary};
pub use view::ViewMode;
