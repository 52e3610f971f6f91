//! Domain records rendered by the screens

pub mod attachment;
pub mod attendance;
pub mod employee;

pub use attachment::{Attachment, AttachmentField};
pub use attendance::{AttendanceEntry, AttendanceField, AttendanceStatus};
pub use employee::{Employee, EmployeeField, EmployeeStatus};
