//! hrdesk TUI - the HR screens as tabs
//!
//! - Tabs 1-6: attendance, employees, attachments, admin and manager
//!   dashboards, login
//! - `/` live search, `v` grid/table toggle, `j/k` selection
//! - `Enter` opens the employee detail page for the selected row
//! - Live clock in the header

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
