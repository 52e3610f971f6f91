//! Paths the hosting router exposes for each screen

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HrError, Result};

static EMPLOYEE_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/employees/(?P<id>[^/]+)/?$").expect("valid regex"));

/// One navigable screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Attendance,
    AdminDashboard,
    ManagerDashboard,
    Employees,
    EmployeeDetail { id: String },
    Attachments,
}

impl Route {
    /// Parse a router path such as `/employees/EMP001`
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        let route = match normalized {
            "" | "/" | "/login" => Route::Login,
            "/attendance" => Route::Attendance,
            "/admin" | "/dashboard" => Route::AdminDashboard,
            "/manager" => Route::ManagerDashboard,
            "/employees" => Route::Employees,
            "/attachments" => Route::Attachments,
            other => match EMPLOYEE_DETAIL.captures(other) {
                Some(caps) => Route::EmployeeDetail {
                    id: caps["id"].to_string(),
                },
                None => return Err(HrError::unknown_route(path)),
            },
        };
        Ok(route)
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Attendance => "Attendance",
            Route::AdminDashboard => "Admin Dashboard",
            Route::ManagerDashboard => "Manager Dashboard",
            Route::Employees => "Employees",
            Route::EmployeeDetail { .. } => "Employee Details",
            Route::Attachments => "Attachments",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/login"),
            Route::Attendance => f.write_str("/attendance"),
            Route::AdminDashboard => f.write_str("/admin"),
            Route::ManagerDashboard => f.write_str("/manager"),
            Route::Employees => f.write_str("/employees"),
            Route::EmployeeDetail { id } => write!(f, "/employees/{id}"),
            Route::Attachments => f.write_str("/attachments"),
        }
    }
}

impl FromStr for Route {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}
