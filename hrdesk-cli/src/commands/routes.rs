//! `routes`: resolve router paths to screens

use anyhow::{Context as _, Result};
use clap::Parser;
use hrdesk_core::Route;

#[derive(Parser, Debug)]
pub struct RoutesArgs {
    /// Path to resolve, e.g. /employees/EMP001. Lists every route when omitted.
    pub path: Option<String>,
}

/// Every screen the router serves, with `:id` standing for an employee id
const ROUTE_TABLE: &[(&str, &str)] = &[
    ("/login", "Login"),
    ("/attendance", "Attendance"),
    ("/admin", "Admin Dashboard"),
    ("/manager", "Manager Dashboard"),
    ("/employees", "Employees"),
    ("/employees/:id", "Employee Details"),
    ("/attachments", "Attachments"),
];

pub fn run_routes(args: RoutesArgs) -> Result<()> {
    let Some(path) = args.path else {
        for (path, title) in ROUTE_TABLE {
            println!("{path:<18} {title}");
        }
        return Ok(());
    };

    let route = Route::parse(&path).with_context(|| format!("Cannot route '{path}'"))?;
    match &route {
        Route::EmployeeDetail { id } => println!("{route} -> {} (employee {id})", route.title()),
        _ => println!("{route} -> {}", route.title()),
    }
    Ok(())
}
