//! `employee <ID>`: the employee detail page

use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Parser;
use hrdesk_core::screens::attachments::description_display;
use hrdesk_core::screens::attendance::{check_in_display, check_out_display, work_hours_display};
use hrdesk_core::screens::EmployeeDetailScreen;
use hrdesk_core::{Attachment, AttendanceEntry, Employee, Summary};
use serde::Serialize;
use tracing::info;

use super::{print_json, Context};
use crate::render::summary_line;

#[derive(Parser, Debug)]
pub struct EmployeeArgs {
    /// Employee id, e.g. EMP001
    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DetailOutput<'a> {
    employee: &'a Employee,
    attendance_summary: Summary,
    attendance: &'a [AttendanceEntry],
    attachments: &'a [Attachment],
}

pub fn run_employee(args: EmployeeArgs, ctx: &Context) -> Result<()> {
    info!(id = %args.id, "employee detail");

    let screen = EmployeeDetailScreen::load(ctx.fixtures.as_ref(), &args.id)
        .with_context(|| format!("Cannot open /employees/{}", args.id))?;

    if args.json {
        return print_json(&DetailOutput {
            employee: screen.employee(),
            attendance_summary: screen.attendance_summary(),
            attendance: screen.attendance(),
            attachments: screen.attachments(),
        });
    }

    let e = screen.employee();
    println!("{} ({})", e.name, e.id);
    println!("{} · {}", e.designation, e.department);
    println!();
    println!("  Email:     {}", e.email);
    println!("  Phone:     {}", e.phone);
    println!("  Location:  {}", e.location);
    println!("  Status:    {}", e.status);
    println!(
        "  Joined:    {} ({} years)",
        e.join_date,
        screen.tenure_years(Local::now().date_naive())
    );
    println!("  Manager:   {}", screen.manager_display());

    println!("\nAttendance  {}", summary_line(&screen.attendance_summary()));
    if screen.attendance().is_empty() {
        println!("  No attendance records.");
    }
    for entry in screen.attendance() {
        println!(
            "  {}  {:<9} {} - {}  {}",
            entry.date,
            entry.status.to_string(),
            check_in_display(entry),
            check_out_display(entry),
            work_hours_display(entry)
        );
    }

    println!("\nDocuments ({})", screen.attachments().len());
    if screen.attachments().is_empty() {
        println!("  No documents.");
    }
    for doc in screen.attachments() {
        println!(
            "  {}  {:<12} {:>8}  {}  {}",
            doc.uploaded_at,
            doc.category,
            doc.size,
            doc.file_name,
            description_display(doc)
        );
    }
    Ok(())
}
