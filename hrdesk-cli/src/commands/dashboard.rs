//! `dashboard`: admin or manager overview

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use hrdesk_core::login::Role;
use hrdesk_core::screens::{AdminDashboard, ManagerDashboard};
use hrdesk_core::summary::attendance_rate;
use hrdesk_core::{AttendanceStatus, Employee, Summary};
use serde::Serialize;
use tracing::info;

use super::{print_json, Context, RoleArg};
use crate::render::summary_line;

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Which dashboard to show
    #[arg(long, value_enum, default_value = "admin")]
    pub role: RoleArg,

    /// Manager whose team to show (defaults to dashboard.manager in config)
    #[arg(long)]
    pub manager: Option<String>,

    /// Attendance day (YYYY-MM-DD); defaults to the latest recorded day
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TeamMember<'a> {
    #[serde(flatten)]
    employee: &'a Employee,
    today: Option<AttendanceStatus>,
}

#[derive(Serialize)]
struct ManagerOutput<'a> {
    manager: &'a str,
    date: NaiveDate,
    summary: Summary,
    on_leave: usize,
    attendance_rate: f64,
    team: Vec<TeamMember<'a>>,
}

pub fn run_dashboard(args: DashboardArgs, ctx: &Context) -> Result<()> {
    match Role::from(args.role) {
        Role::Manager => {
            let manager = args
                .manager
                .as_deref()
                .unwrap_or(ctx.config.dashboard.manager.as_str());
            manager_dashboard(ctx, manager, args.date, args.json)
        }
        // employees have no dashboard of their own
        Role::Admin | Role::Employee => admin_dashboard(ctx, args.date, args.json),
    }
}

fn admin_dashboard(ctx: &Context, date: Option<NaiveDate>, json: bool) -> Result<()> {
    info!("admin dashboard");
    let d = AdminDashboard::build(ctx.fixtures.as_ref(), date);
    if json {
        return print_json(&d);
    }

    println!("Admin Dashboard · {}", d.date.format("%A, %B %-d, %Y"));
    println!();
    println!(
        "Employees: {}  Active: {}  On Leave: {}  Inactive: {}",
        d.headcount.total, d.headcount.active, d.headcount.on_leave, d.headcount.inactive
    );
    println!("Today      {}", summary_line(&d.today));
    println!("Attendance rate: {:.1}%", d.attendance_rate);

    println!("\nDepartments");
    for (dept, count) in &d.departments {
        println!("  {dept:<14} {count}");
    }

    println!("\nRecent uploads");
    for doc in &d.recent_uploads {
        println!(
            "  {}  {:<30} {}",
            doc.uploaded_at, doc.file_name, doc.employee_name
        );
    }
    Ok(())
}

fn manager_dashboard(
    ctx: &Context,
    manager: &str,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    info!(manager, "manager dashboard");
    let d = ManagerDashboard::build(ctx.fixtures.as_ref(), manager, date, ctx.screen_options());
    let summary = d.summary();

    if json {
        let team = d
            .team()
            .visible()
            .iter()
            .map(|employee| TeamMember {
                employee,
                today: d.status_of(&employee.id),
            })
            .collect();
        return print_json(&ManagerOutput {
            manager: d.manager(),
            date: d.date(),
            summary,
            on_leave: d.on_leave(),
            attendance_rate: attendance_rate(&summary),
            team,
        });
    }

    println!("Manager Dashboard · {} · {}", d.manager(), d.date().format("%A, %B %-d, %Y"));
    println!();
    if d.team().is_empty() {
        println!("No direct reports for {}.", d.manager());
        return Ok(());
    }
    println!("Team       {}  On Leave: {}", summary_line(&summary), d.on_leave());
    println!();
    for member in d.team().visible() {
        let today = d
            .status_of(&member.id)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".to_string());
        println!(
            "  {:<8} {:<20} {:<22} {}",
            member.id, member.name, member.designation, today
        );
    }
    Ok(())
}
