//! `employees`, `attendance` and `attachments`: the three searchable lists

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::{Args, Parser};
use hrdesk_core::record::parse_fields;
use hrdesk_core::screens::{AttachmentsScreen, AttendanceScreen, EmployeesScreen};
use hrdesk_core::{ListFilterView, Record, Summary, ViewMode};
use serde::Serialize;
use tracing::info;

use super::{print_json, Context, ViewArg};
use crate::render::{self, Presentable};

/// Options shared by every list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Search text (case-insensitive substring match)
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Field to search; repeat for several (defaults depend on the list)
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Presentation: grid cards or a table
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct EmployeesArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only employees in this department
    #[arg(long)]
    pub department: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AttendanceArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Day to show (YYYY-MM-DD); defaults to the latest recorded day
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
pub struct AttachmentsArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only documents belonging to this employee id
    #[arg(long, value_name = "ID")]
    pub employee: Option<String>,
}

#[derive(Serialize)]
struct ListOutput<'a, R: Serialize> {
    query: &'a str,
    view: ViewMode,
    total: usize,
    matched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
    records: &'a [R],
}

impl<'a, R: Record + Serialize> ListOutput<'a, R> {
    fn new(view: &'a ListFilterView<R>) -> Self {
        Self {
            query: view.query(),
            view: view.view_mode(),
            total: view.source().len(),
            matched: view.len(),
            date: None,
            summary: None,
            records: view.visible(),
        }
    }
}

/// Apply `--field` and `--query` to a list view
fn apply<R: Record>(view: &mut ListFilterView<R>, args: &ListArgs) -> Result<()> {
    if !args.fields.is_empty() {
        let fields = parse_fields::<R, _>(&args.fields)
            .with_context(|| format!("Invalid --field for {}", R::KIND))?;
        view.set_fields(fields);
    }
    if let Some(query) = &args.query {
        view.set_query(query.as_str());
    }
    Ok(())
}

fn print_list<R: Presentable + Serialize>(view: &ListFilterView<R>, json: bool) -> Result<()> {
    if json {
        return print_json(&ListOutput::new(view));
    }
    print!("{}", render::list(view));
    println!("\nShowing {} of {} records", view.len(), view.source().len());
    Ok(())
}

pub fn run_employees(args: EmployeesArgs, ctx: &Context) -> Result<()> {
    info!(query = ?args.list.query, department = ?args.department, "employees");

    let mut screen = EmployeesScreen::new(ctx.fixtures.as_ref(), ctx.screen_options_with(args.list.view));
    if args.department.is_some() {
        screen.set_department(args.department);
    }
    apply(screen.list_mut(), &args.list)?;
    print_list(screen.list(), args.list.json)
}

pub fn run_attendance(args: AttendanceArgs, ctx: &Context) -> Result<()> {
    info!(query = ?args.list.query, date = ?args.date, "attendance");

    let mut screen = AttendanceScreen::new(
        ctx.fixtures.as_ref(),
        args.date,
        ctx.screen_options_with(args.list.view),
    );
    apply(screen.list_mut(), &args.list)?;

    if args.list.json {
        let mut out = ListOutput::new(screen.list());
        out.date = Some(screen.date());
        out.summary = Some(screen.summary());
        return print_json(&out);
    }

    println!("Attendance for {}", screen.date().format("%A, %B %-d, %Y"));
    println!("{}\n", render::summary_line(&screen.summary()));
    print_list(screen.list(), false)
}

pub fn run_attachments(args: AttachmentsArgs, ctx: &Context) -> Result<()> {
    info!(query = ?args.list.query, employee = ?args.employee, "attachments");

    let opts = ctx.screen_options_with(args.list.view);
    let mut screen = match &args.employee {
        Some(id) => AttachmentsScreen::for_employee(ctx.fixtures.as_ref(), id, opts)
            .with_context(|| format!("Cannot list attachments for {id}"))?,
        None => AttachmentsScreen::new(ctx.fixtures.as_ref(), opts),
    };
    apply(screen.list_mut(), &args.list)?;
    print_list(screen.list(), args.list.json)
}
