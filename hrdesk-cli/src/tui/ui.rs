//! UI rendering using ratatui

use hrdesk_core::screens::attachments::description_display;
use hrdesk_core::screens::attendance::{check_in_display, check_out_display, work_hours_display};
use hrdesk_core::screens::login::LoginFocus;
use hrdesk_core::screens::EmployeeDetailScreen;
use hrdesk_core::{ListFilterView, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame,
};

use super::app::{App, Mode, Tab};
use crate::render::{summary_line, truncate, Presentable};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Success color
const SUCCESS: Color = Color::Green;
/// Error color
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Grid card size, borders included
const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 6;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab header
            Constraint::Min(8),    // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match (&app.detail, app.tab) {
        (Some(detail), _) => render_detail(frame, detail, chunks[1]),
        (None, Tab::Attendance) => render_attendance(frame, app, chunks[1]),
        (None, Tab::Employees) => {
            let title = match app.employees.department() {
                Some(dept) => format!(" Employees · {dept} "),
                None => " Employees · All departments ".to_string(),
            };
            render_records(frame, app.employees.list(), app.selected_index, &title, chunks[1]);
        }
        (None, Tab::Attachments) => render_records(
            frame,
            app.attachments.list(),
            app.selected_index,
            " Attachments ",
            chunks[1],
        ),
        (None, Tab::AdminDashboard) => render_admin(frame, app, chunks[1]),
        (None, Tab::ManagerDashboard) => render_manager(frame, app, chunks[1]),
        (None, Tab::Login) => render_login(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);

    if app.mode == Mode::Search {
        render_filter_input(frame, app);
    }
}

/// Render the tab header with the live clock
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = vec![
        "1:Attendance",
        "2:Employees",
        "3:Attachments",
        "4:Admin",
        "5:Manager",
        "6:Login",
    ];

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" HR Desk ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                .title_top(Line::from(format!(" {} ", app.clock_line())).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SECONDARY)),
        )
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .title(title.into())
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
}

/// Render a filtered list in its current view mode
fn render_records<R: Presentable>(
    frame: &mut Frame,
    view: &ListFilterView<R>,
    selected: usize,
    title: &str,
    area: Rect,
) {
    let title = if view.query().is_empty() {
        format!("{title}({}) ", view.len())
    } else {
        format!("{title}· filter '{}' ({} of {}) ", view.query(), view.len(), view.source().len())
    };
    let block = panel(title);

    if view.is_empty() {
        let placeholder = Paragraph::new(Span::styled("  No matches", Style::default().fg(DIM)))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    match view.view_mode() {
        ViewMode::Table => render_table(frame, view.visible(), selected, block, area),
        ViewMode::Grid => render_grid(frame, view.visible(), selected, block, area),
    }
}

fn render_table<R: Presentable>(
    frame: &mut Frame,
    rows: &[R],
    selected: usize,
    block: Block<'_>,
    area: Rect,
) {
    let columns = R::columns();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| (c.value)(row)).collect())
        .collect();

    let widths: Vec<Constraint> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let widest = cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.header.len()))
                .max()
                .unwrap_or(0);
            Constraint::Length(widest as u16)
        })
        .collect();

    let header = Row::new(columns.iter().map(|c| Cell::from(c.header)))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let body = cells.into_iter().map(Row::new);

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_grid<R: Presentable>(
    frame: &mut Frame,
    rows: &[R],
    selected: usize,
    block: Block<'_>,
    area: Rect,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let per_row = (inner.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let first_row = (selected / per_row).saturating_sub(visible_rows - 1);

    for (idx, record) in rows.iter().enumerate().skip(first_row * per_row) {
        let row = idx / per_row - first_row;
        if row >= visible_rows {
            break;
        }
        let col = idx % per_row;
        let card_area = Rect {
            x: inner.x + col as u16 * CARD_WIDTH,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT.min(inner.height),
        };

        let border = if idx == selected { HIGHLIGHT } else { SECONDARY };
        let text_width = CARD_WIDTH.saturating_sub(4) as usize;
        let card = Block::default()
            .title(format!(" {} ", truncate(&record.card_title(), text_width)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let lines: Vec<Line> = record
            .card_lines()
            .iter()
            .map(|l| Line::from(truncate(l, text_width)))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(card), card_area);
    }
}

fn render_attendance(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let screen = &app.attendance;
    let stats = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}  ", screen.date().format("%a %b %-d, %Y")),
            Style::default().fg(HIGHLIGHT),
        ),
        Span::raw(summary_line(&screen.summary())),
    ]))
    .block(panel(" Today "));
    frame.render_widget(stats, chunks[0]);

    render_records(frame, screen.list(), app.selected_index, " Attendance ", chunks[1]);
}

fn render_admin(frame: &mut Frame, app: &App, area: Rect) {
    let d = &app.admin;
    let mut lines = vec![
        Line::from(Span::styled(
            d.date.format("%A, %B %-d, %Y").to_string(),
            Style::default().fg(HIGHLIGHT),
        )),
        Line::from(""),
        Line::from(format!(
            "Employees: {}   Active: {}   On Leave: {}   Inactive: {}",
            d.headcount.total, d.headcount.active, d.headcount.on_leave, d.headcount.inactive
        )),
        Line::from(format!("Today: {}", summary_line(&d.today))),
        Line::from(format!("Attendance rate: {:.1}%", d.attendance_rate)),
        Line::from(""),
        Line::from(Span::styled("Departments", Style::default().fg(ACCENT))),
    ];
    lines.extend(
        d.departments
            .iter()
            .map(|(dept, n)| Line::from(format!("  {dept:<16} {n}"))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Recent uploads", Style::default().fg(ACCENT))));
    lines.extend(d.recent_uploads.iter().map(|doc| {
        Line::from(format!(
            "  {}  {:<30} {}",
            doc.uploaded_at, doc.file_name, doc.employee_name
        ))
    }));

    frame.render_widget(
        Paragraph::new(lines).block(panel(" Admin Dashboard ")).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_manager(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let d = &app.manager;
    let stats = Paragraph::new(format!(
        "{}   On Leave: {}",
        summary_line(&d.summary()),
        d.on_leave()
    ))
    .block(panel(format!(" {} · {} ", d.manager(), d.date())));
    frame.render_widget(stats, chunks[0]);

    render_records(frame, d.team(), app.selected_index, " Team ", chunks[1]);
}

fn render_detail(frame: &mut Frame, detail: &EmployeeDetailScreen, area: Rect) {
    let e = detail.employee();
    let label = Style::default().fg(DIM);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} · {}", e.designation, e.department),
            Style::default().fg(HIGHLIGHT),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Email     ", label), Span::raw(e.email.clone())]),
        Line::from(vec![Span::styled("Phone     ", label), Span::raw(e.phone.clone())]),
        Line::from(vec![Span::styled("Location  ", label), Span::raw(e.location.clone())]),
        Line::from(vec![Span::styled("Status    ", label), Span::raw(e.status.to_string())]),
        Line::from(vec![Span::styled("Joined    ", label), Span::raw(e.join_date.to_string())]),
        Line::from(vec![
            Span::styled("Manager   ", label),
            Span::raw(detail.manager_display().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Attendance  {}", summary_line(&detail.attendance_summary())),
            Style::default().fg(ACCENT),
        )),
    ];
    lines.extend(detail.attendance().iter().map(|a| {
        Line::from(format!(
            "  {}  {:<9} {} - {}  {}",
            a.date,
            a.status.to_string(),
            check_in_display(a),
            check_out_display(a),
            work_hours_display(a)
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Documents ({})", detail.attachments().len()),
        Style::default().fg(ACCENT),
    )));
    lines.extend(detail.attachments().iter().map(|doc| {
        Line::from(format!(
            "  {}  {:<28} {}",
            doc.uploaded_at,
            doc.file_name,
            description_display(doc)
        ))
    }));

    let title = format!(" {} ({}) · Esc to go back ", e.name, e.id);
    frame.render_widget(
        Paragraph::new(lines).block(panel(title)).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let screen = &app.login;
    let editing = app.mode == Mode::Form;
    let field = |focus: LoginFocus, name: &str, value: String| {
        let active = editing && screen.focus == focus;
        let marker = if active { "> " } else { "  " };
        let style = if active {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(format!("{marker}{name:<12}"), Style::default().fg(DIM)),
            Span::styled(value, style),
        ])
    };

    let mut lines = vec![
        field(LoginFocus::Email, "Email", screen.form.email.clone()),
        field(
            LoginFocus::Password,
            "Password",
            "•".repeat(screen.form.password.chars().count()),
        ),
        field(LoginFocus::Role, "Role", screen.form.role.to_string()),
        field(
            LoginFocus::RememberMe,
            "Remember me",
            if screen.form.remember_me { "[x]" } else { "[ ]" }.to_string(),
        ),
        Line::from(""),
    ];

    if screen.is_submitting() {
        let dots = ".".repeat(app.clock.map(|c| c.ticks % 4).unwrap_or(0) as usize);
        lines.push(Line::from(Span::styled(
            format!("Signing in{dots}"),
            Style::default().fg(ACCENT),
        )));
    } else if let Some(err) = screen.error() {
        lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(ERROR))));
    } else if let Some(session) = screen.session() {
        lines.push(Line::from(Span::styled(
            format!("Signed in as {} ({})", session.display_name, session.role),
            Style::default().fg(SUCCESS),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(panel(" Sign in ")), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => {
            Span::styled(" SEARCH ", Style::default().bg(Color::Magenta).fg(Color::Black))
        }
        Mode::Form => Span::styled(" FORM ", Style::default().bg(SUCCESS).fg(Color::Black)),
    };

    let help_text = match (app.mode, app.tab) {
        (Mode::Search, _) => "Type to filter  Enter:keep  Esc:clear",
        (Mode::Form, _) => "Tab:next field  Space:toggle  Enter:sign in  Esc:leave form",
        (Mode::Normal, Tab::Attendance) => "1-6:tabs  j/k:nav  /:search  v:view  [/]:day  Enter:detail  q:quit",
        (Mode::Normal, Tab::Employees) => "1-6:tabs  j/k:nav  /:search  v:view  d:dept  Enter:detail  q:quit",
        (Mode::Normal, Tab::Login) => "1-6:tabs  Enter:edit form  q:quit",
        (Mode::Normal, _) => "1-6:tabs  j/k:nav  /:search  v:view  Enter:detail  q:quit",
    };

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(
            app.status_message.as_deref().unwrap_or(""),
            Style::default().fg(HIGHLIGHT),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render filter input overlay
fn render_filter_input(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let width = 60.min(area.width.saturating_sub(4));
    let popup_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: 2, // Near top for quick filtering
        width,
        height: 3,
    };

    frame.render_widget(Clear, popup_area);

    let title = format!(" Filter ({} matches) ", app.list_len());
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(format!("{}|", app.query())).block(block);
    frame.render_widget(paragraph, popup_area);
}
