//! Plain-text renderers for the two view modes.
//!
//! Both renderers consume the same filtered slice; [`list`] picks one through
//! [`ListFilterView::render`].

use hrdesk_core::screens::attachments::description_display;
use hrdesk_core::screens::attendance::{check_in_display, check_out_display, work_hours_display};
use hrdesk_core::{Attachment, AttendanceEntry, Employee, ListFilterView, Record, Summary};

/// Width of one grid card, borders included
const CARD_WIDTH: usize = 32;
/// Cards per grid row
const CARDS_PER_ROW: usize = 3;

/// One table column
pub struct Column<R> {
    pub header: &'static str,
    pub value: fn(&R) -> String,
}

/// Record types with a table layout and a card layout
pub trait Presentable: Record {
    fn columns() -> Vec<Column<Self>>;
    fn card_title(&self) -> String;
    fn card_lines(&self) -> Vec<String>;
}

impl Presentable for Employee {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { header: "ID", value: |e| e.id.clone() },
            Column { header: "Name", value: |e| e.name.clone() },
            Column { header: "Department", value: |e| e.department.clone() },
            Column { header: "Designation", value: |e| e.designation.clone() },
            Column { header: "Status", value: |e| e.status.to_string() },
            Column { header: "Location", value: |e| e.location.clone() },
        ]
    }

    fn card_title(&self) -> String {
        format!("[{}] {}", self.initials(), self.name)
    }

    fn card_lines(&self) -> Vec<String> {
        vec![
            self.designation.clone(),
            self.department.clone(),
            self.email.clone(),
            format!("{} · {}", self.status, self.location),
        ]
    }
}

impl Presentable for AttendanceEntry {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { header: "Employee", value: |e| e.employee_id.clone() },
            Column { header: "Name", value: |e| e.name.clone() },
            Column { header: "Department", value: |e| e.department.clone() },
            Column { header: "Check In", value: |e| check_in_display(e).to_string() },
            Column { header: "Check Out", value: |e| check_out_display(e).to_string() },
            Column { header: "Hours", value: |e| work_hours_display(e).to_string() },
            Column { header: "Status", value: |e| e.status.to_string() },
        ]
    }

    fn card_title(&self) -> String {
        format!("{} ({})", self.name, self.employee_id)
    }

    fn card_lines(&self) -> Vec<String> {
        vec![
            self.department.clone(),
            format!("In:  {}", check_in_display(self)),
            format!("Out: {}", check_out_display(self)),
            format!("{} · {}", self.status, work_hours_display(self)),
        ]
    }
}

impl Presentable for Attachment {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { header: "ID", value: |a| a.id.clone() },
            Column { header: "File", value: |a| a.file_name.clone() },
            Column { header: "Employee", value: |a| a.employee_name.clone() },
            Column { header: "Category", value: |a| a.category.clone() },
            Column { header: "Uploaded", value: |a| a.uploaded_at.to_string() },
            Column { header: "Size", value: |a| a.size.clone() },
        ]
    }

    fn card_title(&self) -> String {
        self.file_name.clone()
    }

    fn card_lines(&self) -> Vec<String> {
        vec![
            format!("{} · {}", self.category, self.size),
            self.employee_name.clone(),
            format!("{} by {}", self.uploaded_at, self.uploaded_by),
            description_display(self).to_string(),
        ]
    }
}

/// Render the view's filtered records in its current mode
pub fn list<R: Presentable>(view: &ListFilterView<R>) -> String {
    if view.is_empty() {
        return "No matching records.\n".to_string();
    }
    view.render(grid::<R>, table::<R>)
}

/// Aligned text table
pub fn table<R: Presentable>(rows: &[R]) -> String {
    let columns = R::columns();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| (c.value)(row)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = columns.iter().map(|c| c.header.to_string()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| pad(cell, *w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Cards laid out several to a row
pub fn grid<R: Presentable>(rows: &[R]) -> String {
    let mut out = String::new();
    for chunk in rows.chunks(CARDS_PER_ROW) {
        let boxes: Vec<Vec<String>> = chunk.iter().map(card).collect();
        let height = boxes.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let joined = boxes
                .iter()
                .map(|b| b.get(line).cloned().unwrap_or_else(|| " ".repeat(CARD_WIDTH)))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(joined.trim_end());
            out.push('\n');
        }
    }
    out
}

fn card<R: Presentable>(record: &R) -> Vec<String> {
    let inner = CARD_WIDTH - 4;
    let mut lines = vec![format!("┌{}┐", "─".repeat(CARD_WIDTH - 2))];
    lines.push(format!("│ {} │", pad(&truncate(&record.card_title(), inner), inner)));
    lines.push(format!("├{}┤", "─".repeat(CARD_WIDTH - 2)));
    for text in record.card_lines() {
        lines.push(format!("│ {} │", pad(&truncate(&text, inner), inner)));
    }
    lines.push(format!("└{}┘", "─".repeat(CARD_WIDTH - 2)));
    lines
}

/// One-line summary used above attendance listings
pub fn summary_line(summary: &Summary) -> String {
    format!(
        "Total: {}  Present: {}  Absent: {}  Late: {}",
        summary.total, summary.present, summary.absent, summary.late
    )
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_core::{FixtureProvider, MockFixtures, ViewMode};

    fn view() -> ListFilterView<Employee> {
        ListFilterView::new(MockFixtures::new().employees())
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let mut v = view();
        v.set_view_mode(ViewMode::Table);
        v.set_query("smith");
        let out = list(&v);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("John Smith"));
    }

    #[test]
    fn test_grid_cards_per_row() {
        let v = view();
        let out = list(&v);
        assert!(out.contains("[JS] John Smith"));
        // 8 cards, three per row: three rows of boxes
        assert_eq!(out.lines().filter(|l| l.starts_with('┌')).count(), 3);
    }

    #[test]
    fn test_empty_result() {
        let mut v = view();
        v.set_query("zzz-nomatch");
        assert_eq!(list(&v), "No matching records.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
