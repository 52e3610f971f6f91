use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::filter::ListFilterView;
use crate::fixtures::FixtureProvider;
use crate::model::AttendanceEntry;
use crate::record::{display_or, PLACEHOLDER};
use crate::summary::{summarize, Summary};

use super::{entries_on, latest_date, ScreenOptions};

/// Attendance register for one day
#[derive(Debug, Clone)]
pub struct AttendanceScreen {
    all: Arc<[AttendanceEntry]>,
    date: NaiveDate,
    list: ListFilterView<AttendanceEntry>,
}

impl AttendanceScreen {
    /// Open on `date`, or on the latest recorded day when `None`
    pub fn new(fixtures: &dyn FixtureProvider, date: Option<NaiveDate>, opts: ScreenOptions) -> Self {
        let all = fixtures.attendance();
        let date = date
            .or_else(|| latest_date(&all))
            .unwrap_or_else(|| Local::now().date_naive());
        let list = ListFilterView::new(entries_on(&all, date).into())
            .policy(opts.policy)
            .view_mode_initial(opts.view_mode);
        Self { all, date, list }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Switch day; the current query is kept and re-applied
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.list.set_source(entries_on(&self.all, date).into());
    }

    /// Days with at least one entry, newest first
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.all.iter().map(|e| e.date).collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        dates
    }

    /// Step to the previous/next recorded day. Returns false at either end.
    pub fn step_date(&mut self, forward: bool) -> bool {
        let dates = self.available_dates();
        let Some(pos) = dates.iter().position(|d| *d == self.date) else {
            return false;
        };
        // dates are newest first
        let target = if forward {
            pos.checked_sub(1)
        } else {
            Some(pos + 1)
        };
        match target.and_then(|i| dates.get(i)) {
            Some(&d) => {
                self.set_date(d);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &ListFilterView<AttendanceEntry> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListFilterView<AttendanceEntry> {
        &mut self.list
    }

    /// Stat cards for the whole day, independent of the search box
    pub fn summary(&self) -> Summary {
        summarize(self.list.source())
    }

    /// Counts over the rows currently shown
    pub fn visible_summary(&self) -> Summary {
        summarize(self.list.visible())
    }
}

/// Check-in time or the placeholder
pub fn check_in_display(entry: &AttendanceEntry) -> &str {
    display_or(entry.check_in.as_deref(), PLACEHOLDER)
}

/// Check-out time or the placeholder
pub fn check_out_display(entry: &AttendanceEntry) -> &str {
    display_or(entry.check_out.as_deref(), PLACEHOLDER)
}

/// Work hours or the placeholder
pub fn work_hours_display(entry: &AttendanceEntry) -> &str {
    display_or(entry.work_hours.as_deref(), PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MockFixtures;

    fn screen() -> AttendanceScreen {
        AttendanceScreen::new(&MockFixtures::new(), None, ScreenOptions::default())
    }

    #[test]
    fn test_opens_on_latest_day() {
        let s = screen();
        assert_eq!(s.date(), MockFixtures::today());
        assert_eq!(s.list().len(), 8);
    }

    #[test]
    fn test_summary_of_day() {
        let s = screen();
        assert_eq!(
            s.summary(),
            Summary { total: 8, present: 5, absent: 1, late: 2 }
        );
    }

    #[test]
    fn test_summary_ignores_search_box() {
        let mut s = screen();
        s.list_mut().set_query("engineering");
        assert_eq!(s.summary().total, 8);
        assert_eq!(s.visible_summary().total, 3);
    }

    #[test]
    fn test_step_date_keeps_query() {
        let mut s = screen();
        s.list_mut().set_query("john");
        assert!(s.step_date(false));
        assert_eq!(s.date(), NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert_eq!(s.list().query(), "john");
        assert_eq!(s.list().len(), 1);
        assert!(!s.step_date(false));
        assert!(s.step_date(true));
        assert_eq!(s.date(), MockFixtures::today());
    }

    #[test]
    fn test_placeholders() {
        let s = screen();
        let absent = s.list().visible().iter().find(|e| e.employee_id == "EMP006").unwrap();
        assert_eq!(check_in_display(absent), "--");
        assert_eq!(check_out_display(absent), "--");
        let still_in = s.list().visible().iter().find(|e| e.employee_id == "EMP007").unwrap();
        assert_eq!(check_in_display(still_in), "09:45 AM");
        assert_eq!(work_hours_display(still_in), "--");
    }
}
