//! Grid/table presentation selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HrError;

/// Which renderer consumes the filtered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card layout
    #[default]
    Grid,
    /// Tabular layout
    Table,
}

impl ViewMode {
    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Table,
            ViewMode::Table => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "table" => Ok(ViewMode::Table),
            _ => Err(HrError::InvalidViewMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Dispatch an already-filtered slice to the renderer for `mode`.
///
/// Both renderers receive the same slice; neither may reorder or refilter it.
pub fn render<R, T>(
    mode: ViewMode,
    records: &[R],
    grid: impl FnOnce(&[R]) -> T,
    table: impl FnOnce(&[R]) -> T,
) -> T {
    match mode {
        ViewMode::Grid => grid(records),
        ViewMode::Table => table(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ViewMode::Grid.toggle(), ViewMode::Table);
        assert_eq!(ViewMode::Grid.toggle().toggle(), ViewMode::Grid);
    }

    #[test]
    fn test_parse() {
        assert_eq!("table".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert_eq!("GRID".parse::<ViewMode>().unwrap(), ViewMode::Grid);
        assert!("list".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_render_dispatch_sees_same_slice() {
        let rows = [1, 2, 3];
        let grid = render(ViewMode::Grid, &rows, |r| r.to_vec(), |_| vec![]);
        let table = render(ViewMode::Table, &rows, |_| vec![], |r| r.to_vec());
        assert_eq!(grid, table);
    }
}
