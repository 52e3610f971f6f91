//! Search filtering over in-memory record lists.
//!
//! [`filter`] is the pure matching function every screen uses. [`ListFilterView`]
//! is the per-screen state object around it: the immutable source, the current
//! query and the view mode, with the filtered sequence cached so that toggling
//! the view never re-runs the filter.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::Record;
use crate::view::ViewMode;

/// How the raw query text is prepared before matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Query used exactly as typed; whitespace is significant
    #[default]
    Literal,
    /// Leading and trailing whitespace removed first
    Trimmed,
}

impl MatchPolicy {
    fn prepare<'q>(&self, query: &'q str) -> &'q str {
        match self {
            MatchPolicy::Literal => query,
            MatchPolicy::Trimmed => query.trim(),
        }
    }
}

/// Does `record` match the lower-cased `needle` in any of `fields`?
///
/// Null fields never match.
fn matches<R: Record>(record: &R, needle: &str, fields: &[R::Field]) -> bool {
    fields.iter().any(|&field| {
        record
            .field(field)
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Records whose searchable fields contain `query`, case-insensitively.
///
/// An empty query keeps everything. Matching is OR across `fields` and source
/// order is preserved. The query is not trimmed.
pub fn filter<R: Record>(records: &[R], query: &str, fields: &[R::Field]) -> Vec<R> {
    filter_with_policy(records, query, fields, MatchPolicy::Literal)
}

/// [`filter`] with an explicit [`MatchPolicy`]
pub fn filter_with_policy<R: Record>(
    records: &[R],
    query: &str,
    fields: &[R::Field],
    policy: MatchPolicy,
) -> Vec<R> {
    let query = policy.prepare(query);
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &needle, fields))
        .cloned()
        .collect()
}

/// Filter state for one list screen
#[derive(Debug, Clone)]
pub struct ListFilterView<R: Record> {
    source: Arc<[R]>,
    fields: Vec<R::Field>,
    policy: MatchPolicy,
    query: String,
    view_mode: ViewMode,
    visible: Vec<R>,
}

impl<R: Record> ListFilterView<R> {
    /// View over `source` searching the record type's default fields
    pub fn new(source: Arc<[R]>) -> Self {
        Self::with_fields(source, R::default_search_fields().to_vec())
    }

    /// View over `source` searching `fields`
    pub fn with_fields(source: Arc<[R]>, fields: Vec<R::Field>) -> Self {
        let visible = source.to_vec();
        Self {
            source,
            fields,
            policy: MatchPolicy::default(),
            query: String::new(),
            view_mode: ViewMode::default(),
            visible,
        }
    }

    /// Builder: set the match policy
    pub fn policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self.refilter();
        self
    }

    /// Builder: set the initial view mode
    pub fn view_mode_initial(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query and re-run the filter
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Append one typed character
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Remove the last character, if any
    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Fields currently searched
    pub fn fields(&self) -> &[R::Field] {
        &self.fields
    }

    /// Replace the searchable fields and re-run the filter
    pub fn set_fields(&mut self, fields: Vec<R::Field>) {
        self.fields = fields;
        self.refilter();
    }

    /// Replace the source list (e.g. a different date) and re-run the filter
    pub fn set_source(&mut self, source: Arc<[R]>) {
        self.source = source;
        self.refilter();
    }

    /// Unfiltered source list
    pub fn source(&self) -> &[R] {
        &self.source
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Change presentation only; the filtered sequence is untouched
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggle();
        self.view_mode
    }

    /// The filtered sequence both renderers consume
    pub fn visible(&self) -> &[R] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Hand the filtered sequence to the renderer for the current view mode
    pub fn render<T>(
        &self,
        grid: impl FnOnce(&[R]) -> T,
        table: impl FnOnce(&[R]) -> T,
    ) -> T {
        crate::view::render(self.view_mode, &self.visible, grid, table)
    }

    fn refilter(&mut self) {
        self.visible = filter_with_policy(&self.source, &self.query, &self.fields, self.policy);
        debug!(
            kind = R::KIND,
            query = %self.query,
            matched = self.visible.len(),
            total = self.source.len(),
            "filter recomputed"
        );
    }
}
