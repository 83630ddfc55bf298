//! Query state and the pure view projection.
//!
//! [`compute_view`] runs filter, sort, then paginate, in that order, and never
//! mutates its inputs. Keeping the page index in range is the caller's job
//! (see [`QueryState::clamp_page`]); the projection itself just returns an
//! empty page when asked for one past the end.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;

use roster_model::{Field, Record};

use crate::collate::{compare_text, matches_search};

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: Field,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: Field) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: Field) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Compare two records under this spec.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = compare_by_field(self.key, a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Ascending comparator for one field.
pub fn compare_by_field(key: Field, a: &Record, b: &Record) -> Ordering {
    match key {
        Field::Salary => a.salary.cmp(&b.salary),
        Field::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
        Field::FullName => compare_text(&a.full_name, &b.full_name),
        Field::Position => compare_text(a.position.as_str(), b.position.as_str()),
    }
}

/// View parameters: search text, sort, and page window.
///
/// Holds no record data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    search: String,
    sort: Option<SortSpec>,
    page_index: usize,
    page_size: NonZeroUsize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// No search, no sort, first page.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            sort: None,
            page_index: 0,
            page_size,
        }
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Replace the search text and go back to the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page_index = 0;
    }

    /// Advance the sort cycle for `key`: none, ascending, descending, none.
    ///
    /// A key other than the active one starts over at ascending. Always
    /// returns to the first page.
    pub fn toggle_sort(&mut self, key: Field) -> Option<SortSpec> {
        self.page_index = 0;
        self.sort = match self.sort {
            Some(SortSpec {
                key: active,
                direction: SortDirection::Ascending,
            }) if active == key => Some(SortSpec::descending(key)),
            Some(SortSpec {
                key: active,
                direction: SortDirection::Descending,
            }) if active == key => None,
            _ => Some(SortSpec::ascending(key)),
        };
        self.sort
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Change rows per page and go back to the first page.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Pull the page index back to the last page that exists for
    /// `total_filtered` rows. Returns `true` if it moved.
    pub fn clamp_page(&mut self, total_filtered: usize) -> bool {
        let last = last_page_index(total_filtered, self.page_size);
        if self.page_index > last {
            self.page_index = last;
            true
        } else {
            false
        }
    }
}

/// Highest valid zero-based page index; `0` when there are no rows.
pub fn last_page_index(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get()).saturating_sub(1)
}

/// One page of the filtered and sorted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub items: Vec<Record>,
    pub total_filtered: usize,
    pub page_index: usize,
    pub page_size: NonZeroUsize,
}

impl Default for View {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_filtered: 0,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl View {
    /// Number of pages, `ceil(total_filtered / page_size)`.
    pub fn page_count(&self) -> usize {
        self.total_filtered.div_ceil(self.page_size.get())
    }

    /// One-based position of the `offset`-th item on this page within the
    /// whole filtered result.
    pub fn row_number(&self, offset: usize) -> usize {
        self.page_index * self.page_size.get() + offset + 1
    }

    /// `"11-20 of 97"` style summary.
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0-0 of {}", self.total_filtered);
        }
        format!(
            "{}-{} of {}",
            self.row_number(0),
            self.row_number(self.items.len() - 1),
            self.total_filtered
        )
    }
}

/// Derive the visible page from `records` and `query`.
pub fn compute_view(records: &[Record], query: &QueryState) -> View {
    let mut matched: Vec<&Record> = records
        .iter()
        .filter(|record| matches_search(&record.full_name, &query.search))
        .collect();

    if let Some(sort) = query.sort {
        matched.sort_by(|a, b| sort.compare(a, b));
    }

    let total_filtered = matched.len();
    let page_size = query.page_size.get();
    let start = query.page_index.saturating_mul(page_size);
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    View {
        items,
        total_filtered,
        page_index: query.page_index,
        page_size: query.page_size,
    }
}
