//! Table view state.
//!
//! Search text, sort, and current page are a plain value owned by the
//! caller. Every transition consumes the old state and returns a new one;
//! the table derives its output from `(records, state)` alone.

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header glyph for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Current sort: column key and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    /// Key of the sorted column.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on a column.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a column.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// A page number that is known to exist.
///
/// Links come from derived pagination controls, or from
/// [`PageLink::clamped`] for page requests arriving from outside (a URL,
/// a command line flag). There is no way to build a link to a page past
/// the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageLink(usize);

impl PageLink {
    pub(crate) fn new(page: usize) -> Self {
        debug_assert!(page >= 1);
        Self(page)
    }

    /// Link to `page`, clamped to `1..=total_pages`.
    ///
    /// With zero pages the only valid link is page 1.
    pub fn clamped(page: usize, total_pages: usize) -> Self {
        Self(page.clamp(1, total_pages.max(1)))
    }

    /// The 1-based page number.
    pub fn number(self) -> usize {
        self.0
    }
}

/// Transient search/sort/page configuration of one table.
///
/// Created fresh when a table is shown and dropped with it.
///
/// # Example
///
/// ```
/// use datatable_lib::table::{SortDirection, TableViewState};
///
/// let state = TableViewState::default()
///     .with_search("item 1")
///     .with_sort_toggled("name")
///     .with_sort_toggled("name");
///
/// assert_eq!(state.search(), "item 1");
/// assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Descending));
/// assert_eq!(state.page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableViewState {
    search: String,
    sort: Option<SortState>,
    page: usize,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
        }
    }
}

impl TableViewState {
    /// Creates the initial state: no search, insertion order, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current sort, `None` for insertion order.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the search text and returns to page 1.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self.page = 1;
        self
    }

    /// Sorts by `key`: flips direction if already sorted by it, otherwise
    /// sorts ascending.
    pub fn with_sort_toggled(mut self, key: &str) -> Self {
        self.sort = Some(match self.sort.take() {
            Some(current) if current.key == key => SortState {
                key: current.key,
                direction: current.direction.reverse(),
            },
            _ => SortState::asc(key), // Default to ascending
        });
        self
    }

    /// Replaces the sort.
    pub fn with_sort(mut self, sort: Option<SortState>) -> Self {
        self.sort = sort;
        self
    }

    /// Returns to insertion order.
    pub fn clear_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    /// Moves to the linked page.
    pub fn with_page(mut self, link: PageLink) -> Self {
        self.page = link.number();
        self
    }
}
