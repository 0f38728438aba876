// src/search.rs
//
// Free-text search over the five display cells, offset pagination, and the
// header-click sort applied to the visible page.

use std::ops::Range;

use crate::{
    data::{Dataset, Record},
    error::{Error, Result},
};

/// Case-insensitive substring search term. Whitespace-only text matches
/// everything; otherwise the text is matched as typed, spaces included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm {
    needle: Option<String>,
}

impl SearchTerm {
    pub fn new(text: &str) -> Self {
        Self {
            needle: (!text.trim().is_empty()).then(|| text.to_lowercase()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, record: &Record) -> bool {
        match &self.needle {
            None => true,
            Some(n) => record.cells().iter().any(|c| c.to_lowercase().contains(n.as_str())),
        }
    }
}

/// Keep the rows of `rows` whose record matches `term`; order is preserved.
pub fn search_rows(ds: &Dataset, rows: &[usize], term: &SearchTerm) -> Vec<usize> {
    if !term.is_active() {
        return rows.to_vec();
    }
    rows.iter()
        .copied()
        .filter(|&ix| ds.get(ix).is_some_and(|r| term.matches(r)))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    Fifty,
    #[default]
    Hundred,
    TwoHundred,
    FiveHundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Fifty,
        PageSize::Hundred,
        PageSize::TwoHundred,
        PageSize::FiveHundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
            PageSize::TwoHundred => 200,
            PageSize::FiveHundred => 500,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        PageSize::ALL
            .into_iter()
            .find(|p| p.get() == n)
            .ok_or(Error::PageSize(n))
    }
}

/// Offset pagination over `total_rows` items. Pages are 1-based and there is
/// always at least one (possibly empty) page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub total_rows: usize,
    pub page_size: PageSize,
}

impl Pagination {
    pub fn new(total_rows: usize, page_size: PageSize) -> Self {
        Self { total_rows, page_size }
    }

    pub fn total_pages(&self) -> usize {
        self.total_rows.div_ceil(self.page_size.get()).max(1)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    /// Half-open index range of `page` (clamped first).
    pub fn range(&self, page: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.clamp(page) - 1) * size;
        let end = (start + size).min(self.total_rows);
        start.min(end)..end
    }
}

/// Header-click sort of the visible page. `column` indexes `Record::cells`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub descending: bool,
}

impl SortKey {
    /// Next state after clicking `column`: ascending → descending → off.
    pub fn cycle(current: Option<SortKey>, column: usize) -> Option<SortKey> {
        match current {
            Some(k) if k.column == column && !k.descending => {
                Some(SortKey { column, descending: true })
            }
            Some(k) if k.column == column => None,
            _ => Some(SortKey { column, descending: false }),
        }
    }
}

/// Stable sort on raw cell text.
pub fn sort_records(records: &mut [&Record], key: SortKey) {
    records.sort_by(|a, b| {
        let ord = cell(a, key.column).cmp(cell(b, key.column));
        if key.descending { ord.reverse() } else { ord }
    });
}

fn cell(r: &Record, column: usize) -> &str {
    r.cells().get(column).copied().unwrap_or("")
}

