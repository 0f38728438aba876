// src/filter.rs
//
// Two-level region filter: primary region (required once any exists), then
// an optional secondary region scoped to it. Works on row indices so the
// Dataset is never copied.

use crate::data::Dataset;

/// What the user asked for. Empty strings count as "no selection".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl FilterSelection {
    pub fn new(primary: Option<&str>, secondary: Option<&str>) -> Self {
        Self {
            primary: primary.map(String::from),
            secondary: secondary.map(String::from),
        }
    }
}

/// A selection checked against the data: `primary` is one of the offered
/// values (or None when there are none), and `secondary` is only Some when
/// it is offered under that primary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub primary: Option<&'a str>,
    pub secondary: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecondaryChoices<'a> {
    /// No primary region exists; show the "select first" placeholder.
    Disabled,
    /// Values under the chosen primary. The "no selection" entry is implicit.
    Options(Vec<&'a str>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionChoices<'a> {
    pub primary: Vec<&'a str>,
    pub secondary: SecondaryChoices<'a>,
}

/// Map a requested selection onto values present in `ds`.
/// An unknown or missing primary falls back to the first one in sort order.
pub fn resolve<'a>(ds: &'a Dataset, requested: &FilterSelection) -> Resolved<'a> {
    let primaries = ds.primary_regions();
    let wanted = requested.primary.as_deref().filter(|p| !p.is_empty());

    let primary = wanted
        .and_then(|w| primaries.iter().copied().find(|p| *p == w))
        .or_else(|| primaries.first().copied());

    let secondary = match (primary, requested.secondary.as_deref()) {
        (Some(p), Some(w)) if !w.is_empty() => ds
            .secondary_regions(p)
            .into_iter()
            .find(|s| *s == w),
        _ => None,
    };

    Resolved { primary, secondary }
}

pub fn region_choices<'a>(ds: &'a Dataset, sel: Resolved<'_>) -> RegionChoices<'a> {
    let primary = ds.primary_regions();
    let secondary = match sel.primary {
        Some(p) => SecondaryChoices::Options(ds.secondary_regions(p)),
        None => SecondaryChoices::Disabled,
    };
    RegionChoices { primary, secondary }
}

/// Indices of rows matching `sel`, in dataset order.
/// With no primary region every row passes.
pub fn filter_rows(ds: &Dataset, sel: Resolved<'_>) -> Vec<usize> {
    let Some(primary) = sel.primary else {
        return (0..ds.len()).collect();
    };

    ds.records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.primary == primary)
        .filter(|(_, r)| sel.secondary.is_none_or(|s| r.secondary == s))
        .map(|(ix, _)| ix)
        .collect()
}

/// A row subset cut down to a maximum size, remembering how many matched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capped {
    pub rows: Vec<usize>,
    pub matched: usize,
}

impl Capped {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.matched
    }
}

/// Keep the first `limit` rows (dataset order).
pub fn cap_rows(mut rows: Vec<usize>, limit: usize) -> Capped {
    let matched = rows.len();
    rows.truncate(limit);
    Capped { rows, matched }
}
