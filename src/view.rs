// src/view.rs
//! Render pipeline: Dataset + request → ViewModel.
//!
//! `render` runs on every frame (GUI) or once (CLI). It is a pure function of
//! its inputs: it does not log, touch the filesystem or keep state between
//! calls. Everything a frontend needs to draw or export is on the returned
//! `ViewModel`, which borrows the Dataset and holds only row indices.

use std::ops::Range;

use crate::{
    config::{consts::MAP_ROW_LIMIT, options::TableRows},
    data::{Dataset, Record},
    filter::{self, Capped, FilterSelection, RegionChoices, Resolved},
    i18n::{Locale, Msg, tr},
    search::{self, PageSize, Pagination, SearchTerm},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRequest {
    pub selection: FilterSelection,
    pub search: String,
    pub page_size: PageSize,
    pub page: usize,
    pub locale: Locale,
    pub table_rows: TableRows,
}

#[derive(Clone, Debug)]
pub struct ViewModel<'a> {
    ds: &'a Dataset,
    pub locale: Locale,
    pub selection: Resolved<'a>,
    pub choices: RegionChoices<'a>,
    /// Region matches before and after the map limit.
    pub region: Capped,
    /// Rows entering search (region matches, capped or not per `TableRows`).
    pub table_total: usize,
    pub search_active: bool,
    /// Rows surviving search, dataset order. This is the FilteredView.
    matched: Vec<usize>,
    pub pagination: Pagination,
    /// Clamped 1-based page.
    pub page: usize,
    page_range: Range<usize>,
}

pub fn render<'a>(ds: &'a Dataset, req: &ViewRequest) -> ViewModel<'a> {
    let selection = filter::resolve(ds, &req.selection);
    let choices = filter::region_choices(ds, selection);

    let all = filter::filter_rows(ds, selection);
    let term = SearchTerm::new(&req.search);

    let table_rows = match req.table_rows {
        TableRows::MapBound => &all[..all.len().min(MAP_ROW_LIMIT)],
        TableRows::AllMatches => &all[..],
    };
    let table_total = table_rows.len();
    let matched = search::search_rows(ds, table_rows, &term);
    let region = filter::cap_rows(all, MAP_ROW_LIMIT);

    let pagination = Pagination::new(matched.len(), req.page_size);
    let page = pagination.clamp(req.page);
    let page_range = pagination.range(page);

    ViewModel {
        ds,
        locale: req.locale,
        selection,
        choices,
        region,
        table_total,
        search_active: term.is_active(),
        matched,
        pagination,
        page,
        page_range,
    }
}

impl<'a> ViewModel<'a> {
    /// Translated column labels in display order.
    pub fn headers(&self) -> [&'static str; 5] {
        [Msg::Code, Msg::PrimaryRegion, Msg::SecondaryRegion, Msg::Name, Msg::Address]
            .map(|m| tr(self.locale, m))
    }

    pub fn dataset_total(&self) -> usize { self.ds.len() }

    /// Rows bound for the map (region matches after the limit).
    pub fn map_count(&self) -> usize { self.region.rows.len() }

    pub fn is_truncated(&self) -> bool { self.region.is_truncated() }

    pub fn matched_count(&self) -> usize { self.matched.len() }

    pub fn total_pages(&self) -> usize { self.pagination.total_pages() }

    /// Number of rows on the current page.
    pub fn showing(&self) -> usize { self.page_range.len() }

    /// Search narrowed the table (the UI reports the match count separately).
    pub fn is_narrowed(&self) -> bool {
        self.search_active && self.matched.len() < self.table_total
    }

    /// Every row of the FilteredView (post-search, pre-pagination).
    pub fn filtered_records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.matched.iter().filter_map(|&ix| self.ds.get(ix))
    }

    /// Rows of the current page only.
    pub fn page_records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.matched[self.page_range.clone()]
            .iter()
            .filter_map(|&ix| self.ds.get(ix))
    }
}
