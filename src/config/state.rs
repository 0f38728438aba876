// src/config/state.rs
use super::options::AppOptions;
use crate::{filter::FilterSelection, search::SortKey, view::ViewRequest};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Region selection as picked in the side panel (resolved on every render)
    pub selection: FilterSelection,

    /// Raw text of the search box
    pub search: String,

    /// 1-based; clamped by the pager and again by `render`
    pub page: usize,

    /// Header-click sort of the visible page (display only)
    pub sort: Option<SortKey>,

    /// Output directory text field; mapped into ExportOptions on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selection: FilterSelection::default(),
            search: s!(),
            page: 1,
            sort: None,
            out_dir_text: s!(),
            out_dir_dirty: false,
            window_w: 1200,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Snapshot of everything `view::render` needs.
    pub fn request(&self) -> ViewRequest {
        ViewRequest {
            selection: self.gui.selection.clone(),
            search: self.gui.search.clone(),
            page_size: self.options.view.page_size,
            page: self.gui.page,
            locale: self.options.view.locale,
            table_rows: self.options.view.table_rows,
        }
    }

    /// Filters changed: start over at the first page.
    pub fn reset_page(&mut self) {
        self.gui.page = 1;
        self.gui.sort = None;
    }
}
