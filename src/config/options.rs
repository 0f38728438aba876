// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::{i18n::Locale, search::PageSize};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub view: ViewOptions,
    pub export: ExportOptions,
}

/// Which region subset feeds the data table and the "filtered" export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableRows {
    /// Same subset the map gets: capped at `MAP_ROW_LIMIT`.
    #[default]
    MapBound,
    /// Every row matching the region filter.
    AllMatches,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub locale: Locale,
    pub page_size: PageSize,
    pub table_rows: TableRows,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            locale: Locale::Es,
            page_size: PageSize::default(),
            table_rows: TableRows::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: dir.into() }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the output directory. Blank text resets to the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(normalize_separators(s))
        };
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
