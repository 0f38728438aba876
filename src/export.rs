// src/export.rs
//
// CSV serialisation of the FilteredView and of the current page.
// Both exports are pure: same ViewModel in, same bytes out.

use std::path::{Path, PathBuf};

use crate::{
    config::consts::{FILTERED_FILE, PAGE_FILE_STEM},
    data::Record,
    error::{Error, Result},
    file,
    view::ViewModel,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// Every row matching region filter + search, across all pages.
    Filtered,
    /// Only the rows of the current page.
    Page,
}

impl ExportKind {
    pub fn file_name(self, view: &ViewModel<'_>) -> String {
        match self {
            ExportKind::Filtered => s!(FILTERED_FILE),
            ExportKind::Page => page_file_name(view.page),
        }
    }

    pub fn row_count(self, view: &ViewModel<'_>) -> usize {
        match self {
            ExportKind::Filtered => view.matched_count(),
            ExportKind::Page => view.showing(),
        }
    }

    /// UTF-8 CSV: translated header row, then one line per record.
    pub fn render(self, view: &ViewModel<'_>) -> Result<Vec<u8>> {
        let headers = view.headers();
        match self {
            ExportKind::Filtered => to_csv(&headers, view.filtered_records()),
            ExportKind::Page => to_csv(&headers, view.page_records()),
        }
    }
}

pub fn page_file_name(page: usize) -> String {
    format!("{PAGE_FILE_STEM}{page}.csv")
}

/// Encode `records` under `headers` (display order, comma-delimited).
pub fn to_csv<'r, I>(headers: &[&str], records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(headers)?;
    for r in records {
        wtr.write_record(r.cells())?;
    }
    wtr.into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
}

/// Render `kind` and write it into `dir`. Returns the final path.
pub fn write(dir: &Path, kind: ExportKind, view: &ViewModel<'_>) -> Result<PathBuf> {
    let bytes = kind.render(view)?;
    let path = dir.join(kind.file_name(view));
    file::write_bytes(&path, &bytes)?;
    Ok(path)
}
