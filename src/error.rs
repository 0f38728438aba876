// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("source table has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("unknown locale `{0}` (expected `en` or `es`)")]
    UnknownLocale(String),

    #[error("message `{key}` in `{locale}` has {found} placeholder(s), expected {expected}")]
    Template {
        key: &'static str,
        locale: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("no region named `{0}` in the source table")]
    UnknownRegion(String),

    #[error("page size {0} is not one of 50, 100, 200, 500")]
    PageSize(usize),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
