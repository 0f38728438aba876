// src/store.rs
//
// Reads the school table from disk. Called once per process; the result is
// owned by the frontend and passed by reference from then on.

use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::Path,
};

use calamine::{Data, Reader, Xlsx};

use crate::{
    config::consts::DISPLAY_FIELDS,
    data::{Dataset, Record},
    error::{Error, Result},
};

/// Load the source table at `path`: an `.xlsx`/`.xlsm` workbook (first
/// sheet) or, for any other extension, CSV.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let open_err = |source: io::Error| Error::Open { path: path.to_path_buf(), source };

    let parsed = if is_workbook(path) {
        let file = File::open(path).map_err(open_err)?;
        read_workbook(BufReader::new(file))
    } else {
        let bytes = fs::read(path).map_err(open_err)?;
        read_dataset(strip_bom(&bytes))
    };

    let ds = parsed.map_err(|e| match e {
        Error::Csv(source) => Error::Parse { path: path.to_path_buf(), source: Box::new(source) },
        Error::Workbook(source) => Error::Parse { path: path.to_path_buf(), source: Box::new(source) },
        other => other,
    })?;

    logf!("Load: {} rows from {}", ds.len(), path.display());
    for (secondary, primaries) in ds.hierarchy_conflicts() {
        logw!("Load: '{}' appears under several primary regions: {:?}", secondary, primaries);
    }
    Ok(ds)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx") || e.eq_ignore_ascii_case("xlsm"))
}

/// Parse a header + rows table from any reader. Extra columns are ignored;
/// a missing required column is an error.
pub fn read_dataset<R: io::Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    locate_columns(&headers.iter().collect::<Vec<_>>())?;

    let mut records = Vec::new();
    for row in rdr.deserialize::<Record>() {
        records.push(row?);
    }
    Ok(Dataset::from_records(records))
}

/// Spreadsheet tools often prefix CSV exports with a UTF-8 byte order mark.
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

/// First worksheet of an xlsx workbook, header row first. Numeric cells
/// (school codes are usually stored as numbers) are read as their plain text.
pub fn read_workbook<RS: io::Read + io::Seek>(reader: RS) -> Result<Dataset> {
    let mut wb: Xlsx<RS> = Xlsx::new(reader)?;
    let range = match wb.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(Error::MissingColumn(DISPLAY_FIELDS[0])),
    };

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(cell_text).collect())
        .unwrap_or_default();
    let [code, primary, secondary, name, address] = locate_columns(&header)?;

    let records = rows
        .filter(|r| r.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|r| {
            let get = |ix: usize| r.get(ix).map(cell_text).unwrap_or_default();
            Record {
                code: get(code),
                primary: get(primary),
                secondary: get(secondary),
                name: get(name),
                address: get(address),
            }
        })
        .collect();
    Ok(Dataset::from_records(records))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Position of each display field in `headers`, in display order.
fn locate_columns<S: AsRef<str>>(headers: &[S]) -> Result<[usize; 5]> {
    let mut ix = [0; 5];
    for (slot, field) in ix.iter_mut().zip(DISPLAY_FIELDS) {
        *slot = headers
            .iter()
            .position(|h| h.as_ref().trim() == field)
            .ok_or(Error::MissingColumn(field))?;
    }
    Ok(ix)
}
