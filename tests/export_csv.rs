// tests/export_csv.rs
//
// CSV exports without UI: bytes, file names and writing to disk.
mod common;

use std::fs;

use pretty_assertions::assert_eq;
use slv_schools::{
    Error,
    data::{Dataset, Record},
    export::{self, ExportKind, page_file_name},
    filter::FilterSelection,
    i18n::Locale,
    search::PageSize,
    view::{self, ViewRequest},
};

fn parse(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_reader(bytes);
    let headers = rdr.headers().unwrap().iter().map(String::from).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[test]
fn filtered_export_is_byte_identical_across_calls() {
    let ds = common::sample();
    let req = ViewRequest { search: "escuela".into(), ..Default::default() };
    let v = view::render(&ds, &req);

    let a = ExportKind::Filtered.render(&v).unwrap();
    let b = ExportKind::Filtered.render(&v).unwrap();
    assert_eq!(a, b);

    let again = view::render(&ds, &req);
    assert_eq!(ExportKind::Filtered.render(&again).unwrap(), a);
}

#[test]
fn filtered_export_round_trips() {
    let ds = common::sample();
    let req = ViewRequest {
        selection: FilterSelection::new(Some("San Salvador"), None),
        locale: Locale::En,
        ..Default::default()
    };
    let v = view::render(&ds, &req);
    let (headers, rows) = parse(&ExportKind::Filtered.render(&v).unwrap());

    assert_eq!(headers, vec!["School code", "State", "Municipality", "School Name", "Address"]);
    assert_eq!(rows.len(), v.matched_count());

    let expected: Vec<Vec<String>> = v
        .filtered_records()
        .map(|r| r.cells().iter().map(|c| c.to_string()).collect())
        .collect();
    assert_eq!(rows, expected);

    // Re-filter by translated column name
    let col = headers.iter().position(|h| h == "Municipality").unwrap();
    let mejicanos = rows.iter().filter(|r| r[col] == "Mejicanos").count();
    assert_eq!(mejicanos, 1);
}

#[test]
fn headers_follow_locale() {
    let ds = common::sample();
    let v = view::render(&ds, &ViewRequest { locale: Locale::Es, ..Default::default() });
    let (headers, _) = parse(&ExportKind::Page.render(&v).unwrap());
    assert_eq!(
        headers,
        vec!["Código de escuela", "Departamento", "Municipio", "Nombre de Escuela", "Domicilio"]
    );
}

#[test]
fn page_export_holds_only_current_page() {
    let ds = Dataset::from_records(common::bulk("Sonsonate", "Izalco", 120));
    let req = ViewRequest {
        page_size: PageSize::Fifty,
        page: 3,
        ..Default::default()
    };
    let v = view::render(&ds, &req);
    let (_, rows) = parse(&ExportKind::Page.render(&v).unwrap());
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0][0], "100");
    assert_eq!(ExportKind::Page.file_name(&v), "schools_page_3.csv");
    assert_eq!(ExportKind::Filtered.file_name(&v), "filtered_schools.csv");

    let (_, all) = parse(&ExportKind::Filtered.render(&v).unwrap());
    assert_eq!(all.len(), 120);
}

#[test]
fn commas_and_quotes_are_escaped() {
    let rec = Record::new("1", "La Paz", "Olocuilta", "Escuela \"La Esperanza\"", "Calle 1, Olocuilta");
    let bytes = export::to_csv(&["a", "b", "c", "d", "e"], [&rec]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "a,b,c,d,e\n1,La Paz,Olocuilta,\"Escuela \"\"La Esperanza\"\"\",\"Calle 1, Olocuilta\"\n"
    );
}

#[test]
fn empty_view_exports_header_only() {
    let ds = Dataset::empty();
    let v = view::render(&ds, &ViewRequest { locale: Locale::En, ..Default::default() });
    let text = String::from_utf8(ExportKind::Filtered.render(&v).unwrap()).unwrap();
    assert_eq!(text, "School code,State,Municipality,School Name,Address\n");
}

#[test]
fn write_creates_directory_and_distinct_page_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("out");
    let ds = Dataset::from_records(common::bulk("Sonsonate", "Izalco", 120));

    let mut paths = Vec::new();
    for page in 1..=3 {
        let req = ViewRequest { page_size: PageSize::Fifty, page, ..Default::default() };
        let v = view::render(&ds, &req);
        paths.push(export::write(&dir, ExportKind::Page, &v).unwrap());
    }
    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![page_file_name(1), page_file_name(2), page_file_name(3)]);

    let last = fs::read_to_string(&paths[2]).unwrap();
    assert_eq!(last.lines().count(), 1 + 20);
}

#[test]
fn write_into_a_file_path_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("out");
    fs::write(&blocker, "not a dir").unwrap();

    let ds = common::sample();
    let v = view::render(&ds, &ViewRequest::default());
    let err = export::write(&blocker, ExportKind::Filtered, &v).unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)), "{err}");
}
