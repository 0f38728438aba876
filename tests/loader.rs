// tests/loader.rs
//
// Reading the source table from CSV text and from disk.
use std::{fs, path::Path};

use pretty_assertions::assert_eq;
use slv_schools::{
    Error,
    data::Record,
    store::{load_dataset, read_dataset, read_workbook},
};

const TABLE: &str = "\
slv-id,slv-admin1,slv-admin2,slv-nombre,slv-direccion,matricula,docentes
10001,Ahuachapán,Apaneca,Escuela Rural Apaneca,\"Cantón El Centro, Apaneca\",120,6
10002,San Salvador,,Centro Escolar República de Chile,,800,31
";

#[test]
fn reads_required_columns_and_ignores_the_rest() {
    let ds = read_dataset(TABLE.as_bytes()).unwrap();
    assert_eq!(
        ds.records(),
        &[
            Record::new("10001", "Ahuachapán", "Apaneca", "Escuela Rural Apaneca", "Cantón El Centro, Apaneca"),
            Record::new("10002", "San Salvador", "", "Centro Escolar República de Chile", ""),
        ]
    );
}

#[test]
fn column_order_does_not_matter() {
    let text = "slv-nombre,slv-direccion,slv-id,slv-admin2,slv-admin1\nA,B,1,M,D\n";
    let ds = read_dataset(text.as_bytes()).unwrap();
    assert_eq!(ds.records(), &[Record::new("1", "D", "M", "A", "B")]);
}

#[test]
fn missing_column_is_reported_by_name() {
    let text = "slv-id,slv-admin1,slv-nombre,slv-direccion\n1,D,A,B\n";
    let err = read_dataset(text.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn("slv-admin2")), "{err}");
}

#[test]
fn loads_from_disk_with_bom() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("escuelas.csv");
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(TABLE.as_bytes());
    fs::write(&path, bytes).unwrap();

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.primary_regions(), vec!["Ahuachapán", "San Salvador"]);
}

#[test]
fn missing_file_is_an_open_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_dataset(&tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::Open { .. }), "{err}");
}

#[test]
fn ragged_rows_are_a_parse_error_with_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("broken.csv");
    fs::write(&path, "slv-id,slv-admin1,slv-admin2,slv-nombre,slv-direccion\n1,2\n").unwrap();

    let err = load_dataset(&path).unwrap_err();
    match err {
        Error::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {other}"),
    }
}

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn loads_first_sheet_of_a_workbook() {
    let ds = load_dataset(&fixture("escuelas_sample.xlsx")).unwrap();
    assert_eq!(
        ds.records(),
        &[
            Record::new("10001", "Ahuachapán", "Apaneca", "Escuela Rural Apaneca", "Cantón El Centro, Apaneca"),
            Record::new("10002", "San Salvador", "", "Centro Escolar República de Chile", ""),
            Record::new("10003", "San Salvador", "Mejicanos", "Complejo Educativo Mejicanos", "Colonia Zacamil"),
        ]
    );
}

#[test]
fn workbook_and_csv_agree_on_bundled_data() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let xlsx = load_dataset(&root.join("escuelas_slv.xlsx")).unwrap();
    let csv = load_dataset(&root.join("escuelas_slv.csv")).unwrap();
    assert_eq!(xlsx.records(), csv.records());
}

#[test]
fn workbook_reader_works_on_memory() {
    let bytes = fs::read(fixture("escuelas_sample.xlsx")).unwrap();
    let ds = read_workbook(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(ds.secondary_regions("San Salvador"), vec!["Mejicanos"]);
}

#[test]
fn broken_workbook_is_a_parse_error_with_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("escuelas.xlsx");
    fs::write(&path, "slv-id,slv-admin1\n1,2\n").unwrap();

    match load_dataset(&path).unwrap_err() {
        Error::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {other}"),
    }
}
