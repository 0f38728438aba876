// tests/common/mod.rs
//
// Shared fixtures. Not every test file uses every helper.
#![allow(dead_code)]

use slv_schools::data::{Dataset, Record};

/// Seven schools across two departments, in a fixed order.
pub fn sample() -> Dataset {
    Dataset::from_records(vec![
        Record::new("10001", "Ahuachapán", "Ahuachapán", "Centro Escolar Ahuachapán", "Barrio El Centro, Ahuachapán"),
        Record::new("10002", "San Salvador", "San Salvador", "Centro Escolar República de Chile", "Calle Arce, San Salvador"),
        Record::new("10003", "San Salvador", "Mejicanos", "Complejo Educativo Mejicanos", "Colonia Zacamil, Mejicanos"),
        Record::new("10004", "San Salvador", "San Salvador", "Instituto Nacional General Francisco Menéndez", "Avenida Olímpica"),
        Record::new("10005", "Ahuachapán", "Apaneca", "Escuela Rural Apaneca", "Cantón El Centro, Apaneca"),
        Record::new("10006", "San Salvador", "Apopa", "Centro Escolar Apopa", "Km 12 Carretera Troncal del Norte"),
        Record::new("10007", "San Salvador", "", "Escuela sin municipio", ""),
    ])
}

/// `n` schools in one department, codes numbered from 0.
pub fn bulk(primary: &str, secondary: &str, n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new(
                &i.to_string(),
                primary,
                secondary,
                &format!("Escuela {i}"),
                &format!("Calle {i}"),
            )
        })
        .collect()
}

pub fn codes<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<&'a str> {
    records.map(|r| r.code.as_str()).collect()
}
