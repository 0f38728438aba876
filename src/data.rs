// src/data.rs
//
// The canonical in-memory table.
//
// - Record:  one school row, restricted to the five columns the viewer reads.
//            Any other source column is ignored at load time.
// - Dataset: ordered, immutable collection of records. Built once per
//            process (see store.rs) and borrowed by every later stage.
//            Views never copy records; they hold row indices into it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    #[serde(rename = "slv-id")]
    pub code: String,
    #[serde(rename = "slv-admin1")]
    pub primary: String,
    #[serde(rename = "slv-admin2")]
    pub secondary: String,
    #[serde(rename = "slv-nombre")]
    pub name: String,
    #[serde(rename = "slv-direccion")]
    pub address: String,
}

impl Record {
    pub fn new(code: &str, primary: &str, secondary: &str, name: &str, address: &str) -> Self {
        Self {
            code: s!(code),
            primary: s!(primary),
            secondary: s!(secondary),
            name: s!(name),
            address: s!(address),
        }
    }

    /// Cells in display order (code, primary, secondary, name, address).
    pub fn cells(&self) -> [&str; 5] {
        [&self.code, &self.primary, &self.secondary, &self.name, &self.address]
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, ix: usize) -> Option<&Record> {
        self.records.get(ix)
    }

    /// Distinct non-empty primary regions, ascending.
    pub fn primary_regions(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.primary.as_str())
            .filter(|p| !p.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-empty secondary regions under `primary`, ascending.
    pub fn secondary_regions(&self, primary: &str) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.primary == primary)
            .map(|r| r.secondary.as_str())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Secondary regions that appear under more than one primary region.
    /// The filter assumes this never happens; the loader only reports it.
    pub fn hierarchy_conflicts(&self) -> Vec<(&str, Vec<&str>)> {
        let mut parents: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for r in &self.records {
            if r.secondary.is_empty() || r.primary.is_empty() {
                continue;
            }
            parents
                .entry(r.secondary.as_str())
                .or_default()
                .insert(r.primary.as_str());
        }
        parents
            .into_iter()
            .filter(|(_, ps)| ps.len() > 1)
            .map(|(s, ps)| (s, ps.into_iter().collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds() -> Dataset {
        Dataset::from_records(vec![
            Record::new("1", "San Salvador", "Mejicanos", "A", ""),
            Record::new("2", "Ahuachapán", "Apaneca", "B", ""),
            Record::new("3", "San Salvador", "Apopa", "C", ""),
            Record::new("4", "", "", "D", ""),
            Record::new("5", "San Salvador", "", "E", ""),
            Record::new("6", "San Salvador", "Apopa", "F", ""),
        ])
    }

    #[test]
    fn primary_regions_are_distinct_sorted_non_empty() {
        assert_eq!(ds().primary_regions(), vec!["Ahuachapán", "San Salvador"]);
    }

    #[test]
    fn secondary_regions_are_scoped() {
        let ds = ds();
        assert_eq!(ds.secondary_regions("San Salvador"), vec!["Apopa", "Mejicanos"]);
        assert_eq!(ds.secondary_regions("Ahuachapán"), vec!["Apaneca"]);
        assert!(ds.secondary_regions("La Paz").is_empty());
    }

    #[test]
    fn reports_secondary_under_two_primaries() {
        let mut records = ds().records().to_vec();
        records.push(Record::new("7", "Ahuachapán", "Apopa", "G", ""));
        let conflicted = Dataset::from_records(records);
        assert_eq!(conflicted.hierarchy_conflicts(), vec![("Apopa", vec!["Ahuachapán", "San Salvador"])]);
        assert!(ds().hierarchy_conflicts().is_empty());
    }
}
