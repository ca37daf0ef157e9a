// src/compact.rs
//
// Turns the ingest working set into the persisted `Dataset`:
// - area names interned into a sorted, deduplicated list; wage rows
//   reference areas by position
// - occupations deduplicated and ordered by display title

use std::collections::{BTreeSet, HashMap};

use crate::core::sanitize::collate;
use crate::model::{Dataset, Occupation, WageRecord};
use crate::onet;

/// Wage row after lookups, before interning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedWage {
    pub soc_code: String,
    pub area_name: String,
    pub levels: [u32; 4],
}

/// Area name → index, built once per dataset.
pub struct AreaInterner {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl AreaInterner {
    /// First pass: collect every name, sorted and unique.
    pub fn from_rows(rows: &[NamedWage]) -> Self {
        let set: BTreeSet<&str> = rows.iter().map(|r| r.area_name.as_str()).collect();
        let names: Vec<String> = set.into_iter().map(str::to_string).collect();
        let index = names.iter().cloned().enumerate().map(|(i, n)| (n, i)).collect();
        Self { names, index }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

fn by_title(a: &Occupation, b: &Occupation) -> std::cmp::Ordering {
    collate(&a.title, &b.title).then_with(|| a.key().cmp(&b.key()))
}

/// Order by title (ties by uniqueness key), drop duplicate keys with the
/// last in title order winning, re-sort since a replacement may move.
pub fn order_occupations(mut occupations: Vec<Occupation>) -> Vec<Occupation> {
    occupations.sort_by(by_title);
    let mut out = onet::dedup(occupations);
    out.sort_by(by_title);
    out
}

pub fn build_dataset(year: &str, occupations: Vec<Occupation>, rows: Vec<NamedWage>) -> Dataset {
    let areas = AreaInterner::from_rows(&rows);

    // Second pass: rewrite names as indices
    let wages = rows
        .into_iter()
        .filter_map(|r| {
            let area_index = areas.get(&r.area_name)?;
            let [l1, l2, l3, l4] = r.levels;
            Some(WageRecord { soc_code: r.soc_code, area_index, l1, l2, l3, l4 })
        })
        .collect();

    Dataset {
        year: s!(year),
        occupations: order_occupations(occupations),
        areas: areas.into_names(),
        wages,
    }
}
