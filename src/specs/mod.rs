// src/specs/mod.rs
//! # Source-file "specs"
//!
//! One module per CSV inside an OFLC wage archive. Each spec encodes *which
//! archive entry holds the data* and *which header carries which field*.
//!
//! ## What lives here
//! - **Filename patterns**: ordered, case-insensitive substrings; the first
//!   pattern that matches any `.csv` entry wins.
//! - **Header alias tables**: an ordered list of accepted spellings per
//!   logical field, resolved once per file into a column index.
//! - **Row shaping**: lookup maps (code → name/title) and wage rows.
//!
//! ## What does **not** live here
//! - Zip access (`archive`), cross-file joins (`ingest`), O*NET merging
//!   (`onet`), compaction and output (`compact`, `file`).
//!
//! Releases rename headers between years (`Area`/`area`, `SocCode`/`soccode`);
//! adding a spelling means adding an alias, nothing else.

use crate::csv::Table;

pub mod geography;
pub mod onet_titles;
pub mod soc_titles;
pub mod wages;

/// Where to find one CSV inside an archive.
#[derive(Debug)]
pub struct FileSpec {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

impl FileSpec {
    /// First entry matching the highest-priority pattern.
    pub fn find<'a>(&self, entries: &'a [String]) -> Option<&'a str> {
        self.patterns.iter().find_map(|pat| {
            entries
                .iter()
                .find(|e| {
                    let lower = e.to_ascii_lowercase();
                    lower.contains(pat) && lower.ends_with(".csv")
                })
                .map(String::as_str)
        })
    }
}

/// Accepted header spellings for one logical field, in priority order.
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Field {
    pub fn resolve(&self, table: &Table) -> Option<usize> {
        let col = table.column(self.aliases);
        if col.is_none() {
            logd!("Specs: no column for {} (headers={:?})", self.name, table.headers);
        }
        col
    }
}

/// Two-column code → label table (geography, SOC titles, O*NET titles).
/// Rows missing either side are ignored; later rows overwrite earlier ones.
pub(crate) fn code_map(
    table: &Table,
    code: &Field,
    label: &Field,
) -> std::collections::HashMap<String, String> {
    use crate::csv::cell;

    let (c, l) = (code.resolve(table), label.resolve(table));
    let mut map = std::collections::HashMap::with_capacity(table.len());
    for rec in &table.records {
        let k = cell(rec, c).trim();
        let v = cell(rec, l).trim();
        if !k.is_empty() && !v.is_empty() {
            map.insert(s!(k), s!(v));
        }
    }
    map
}
