// src/specs/onet_titles.rs
//! O*NET specialty code → specialty title (`onet_occs.csv`).

use std::collections::HashMap;

use crate::csv::Table;
use super::{code_map, Field, FileSpec};

pub static FILE: FileSpec = FileSpec { name: "onet titles", patterns: &["onet_occs"] };

pub static CODE: Field = Field { name: "onet code", aliases: &["OnetCode", "Onet_Code", "O*NET-SOC Code"] };
pub static TITLE: Field = Field { name: "onet title", aliases: &["OnetTitle", "Onet_Title", "Title"] };

pub fn title_map(table: &Table) -> HashMap<String, String> {
    code_map(table, &CODE, &TITLE)
}
