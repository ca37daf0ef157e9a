// src/specs/soc_titles.rs
//! Base SOC code → occupation title (`oes_soc_occs.csv`).

use std::collections::HashMap;

use crate::csv::Table;
use super::{code_map, Field, FileSpec};

pub static FILE: FileSpec = FileSpec { name: "soc titles", patterns: &["oes_soc_occs", "soc_occ"] };

pub static CODE: Field = Field { name: "soc code", aliases: &["soccode", "Soc_Code", "OccCode"] };
pub static TITLE: Field = Field { name: "soc title", aliases: &["Title", "SocTitle", "OccTitle"] };

pub fn title_map(table: &Table) -> HashMap<String, String> {
    code_map(table, &CODE, &TITLE)
}
