// src/specs/geography.rs
//! Area code → area name (`Geography.csv`).

use std::collections::HashMap;

use crate::csv::Table;
use super::{code_map, Field, FileSpec};

pub static FILE: FileSpec = FileSpec { name: "geography", patterns: &["geography"] };

pub static CODE: Field = Field { name: "area code", aliases: &["Area", "AreaCode", "Area_Code"] };
pub static NAME: Field = Field { name: "area name", aliases: &["AreaName", "Area_Name", "AreaTitle"] };

pub fn area_map(table: &Table) -> HashMap<String, String> {
    code_map(table, &CODE, &NAME)
}
