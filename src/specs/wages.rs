// src/specs/wages.rs
//! Prevailing wage levels per (SOC, area) (`ALC_Export.csv` / `EDC_Export.csv`).
//!
//! Level cells arrive either as hourly rates or annual figures, with or
//! without `$`/`,`; `core::sanitize::parse_wage` normalizes both to annual.

use crate::core::sanitize::parse_wage;
use crate::csv::{cell, Table};
use super::{Field, FileSpec};

pub static FILE: FileSpec = FileSpec { name: "wages", patterns: &["alc_export", "edc_export"] };

pub static AREA: Field = Field { name: "area", aliases: &["Area", "AreaCode", "Area_Code"] };
pub static SOC: Field = Field { name: "soc code", aliases: &["SocCode", "Soc_Code", "OccCode"] };
pub static LEVELS: [Field; 4] = [
    Field { name: "level 1", aliases: &["Level1", "Level_1", "L1"] },
    Field { name: "level 2", aliases: &["Level2", "Level_2", "L2"] },
    Field { name: "level 3", aliases: &["Level3", "Level_3", "L3"] },
    Field { name: "level 4", aliases: &["Level4", "Level_4", "L4"] },
];

/// One retained wage row, still keyed by raw area code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WageRow {
    pub soc_code: String,
    pub area_code: String,
    pub levels: [u32; 4],
}

/// Column indices, resolved once per file.
#[derive(Clone, Copy, Debug)]
pub struct Columns {
    area: Option<usize>,
    soc: Option<usize>,
    levels: [Option<usize>; 4],
}

impl Columns {
    pub fn resolve(table: &Table) -> Self {
        Self {
            area: AREA.resolve(table),
            soc: SOC.resolve(table),
            levels: [
                LEVELS[0].resolve(table),
                LEVELS[1].resolve(table),
                LEVELS[2].resolve(table),
                LEVELS[3].resolve(table),
            ],
        }
    }

    /// The viability gate: SOC code and area code present, level 2 > 0.
    pub fn row(&self, rec: &[String]) -> Option<WageRow> {
        let soc_code = cell(rec, self.soc).trim();
        let area_code = cell(rec, self.area).trim();
        let l2 = parse_wage(cell(rec, self.levels[1]));
        if soc_code.is_empty() || area_code.is_empty() || l2 == 0 {
            return None;
        }
        Some(WageRow {
            soc_code: s!(soc_code),
            area_code: s!(area_code),
            levels: [
                parse_wage(cell(rec, self.levels[0])),
                l2,
                parse_wage(cell(rec, self.levels[2])),
                parse_wage(cell(rec, self.levels[3])),
            ],
        })
    }
}
