// src/onet.rs
//
// O*NET specialty merge.
//
// Wage tables are keyed by base SOC code only; O*NET adds finer specialty
// codes (`15-1243.01`) with their own titles. We surface those as extra
// occupation entries that still join on the base code.

use std::collections::{HashMap, HashSet};

use crate::core::sanitize::onet_base;
use crate::model::Occupation;

/// Specialty code → specialty title.
pub type OnetMap = HashMap<String, String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Codes taken from the archive's own table
    pub local: usize,
    /// Codes filled in from other archives
    pub borrowed: usize,
    /// Attached to a wage-bearing base occupation
    pub attached: usize,
    /// `.00` entries repeating their base title
    pub suppressed: usize,
    /// Base code has no wages in this archive
    pub orphaned: usize,
}

/// Add `map` into a cross-archive fallback, keeping whichever title was seen first.
pub fn extend_fallback(fallback: &mut OnetMap, map: &OnetMap) {
    for (code, title) in map {
        fallback.entry(code.clone()).or_insert_with(|| title.clone());
    }
}

/// The archive's own codes win; the fallback only fills codes it lacks.
pub fn merge_maps(local: Option<&OnetMap>, fallback: Option<&OnetMap>, stats: &mut MergeStats) -> OnetMap {
    let mut merged = local.cloned().unwrap_or_default();
    stats.local = merged.len();
    if let Some(fb) = fallback {
        for (code, title) in fb {
            if !merged.contains_key(code) {
                merged.insert(code.clone(), title.clone());
                stats.borrowed += 1;
            }
        }
    }
    merged
}

/// True when a specialty adds nothing over its base entry: generic `.00`
/// suffix and the exact same title.
pub fn is_redundant(onet_code: &str, onet_title: &str, base_title: &str) -> bool {
    onet_code.ends_with(".00") && onet_title == base_title
}

/// Build specialty entries for every code whose base occupation carries wages.
///
/// `base` is the wage-bearing `(code, title)` list for this archive.
/// Output is ordered by specialty code; final display order is applied
/// at compaction.
pub fn attach_specialties(
    base: &[Occupation],
    onet: &OnetMap,
    stats: &mut MergeStats,
) -> Vec<Occupation> {
    let base_titles: HashMap<&str, &str> = base
        .iter()
        .map(|o| (o.code.as_str(), o.title.as_str()))
        .collect();

    let mut codes: Vec<&String> = onet.keys().collect();
    codes.sort();

    let mut out = Vec::new();
    for code in codes {
        let title = &onet[code];
        let base_code = onet_base(code);
        let Some(base_title) = base_titles.get(base_code) else {
            stats.orphaned += 1;
            continue;
        };
        if is_redundant(code, title, base_title) {
            stats.suppressed += 1;
            continue;
        }
        out.push(Occupation::specialty(base_code, title, code));
        stats.attached += 1;
    }
    out
}

/// Drop entries sharing a key (`onet_code`, else `code|title`). Input is
/// expected in display order; a later duplicate replaces the earlier one
/// in place.
pub fn dedup(occupations: Vec<Occupation>) -> Vec<Occupation> {
    let mut out: Vec<Occupation> = Vec::with_capacity(occupations.len());
    let mut seen: HashMap<String, usize> = HashMap::new();
    for occ in occupations {
        let key = occ.key();
        match seen.get(&key) {
            Some(&ix) => out[ix] = occ,
            None => {
                seen.insert(key, out.len());
                out.push(occ);
            }
        }
    }
    out
}

/* ---------------- Coverage comparison ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnetDiff {
    pub common: usize,
    pub only_first: Vec<String>,
    pub only_second: Vec<String>,
    /// Common codes whose titles differ between the two tables
    pub retitled: Vec<String>,
}

/// Compare O*NET coverage between two releases.
pub fn diff_codes(first: &OnetMap, second: &OnetMap) -> OnetDiff {
    let a: HashSet<&String> = first.keys().collect();
    let b: HashSet<&String> = second.keys().collect();

    let mut only_first: Vec<String> = a.difference(&b).map(|s| s.to_string()).collect();
    let mut only_second: Vec<String> = b.difference(&a).map(|s| s.to_string()).collect();
    let mut retitled: Vec<String> = a
        .intersection(&b)
        .filter(|c| first[**c] != second[**c])
        .map(|s| s.to_string())
        .collect();
    only_first.sort();
    only_second.sort();
    retitled.sort();

    OnetDiff {
        common: a.intersection(&b).count(),
        only_first,
        only_second,
        retitled,
    }
}
