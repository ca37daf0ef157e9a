// src/lookup.rs
//
// Client-side evaluation over a loaded `Dataset`:
// - occupation search (substring over code, title, specialty code)
// - salary validation
// - bucketing every location into the highest wage level the salary meets
// - per-tier display views (area filter + sort), which never re-bucket

use crate::config::{consts::SEARCH_LIMIT, options::SortMode};
use crate::core::sanitize::{collate, format_currency, parse_number_prefix, strip_currency};
use crate::model::{Dataset, Occupation};

/* ---------------- Wage levels ---------------- */

/// Static description of a prevailing wage level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WageLevel {
    pub level: u8,
    pub label: &'static str,
    pub percentile: &'static str,
    pub desc: &'static str,
    /// RGB used by the GUI tabs/cards
    pub color: [u8; 3],
}

pub static WAGE_LEVELS: [WageLevel; 4] = [
    WageLevel { level: 1, label: "Level 1", percentile: "17th", desc: "Entry Level", color: [0xef, 0x44, 0x44] },
    WageLevel { level: 2, label: "Level 2", percentile: "34th", desc: "Qualified", color: [0x22, 0xc5, 0x5e] },
    WageLevel { level: 3, label: "Level 3", percentile: "50th", desc: "Experienced", color: [0x3b, 0x82, 0xf6] },
    WageLevel { level: 4, label: "Level 4", percentile: "67th", desc: "Fully Competent", color: [0xa8, 0x55, 0xf7] },
];

pub fn wage_level(level: u8) -> Option<&'static WageLevel> {
    WAGE_LEVELS.iter().find(|w| w.level == level)
}

/* ---------------- Search ---------------- */

/// Case-insensitive substring match on code, title and specialty code.
/// Dataset order is kept (already alphabetical); capped at `SEARCH_LIMIT`.
pub fn search<'a>(ds: &'a Dataset, query: &str) -> Vec<&'a Occupation> {
    search_limit(ds, query, SEARCH_LIMIT)
}

pub fn search_limit<'a>(ds: &'a Dataset, query: &str, limit: usize) -> Vec<&'a Occupation> {
    if query.is_empty() { return Vec::new(); }
    let q = query.to_lowercase();
    ds.occupations
        .iter()
        .filter(|occ| {
            occ.code.to_lowercase().contains(&q)
                || occ.title.to_lowercase().contains(&q)
                || occ.onet_code.as_ref().is_some_and(|o| o.to_lowercase().contains(&q))
        })
        .take(limit)
        .collect()
}

/// Exact pick by specialty code, then base code (first entry in title order).
pub fn find_occupation<'a>(ds: &'a Dataset, code: &str) -> Option<&'a Occupation> {
    ds.occupations
        .iter()
        .find(|o| o.onet_code.as_deref() == Some(code))
        .or_else(|| ds.occupations.iter().find(|o| o.code == code && o.onet_code.is_none()))
        .or_else(|| ds.occupations.iter().find(|o| o.code == code))
}

/* ---------------- Salary ---------------- */

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Please enter a valid salary")]
pub struct SalaryError;

/// `"$120,000"` → 120000.0. Anything non-numeric or ≤ 0 is rejected.
pub fn parse_salary(input: &str) -> Result<f64, SalaryError> {
    let n = parse_number_prefix(&strip_currency(input)).ok_or(SalaryError)?;
    if !n.is_finite() || n <= 0.0 { return Err(SalaryError); }
    Ok(n)
}

/* ---------------- Bucketing ---------------- */

/// One location with its four thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub area: String,
    pub l1: u32,
    pub l2: u32,
    pub l3: u32,
    pub l4: u32,
}

impl Location {
    /// Threshold for tier `n`; tier 0 sorts by level 1.
    pub fn threshold(&self, tier: u8) -> u32 {
        match tier {
            0 | 1 => self.l1,
            2 => self.l2,
            3 => self.l3,
            _ => self.l4,
        }
    }

    /// Wage band a tier spans at this location (`$l2 – $l3`, `$l4+`).
    pub fn range_label(&self, tier: u8) -> String {
        let c = |v: u32| format_currency(v as f64);
        match tier {
            0 => format!("under {}", c(self.l1)),
            1 => format!("{} – {}", c(self.l1), c(self.l2)),
            2 => format!("{} – {}", c(self.l2), c(self.l3)),
            3 => format!("{} – {}", c(self.l3), c(self.l4)),
            _ => format!("{}+", c(self.l4)),
        }
    }
}

/// Highest level whose threshold `salary` meets, checked 4 → 1; 0 = below level 1.
pub fn tier_for(salary: f64, l1: u32, l2: u32, l3: u32, l4: u32) -> u8 {
    if salary >= l4 as f64 { 4 }
    else if salary >= l3 as f64 { 3 }
    else if salary >= l2 as f64 { 2 }
    else if salary >= l1 as f64 { 1 }
    else { 0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LookupResult {
    pub salary: f64,
    pub occupation: Occupation,
    /// Wage rows considered (sum of all tier sizes)
    pub total: usize,
    /// Index = tier (0 = below level 1). Each tier sorted by area name.
    pub levels: [Vec<Location>; 5],
}

impl LookupResult {
    pub fn tier(&self, tier: u8) -> &[Location] {
        self.levels.get(tier as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn counts(&self) -> [usize; 5] {
        std::array::from_fn(|i| self.levels[i].len())
    }

    pub fn summary_line(&self) -> String {
        format!("{} annual salary • {} locations analyzed", format_currency(self.salary), self.total)
    }

    pub fn below_threshold_line(&self) -> Option<String> {
        let n = self.levels[0].len();
        (n > 0).then(|| format!("{n} location(s) below Level 1 threshold"))
    }
}

/// Partition every wage row of `occupation`'s base code into five tiers.
pub fn bucket(ds: &Dataset, occupation: &Occupation, salary: f64) -> LookupResult {
    let mut levels: [Vec<Location>; 5] = Default::default();
    let mut total = 0;

    for w in ds.wages_for(&occupation.code) {
        total += 1;
        let area = ds.area_name(w.area_index).map(str::to_string).unwrap_or_default();
        let loc = Location { area, l1: w.l1, l2: w.l2, l3: w.l3, l4: w.l4 };
        levels[tier_for(salary, w.l1, w.l2, w.l3, w.l4) as usize].push(loc);
    }

    for tier in levels.iter_mut() {
        tier.sort_by(|a, b| collate(&a.area, &b.area));
    }

    logf!(
        "Lookup: {} ({}) salary={} total={} tiers={:?}",
        occupation.title, occupation.display_code(), salary, total,
        levels.iter().map(Vec::len).collect::<Vec<_>>()
    );

    LookupResult { salary, occupation: occupation.clone(), total, levels }
}

/// Validate + bucket in one step (what the Search button does).
pub fn evaluate(ds: &Dataset, occupation: &Occupation, salary_input: &str) -> Result<LookupResult, SalaryError> {
    let salary = parse_salary(salary_input)?;
    Ok(bucket(ds, occupation, salary))
}

/* ---------------- Tier view ---------------- */

/// Display projection of one tier: positions into `LookupResult::levels[tier]`.
/// Filtering/sorting here never changes which tier a location is in.
#[derive(Clone, Debug)]
pub struct TierView<'a> {
    pub tier: u8,
    pub row_ix: Vec<usize>,
    rows: &'a [Location],
}

impl<'a> TierView<'a> {
    pub fn new(result: &'a LookupResult, tier: u8, filter: &str, sort: SortMode) -> Self {
        let rows = result.tier(tier);
        let f = filter.to_lowercase();

        let mut row_ix: Vec<usize> = (0..rows.len())
            .filter(|&i| f.is_empty() || rows[i].area.to_lowercase().contains(&f))
            .collect();

        if sort == SortMode::Wage {
            // stable: equal thresholds stay alphabetical
            row_ix.sort_by_key(|&i| rows[i].threshold(tier));
        }

        Self { tier, row_ix, rows }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Size of the whole tier before filtering.
    pub fn tier_len(&self) -> usize { self.rows.len() }

    pub fn row(&self, i: usize) -> Option<&'a Location> {
        self.row_ix.get(i).and_then(|&ix| self.rows.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Location> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.rows.get(ix))
    }

    /// Message for an empty view: empty tier vs. filter removed everything.
    pub fn empty_message(&self) -> String {
        if self.rows.is_empty() {
            let label = wage_level(self.tier).map(|w| w.label).unwrap_or("this level");
            format!("No locations qualify as {label}")
        } else {
            s!("No locations match your filter")
        }
    }
}
