// src/model.rs
//
// Persisted shapes shared by the builder (writer) and the client (reader).
// Field names are shortened on the wire; a year file carries tens of
// thousands of wage rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    /// Base SOC code; always the join key into `Dataset::wages`
    #[serde(rename = "c")]
    pub code: String,
    #[serde(rename = "t")]
    pub title: String,
    /// O*NET specialty code (e.g. `15-1243.01`), display/search only
    #[serde(rename = "o", default, skip_serializing_if = "Option::is_none")]
    pub onet_code: Option<String>,
}

impl Occupation {
    pub fn base(code: &str, title: &str) -> Self {
        Self { code: s!(code), title: s!(title), onet_code: None }
    }

    pub fn specialty(code: &str, title: &str, onet_code: &str) -> Self {
        Self { code: s!(code), title: s!(title), onet_code: Some(s!(onet_code)) }
    }

    /// Uniqueness key: O*NET code if present, else `code|title`.
    pub fn key(&self) -> String {
        match &self.onet_code {
            Some(o) => o.clone(),
            None => join!(&self.code, "|", &self.title),
        }
    }

    /// Code shown next to the title (specialty code wins).
    pub fn display_code(&self) -> &str {
        self.onet_code.as_deref().unwrap_or(&self.code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageRecord {
    #[serde(rename = "s")]
    pub soc_code: String,
    /// Position in `Dataset::areas`
    #[serde(rename = "a")]
    pub area_index: usize,
    pub l1: u32,
    pub l2: u32,
    pub l3: u32,
    pub l4: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub year: String,
    pub occupations: Vec<Occupation>,
    pub areas: Vec<String>,
    pub wages: Vec<WageRecord>,
}

impl Dataset {
    pub fn area_name(&self, index: usize) -> Option<&str> {
        self.areas.get(index).map(String::as_str)
    }

    /// Wage rows joined on the base SOC code.
    pub fn wages_for<'a>(&'a self, soc_code: &'a str) -> impl Iterator<Item = &'a WageRecord> + 'a {
        self.wages.iter().filter(move |w| w.soc_code == soc_code)
    }

    /// Keys that appear more than once (should always be empty).
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for occ in &self.occupations {
            *counts.entry(occ.key()).or_insert(0) += 1;
        }
        let mut dups: Vec<String> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(k, _)| k)
            .collect();
        dups.sort();
        dups
    }

    /// Titles shared by more than one entry, with the codes carrying them.
    /// Legitimate when a specialty repeats its base title under a non-`.00` code.
    pub fn repeated_titles(&self) -> Vec<(String, Vec<String>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut by_title: HashMap<&str, Vec<String>> = HashMap::new();
        for occ in &self.occupations {
            let codes = by_title.entry(occ.title.as_str()).or_insert_with(|| {
                order.push(occ.title.as_str());
                Vec::new()
            });
            codes.push(s!(occ.display_code()));
        }
        order
            .into_iter()
            .filter_map(|t| {
                let codes = by_title.remove(t)?;
                (codes.len() > 1).then(|| (s!(t), codes))
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    pub label: String,
    pub file: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub years: Vec<YearEntry>,
}

impl Manifest {
    /// Newest first (labels are `YYYY-YY`, so lexical order is chronological).
    pub fn sorted_desc(&self) -> Vec<&YearEntry> {
        let mut v: Vec<&YearEntry> = self.years.iter().collect();
        v.sort_by(|a, b| b.label.cmp(&a.label));
        v
    }

    pub fn latest(&self) -> Option<&YearEntry> {
        self.sorted_desc().into_iter().next()
    }

    pub fn find(&self, label: &str) -> Option<&YearEntry> {
        self.years.iter().find(|y| y.label == label)
    }

    /// Replace an existing entry for the same label, else append.
    pub fn upsert(&mut self, entry: YearEntry) {
        match self.years.iter_mut().find(|y| y.label == entry.label) {
            Some(slot) => *slot = entry,
            None => self.years.push(entry),
        }
    }
}
