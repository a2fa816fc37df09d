//! Exportable measurements from finished sessions.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Measurements from one timed sorting run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortResults {
    pub name: String,
    pub duration_seconds: f64,
    pub access_count: u64,
    pub comparison_count: u64,
}

impl SortResults {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Results of several algorithms run side by side, one session each.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    results: Vec<SortResults>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, results: SortResults) {
        self.results.push(results);
    }

    pub fn results(&self) -> &[SortResults] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Entry with the smallest duration. Ties keep the earliest.
    pub fn fastest(&self) -> Option<&SortResults> {
        self.results
            .iter()
            .reduce(|best, r| if r.duration_seconds < best.duration_seconds { r } else { best })
    }

    /// Entry with the fewest comparisons. Ties keep the earliest.
    pub fn fewest_comparisons(&self) -> Option<&SortResults> {
        self.results
            .iter()
            .reduce(|best, r| if r.comparison_count < best.comparison_count { r } else { best })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<SortResults> for ResultSet {
    fn from_iter<I: IntoIterator<Item = SortResults>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl Extend<SortResults> for ResultSet {
    fn extend<I: IntoIterator<Item = SortResults>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}
