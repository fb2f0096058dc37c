// ============================================================
// Layer 3 — Score Label Table
// ============================================================
// Two-level lookup of the tag under which each test score is
// logged:
//
//   table["greedy"]["CIDEr"] == "score with greedy search/CIDEr"
//   table["beam-5"]["Bleu_4"] == "score with beam-5 search/Bleu_4"
//
// The table is filled from the cartesian product of configured
// search methods × configured metrics. Callers that log a score
// for a method that was not configured can still obtain an empty
// row through `entry`, which creates it on first access. That
// get-or-create behaviour belongs to this table only.
//
// Reference: Rust Book §8 (Hash Maps), std BTreeMap::entry

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::error::ConfigError;
use crate::domain::search_method::SearchMethod;

/// Metric name → label string, for one search method.
pub type ScoreRow = BTreeMap<String, String>;

/// `tx_score[search_method_id][metric] -> label`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreTable {
    rows: BTreeMap<String, ScoreRow>,
}

impl ScoreTable {
    /// Label format shared by every entry.
    pub fn label(search_method_id: &str, metric: &str) -> String {
        format!("score with {search_method_id} search/{metric}")
    }

    /// Fill the table for every (method, metric) combination.
    pub fn build(methods: &[SearchMethod], metrics: &[String]) -> Self {
        let mut table = Self::default();
        for method in methods {
            let method_id = method.id();
            for metric in metrics {
                table
                    .entry(&method_id)
                    .insert(metric.clone(), Self::label(&method_id, metric));
            }
        }
        table
    }

    /// Parse raw search-method entries, then fill the table.
    /// All entries are validated before any row is written, so an
    /// unsupported entry never leaves a half-built table behind.
    pub fn from_settings(raw_methods: &[Value], metrics: &[String]) -> Result<Self, ConfigError> {
        let methods = SearchMethod::parse_all(raw_methods)?;
        Ok(Self::build(&methods, metrics))
    }

    /// Get-or-create the row for a search method id.
    pub fn entry(&mut self, search_method_id: &str) -> &mut ScoreRow {
        self.rows.entry(search_method_id.to_string()).or_default()
    }

    /// Look up one label without creating anything.
    pub fn get(&self, search_method_id: &str, metric: &str) -> Option<&str> {
        self.rows
            .get(search_method_id)
            .and_then(|row| row.get(metric))
            .map(String::as_str)
    }

    /// Row for one search method, if it exists.
    pub fn row(&self, search_method_id: &str) -> Option<&ScoreRow> {
        self.rows.get(search_method_id)
    }

    /// Number of labels across all rows.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(search_method_id, metric, label)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.rows.iter().flat_map(|(method_id, row)| {
            row.iter()
                .map(move |(metric, label)| (method_id.as_str(), metric.as_str(), label.as_str()))
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metrics(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cartesian_product_has_four_entries() {
        let raw   = vec![json!("greedy"), json!(["beam", 5])];
        let table = ScoreTable::from_settings(&raw, &metrics(&["Bleu_1", "CIDEr"])).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.get("greedy", "Bleu_1"), Some("score with greedy search/Bleu_1"));
        assert_eq!(table.get("greedy", "CIDEr"),  Some("score with greedy search/CIDEr"));
        assert_eq!(table.get("beam-5", "Bleu_1"), Some("score with beam-5 search/Bleu_1"));
        assert_eq!(table.get("beam-5", "CIDEr"),  Some("score with beam-5 search/CIDEr"));
    }

    #[test]
    fn test_unsupported_method_builds_nothing() {
        let raw = vec![json!("greedy"), json!(["beam", 5, 1])];
        let res = ScoreTable::from_settings(&raw, &metrics(&["CIDEr"]));
        assert!(matches!(res, Err(ConfigError::UnsupportedSearchMethod(_))));

        let raw = vec![json!(["beam", 5]), json!(42)];
        assert!(ScoreTable::from_settings(&raw, &metrics(&["CIDEr"])).is_err());
    }

    #[test]
    fn test_entry_creates_empty_writable_row() {
        let mut table = ScoreTable::default();
        assert!(table.row("beam-10").is_none());

        let row = table.entry("beam-10");
        assert!(row.is_empty());
        row.insert("METEOR".to_string(), ScoreTable::label("beam-10", "METEOR"));

        assert_eq!(table.get("beam-10", "METEOR"), Some("score with beam-10 search/METEOR"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_get_does_not_create_rows() {
        let table = ScoreTable::default();
        assert_eq!(table.get("greedy", "CIDEr"), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_iter_in_key_order() {
        let table = ScoreTable::build(
            &[SearchMethod::Greedy, SearchMethod::Beam { width: 5 }],
            &metrics(&["CIDEr"]),
        );
        let keys: Vec<(&str, &str)> = table.iter().map(|(m, s, _)| (m, s)).collect();
        assert_eq!(keys, vec![("beam-5", "CIDEr"), ("greedy", "CIDEr")]);
    }
}
