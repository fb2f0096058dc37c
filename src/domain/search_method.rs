// ============================================================
// Layer 3 — Search Methods
// ============================================================
// Decoding strategies used at test time. In a settings file they
// are written either as a bare name or as a (name, width) pair:
//
//   search_methods = ["greedy", ["beam", 5]]
//
// Every entry is parsed into a closed enum up front, so an entry
// the decoder cannot run is rejected while the configuration is
// being built.
//
// The method id is what names the score labels:
//   greedy      → "greedy"
//   beam, 5     → "beam-5"

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::domain::error::ConfigError;

/// A decoding strategy for turning decoder outputs into captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    /// Argmax at every step.
    Greedy,
    /// Beam search keeping `width` hypotheses.
    Beam { width: usize },
}

impl SearchMethod {
    /// Parse one raw settings entry.
    ///
    /// Accepted shapes:
    ///   - `"greedy"`
    ///   - `["beam", <positive integer>]`
    ///
    /// Anything else (unknown names, other arities, numbers, tables)
    /// is an `UnsupportedSearchMethod` error.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let unsupported = || ConfigError::UnsupportedSearchMethod(value.to_string());

        match value {
            Value::String(name) if name == "greedy" => Ok(SearchMethod::Greedy),
            Value::Array(fields) => match fields.as_slice() {
                [Value::String(name), Value::Number(width)] if name == "beam" => {
                    match width.as_u64() {
                        Some(w) if w > 0 => Ok(SearchMethod::Beam { width: w as usize }),
                        _                => Err(unsupported()),
                    }
                }
                _ => Err(unsupported()),
            },
            _ => Err(unsupported()),
        }
    }

    /// Parse a whole list, failing on the first unsupported entry.
    pub fn parse_all(values: &[Value]) -> Result<Vec<Self>, ConfigError> {
        values.iter().map(Self::from_value).collect()
    }

    /// The bare method name, without parameters.
    pub fn name(&self) -> &'static str {
        match self {
            SearchMethod::Greedy      => "greedy",
            SearchMethod::Beam { .. } => "beam",
        }
    }

    /// Identifier used as the first-level key of the score table:
    /// the bare name, or the pair fields joined by `-`.
    pub fn id(&self) -> String {
        match self {
            SearchMethod::Greedy          => self.name().to_string(),
            SearchMethod::Beam { width } => format!("{}-{}", self.name(), width),
        }
    }

    /// The settings-file form of this method.
    pub fn to_value(&self) -> Value {
        match self {
            SearchMethod::Greedy          => Value::from(self.name()),
            SearchMethod::Beam { width } => Value::Array(vec![
                Value::from(self.name()),
                Value::from(*width as u64),
            ]),
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Serialises back to the settings-file form.
impl Serialize for SearchMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_and_pair() {
        assert_eq!(SearchMethod::from_value(&json!("greedy")).unwrap(), SearchMethod::Greedy);
        assert_eq!(
            SearchMethod::from_value(&json!(["beam", 5])).unwrap(),
            SearchMethod::Beam { width: 5 }
        );
    }

    #[test]
    fn test_ids() {
        assert_eq!(SearchMethod::Greedy.id(), "greedy");
        assert_eq!(SearchMethod::Beam { width: 5 }.id(), "beam-5");
        assert_eq!(SearchMethod::Beam { width: 10 }.to_string(), "beam-10");
    }

    #[test]
    fn test_rejects_three_element_tuple() {
        let err = SearchMethod::from_value(&json!(["beam", 5, 2])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedSearchMethod(_)));
        assert!(err.to_string().contains("[\"beam\",5,2]"));
    }

    #[test]
    fn test_rejects_numbers_and_unknown_names() {
        assert!(SearchMethod::from_value(&json!(3)).is_err());
        assert!(SearchMethod::from_value(&json!("nucleus")).is_err());
        assert!(SearchMethod::from_value(&json!(["beam", 0])).is_err());
        assert!(SearchMethod::from_value(&json!(["beam", -2])).is_err());
        assert!(SearchMethod::from_value(&json!(["greedy", 5])).is_err());
        assert!(SearchMethod::from_value(&json!({ "beam": 5 })).is_err());
    }

    #[test]
    fn test_parse_all_stops_on_bad_entry() {
        let raw = vec![json!("greedy"), json!(7), json!(["beam", 5])];
        assert!(SearchMethod::parse_all(&raw).is_err());
    }

    #[test]
    fn test_to_value_parses_back() {
        let beam = SearchMethod::Beam { width: 3 };
        assert_eq!(beam.to_value(), json!(["beam", 3]));
        assert_eq!(SearchMethod::from_value(&beam.to_value()).unwrap(), beam);
    }
}
