// ============================================================
// Layer 3 — Configuration Errors
// ============================================================
// Building a run configuration is pure value computation over
// literal or file-provided settings. The only way it can fail is
// a search-method entry the decoder does not know how to run, and
// that must surface when the configuration is built rather than
// at test time thousands of iterations later.
//
// File and I/O problems belong to the outer layers and are
// reported there through anyhow.

use thiserror::Error;

/// Errors raised while constructing a configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A search-method entry is neither a known bare name nor a
    /// `(name, width)` pair. Carries the offending entry as text.
    #[error("unsupported search method: {0}")]
    UnsupportedSearchMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_entry() {
        let e = ConfigError::UnsupportedSearchMethod("[\"beam\",5,2]".to_string());
        assert_eq!(e.to_string(), "unsupported search method: [\"beam\",5,2]");
    }
}
