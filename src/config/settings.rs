// ============================================================
// Layer 5 — Settings Document
// ============================================================
// The root of a settings file. Each table is optional and each
// key inside a table falls back to its default:
//
//   [split]
//   random_seed = 7
//
//   [train]
//   batch_size     = 64
//   use_recon      = false
//   search_methods = ["greedy", ["beam", 3]]
//
//   [eval]
//   model_iteration = 50000
//
// An empty document is the literal default configuration.

use serde::{Deserialize, Serialize};

use crate::config::eval::EvalSettings;
use crate::config::split::SplitSettings;
use crate::config::train::TrainSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub split: SplitSettings,
    pub train: TrainSettings,
    pub eval:  EvalSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let doc = r#"
            [split]
            random_seed = 7

            [train]
            batch_size     = 64
            use_recon      = false
            search_methods = ["greedy", ["beam", 3]]
        "#;
        let settings: Settings = toml::from_str(doc).unwrap();

        assert_eq!(settings.split.random_seed, 7);
        assert_eq!(settings.split.n_train, 1200);
        assert_eq!(settings.train.batch_size, 64);
        assert!(!settings.train.use_recon);
        assert_eq!(settings.train.search_methods, vec![json!("greedy"), json!(["beam", 3])]);
        assert_eq!(settings.train.decoder_learning_rate, 1e-5);
        assert_eq!(settings.eval, EvalSettings::default());
    }

    #[test]
    fn test_defaults_render_and_parse_back() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, Settings::default());
    }
}
