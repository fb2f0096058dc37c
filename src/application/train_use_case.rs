// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Builds the configuration of a new training run:
//
//   Step 1: Capture the run timestamp (UTC, once)
//   Step 2: Build the TrainConfig               (Layer 5 - config)
//   Step 3: Optionally prepare the run on disk  (Layer 6 - infra)
//           logs/<id>/, checkpoints/<id>/train_config.json
//
// The resulting TrainConfig is handed back read-only; the training
// driver consumes it from there.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{TrainConfig, TrainSettings};
use crate::domain::timestamp::RunTimestamp;
use crate::infra::run_store::RunStore;

/// The built configuration and, if prepared, its snapshot path.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub config:   TrainConfig,
    pub snapshot: Option<PathBuf>,
}

pub struct TrainUseCase {
    settings: TrainSettings,
    root:     PathBuf,
    prepare:  bool,
}

impl TrainUseCase {
    /// `root` is where `logs/` and `checkpoints/` live.
    pub fn new(settings: TrainSettings, root: impl Into<PathBuf>, prepare: bool) -> Self {
        Self { settings, root: root.into(), prepare }
    }

    pub fn execute(&self) -> Result<TrainOutcome> {
        self.execute_at(RunTimestamp::now())
    }

    /// Same as `execute` with an explicit timestamp.
    pub fn execute_at(&self, timestamp: RunTimestamp) -> Result<TrainOutcome> {
        // ── Step 1-2: Build the run configuration ─────────────────────────────
        let config = TrainConfig::new(self.settings.clone(), timestamp)?;

        tracing::info!("Run id: {}", config.id);
        tracing::info!("Logs:        {}", config.log_dpath);
        tracing::info!("Checkpoints: {}", config.save_dpath);
        tracing::debug!(
            "{} score labels for {} search methods",
            config.tx_score.len(),
            config.search_methods.len()
        );
        if !config.reconstructor.is_enabled() {
            tracing::info!("Reconstructor disabled, training decoder only");
        }

        // ── Step 3: Prepare directories + snapshot ────────────────────────────
        let snapshot = if self.prepare {
            let store = RunStore::new(&self.root);
            Some(store.prepare(&self.settings, &config)?)
        } else {
            None
        };

        Ok(TrainOutcome { config, snapshot })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::run_store::TrainSnapshot;
    use serde_json::json;

    #[test]
    fn test_execute_without_prepare_touches_nothing() {
        let root    = tempfile::tempdir().unwrap();
        let outcome = TrainUseCase::new(TrainSettings::default(), root.path(), false)
            .execute()
            .unwrap();

        assert!(outcome.snapshot.is_none());
        assert!(outcome.config.id.starts_with("RecNet | MSVD"));
        assert!(!root.path().join("logs").exists());
    }

    #[test]
    fn test_prepare_round_trips_through_snapshot() {
        let root    = tempfile::tempdir().unwrap();
        let outcome = TrainUseCase::new(TrainSettings::default(), root.path(), true)
            .execute_at(RunTimestamp::from_string("210305-08:15:00"))
            .unwrap();

        let path = outcome.snapshot.expect("snapshot written");
        assert!(root.path().join(&outcome.config.log_dpath).is_dir());
        assert_eq!(TrainSnapshot::load(path).unwrap(), outcome.config);
    }

    #[test]
    fn test_unsupported_search_method_is_reported() {
        let settings = TrainSettings {
            search_methods: vec![json!(["beam", 5, "x"])],
            ..TrainSettings::default()
        };
        let err = TrainUseCase::new(settings, ".", true).execute().unwrap_err();
        assert!(err.to_string().contains("unsupported search method"));
    }
}
