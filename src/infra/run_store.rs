// ============================================================
// Layer 6 — Run Store
// ============================================================
// Prepares the on-disk home of a training run and keeps a
// snapshot of the settings it was built from.
//
// Layout, relative to the store root (normally the working dir):
//   logs/<run id>/                         ← training logs
//   checkpoints/<run id>/
//     train_config.json                    ← settings snapshot
//     <iteration>_checkpoint.tar           ← written by the trainer
//
// The snapshot stores the raw settings and the timestamp, not the
// derived record. Loading it rebuilds the TrainConfig through
// TrainConfig::new, so the id of a reloaded run is always derived
// by the current rules. When those rules no longer reproduce the
// stored id, loading still succeeds but logs a warning, because
// checkpoints on disk live under the stored id.
//
// Reference: serde_json documentation, Rust Book §9

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{TrainConfig, TrainSettings};
use crate::domain::timestamp::RunTimestamp;

/// File name of the snapshot inside a run's checkpoint directory.
pub const SNAPSHOT_FILE: &str = "train_config.json";

// ─── TrainSnapshot ────────────────────────────────────────────────────────────
/// Everything needed to rebuild a run's TrainConfig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSnapshot {
    pub settings:  TrainSettings,
    pub timestamp: RunTimestamp,
    pub id:        String,
}

impl TrainSnapshot {
    pub fn new(settings: TrainSettings, cfg: &TrainConfig) -> Self {
        Self {
            settings,
            timestamp: cfg.timestamp.clone(),
            id:        cfg.id.clone(),
        }
    }

    /// Read a snapshot file and rebuild its TrainConfig.
    pub fn load(path: impl AsRef<Path>) -> Result<TrainConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read run snapshot '{}'", path.display()))?;
        let snapshot: TrainSnapshot = serde_json::from_str(&json)
            .with_context(|| format!("Invalid run snapshot '{}'", path.display()))?;

        let cfg = TrainConfig::new(snapshot.settings, snapshot.timestamp)
            .with_context(|| format!("Cannot rebuild run from '{}'", path.display()))?;

        if cfg.id != snapshot.id {
            tracing::warn!(
                "Run id rebuilt from '{}' differs from the stored one\n  stored:  {}\n  rebuilt: {}",
                path.display(),
                snapshot.id,
                cfg.id
            );
        }
        Ok(cfg)
    }
}

// ─── RunStore ─────────────────────────────────────────────────────────────────
pub struct RunStore {
    root: PathBuf,
}

impl RunStore {
    /// A store whose relative run paths resolve under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn log_dir(&self, cfg: &TrainConfig) -> PathBuf {
        self.root.join(&cfg.log_dpath)
    }

    pub fn save_dir(&self, cfg: &TrainConfig) -> PathBuf {
        self.root.join(&cfg.save_dpath)
    }

    pub fn snapshot_path(&self, cfg: &TrainConfig) -> PathBuf {
        self.save_dir(cfg).join(SNAPSHOT_FILE)
    }

    /// Create the log and checkpoint directories and write the
    /// settings snapshot. Returns the snapshot path.
    pub fn prepare(&self, settings: &TrainSettings, cfg: &TrainConfig) -> Result<PathBuf> {
        for dir in [self.log_dir(cfg), self.save_dir(cfg)] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create run directory '{}'", dir.display()))?;
            tracing::debug!("Ensured directory '{}'", dir.display());
        }

        let path     = self.snapshot_path(cfg);
        let snapshot = TrainSnapshot::new(settings.clone(), cfg);
        let json     = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write run snapshot '{}'", path.display()))?;

        tracing::info!("Saved run snapshot to '{}'", path.display());
        Ok(path)
    }
}
