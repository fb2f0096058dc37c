// ============================================================
// Layer 2 — EvalUseCase
// ============================================================
// Resolves which checkpoint an evaluation run should load.
//
//   Source::Settings  → literal model_id from the eval settings
//   Source::Snapshot  → model_id of a run rebuilt from its
//                       train_config.json snapshot
//
// The checkpoint file is never opened here; its presence is only
// reported so the caller can fail early with a clear message.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{EvalConfig, EvalSettings};
use crate::infra::run_store::TrainSnapshot;

/// Where the evaluated run's id comes from.
#[derive(Debug, Clone)]
pub enum EvalSource {
    Settings(EvalSettings),
    Snapshot {
        path:            PathBuf,
        model_dpath:     String,
        model_iteration: usize,
    },
}

#[derive(Debug, Clone)]
pub struct EvalOutcome {
    pub config:            EvalConfig,
    pub checkpoint_exists: bool,
}

pub struct EvalUseCase {
    source: EvalSource,
    root:   PathBuf,
}

impl EvalUseCase {
    /// `root` is the directory relative checkpoint paths resolve against.
    pub fn new(source: EvalSource, root: impl Into<PathBuf>) -> Self {
        Self { source, root: root.into() }
    }

    pub fn execute(&self) -> Result<EvalOutcome> {
        let config = match &self.source {
            EvalSource::Settings(settings) => EvalConfig::new(settings.clone()),
            EvalSource::Snapshot { path, model_dpath, model_iteration } => {
                let train = TrainSnapshot::load(path)?;
                EvalConfig::from_train(&train, model_dpath.clone(), *model_iteration)
            }
        };

        let checkpoint_exists = self.root.join(&config.model_fpath).is_file();
        tracing::info!("Checkpoint: {}", config.model_fpath);
        if !checkpoint_exists {
            tracing::warn!("Checkpoint file not found: '{}'", config.model_fpath);
        }

        Ok(EvalOutcome { config, checkpoint_exists })
    }
}
