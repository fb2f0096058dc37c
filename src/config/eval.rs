// ============================================================
// Layer 5 — EvalConfig
// ============================================================
// Locates a previously trained checkpoint and the test split it
// should be scored on.
//
// Two ways to fill in the run id:
//   - EvalConfig::new        → a literal `model_id` from settings,
//                              copied from an earlier run's log dir
//   - EvalConfig::from_train → the id of a TrainConfig, typically
//                              rebuilt from that run's snapshot
//
// Either way the checkpoint path is
//   {model_dpath}/{model_id}/{model_iteration}_checkpoint.tar
// and nothing here checks that the file exists.

use serde::{Deserialize, Serialize};

use crate::config::paths::{self, Split};
use crate::config::train::TrainConfig;

/// Run id of the published MSVD checkpoint.
pub const DEFAULT_MODEL_ID: &str = "RecNet | MSVD tc-30 mc-5 sp-uniform | ENC InceptionV4 sm-28 | \
DEC gru-1 at-128 dr-0.5-0.5 tf-1.0 lr-0.0001-wd-1e-05 op-amsgrad | REC GRU lr-1e-06-wd-1e-05 op-adam | \
EMB 468 dr-0.5 sc-1 | bs-100 | cp-50.0 | sm-be-10 | 181116-13:09:44";

// ─── Raw settings ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalSettings {
    pub corpus:          String,
    pub encoder_model:   String,
    pub device:          String,
    pub model_dpath:     String,
    pub model_id:        String,
    pub model_iteration: usize,
}

impl Default for EvalSettings {
    fn default() -> Self {
        Self {
            corpus:          "MSVD".to_string(),
            encoder_model:   "InceptionV4".to_string(),
            device:          "cuda".to_string(),
            model_dpath:     paths::CHECKPOINT_ROOT.to_string(),
            model_id:        DEFAULT_MODEL_ID.to_string(),
            model_iteration: 100_000,
        }
    }
}

// ─── EvalConfig ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalConfig {
    pub corpus:        String,
    pub encoder_model: String,
    pub device:        String,

    pub test_video_fpath:   String,
    pub test_caption_fpath: String,

    pub model_dpath:     String,
    pub model_id:        String,
    pub model_iteration: usize,
    pub model_fpath:     String,
}

impl EvalConfig {
    /// Build from settings, trusting `model_id` as given.
    pub fn new(settings: EvalSettings) -> Self {
        let EvalSettings { corpus, encoder_model, device, model_dpath, model_id, model_iteration } =
            settings;

        Self {
            test_video_fpath:   paths::split_video_fpath(&corpus, &encoder_model, Split::Test),
            test_caption_fpath: paths::split_caption_fpath(&corpus, Split::Test),
            model_fpath:        paths::checkpoint_fpath(&model_dpath, &model_id, model_iteration),
            corpus,
            encoder_model,
            device,
            model_dpath,
            model_id,
            model_iteration,
        }
    }

    /// Build for a run whose TrainConfig is available, taking the
    /// corpus, encoder, device and run id from it.
    pub fn from_train(train: &TrainConfig, model_dpath: impl Into<String>, model_iteration: usize) -> Self {
        Self::new(EvalSettings {
            corpus:        train.corpus.corpus.clone(),
            encoder_model: train.encoder.model.clone(),
            device:        train.device.clone(),
            model_dpath:   model_dpath.into(),
            model_id:      train.id.clone(),
            model_iteration,
        })
    }
}
