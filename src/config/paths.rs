// ============================================================
// Layer 5 — Path Templates
// ============================================================
// Every data, log and checkpoint path a run touches is produced
// here from a handful of fields. No path is stored independently
// of the fields it is derived from.
//
//   data/{corpus}/features/{encoder}.hdf5            whole-corpus features
//   data/{corpus}/features/{encoder}_{split}.hdf5    per-split features
//   data/{corpus}/metadata/MSR Video Description Corpus.csv
//   data/{corpus}/metadata/{split}.csv               per-split captions
//   logs/{id}                                        run logs
//   checkpoints/{id}                                 run checkpoints
//   {dir}/{id}/{iteration}_checkpoint.tar            one checkpoint file
//
// Nothing here touches the filesystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of the per-run log directories.
pub const LOG_ROOT: &str = "logs";

/// Root of the per-run checkpoint directories.
pub const CHECKPOINT_ROOT: &str = "checkpoints";

/// File name of the whole-corpus caption table.
pub const CORPUS_CAPTION_FILE: &str = "MSR Video Description Corpus.csv";

// ─── Split ────────────────────────────────────────────────────────────────────
/// One partition of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val   => "val",
            Split::Test  => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Data files ───────────────────────────────────────────────────────────────

/// Feature store for the whole corpus.
pub fn corpus_video_fpath(corpus: &str, encoder_model: &str) -> String {
    format!("data/{corpus}/features/{encoder_model}.hdf5")
}

/// Caption table for the whole corpus.
pub fn corpus_caption_fpath(corpus: &str) -> String {
    format!("data/{corpus}/metadata/{CORPUS_CAPTION_FILE}")
}

/// Feature store for one split.
pub fn split_video_fpath(corpus: &str, encoder_model: &str, split: Split) -> String {
    format!("data/{corpus}/features/{encoder_model}_{split}.hdf5")
}

/// Caption table for one split.
pub fn split_caption_fpath(corpus: &str, split: Split) -> String {
    format!("data/{corpus}/metadata/{split}.csv")
}

// ─── Run outputs ──────────────────────────────────────────────────────────────

pub fn log_dpath(run_id: &str) -> String {
    format!("{LOG_ROOT}/{run_id}")
}

pub fn save_dpath(run_id: &str) -> String {
    format!("{CHECKPOINT_ROOT}/{run_id}")
}

/// A single checkpoint file inside a run's checkpoint directory.
pub fn checkpoint_fpath(model_dpath: &str, model_id: &str, iteration: usize) -> String {
    format!("{model_dpath}/{model_id}/{iteration}_checkpoint.tar")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_templates() {
        assert_eq!(
            corpus_video_fpath("MSVD", "InceptionV4"),
            "data/MSVD/features/InceptionV4.hdf5"
        );
        assert_eq!(
            corpus_caption_fpath("MSVD"),
            "data/MSVD/metadata/MSR Video Description Corpus.csv"
        );
        assert_eq!(
            split_video_fpath("MSVD", "InceptionV4", Split::Val),
            "data/MSVD/features/InceptionV4_val.hdf5"
        );
        assert_eq!(split_caption_fpath("MSR-VTT", Split::Test), "data/MSR-VTT/metadata/test.csv");
    }

    #[test]
    fn test_fields_substituted_verbatim() {
        // No escaping or normalisation of odd characters
        assert_eq!(
            split_video_fpath("My Corpus", "Res/Net", Split::Train),
            "data/My Corpus/features/Res/Net_train.hdf5"
        );
    }

    #[test]
    fn test_run_templates() {
        assert_eq!(log_dpath("RecNet | x"), "logs/RecNet | x");
        assert_eq!(save_dpath("RecNet | x"), "checkpoints/RecNet | x");
        assert_eq!(
            checkpoint_fpath("checkpoints", "RecNet | x", 100000),
            "checkpoints/RecNet | x/100000_checkpoint.tar"
        );
    }
}
