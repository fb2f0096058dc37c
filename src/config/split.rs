// ============================================================
// Layer 5 — SplitConfig
// ============================================================
// Describes how the raw corpus is partitioned into train / val /
// test and where each partition's files live. Only `corpus` and
// `encoder_model` feed the paths; the seed and sizes drive the
// partition itself (see data::splitter).

use serde::{Deserialize, Serialize};

use crate::config::paths::{
    corpus_caption_fpath, corpus_video_fpath, split_caption_fpath, split_video_fpath, Split,
};

// ─── Raw settings ─────────────────────────────────────────────────────────────
/// User-facing inputs for a corpus split. Defaults reproduce the
/// MSVD split used by the published runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitSettings {
    pub corpus:        String,
    pub encoder_model: String,
    pub random_seed:   u64,
    pub n_train:       usize,
    pub n_val:         usize,
    pub n_test:        usize,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            corpus:        "MSVD".to_string(),
            encoder_model: "InceptionV4".to_string(),
            random_seed:   42,
            n_train:       1200,
            n_val:         100,
            n_test:        670,
        }
    }
}

// ─── SplitConfig ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitConfig {
    pub corpus:        String,
    pub encoder_model: String,

    /// Whole-corpus inputs
    pub video_fpath:   String,
    pub caption_fpath: String,

    pub random_seed: u64,
    pub n_train:     usize,
    pub n_val:       usize,
    pub n_test:      usize,

    pub train_video_fpath: String,
    pub val_video_fpath:   String,
    pub test_video_fpath:  String,

    pub train_metadata_fpath: String,
    pub val_metadata_fpath:   String,
    pub test_metadata_fpath:  String,
}

impl SplitConfig {
    /// Derive every path from the settings. Cannot fail.
    pub fn new(settings: SplitSettings) -> Self {
        let SplitSettings { corpus, encoder_model, random_seed, n_train, n_val, n_test } = settings;

        Self {
            video_fpath:          corpus_video_fpath(&corpus, &encoder_model),
            caption_fpath:        corpus_caption_fpath(&corpus),
            train_video_fpath:    split_video_fpath(&corpus, &encoder_model, Split::Train),
            val_video_fpath:      split_video_fpath(&corpus, &encoder_model, Split::Val),
            test_video_fpath:     split_video_fpath(&corpus, &encoder_model, Split::Test),
            train_metadata_fpath: split_caption_fpath(&corpus, Split::Train),
            val_metadata_fpath:   split_caption_fpath(&corpus, Split::Val),
            test_metadata_fpath:  split_caption_fpath(&corpus, Split::Test),
            corpus,
            encoder_model,
            random_seed,
            n_train,
            n_val,
            n_test,
        }
    }

    /// Requested number of videos in a split.
    pub fn size_of(&self, split: Split) -> usize {
        match split {
            Split::Train => self.n_train,
            Split::Val   => self.n_val,
            Split::Test  => self.n_test,
        }
    }

    /// Total number of videos the split needs, `None` on overflow.
    pub fn total_size(&self) -> Option<usize> {
        self.n_train.checked_add(self.n_val)?.checked_add(self.n_test)
    }

    pub fn metadata_fpath(&self, split: Split) -> &str {
        match split {
            Split::Train => &self.train_metadata_fpath,
            Split::Val   => &self.val_metadata_fpath,
            Split::Test  => &self.test_metadata_fpath,
        }
    }

    pub fn video_fpath_of(&self, split: Split) -> &str {
        match split {
            Split::Train => &self.train_video_fpath,
            Split::Val   => &self.val_video_fpath,
            Split::Test  => &self.test_video_fpath,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cfg = SplitConfig::new(SplitSettings::default());
        assert_eq!(cfg.video_fpath, "data/MSVD/features/InceptionV4.hdf5");
        assert_eq!(cfg.caption_fpath, "data/MSVD/metadata/MSR Video Description Corpus.csv");
        assert_eq!(cfg.train_video_fpath, "data/MSVD/features/InceptionV4_train.hdf5");
        assert_eq!(cfg.val_video_fpath, "data/MSVD/features/InceptionV4_val.hdf5");
        assert_eq!(cfg.test_video_fpath, "data/MSVD/features/InceptionV4_test.hdf5");
        assert_eq!(cfg.train_metadata_fpath, "data/MSVD/metadata/train.csv");
        assert_eq!(cfg.val_metadata_fpath, "data/MSVD/metadata/val.csv");
        assert_eq!(cfg.test_metadata_fpath, "data/MSVD/metadata/test.csv");
    }

    #[test]
    fn test_paths_follow_corpus_and_encoder() {
        let cfg = SplitConfig::new(SplitSettings {
            corpus:        "MSR-VTT".to_string(),
            encoder_model: "ResNet152".to_string(),
            ..SplitSettings::default()
        });
        for split in Split::ALL {
            assert_eq!(
                cfg.video_fpath_of(split),
                format!("data/MSR-VTT/features/ResNet152_{split}.hdf5")
            );
            assert_eq!(cfg.metadata_fpath(split), format!("data/MSR-VTT/metadata/{split}.csv"));
        }
    }

    #[test]
    fn test_sizes() {
        let cfg = SplitConfig::new(SplitSettings::default());
        assert_eq!(cfg.random_seed, 42);
        assert_eq!(cfg.size_of(Split::Train), 1200);
        assert_eq!(cfg.size_of(Split::Val), 100);
        assert_eq!(cfg.size_of(Split::Test), 670);
        assert_eq!(cfg.total_size(), Some(1970));
    }

    #[test]
    fn test_total_size_overflow() {
        let cfg = SplitConfig::new(SplitSettings { n_train: usize::MAX, ..SplitSettings::default() });
        assert_eq!(cfg.total_size(), None);
    }
}
