// ============================================================
// Layer 4 — Corpus Splitter
// ============================================================
// Partitions the corpus clips into train / val / test:
//
//   1. take the unique clip keys in file order
//   2. shuffle them with a StdRng seeded from `random_seed`
//   3. first n_train → train, next n_val → val, next n_test → test
//
// Clips beyond n_train + n_val + n_test are left out. The same
// seed over the same caption file always reproduces the same
// split, so metadata files can be regenerated at any time.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::path::Path;

use crate::config::paths::Split;
use crate::config::split::SplitConfig;
use crate::data::captions::CaptionTable;

/// Clip keys assigned to each split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSplit {
    pub train: Vec<String>,
    pub val:   Vec<String>,
    pub test:  Vec<String>,
}

impl CorpusSplit {
    pub fn keys(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.train,
            Split::Val   => &self.val,
            Split::Test  => &self.test,
        }
    }
}

/// Shuffle `keys` with the configured seed and cut them into the
/// configured split sizes.
///
/// Fails when there are fewer keys than the three sizes add up to.
pub fn split_video_keys(mut keys: Vec<String>, cfg: &SplitConfig) -> Result<CorpusSplit> {
    let Some(needed) = cfg.total_size() else {
        bail!(
            "Split sizes overflow: {} train + {} val + {} test",
            cfg.n_train,
            cfg.n_val,
            cfg.n_test,
        );
    };
    if keys.len() < needed {
        bail!(
            "Corpus '{}' has {} clips but the split needs {} ({} train + {} val + {} test)",
            cfg.corpus,
            keys.len(),
            needed,
            cfg.n_train,
            cfg.n_val,
            cfg.n_test,
        );
    }

    let mut rng = StdRng::seed_from_u64(cfg.random_seed);
    keys.shuffle(&mut rng);
    keys.truncate(needed);

    let test  = keys.split_off(cfg.n_train + cfg.n_val);
    let val   = keys.split_off(cfg.n_train);
    let train = keys;

    tracing::debug!(
        "Corpus split: {} train, {} val, {} test (seed {})",
        train.len(),
        val.len(),
        test.len(),
        cfg.random_seed,
    );

    Ok(CorpusSplit { train, val, test })
}

/// Per-split counts written by `write_split_metadata`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    pub split:    Split,
    pub clips:    usize,
    pub captions: usize,
}

/// Write each split's caption rows to its metadata file, resolving
/// the configured relative paths under `root`.
pub fn write_split_metadata(
    table: &CaptionTable,
    split: &CorpusSplit,
    cfg:   &SplitConfig,
    root:  &Path,
) -> Result<Vec<SplitReport>> {
    Split::ALL
        .iter()
        .map(|&which| {
            let keys     = split.keys(which);
            let captions = table.write_subset(root.join(cfg.metadata_fpath(which)), keys)?;
            Ok(SplitReport { split: which, clips: keys.len(), captions })
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::split::SplitSettings;
    use std::collections::HashSet;

    fn cfg(n_train: usize, n_val: usize, n_test: usize, seed: u64) -> SplitConfig {
        SplitConfig::new(SplitSettings {
            random_seed: seed,
            n_train,
            n_val,
            n_test,
            ..SplitSettings::default()
        })
    }

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("clip{i}")).collect()
    }

    #[test]
    fn test_correct_split_sizes() {
        let split = split_video_keys(keys(100), &cfg(70, 10, 20, 42)).unwrap();
        assert_eq!(split.train.len(), 70);
        assert_eq!(split.val.len(), 10);
        assert_eq!(split.test.len(), 20);
    }

    #[test]
    fn test_splits_are_disjoint() {
        let split = split_video_keys(keys(50), &cfg(30, 5, 10, 1)).unwrap();
        let all: HashSet<&String> =
            split.train.iter().chain(&split.val).chain(&split.test).collect();
        assert_eq!(all.len(), 45);
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_video_keys(keys(40), &cfg(20, 5, 5, 42)).unwrap();
        let b = split_video_keys(keys(40), &cfg(20, 5, 5, 42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_order() {
        let a = split_video_keys(keys(200), &cfg(150, 25, 25, 1)).unwrap();
        let b = split_video_keys(keys(200), &cfg(150, 25, 25, 2)).unwrap();
        assert_ne!(a.train, b.train);
    }

    #[test]
    fn test_too_few_clips() {
        let err = split_video_keys(keys(10), &cfg(8, 2, 1, 42)).unwrap_err();
        assert!(err.to_string().contains("has 10 clips but the split needs 11"));
    }

    #[test]
    fn test_oversized_split_is_an_error() {
        let err = split_video_keys(keys(10), &cfg(usize::MAX, 1, 0, 42)).unwrap_err();
        assert!(err.to_string().contains("Split sizes overflow"));
    }

    #[test]
    fn test_exact_fit_uses_every_clip() {
        let split = split_video_keys(keys(6), &cfg(3, 1, 2, 0)).unwrap();
        assert_eq!(split.train.len() + split.val.len() + split.test.len(), 6);
    }
}
