// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Regenerates the per-split caption metadata of a corpus:
//
//   Step 1: Load the whole-corpus caption table   (Layer 4 - data)
//   Step 2: Collect unique clip keys               (Layer 4 - data)
//   Step 3: Seeded train / val / test partition    (Layer 4 - data)
//   Step 4: Write {split}.csv metadata files       (Layer 4 - data)
//
// With `dry_run` the partition is computed and reported but no
// file is written.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::paths::Split;
use crate::config::SplitConfig;
use crate::data::captions::CaptionTable;
use crate::data::splitter::{split_video_keys, write_split_metadata, SplitReport};

/// What a split run did (or would do, on a dry run).
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub clips_available: usize,
    pub reports:         Vec<SplitReport>,
    pub written:         bool,
}

pub struct SplitUseCase {
    config:  SplitConfig,
    root:    PathBuf,
    dry_run: bool,
}

impl SplitUseCase {
    /// `root` is the directory the config's relative `data/...`
    /// paths resolve against.
    pub fn new(config: SplitConfig, root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self { config, root: root.into(), dry_run }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn execute(&self) -> Result<SplitOutcome> {
        let cfg = &self.config;

        // ── Step 1-2: Load captions, collect clips ────────────────────────────
        let table = CaptionTable::load(self.root.join(&cfg.caption_fpath))?;
        let keys  = table.video_keys();
        let clips_available = keys.len();

        // ── Step 3: Partition ─────────────────────────────────────────────────
        let split = split_video_keys(keys, cfg)?;
        tracing::info!(
            "Split '{}' with seed {}: {} train, {} val, {} test of {} clips",
            cfg.corpus,
            cfg.random_seed,
            split.train.len(),
            split.val.len(),
            split.test.len(),
            clips_available,
        );

        // ── Step 4: Write metadata ────────────────────────────────────────────
        if self.dry_run {
            let reports = Split::ALL
                .iter()
                .map(|&which| {
                    let keys = split.keys(which);
                    SplitReport { split: which, clips: keys.len(), captions: table.count_subset(keys) }
                })
                .collect();
            return Ok(SplitOutcome { clips_available, reports, written: false });
        }

        let reports = write_split_metadata(&table, &split, cfg, &self.root)?;
        Ok(SplitOutcome { clips_available, reports, written: true })
    }
}
