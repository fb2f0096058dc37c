// ============================================================
// Layer 5 — Run Configuration
// ============================================================
// The three configuration records of the RecNet pipeline:
//
//   SplitConfig  — how the corpus is partitioned, and where
//                  each partition's files live
//   TrainConfig  — every hyperparameter of one training run,
//                  its run id, and its log/checkpoint dirs
//   EvalConfig   — where a trained checkpoint lives
//
// Each record is built by an ordinary constructor from a raw
// settings struct and is read-only afterwards. Records do not
// depend on each other at construction time.
//
// Nothing in this layer opens a file: paths are produced here
// and consumed by the data and infra layers.
//
// Reference: Rust Book §5 (Structs), serde documentation

/// Path templates for data, logs and checkpoints
pub mod paths;

/// Typed sections of a TrainConfig and their id segments
pub mod sections;

/// Root settings document (split / train / eval tables)
pub mod settings;

/// Corpus split record
pub mod split;

/// Training run record
pub mod train;

/// Evaluation checkpoint record
pub mod eval;

pub use crate::domain::error::ConfigError;
pub use eval::{EvalConfig, EvalSettings};
pub use settings::Settings;
pub use split::{SplitConfig, SplitSettings};
pub use train::{TrainConfig, TrainSettings};
