// ============================================================
// Layer 4 — Data Preparation
// ============================================================
// Turns the raw corpus caption file into per-split metadata
// files, driven entirely by a SplitConfig:
//
//   MSR Video Description Corpus.csv
//       │
//       ▼
//   CaptionTable      → header + rows, keyed by clip
//       │
//       ▼
//   split_video_keys  → seeded shuffle, cut into train/val/test
//       │
//       ▼
//   write_split_metadata → data/{corpus}/metadata/{split}.csv
//
// Feature stores (.hdf5) are produced by the feature extraction
// tooling and are not rewritten here.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the caption CSV and writes subsets of it
pub mod captions;

/// Seeded train/val/test partition of clip keys
pub mod splitter;
