// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per CLI command. Each one builds the record it
// needs from settings, hands it to the data or infra layer, and
// returns an outcome for the CLI to report.
//
// Rules for this layer:
//   - No identifier or path formatting here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layers 4 and 6)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus split into train/val/test metadata
pub mod split_use_case;

// New training run configuration
pub mod train_use_case;

// Checkpoint lookup for evaluation
pub mod eval_use_case;
