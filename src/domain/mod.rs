// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure types that describe a RecNet run configuration:
// decoding strategies, architecture variants, the score label
// table, timestamps, and the rules for rendering numbers inside
// run identifiers.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CLI or logging setup
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The single construction error
pub mod error;

// RNN cells, frame sampling, reconstructor kinds, optimizers
pub mod model;

// Repr-style float rendering for identifiers
pub mod number;

// (method, metric) → label lookup
pub mod score_table;

// Greedy / beam search
pub mod search_method;

// UTC run timestamps
pub mod timestamp;

// Id segment abstraction
pub mod traits;
