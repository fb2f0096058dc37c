// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem on behalf of the
// configuration records:
//
//   settings_file.rs — Reads the optional TOML settings document
//                      and renders the defaults as TOML.
//
//   run_store.rs     — Creates a run's log and checkpoint
//                      directories and saves / reloads the
//                      settings snapshot a run was built from.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// TOML settings loading
pub mod settings_file;

/// Run directories and settings snapshots
pub mod run_store;
