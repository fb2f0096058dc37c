// ============================================================
// Layer 6 — Settings File
// ============================================================
// Reads the optional TOML settings document. Without a file the
// literal defaults apply unchanged.
//
// Precedence (lowest → highest):
//   built-in defaults → settings file → CLI flags / env vars
//
// The CLI layer applies its overrides on top of what this module
// returns.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::Settings;

/// Load settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        tracing::debug!("No settings file given, using defaults");
        return Ok(Settings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read settings file '{}'", path.display()))?;
    let settings: Settings = toml::from_str(&text)
        .with_context(|| format!("Invalid settings file '{}'", path.display()))?;

    tracing::info!("Loaded settings from '{}'", path.display());
    Ok(settings)
}

/// The full default settings document, as TOML.
pub fn render_defaults() -> Result<String> {
    toml::to_string_pretty(&Settings::default()).context("Cannot render default settings")
}
