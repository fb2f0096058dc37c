// ============================================================
// Layer 3 — Model Variant Types
// ============================================================
// Small closed enumerations for the architecture choices that
// show up in a run configuration. Each one serialises to (and
// renders as) the exact literal the run identifiers use, so a
// settings file can say `decoder_model = "GRU"` and the id will
// contain "DEC GRU-1 ...".
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── RnnCell ──────────────────────────────────────────────────────────────────
/// Recurrent cell used by the decoder and the reconstructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RnnCell {
    #[serde(rename = "LSTM")]
    Lstm,
    #[serde(rename = "GRU")]
    Gru,
}

impl fmt::Display for RnnCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RnnCell::Lstm => write!(f, "LSTM"),
            RnnCell::Gru  => write!(f, "GRU"),
        }
    }
}

impl FromStr for RnnCell {
    type Err = String;

    /// Case-insensitive, so `--decoder-model gru` works too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LSTM" => Ok(RnnCell::Lstm),
            "GRU"  => Ok(RnnCell::Gru),
            _      => Err(format!("unknown RNN cell '{s}' (expected LSTM or GRU)")),
        }
    }
}

// ─── FrameSampling ────────────────────────────────────────────────────────────
/// How frames are picked from a video's feature sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSampling {
    Uniform,
    Random,
    UniformJitter,
}

impl fmt::Display for FrameSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSampling::Uniform       => write!(f, "uniform"),
            FrameSampling::Random        => write!(f, "random"),
            FrameSampling::UniformJitter => write!(f, "uniform_jitter"),
        }
    }
}

// ─── ReconstructorKind ────────────────────────────────────────────────────────
/// Whether the reconstructor rebuilds a single global video feature
/// or attends over the decoder states to rebuild per-frame features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconstructorKind {
    Global,
    Local,
}

impl fmt::Display for ReconstructorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructorKind::Global => write!(f, "global"),
            ReconstructorKind::Local  => write!(f, "local"),
        }
    }
}

impl FromStr for ReconstructorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(ReconstructorKind::Global),
            "local"  => Ok(ReconstructorKind::Local),
            _        => Err(format!("unknown reconstructor type '{s}' (expected global or local)")),
        }
    }
}

// ─── OptimizerKind ────────────────────────────────────────────────────────────
/// Adam, optionally with the AMSGrad correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerKind {
    Adam,
    AmsGrad,
}

impl OptimizerKind {
    /// Map a `*_use_amsgrad` toggle onto the optimizer it selects.
    pub fn from_amsgrad(use_amsgrad: bool) -> Self {
        if use_amsgrad { OptimizerKind::AmsGrad } else { OptimizerKind::Adam }
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizerKind::Adam    => write!(f, "adam"),
            OptimizerKind::AmsGrad => write!(f, "amsgrad"),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_literals() {
        assert_eq!(RnnCell::Gru.to_string(), "GRU");
        assert_eq!(RnnCell::Lstm.to_string(), "LSTM");
        assert_eq!(FrameSampling::UniformJitter.to_string(), "uniform_jitter");
        assert_eq!(ReconstructorKind::Local.to_string(), "local");
    }

    #[test]
    fn test_amsgrad_toggle() {
        assert_eq!(OptimizerKind::from_amsgrad(true).to_string(), "amsgrad");
        assert_eq!(OptimizerKind::from_amsgrad(false).to_string(), "adam");
    }

    #[test]
    fn test_serde_uses_same_names_as_display() {
        let cell: RnnCell = serde_json::from_str("\"LSTM\"").unwrap();
        assert_eq!(cell, RnnCell::Lstm);

        let sampling = serde_json::to_string(&FrameSampling::UniformJitter).unwrap();
        assert_eq!(sampling, "\"uniform_jitter\"");

        let kind: ReconstructorKind = serde_json::from_str("\"global\"").unwrap();
        assert_eq!(kind, ReconstructorKind::Global);
    }

    #[test]
    fn test_parse_from_flag_text() {
        assert_eq!("gru".parse::<RnnCell>(), Ok(RnnCell::Gru));
        assert_eq!("LSTM".parse::<RnnCell>(), Ok(RnnCell::Lstm));
        assert!("rnn".parse::<RnnCell>().is_err());
        assert_eq!("global".parse::<ReconstructorKind>(), Ok(ReconstructorKind::Global));
        assert!("Local".parse::<ReconstructorKind>().is_err());
    }
}
