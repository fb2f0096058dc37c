// ============================================================
// Layer 5 — Configuration Sections and Their Id Segments
// ============================================================
// A TrainConfig is grouped into sections. Each section that shows
// up in the run id implements IdSegment with a fixed format:
//
//   corpus         {corpus} tc-{caption_max_len} mc-{min_count} sp-{sampling}
//   encoder        ENC {model} sm-{output_len}
//   decoder        DEC {model}-{layers} at-{attn} dr-{dr}-{out_dr} tf-{tf}
//                      lr-{lr}-wd-{wd} op-{adam|amsgrad}
//   reconstructor  REC-{type} {model} lr-{lr}-wd-{wd} op-{adam|amsgrad}[ at-{attn}]
//   embedding      EMB {size} dr-{dropout} sc-{scale}
//   hyperparams    bs-{batch_size}[ | cp-{gradient_clip}]
//
// Floats go through `repr_f64` so "1e-05" stays "1e-05".
// Changing any of these formats orphans existing log and
// checkpoint directories.

use serde::Serialize;

use crate::domain::model::{FrameSampling, OptimizerKind, ReconstructorKind, RnnCell};
use crate::domain::number::repr_f64;
use crate::domain::traits::IdSegment;

// ─── Corpus ───────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSection {
    pub corpus:                String,
    pub caption_max_len:       usize,
    pub min_count:             usize,
    pub frame_sampling_method: FrameSampling,
}

impl IdSegment for CorpusSection {
    fn id_segment(&self) -> Option<String> {
        Some(format!(
            "{} tc-{} mc-{} sp-{}",
            self.corpus, self.caption_max_len, self.min_count, self.frame_sampling_method
        ))
    }
}

// ─── Encoder ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncoderSection {
    pub model:       String,
    pub output_size: usize,
    pub output_len:  usize,
}

impl IdSegment for EncoderSection {
    fn id_segment(&self) -> Option<String> {
        Some(format!("ENC {} sm-{}", self.model, self.output_len))
    }
}

// ─── Decoder ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoderSection {
    pub model:                 RnnCell,
    pub n_layers:              usize,
    pub hidden_size:           usize,
    pub attn_size:             usize,
    pub dropout:               f64,
    pub out_dropout:           f64,
    pub teacher_forcing_ratio: f64,
    pub learning_rate:         f64,
    pub weight_decay:          f64,
    pub optimizer:             OptimizerKind,
}

impl IdSegment for DecoderSection {
    fn id_segment(&self) -> Option<String> {
        Some(format!(
            "DEC {}-{} at-{} dr-{}-{} tf-{} lr-{}-wd-{} op-{}",
            self.model,
            self.n_layers,
            self.attn_size,
            repr_f64(self.dropout),
            repr_f64(self.out_dropout),
            repr_f64(self.teacher_forcing_ratio),
            repr_f64(self.learning_rate),
            repr_f64(self.weight_decay),
            self.optimizer,
        ))
    }
}

// ─── Reconstructor ────────────────────────────────────────────────────────────
/// Hyperparameters shared by both reconstructor variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconstructorParams {
    pub model:           RnnCell,
    pub n_layers:        usize,
    pub hidden_size:     usize,
    pub decoder_dropout: f64,
    pub dropout:         f64,
    pub learning_rate:   f64,
    pub weight_decay:    f64,
    pub optimizer:       OptimizerKind,
}

/// The optional reconstructor. Attention size only exists for the
/// local variant, and nothing exists when reconstruction is off.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reconstructor {
    Disabled,
    Global(ReconstructorParams),
    Local {
        params:    ReconstructorParams,
        attn_size: usize,
    },
}

impl Reconstructor {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Reconstructor::Disabled)
    }

    pub fn kind(&self) -> Option<ReconstructorKind> {
        match self {
            Reconstructor::Disabled     => None,
            Reconstructor::Global(_)    => Some(ReconstructorKind::Global),
            Reconstructor::Local { .. } => Some(ReconstructorKind::Local),
        }
    }

    pub fn params(&self) -> Option<&ReconstructorParams> {
        match self {
            Reconstructor::Disabled             => None,
            Reconstructor::Global(params)       => Some(params),
            Reconstructor::Local { params, .. } => Some(params),
        }
    }

    pub fn attn_size(&self) -> Option<usize> {
        match self {
            Reconstructor::Local { attn_size, .. } => Some(*attn_size),
            _                                      => None,
        }
    }
}

impl IdSegment for Reconstructor {
    fn id_segment(&self) -> Option<String> {
        let (kind, params) = (self.kind()?, self.params()?);
        let mut id = format!(
            "REC-{} {} lr-{}-wd-{} op-{}",
            kind,
            params.model,
            repr_f64(params.learning_rate),
            repr_f64(params.weight_decay),
            params.optimizer,
        );
        if let Some(attn_size) = self.attn_size() {
            id.push_str(&format!(" at-{attn_size}"));
        }
        Some(id)
    }
}

// ─── Embedding ────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddingSection {
    pub size:    usize,
    pub dropout: f64,
    pub scale:   u32,
}

impl IdSegment for EmbeddingSection {
    fn id_segment(&self) -> Option<String> {
        Some(format!("EMB {} dr-{} sc-{}", self.size, repr_f64(self.dropout), self.scale))
    }
}

// ─── Hyperparameters ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hyperparams {
    pub batch_size:    usize,
    /// Max gradient norm; None when clipping is off.
    pub gradient_clip: Option<f64>,
}

impl IdSegment for Hyperparams {
    fn id_segment(&self) -> Option<String> {
        let mut id = format!("bs-{}", self.batch_size);
        if let Some(clip) = self.gradient_clip {
            id.push_str(&format!(" | cp-{}", repr_f64(clip)));
        }
        Some(id)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn rec_params(use_amsgrad: bool) -> ReconstructorParams {
        ReconstructorParams {
            model:           RnnCell::Gru,
            n_layers:        1,
            hidden_size:     1536,
            decoder_dropout: 0.5,
            dropout:         0.5,
            learning_rate:   1e-6,
            weight_decay:    1e-5,
            optimizer:       OptimizerKind::from_amsgrad(use_amsgrad),
        }
    }

    #[test]
    fn test_local_reconstructor_id_has_attention() {
        let rec = Reconstructor::Local { params: rec_params(false), attn_size: 128 };
        assert_eq!(
            rec.id_segment().as_deref(),
            Some("REC-local GRU lr-1e-06-wd-1e-05 op-adam at-128")
        );
    }

    #[test]
    fn test_global_reconstructor_id_has_no_attention() {
        let rec = Reconstructor::Global(rec_params(true));
        assert_eq!(
            rec.id_segment().as_deref(),
            Some("REC-global GRU lr-1e-06-wd-1e-05 op-amsgrad")
        );
        assert_eq!(rec.attn_size(), None);
    }

    #[test]
    fn test_disabled_reconstructor_has_no_id() {
        let rec = Reconstructor::Disabled;
        assert!(!rec.is_enabled());
        assert!(rec.id_segment().is_none());
        assert!(rec.params().is_none());
    }

    #[test]
    fn test_hyperparams_clip_suffix() {
        let clipped = Hyperparams { batch_size: 100, gradient_clip: Some(50.0) };
        assert_eq!(clipped.id_segment().as_deref(), Some("bs-100 | cp-50.0"));

        let unclipped = Hyperparams { batch_size: 100, gradient_clip: None };
        assert_eq!(unclipped.id_segment().as_deref(), Some("bs-100"));
    }

    #[test]
    fn test_decoder_id() {
        let dec = DecoderSection {
            model:                 RnnCell::Gru,
            n_layers:              1,
            hidden_size:           512,
            attn_size:             128,
            dropout:               0.5,
            out_dropout:           0.5,
            teacher_forcing_ratio: 1.0,
            learning_rate:         1e-4,
            weight_decay:          1e-5,
            optimizer:             OptimizerKind::AmsGrad,
        };
        assert_eq!(
            dec.id_segment().as_deref(),
            Some("DEC GRU-1 at-128 dr-0.5-0.5 tf-1.0 lr-0.0001-wd-1e-05 op-amsgrad")
        );
    }

    #[test]
    fn test_embedding_and_corpus_ids() {
        let emb = EmbeddingSection { size: 468, dropout: 0.5, scale: 1 };
        assert_eq!(emb.id_segment().as_deref(), Some("EMB 468 dr-0.5 sc-1"));

        let corpus = CorpusSection {
            corpus:                "MSVD".to_string(),
            caption_max_len:       30,
            min_count:             5,
            frame_sampling_method: FrameSampling::Uniform,
        };
        assert_eq!(corpus.id_segment().as_deref(), Some("MSVD tc-30 mc-5 sp-uniform"));
    }
}
