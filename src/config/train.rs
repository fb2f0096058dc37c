// ============================================================
// Layer 5 — TrainConfig
// ============================================================
// The full hyperparameter and path surface of one training run.
//
// Built in one step from flat, serde-friendly `TrainSettings` plus
// the run timestamp:
//
//   TrainSettings ──┐
//                   ├──► TrainConfig::new ──► TrainConfig (read-only)
//   RunTimestamp  ──┘
//
// Construction derives:
//   - data paths for the whole corpus and each split
//   - typed sections (decoder, optional reconstructor, ...)
//   - the sub-ids and the " | "-joined run id
//   - log / checkpoint directories named after the run id
//   - the score label table
//
// The only failure is an unsupported search-method entry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::config::paths::{self, Split};
use crate::config::sections::{
    CorpusSection, DecoderSection, EmbeddingSection, EncoderSection, Hyperparams, Reconstructor,
    ReconstructorParams,
};
use crate::domain::error::ConfigError;
use crate::domain::model::{FrameSampling, OptimizerKind, ReconstructorKind, RnnCell};
use crate::domain::score_table::ScoreTable;
use crate::domain::search_method::SearchMethod;
use crate::domain::timestamp::RunTimestamp;
use crate::domain::traits::{join_segments, IdSegment};

// ─── Raw settings ─────────────────────────────────────────────────────────────
/// Every tunable value of a training run, with the defaults used for
/// the published MSVD runs. Field names match the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainSettings {
    pub model:               String,
    pub corpus:              String,
    pub encoder_model:       String,
    pub decoder_model:       RnnCell,
    pub reconstructor_model: RnnCell,
    pub device:              String,

    // Data loader
    pub build_train_data_loader: bool,
    pub build_val_data_loader:   bool,
    pub build_test_data_loader:  bool,
    pub build_score_data_loader: bool,
    pub min_count:               usize,
    pub frame_sampling_method:   FrameSampling,
    pub caption_max_len:         usize,
    pub batch_size:              usize,
    pub shuffle:                 bool,
    pub num_workers:             usize,

    // Word embedding
    pub embedding_size:    usize,
    pub embedding_dropout: f64,
    pub embedding_scale:   u32,

    // Encoder
    pub encoder_output_size: usize,
    pub encoder_output_len:  usize,

    // Decoder
    pub decoder_n_layers:              usize,
    pub decoder_hidden_size:           usize,
    pub decoder_attn_size:             usize,
    pub decoder_dropout:               f64,
    pub decoder_out_dropout:           f64,
    pub decoder_teacher_forcing_ratio: f64,

    // Reconstructor (ignored unless use_recon)
    pub use_recon:                     bool,
    pub reconstructor_type:            ReconstructorKind,
    pub reconstructor_n_layers:        usize,
    pub reconstructor_hidden_size:     usize,
    pub reconstructor_decoder_dropout: f64,
    pub reconstructor_dropout:         f64,
    pub reconstructor_attn_size:       usize,

    // Train
    pub n_iterations:                usize,
    pub decoder_learning_rate:       f64,
    pub reconstructor_learning_rate: f64,
    pub decoder_weight_decay:        f64,
    pub reconstructor_weight_decay:  f64,
    pub decoder_use_amsgrad:         bool,
    pub reconstructor_use_amsgrad:   bool,
    pub use_gradient_clip:           bool,
    pub gradient_clip:               f64,

    // Test
    /// Each entry is `"greedy"` or `["beam", width]`.
    pub search_methods: Vec<Value>,
    pub scores:         Vec<String>,

    // Log
    pub log_every:      usize,
    pub validate_every: usize,
    pub test_every:     usize,
    pub save_every:     usize,

    /// Special tokens seeded into the vocabulary before counting.
    /// Kept last so it serialises as a trailing TOML table.
    pub init_word2idx: BTreeMap<String, usize>,
}

impl Default for TrainSettings {
    fn default() -> Self {
        Self {
            model:               "RecNet".to_string(),
            corpus:              "MSVD".to_string(),
            encoder_model:       "InceptionV4".to_string(),
            decoder_model:       RnnCell::Gru,
            reconstructor_model: RnnCell::Lstm,
            device:              "cuda".to_string(),

            build_train_data_loader: true,
            build_val_data_loader:   true,
            build_test_data_loader:  true,
            build_score_data_loader: true,
            min_count:               5,
            frame_sampling_method:   FrameSampling::Uniform,
            caption_max_len:         30,
            batch_size:              100,
            shuffle:                 true,
            num_workers:             4,

            embedding_size:    468,
            embedding_dropout: 0.5,
            embedding_scale:   1,

            encoder_output_size: 1536,
            encoder_output_len:  28,

            decoder_n_layers:              1,
            decoder_hidden_size:           512,
            decoder_attn_size:             128,
            decoder_dropout:               0.5,
            decoder_out_dropout:           0.5,
            decoder_teacher_forcing_ratio: 1.0,

            use_recon:                     true,
            reconstructor_type:            ReconstructorKind::Local,
            reconstructor_n_layers:        1,
            reconstructor_hidden_size:     1536,
            reconstructor_decoder_dropout: 0.5,
            reconstructor_dropout:         0.5,
            reconstructor_attn_size:       128,

            n_iterations:                100_000,
            decoder_learning_rate:       1e-5,
            reconstructor_learning_rate: 1e-6,
            decoder_weight_decay:        1e-5,
            reconstructor_weight_decay:  1e-5,
            decoder_use_amsgrad:         true,
            reconstructor_use_amsgrad:   false,
            use_gradient_clip:           true,
            gradient_clip:               50.0,

            search_methods: vec![json!("greedy"), json!(["beam", 5])],
            scores: ["Bleu_1", "Bleu_2", "Bleu_3", "Bleu_4", "CIDEr", "METEOR", "ROUGE_L"]
                .iter()
                .map(|s| s.to_string())
                .collect(),

            log_every:      500,
            validate_every: 5_000,
            test_every:     10_000,
            save_every:     100_000,

            init_word2idx: [("<PAD>", 0), ("<SOS>", 1), ("<EOS>", 2)]
                .iter()
                .map(|(token, idx)| (token.to_string(), *idx))
                .collect(),
        }
    }
}

// ─── Derived pieces ───────────────────────────────────────────────────────────

/// Which data loaders the training driver should build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataLoaderToggles {
    pub train: bool,
    pub val:   bool,
    pub test:  bool,
    pub score: bool,
}

/// Feature and caption files for the whole corpus and each split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPaths {
    pub total_video_fpath:   String,
    pub total_caption_fpath: String,
    pub train_video_fpath:   String,
    pub train_caption_fpath: String,
    pub val_video_fpath:     String,
    pub val_caption_fpath:   String,
    pub test_video_fpath:    String,
    pub test_caption_fpath:  String,
}

impl DataPaths {
    fn new(corpus: &str, encoder_model: &str) -> Self {
        Self {
            total_video_fpath:   paths::corpus_video_fpath(corpus, encoder_model),
            total_caption_fpath: paths::corpus_caption_fpath(corpus),
            train_video_fpath:   paths::split_video_fpath(corpus, encoder_model, Split::Train),
            train_caption_fpath: paths::split_caption_fpath(corpus, Split::Train),
            val_video_fpath:     paths::split_video_fpath(corpus, encoder_model, Split::Val),
            val_caption_fpath:   paths::split_caption_fpath(corpus, Split::Val),
            test_video_fpath:    paths::split_video_fpath(corpus, encoder_model, Split::Test),
            test_caption_fpath:  paths::split_caption_fpath(corpus, Split::Test),
        }
    }
}

/// How often the training driver logs, validates, tests and saves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogCadence {
    pub log_every:      usize,
    pub validate_every: usize,
    pub test_every:     usize,
    pub save_every:     usize,
}

/// Validation / test sizes of corpora whose standard split is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvalSplitSizes {
    pub n_val:  usize,
    pub n_test: usize,
}

impl EvalSplitSizes {
    pub fn for_corpus(corpus: &str) -> Option<Self> {
        match corpus {
            "MSVD" => Some(Self { n_val: 100, n_test: 670 }),
            _      => None,
        }
    }
}

/// Tag names the training driver logs scalars and text under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogTags {
    pub train_loss:               &'static str,
    pub train_loss_decoder:       &'static str,
    pub train_loss_reconstructor: &'static str,
    pub val_loss:                 &'static str,
    pub val_loss_decoder:         &'static str,
    pub val_loss_reconstructor:   &'static str,
    pub predicted_captions:       &'static str,
    pub lambda_decoder:           &'static str,
    pub lambda_reconstructor:     &'static str,
    pub lambda:                   &'static str,
}

impl Default for LogTags {
    fn default() -> Self {
        Self {
            train_loss:               "loss/train/total",
            train_loss_decoder:       "loss/train/decoder",
            train_loss_reconstructor: "loss/train/reconstructor",
            val_loss:                 "loss/val/total",
            val_loss_decoder:         "loss/val/decoder",
            val_loss_reconstructor:   "loss/val/reconstructor",
            predicted_captions:       "Ground Truths (GT) v.s. Predicted Captions (PD)",
            lambda_decoder:           "lambda/decoder_regularizer",
            lambda_reconstructor:     "lambda/reconstructor_regularizer",
            lambda:                   "lambda/reconstructor",
        }
    }
}

/// The individual segments the run id is made of.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunIds {
    pub corpus_id:        String,
    pub encoder_id:       String,
    pub decoder_id:       String,
    pub reconstructor_id: Option<String>,
    pub embedding_id:     String,
    pub hyperparams_id:   String,
}

// ─── TrainConfig ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainConfig {
    pub model:  String,
    pub device: String,

    pub loaders:       DataLoaderToggles,
    pub paths:         DataPaths,
    pub corpus:        CorpusSection,
    pub shuffle:       bool,
    pub num_workers:   usize,
    pub init_word2idx: BTreeMap<String, usize>,

    pub embedding:     EmbeddingSection,
    pub encoder:       EncoderSection,
    pub decoder:       DecoderSection,
    pub reconstructor: Reconstructor,

    pub n_iterations: usize,
    pub hyperparams:  Hyperparams,

    pub search_methods: Vec<SearchMethod>,
    pub scores:         Vec<String>,

    pub cadence:    LogCadence,
    pub eval_split: Option<EvalSplitSizes>,

    pub timestamp:  RunTimestamp,
    pub ids:        RunIds,
    pub id:         String,
    pub log_dpath:  String,
    pub save_dpath: String,

    pub tags:     LogTags,
    pub tx_score: ScoreTable,
}

impl TrainConfig {
    /// Build the full run configuration.
    ///
    /// Fails only when a search-method entry is unsupported; in that
    /// case nothing of the score table is built.
    pub fn new(settings: TrainSettings, timestamp: RunTimestamp) -> Result<Self, ConfigError> {
        let s = settings;

        let search_methods = SearchMethod::parse_all(&s.search_methods)?;
        let tx_score       = ScoreTable::build(&search_methods, &s.scores);

        let corpus = CorpusSection {
            corpus:                s.corpus.clone(),
            caption_max_len:       s.caption_max_len,
            min_count:             s.min_count,
            frame_sampling_method: s.frame_sampling_method,
        };
        let encoder = EncoderSection {
            model:       s.encoder_model.clone(),
            output_size: s.encoder_output_size,
            output_len:  s.encoder_output_len,
        };
        let decoder = DecoderSection {
            model:                 s.decoder_model,
            n_layers:              s.decoder_n_layers,
            hidden_size:           s.decoder_hidden_size,
            attn_size:             s.decoder_attn_size,
            dropout:               s.decoder_dropout,
            out_dropout:           s.decoder_out_dropout,
            teacher_forcing_ratio: s.decoder_teacher_forcing_ratio,
            learning_rate:         s.decoder_learning_rate,
            weight_decay:          s.decoder_weight_decay,
            optimizer:             OptimizerKind::from_amsgrad(s.decoder_use_amsgrad),
        };
        let reconstructor = reconstructor_from(&s);
        let embedding = EmbeddingSection {
            size:    s.embedding_size,
            dropout: s.embedding_dropout,
            scale:   s.embedding_scale,
        };
        let hyperparams = Hyperparams {
            batch_size:    s.batch_size,
            gradient_clip: s.use_gradient_clip.then_some(s.gradient_clip),
        };

        let ids = RunIds {
            corpus_id:        segment(&corpus),
            encoder_id:       segment(&encoder),
            decoder_id:       segment(&decoder),
            reconstructor_id: reconstructor.id_segment(),
            embedding_id:     segment(&embedding),
            hyperparams_id:   segment(&hyperparams),
        };

        // model | corpus | encoder | decoder | [reconstructor] | embedding | hyperparams | timestamp
        let model_name = s.model.clone();
        let stamp      = timestamp.to_string();
        let id = join_segments(&[
            &model_name,
            &corpus,
            &encoder,
            &decoder,
            &reconstructor,
            &embedding,
            &hyperparams,
            &stamp,
        ]);

        Ok(Self {
            model:  s.model,
            device: s.device,
            loaders: DataLoaderToggles {
                train: s.build_train_data_loader,
                val:   s.build_val_data_loader,
                test:  s.build_test_data_loader,
                score: s.build_score_data_loader,
            },
            paths:         DataPaths::new(&s.corpus, &s.encoder_model),
            eval_split:    EvalSplitSizes::for_corpus(&s.corpus),
            corpus,
            shuffle:       s.shuffle,
            num_workers:   s.num_workers,
            init_word2idx: s.init_word2idx,
            embedding,
            encoder,
            decoder,
            reconstructor,
            n_iterations: s.n_iterations,
            hyperparams,
            search_methods,
            scores: s.scores,
            cadence: LogCadence {
                log_every:      s.log_every,
                validate_every: s.validate_every,
                test_every:     s.test_every,
                save_every:     s.save_every,
            },
            timestamp,
            ids,
            log_dpath:  paths::log_dpath(&id),
            save_dpath: paths::save_dpath(&id),
            id,
            tags: LogTags::default(),
            tx_score,
        })
    }

    /// Checkpoint file this run writes at `iteration`.
    pub fn checkpoint_fpath(&self, iteration: usize) -> String {
        paths::checkpoint_fpath(paths::CHECKPOINT_ROOT, &self.id, iteration)
    }

    /// Iterations at which a checkpoint is due, up to `n_iterations`.
    pub fn checkpoint_iterations(&self) -> Vec<usize> {
        let every = self.cadence.save_every;
        if every == 0 {
            return Vec::new();
        }
        (1..=self.n_iterations / every).map(|k| k * every).collect()
    }
}

/// Segment of a section that always contributes to the id.
fn segment(part: &dyn IdSegment) -> String {
    part.id_segment().unwrap_or_default()
}

fn reconstructor_from(s: &TrainSettings) -> Reconstructor {
    if !s.use_recon {
        return Reconstructor::Disabled;
    }
    let params = ReconstructorParams {
        model:           s.reconstructor_model,
        n_layers:        s.reconstructor_n_layers,
        hidden_size:     s.reconstructor_hidden_size,
        decoder_dropout: s.reconstructor_decoder_dropout,
        dropout:         s.reconstructor_dropout,
        learning_rate:   s.reconstructor_learning_rate,
        weight_decay:    s.reconstructor_weight_decay,
        optimizer:       OptimizerKind::from_amsgrad(s.reconstructor_use_amsgrad),
    };
    match s.reconstructor_type {
        ReconstructorKind::Global => Reconstructor::Global(params),
        ReconstructorKind::Local  => Reconstructor::Local {
            params,
            attn_size: s.reconstructor_attn_size,
        },
    }
}
