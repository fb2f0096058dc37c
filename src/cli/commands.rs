// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands: `split`, `train`, `eval` and
// `defaults`, and their override flags.
//
// Every override is optional. A flag (or its env variable) that
// is given replaces the matching settings field after the
// settings file has been applied:
//
//   defaults  →  --config file  →  flags / env
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - env variable fallbacks (the `env` feature)
//   - type conversion (string → usize, u64, RnnCell, ...)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::{EvalSettings, SplitSettings, TrainSettings};
use crate::domain::model::{ReconstructorKind, RnnCell};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partition the corpus captions into train / val / test metadata
    Split(SplitArgs),

    /// Build a training run configuration and derive its run id
    Train(TrainArgs),

    /// Locate the checkpoint an evaluation run should load
    Eval(EvalArgs),

    /// Print the full default settings as TOML
    Defaults,
}

// ─── split ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Corpus name, e.g. MSVD
    #[arg(long, env = "RECNET_CORPUS")]
    pub corpus: Option<String>,

    /// Feature extractor the video features were produced with
    #[arg(long, env = "RECNET_ENCODER_MODEL")]
    pub encoder_model: Option<String>,

    /// Seed of the clip shuffle
    #[arg(long, env = "RECNET_SEED")]
    pub seed: Option<u64>,

    #[arg(long)]
    pub n_train: Option<usize>,

    #[arg(long)]
    pub n_val: Option<usize>,

    #[arg(long)]
    pub n_test: Option<usize>,

    /// Compute and report the split without writing metadata files
    #[arg(long)]
    pub dry_run: bool,
}

impl SplitArgs {
    pub fn apply(&self, settings: &mut SplitSettings) {
        if let Some(corpus) = &self.corpus {
            settings.corpus = corpus.clone();
        }
        if let Some(encoder_model) = &self.encoder_model {
            settings.encoder_model = encoder_model.clone();
        }
        if let Some(seed) = self.seed {
            settings.random_seed = seed;
        }
        if let Some(n) = self.n_train {
            settings.n_train = n;
        }
        if let Some(n) = self.n_val {
            settings.n_val = n;
        }
        if let Some(n) = self.n_test {
            settings.n_test = n;
        }
    }
}

// ─── train ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct TrainArgs {
    #[arg(long, env = "RECNET_CORPUS")]
    pub corpus: Option<String>,

    #[arg(long, env = "RECNET_ENCODER_MODEL")]
    pub encoder_model: Option<String>,

    /// Decoder RNN cell: GRU or LSTM
    #[arg(long)]
    pub decoder_model: Option<RnnCell>,

    /// Reconstructor RNN cell: GRU or LSTM
    #[arg(long)]
    pub reconstructor_model: Option<RnnCell>,

    /// Reconstructor type: global or local
    #[arg(long)]
    pub reconstructor_type: Option<ReconstructorKind>,

    /// Train the decoder alone, without a reconstructor
    #[arg(long)]
    pub no_recon: bool,

    #[arg(long)]
    pub batch_size: Option<usize>,

    #[arg(long)]
    pub n_iterations: Option<usize>,

    #[arg(long, env = "RECNET_DEVICE")]
    pub device: Option<String>,

    /// Create the log / checkpoint directories and write the run snapshot
    #[arg(long)]
    pub prepare: bool,

    /// Print the whole configuration as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl TrainArgs {
    pub fn apply(&self, settings: &mut TrainSettings) {
        if let Some(corpus) = &self.corpus {
            settings.corpus = corpus.clone();
        }
        if let Some(encoder_model) = &self.encoder_model {
            settings.encoder_model = encoder_model.clone();
        }
        if let Some(cell) = self.decoder_model {
            settings.decoder_model = cell;
        }
        if let Some(cell) = self.reconstructor_model {
            settings.reconstructor_model = cell;
        }
        if let Some(kind) = self.reconstructor_type {
            settings.reconstructor_type = kind;
        }
        if self.no_recon {
            settings.use_recon = false;
        }
        if let Some(batch_size) = self.batch_size {
            settings.batch_size = batch_size;
        }
        if let Some(n_iterations) = self.n_iterations {
            settings.n_iterations = n_iterations;
        }
        if let Some(device) = &self.device {
            settings.device = device.clone();
        }
    }
}

// ─── eval ─────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[arg(long, env = "RECNET_CORPUS")]
    pub corpus: Option<String>,

    #[arg(long, env = "RECNET_ENCODER_MODEL")]
    pub encoder_model: Option<String>,

    #[arg(long, env = "RECNET_DEVICE")]
    pub device: Option<String>,

    /// Directory holding one sub-directory per run id
    #[arg(long)]
    pub model_dpath: Option<String>,

    /// Run id of the trained model
    #[arg(long, conflicts_with = "from_snapshot")]
    pub model_id: Option<String>,

    /// Training iteration of the checkpoint to load
    #[arg(long)]
    pub iteration: Option<usize>,

    /// Take the run id from a train_config.json snapshot
    #[arg(long)]
    pub from_snapshot: Option<PathBuf>,
}

impl EvalArgs {
    pub fn apply(&self, settings: &mut EvalSettings) {
        if let Some(corpus) = &self.corpus {
            settings.corpus = corpus.clone();
        }
        if let Some(encoder_model) = &self.encoder_model {
            settings.encoder_model = encoder_model.clone();
        }
        if let Some(device) = &self.device {
            settings.device = device.clone();
        }
        if let Some(model_dpath) = &self.model_dpath {
            settings.model_dpath = model_dpath.clone();
        }
        if let Some(model_id) = &self.model_id {
            settings.model_id = model_id.clone();
        }
        if let Some(iteration) = self.iteration {
            settings.model_iteration = iteration;
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["recnet-config"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_unset_flags_keep_settings() {
        let Commands::Split(args) = parse(&["split"]) else { panic!("expected split") };
        let mut settings = SplitSettings { random_seed: 7, ..SplitSettings::default() };
        args.apply(&mut settings);
        assert_eq!(settings.random_seed, 7);
        assert_eq!(settings.corpus, "MSVD");
    }

    #[test]
    fn test_train_flags_override() {
        let Commands::Train(args) =
            parse(&["train", "--decoder-model", "lstm", "--no-recon", "--batch-size", "32"])
        else {
            panic!("expected train")
        };
        let mut settings = TrainSettings::default();
        args.apply(&mut settings);
        assert_eq!(settings.decoder_model, RnnCell::Lstm);
        assert!(!settings.use_recon);
        assert_eq!(settings.batch_size, 32);
    }

    #[test]
    fn test_eval_model_id_conflicts_with_snapshot() {
        let result = Cli::try_parse_from([
            "recnet-config",
            "eval",
            "--model-id",
            "x",
            "--from-snapshot",
            "run.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_cell_rejected() {
        assert!(Cli::try_parse_from(["recnet-config", "train", "--decoder-model", "rnn"]).is_err());
    }
}
