// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments,
// layers the flags over the settings file, and prints results.
// All configuration logic is delegated to Layer 2 (application).
//
// Four commands are supported:
//   1. `split`    — partitions the corpus captions
//   2. `train`    — builds a run configuration (and run id)
//   3. `eval`     — resolves the checkpoint to evaluate
//   4. `defaults` — prints the default settings file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::application::eval_use_case::{EvalSource, EvalUseCase};
use crate::application::split_use_case::SplitUseCase;
use crate::application::train_use_case::TrainUseCase;
use crate::config::{Settings, SplitConfig};
use crate::infra::settings_file::{load_settings, render_defaults};
use commands::{Commands, EvalArgs, SplitArgs, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "recnet-config",
    version,
    about = "Configure RecNet video captioning runs: corpus splits, run ids, checkpoints."
)]
pub struct Cli {
    /// TOML settings file with optional [split], [train] and [eval] tables
    #[arg(long, global = true, env = "RECNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the relative data/, logs/ and checkpoints/ paths live under
    #[arg(long, global = true, env = "RECNET_ROOT", default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        let Cli { config, root, command } = self;

        if let Commands::Defaults = command {
            print!("{}", render_defaults()?);
            return Ok(());
        }

        let settings = load_settings(config.as_deref())?;
        match command {
            Commands::Split(args) => run_split(args, settings, &root),
            Commands::Train(args) => run_train(args, settings, &root),
            Commands::Eval(args)  => run_eval(args, settings, &root),
            Commands::Defaults    => Ok(()),
        }
    }
}

fn run_split(args: SplitArgs, mut settings: Settings, root: &Path) -> Result<()> {
    args.apply(&mut settings.split);

    let use_case = SplitUseCase::new(SplitConfig::new(settings.split), root, args.dry_run);
    let outcome  = use_case.execute()?;
    let cfg      = use_case.config();

    println!("{} clips in {}", outcome.clips_available, cfg.caption_fpath);
    for report in &outcome.reports {
        println!(
            "  {:<5} {:>5} clips {:>7} captions  → {}",
            report.split.as_str(),
            report.clips,
            report.captions,
            cfg.metadata_fpath(report.split),
        );
    }
    if !outcome.written {
        println!("Dry run: no metadata written.");
    }
    Ok(())
}

fn run_train(args: TrainArgs, mut settings: Settings, root: &Path) -> Result<()> {
    args.apply(&mut settings.train);

    let outcome = TrainUseCase::new(settings.train, root, args.prepare).execute()?;
    let cfg     = &outcome.config;

    if args.json {
        let json = serde_json::to_string_pretty(cfg).context("Cannot serialise TrainConfig")?;
        println!("{json}");
        return Ok(());
    }

    let methods: Vec<String> = cfg.search_methods.iter().map(|m| m.id()).collect();
    println!("Run id:         {}", cfg.id);
    println!("Logs:           {}", cfg.log_dpath);
    println!("Checkpoints:    {}", cfg.save_dpath);
    println!("Search methods: {}", methods.join(", "));
    println!("Score labels:   {}", cfg.tx_score.len());
    println!(
        "Saves:          {} (every {} of {} iterations)",
        cfg.checkpoint_iterations().len(),
        cfg.cadence.save_every,
        cfg.n_iterations,
    );
    if let Some(path) = &outcome.snapshot {
        println!("Snapshot:       {}", path.display());
    }
    Ok(())
}

fn run_eval(args: EvalArgs, mut settings: Settings, root: &Path) -> Result<()> {
    args.apply(&mut settings.eval);

    let source = match args.from_snapshot {
        Some(path) => EvalSource::Snapshot {
            path,
            model_dpath:     settings.eval.model_dpath,
            model_iteration: settings.eval.model_iteration,
        },
        None => EvalSource::Settings(settings.eval),
    };
    let outcome = EvalUseCase::new(source, root).execute()?;

    println!("Model id:   {}", outcome.config.model_id);
    println!("Checkpoint: {}", outcome.config.model_fpath);
    println!("Test data:  {}", outcome.config.test_caption_fpath);
    if !outcome.checkpoint_exists {
        println!("(checkpoint file not found)");
    }
    Ok(())
}
