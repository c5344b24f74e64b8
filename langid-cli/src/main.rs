use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use langid_core::evaluation::{europarl_codes, evaluate_sweep, SweepRow};
use langid_core::{train_profiles, LangMatcher, ModelParams, TextEncoding};

/// Character n-gram language identification.
#[derive(Parser)]
#[command(name = "langid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build "<n>-<limit>" model directories from a folder of corpora
    Train {
        /// Folder with one corpus per language ("-Latin1" suffix = Latin-1)
        #[arg(long, env = "LANGID_DATA_DIR", default_value = "./datafiles/training")]
        data_dir: PathBuf,

        /// Where model directories are created
        #[arg(long, env = "LANGID_MODELS_DIR", default_value = "./models")]
        models_dir: PathBuf,

        /// Model parameters, repeatable (e.g. -p 3-200 -p 2-200)
        #[arg(short, long = "params", default_value = "3-200")]
        params: Vec<ModelParams>,
    },

    /// Print the best matching language of each file
    Recognize {
        /// Model directory named "<n>-<limit>"
        #[arg(short, long, env = "LANGID_MODEL_DIR")]
        model_dir: PathBuf,

        /// Encoding of the input files
        #[arg(short, long, default_value = "utf-8")]
        encoding: TextEncoding,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Rank all languages for a text given as argument or on stdin
    Score {
        #[arg(short, long, env = "LANGID_MODEL_DIR")]
        model_dir: PathBuf,

        /// Number of results to print
        #[arg(short, long, default_value_t = 3)]
        k_best: usize,

        text: Option<String>,
    },

    /// Evaluate every model directory on labelled test folders
    Evaluate {
        #[arg(long, env = "LANGID_MODELS_DIR", default_value = "./models")]
        models_dir: PathBuf,

        /// Test folders; file extensions are Europarl language codes
        #[arg(long = "test-dir", required = true)]
        test_dirs: Vec<PathBuf>,

        /// Also list every misclassified file
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Train { data_dir, models_dir, params } => {
            for params in params {
                let model_dir = train_profiles(&data_dir, &models_dir, params)
                    .with_context(|| format!("training {params} models from {}", data_dir.display()))?;
                log::info!("Model {params} written to {}", model_dir.display());
                println!("{}", model_dir.display());
            }
        }
        Command::Recognize { model_dir, encoding, files } => {
            let matcher = load_matcher(&model_dir)?;
            for file in files {
                let best = matcher
                    .recognize_with_encoding(&file, encoding)
                    .with_context(|| format!("recognizing {}", file.display()))?;
                log::debug!("{} best matches {} ({})", file.display(), best.label, best.similarity);
                println!("{}\t{}\t{:.6}", file.display(), best.label, best.similarity);
            }
        }
        Command::Score { model_dir, k_best, text } => {
            let matcher = load_matcher(&model_dir)?;
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
                    buffer
                }
            };
            for (rank, score) in matcher.score(&text, k_best)?.iter().enumerate() {
                println!("{}. {}\t{:.6}", rank + 1, score.label, score.similarity);
            }
        }
        Command::Evaluate { models_dir, test_dirs, verbose } => {
            let rows = evaluate_sweep(&models_dir, &test_dirs, &europarl_codes())
                .with_context(|| format!("evaluating models in {}", models_dir.display()))?;
            log::info!("Evaluated {} model/test folder combinations", rows.len());
            print_sweep(&rows, verbose);
        }
    }

    Ok(())
}

fn load_matcher(model_dir: &Path) -> Result<LangMatcher> {
    LangMatcher::new(model_dir).with_context(|| format!("loading model {}", model_dir.display()))
}

/// Prints one table per n-gram kind.
fn print_sweep(rows: &[SweepRow], verbose: bool) {
    let mut kinds: Vec<&str> = Vec::new();
    for row in rows {
        if !kinds.contains(&row.ngram_kind.as_str()) {
            kinds.push(&row.ngram_kind);
        }
    }

    for kind in kinds {
        println!("{kind}");
        println!("{:>6} {:>6} {:>16} {:>10}", "ngram", "limit", "sentence length", "correct %");
        for row in rows.iter().filter(|row| row.ngram_kind == kind) {
            println!(
                "{:>6} {:>6} {:>16} {:>10.2}",
                row.params.ngram_size,
                row.params.table_limit,
                row.sentence_length,
                row.report.accuracy()
            );
            if verbose {
                for miss in &row.report.misses {
                    println!("        {} {} ERROR {}", miss.file, miss.predicted, miss.expected);
                }
            }
        }
        println!();
    }
}
