//! anglicism - English loanword detection for Serbian tweets

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use anglicism::config::{load_config, save_config, ClassifierConfig};
use anglicism::report::Report;
use anglicism::{corpus, Classifier, Lexicon, Result};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "anglicism", about = "Flags English loanwords in Serbian texts")]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a corpus and write the four-bucket report.
    Classify {
        /// Native (Serbian) word list, one word per line.
        #[clap(long)]
        native: PathBuf,

        /// Foreign (English) word list, one word per line.
        #[clap(long)]
        foreign: PathBuf,

        /// Corpus: one text per line, or a .conllu file.
        #[clap(long)]
        corpus: PathBuf,

        /// JSON settings file.
        #[clap(long)]
        config: Option<PathBuf>,

        /// Report output (JSON). Only the summary is printed when omitted.
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Context window for ambiguous dictionary words.
        #[clap(long)]
        window: Option<usize>,

        /// Fuzzy threshold deciding the fuzzy flag (0-100).
        #[clap(long)]
        threshold: Option<f64>,

        /// Fuzzy threshold for reported fuzzy tokens (0-100).
        #[clap(long)]
        report_threshold: Option<f64>,

        /// Classify texts in parallel.
        #[clap(long)]
        parallel: bool,
    },

    /// Write the default settings file.
    InitConfig {
        path: PathBuf,
    },
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::InitConfig { path } => {
            save_config(&path, &ClassifierConfig::default())?;
            println!("Wrote default config to {}", path.display());
        }
        Command::Classify {
            native,
            foreign,
            corpus: corpus_path,
            config,
            output,
            window,
            threshold,
            report_threshold,
            parallel,
        } => {
            let mut config = match config {
                Some(path) => load_config(path)?,
                None => ClassifierConfig::default(),
            };
            if let Some(w) = window {
                config = config.with_window(w);
            }
            if let Some(t) = threshold {
                config = config.with_flag_threshold(t);
            }
            if let Some(t) = report_threshold {
                config = config.with_report_threshold(t);
            }
            if parallel {
                config = config.with_parallel(true);
            }

            // lexicon failures abort before any classification
            let native = Lexicon::load(&native)?;
            let foreign = Lexicon::load(&foreign)?;
            let texts = corpus::load(&corpus_path)?;

            let classifier = Classifier::new(native, foreign, &config)?;
            let partition = classifier.partition(texts.as_slice());
            let report = Report::new(&partition);

            if let Some(path) = output {
                report.save(&path)?;
                println!("Saved subsets to {}:", path.display());
            } else {
                println!("Subsets:");
            }
            for line in report.summary() {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
