//! Kaula - Main entrypoint.
//!
//! Command-line front end for the Kaula word counter. It loads configuration,
//! initializes logging, and reports the most frequent words of a text file.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kaula_lib::config::{ConfigLoader, KaulaConfig, LogConfig, Validate, ENV_PREFIX};
use kaula_lib::data_structures::HashStrategy;
use kaula_lib::error::{
    report_error, set_error_reporter, ErrorContext, KaulaError, KaulaResult,
    TracingErrorReporter,
};
use kaula_lib::word_count::{top_words_from_path, WordCount};

/// Command line arguments for Kaula.
#[derive(Parser, Debug)]
#[command(name = "kaula", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Count the words of a text file and print the most frequent ones
    Count {
        /// Text file to read
        source: PathBuf,

        /// Number of words to report
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Number of hash table buckets
        #[arg(long)]
        capacity: Option<usize>,

        /// Hash strategy: additive, position_weighted or fnv
        #[arg(long = "hash", value_name = "STRATEGY")]
        hash: Option<HashStrategy>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// One row of JSON output.
#[derive(Serialize)]
struct WordCountRow<'a> {
    word: &'a str,
    count: u64,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> KaulaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed
        .map_err(|e| KaulaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes the counted words to standard output.
fn print_words(words: &[WordCount], json: bool) -> KaulaResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let rows: Vec<WordCountRow<'_>> = words
            .iter()
            .map(|(word, count)| WordCountRow {
                word,
                count: *count,
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &rows)?;
        writeln!(out)?;
    } else {
        for (word, count) in words {
            writeln!(out, "{word}\t{count}")?;
        }
    }
    Ok(())
}

fn run(args: Args) -> KaulaResult<()> {
    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging comes up even when the configuration is broken so the failure is reported
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Count {
            source,
            top,
            capacity,
            hash,
            json,
        } => {
            let mut config = loaded?;
            if let Some(capacity) = capacity {
                config.table.capacity = capacity;
            }
            if let Some(hash) = hash {
                config.table.hash_function = hash;
            }
            if let Some(top) = top {
                config.word_count.top = top;
            }
            config.validate()?;

            info!(
                capacity = config.table.capacity,
                hash = %config.table.hash_function,
                top = config.word_count.top,
                "Starting word count"
            );
            let words = top_words_from_path(&source, config.word_count.top, &config.table)?;
            print_words(&words, json)
        }
        Command::Validate => {
            loaded?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KaulaConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KaulaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    if let Err(error) = run(args) {
        report_error(ErrorContext::new(error, "kaula"));
        process::exit(1);
    }
}
