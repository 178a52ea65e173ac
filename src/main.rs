// src/main.rs
mod catalog;
mod extractors;
mod menu;
mod pipeline;
mod storage;
mod utils;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use catalog::fixture::{write_fixture, DEFAULT_FIXTURE_PATH};
use catalog::sample::{seeded_rng, DEFAULT_SAMPLE_COUNT};
use extractors::product::{DEFAULT_EARLY_EXIT_THRESHOLD, DEFAULT_MAX_PRODUCTS};
use extractors::ExtractorConfig;
use menu::MenuAction;
use pipeline::{Job, RunOptions};
use storage::{normalize_csv_path, DEFAULT_OUTPUT_PATH};
use utils::AppError;

/// Command Line Interface for the product listing extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output CSV file (".csv" is appended if missing); JSON is written alongside
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT_PATH)]
    output: String,

    /// Seed for sample ratings (defaults to the current time)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug mode - save an annotated copy of parsed HTML next to the CSV
    #[arg(short, long, global = true)]
    debug: bool,

    /// Stop trying further container patterns once this many products are found
    #[arg(long, global = true, env = "EXTRACTOR_EARLY_EXIT", default_value_t = DEFAULT_EARLY_EXIT_THRESHOLD)]
    early_exit_threshold: usize,

    /// Maximum number of products extracted from one document
    #[arg(long, global = true, env = "EXTRACTOR_MAX_PRODUCTS", default_value_t = DEFAULT_MAX_PRODUCTS)]
    max_products: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract products from an HTML file
    Parse {
        /// HTML document to read
        input: PathBuf,
    },
    /// Generate sample products (at most 20)
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
    },
    /// Write the sample HTML fixture
    Fixture {
        #[arg(default_value = DEFAULT_FIXTURE_PATH)]
        path: PathBuf,
    },
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    if args.max_products == 0 {
        return Err(AppError::Config("--max-products must be at least 1".to_string()));
    }

    // 3. Resolve what to do, either from the subcommand or the interactive menu
    let (job, output) = match args.command {
        Some(Command::Fixture { path }) => {
            create_fixture(&path);
            return Ok(());
        }
        Some(Command::Parse { input }) => (Job::ParseFile(input), normalize_csv_path(&args.output)),
        Some(Command::Generate { count }) => (Job::Generate(count), normalize_csv_path(&args.output)),
        None => match menu::run_menu() {
            Ok(MenuAction::FixtureCreated(path)) => {
                tracing::debug!("Fixture ready at {}", path.display());
                return Ok(());
            }
            Ok(MenuAction::Run { job, output }) => (job, output),
            Err(e) => {
                tracing::error!("Error: {}", e);
                return Ok(());
            }
        },
    };

    let options = RunOptions {
        output,
        debug: args.debug,
        extractor: ExtractorConfig {
            max_products: args.max_products,
            early_exit_threshold: args.early_exit_threshold,
            ..ExtractorConfig::default()
        },
    };

    // 4. Seed once per run and process
    let mut rng = seeded_rng(args.seed);
    match pipeline::process(&job, &options, &mut rng) {
        Ok(products) => tracing::info!("Processing finished. {} products written.", products.len()),
        Err(e) => tracing::error!("Error: {}", e),
    }

    Ok(())
}

/// Writes the sample fixture, logging a failure instead of aborting the run.
fn create_fixture(path: &Path) -> bool {
    match write_fixture(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Could not create sample HTML file {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fixture_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.html");
        assert!(create_fixture(&path));
        assert!(path.exists());
    }

    #[test]
    fn test_create_fixture_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sample.html");
        assert!(!create_fixture(&path));
        assert!(!path.exists());
    }
}
