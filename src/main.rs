use std::path::PathBuf;

use clap::{ArgAction, Parser};
use etl_tools::config::EtlConfig;
use etl_tools::etl::{self, RunOutcome};
use etl_tools::storage::{DryRun, StagingDirectory, StorageLoader};
use etl_tools::{Result, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = logging::init(cli.verbose) {
        eprintln!("warning: {error}");
    }

    println!("Beginning the ETL process...");
    let outcome = match cli.into_config() {
        Ok(config) => execute(&config),
        Err(error) => RunOutcome::from_error(&error),
    };
    println!("{}", outcome.message());
    println!("ETL process finished.");

    if !outcome.is_success() {
        std::process::exit(1);
    }
}

fn execute(config: &EtlConfig) -> RunOutcome {
    let loader: Box<dyn StorageLoader> = match &config.storage_dir {
        Some(dir) => Box::new(StagingDirectory::new(dir)),
        None => Box::new(DryRun),
    };
    RunOutcome::from_result(etl::run(config, loader.as_ref()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge a pipe-delimited column catalog and data file into a CSV table."
)]
struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column catalog file (`index|name` per line).
    #[arg(long)]
    columns: Option<PathBuf>,

    /// Pipe-delimited data file.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory to stage the finished table into.
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<EtlConfig> {
        let mut config = match &self.config {
            Some(path) => EtlConfig::from_file(path)?,
            None => EtlConfig::default(),
        };
        if let Some(path) = self.columns {
            config.columns_path = path;
        }
        if let Some(path) = self.data {
            config.data_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        if self.storage_dir.is_some() {
            config.storage_dir = self.storage_dir;
        }
        Ok(config)
    }
}
