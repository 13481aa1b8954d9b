use anyhow::Result;
use app_wordstat::WordStatApp;
use clap::Parser;
use common::{
    files::{
        discover_inputs, log_environment, reset_output_dir, write_shards, DEFAULT_INPUT_PATTERN,
        DEFAULT_OUTPUT_DIR, NUM_SHARDS, OUTPUT_PREFIX,
    },
    init_logger,
};
use parallel::{Coordinator, DEFAULT_WORKERS};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    n_workers: usize,
    #[arg(default_value = DEFAULT_INPUT_PATTERN)]
    input_patterns: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logger();
    let cli = Cli::parse();

    log_environment(&cli.input_patterns);
    let input_files = discover_inputs(&cli.input_patterns)?;
    reset_output_dir(&cli.output_dir, &input_files)?;

    let coordinator = Coordinator::new(WordStatApp, input_files, cli.n_workers);
    let output = coordinator.run().await?;
    let written = write_shards(&cli.output_dir, OUTPUT_PREFIX, &output, NUM_SHARDS)?;

    info!("pipeline executed successfully, results in {:?}", written);
    Ok(())
}
