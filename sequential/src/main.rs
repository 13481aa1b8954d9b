use anyhow::{Context, Result};
use app_wordstat::WordStatApp;
use clap::Parser;
use common::{
    files::{
        discover_inputs, log_environment, reset_output_dir, write_shards, DEFAULT_INPUT_PATTERN,
        DEFAULT_OUTPUT_DIR, NUM_SHARDS, OUTPUT_PREFIX,
    },
    init_logger, App, Combine, KeyValue, Table,
};
use itertools::Itertools;
use std::{fs::read_to_string, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    #[arg(default_value = DEFAULT_INPUT_PATTERN)]
    input_patterns: Vec<String>,
}

/// Maps every line of every input, then sorts the intermediate records and
/// reduces each run of equal keys.
fn run<A: App>(app: &A, input_files: &[PathBuf]) -> Result<Vec<String>> {
    let mut intermediate: Vec<KeyValue<A::Value>> = vec![];
    for file in input_files {
        let contents =
            read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
        let mut kva = contents.lines().flat_map(|line| app.map(line)).collect_vec();
        info!("mapped {}: {} records", file.display(), kva.len());
        intermediate.append(&mut kva);
    }

    intermediate.sort_by(|a, b| a.key.cmp(&b.key));

    let mut table = Table::new();
    for (key, kvs) in intermediate
        .into_iter()
        .group_by(|kv| kv.key.clone())
        .into_iter()
    {
        if let Some(value) = kvs.map(|kv| kv.value).reduce(Combine::combined) {
            table.insert(key, value);
        }
    }
    info!("{}: {} distinct keys", app.name(), table.len());

    Ok(app.finish(table))
}

fn main() -> Result<()> {
    let _guard = init_logger();
    let cli = Cli::parse();

    log_environment(&cli.input_patterns);
    let input_files = discover_inputs(&cli.input_patterns)?;
    reset_output_dir(&cli.output_dir, &input_files)?;

    let output = run(&WordStatApp, &input_files)?;
    let written = write_shards(&cli.output_dir, OUTPUT_PREFIX, &output, NUM_SHARDS)?;

    info!("pipeline executed successfully, results in {:?}", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CHAPTER: &str = "Alice was beginning to get very tired of sitting by her sister\n\
        on the bank, and of having nothing to do: once or twice she had\n\
        peeped into the book her sister was reading, but it had no\n\
        pictures or conversations in it, 'and what is the use of a book,'\n\
        thought Alice 'without pictures or conversations?'\n";

    fn write_inputs(dir: &TempDir, texts: &[&str]) -> Vec<PathBuf> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let path = dir.path().join(format!("{i}.txt"));
                fs::write(&path, text).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_run_matches_in_process_pipeline() {
        let dir = TempDir::new().unwrap();
        let second = "The Rabbit was late, said the Rabbit.\r\nAlice followed the Rabbit.";
        let inputs = write_inputs(&dir, &[CHAPTER, second]);

        let output = run(&WordStatApp, &inputs).unwrap();
        let expected = app_wordstat::analyze(CHAPTER.lines().chain(second.lines()));
        assert_eq!(output, expected);
        assert!(output[..2].contains(&"rabbit : count=3 : length=6".to_string()));
        assert!(output[..2].contains(&"alice : count=3 : length=5".to_string()));
    }

    #[test]
    fn test_run_empty_files() {
        let dir = TempDir::new().unwrap();
        let inputs = write_inputs(&dir, &["", "the of and\n"]);
        assert!(run(&WordStatApp, &inputs).unwrap().is_empty());
    }

    #[test]
    fn test_run_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = run(&WordStatApp, &[dir.path().join("missing.txt")]).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_run_invalid_utf8_file() {
        let dir = TempDir::new().unwrap();
        let mut inputs = write_inputs(&dir, &[CHAPTER]);
        let binary = dir.path().join("binary.txt");
        fs::write(&binary, [0xff, 0xfe]).unwrap();
        inputs.push(binary);

        let err = run(&WordStatApp, &inputs).unwrap_err();
        assert!(err.to_string().contains("binary.txt"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sequential"]);
        assert_eq!(cli.output_dir, PathBuf::from("outputs"));
        assert_eq!(cli.input_patterns, ["data/*.txt"]);

        let cli = Cli::parse_from(["sequential", "-o", "out", "a/*.txt", "b.txt"]);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.input_patterns, ["a/*.txt", "b.txt"]);
    }
}
