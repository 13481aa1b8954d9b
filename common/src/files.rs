//! Input discovery and output-directory plumbing shared by the runners.

use anyhow::{ensure, Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub const DEFAULT_INPUT_PATTERN: &str = "data/*.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const OUTPUT_PREFIX: &str = "part";
pub const NUM_SHARDS: usize = 1;

/// Logs where the run is looking for its input.
pub fn log_environment(patterns: &[String]) {
    match std::env::current_dir() {
        Ok(cwd) => info!("current working directory: {}", cwd.display()),
        Err(e) => warn!("cannot resolve current working directory: {e}"),
    }
    for pattern in patterns {
        let dir = pattern_dir(pattern);
        match fs::read_dir(&dir) {
            Ok(entries) => {
                let mut names: Vec<String> = entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect();
                names.sort();
                info!("files inside {}: {:?}", dir.display(), names);
            }
            Err(_) => info!("no folder found at {}", dir.display()),
        }
        info!("looking for files matching pattern: {pattern}");
    }
}

/// Expands every pattern and returns the matching regular files, sorted and
/// without duplicates. Finding nothing at all is an error.
pub fn discover_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        let paths =
            glob::glob(pattern).with_context(|| format!("invalid input pattern {pattern:?}"))?;
        for entry in paths {
            let path = entry.with_context(|| format!("cannot read a match of {pattern:?}"))?;
            if path.is_file() {
                inputs.push(path);
            }
        }
    }
    inputs.sort();
    inputs.dedup();
    ensure!(
        !inputs.is_empty(),
        "no input files match {}",
        patterns.join(", ")
    );
    debug!("input files: {:?}", inputs);
    Ok(inputs)
}

/// Deletes `dir` with everything in it, then creates it again empty.
///
/// Refuses to touch a directory that holds any of `inputs`, or that is the
/// working directory or one of its ancestors.
pub fn reset_output_dir(dir: &Path, inputs: &[PathBuf]) -> Result<()> {
    if dir.exists() {
        let out = dir
            .canonicalize()
            .with_context(|| format!("cannot resolve output folder {}", dir.display()))?;
        let cwd = std::env::current_dir()
            .and_then(|cwd| cwd.canonicalize())
            .context("cannot resolve current working directory")?;
        ensure!(
            !cwd.starts_with(&out),
            "output folder {} contains the working directory",
            dir.display()
        );
        for input in inputs {
            let input = input
                .canonicalize()
                .with_context(|| format!("cannot resolve input {}", input.display()))?;
            ensure!(
                !input.starts_with(&out),
                "output folder {} contains input {}",
                dir.display(),
                input.display()
            );
        }

        fs::remove_dir_all(dir)
            .with_context(|| format!("cannot delete old output folder {}", dir.display()))?;
        info!("old output folder {} deleted", dir.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output folder {}", dir.display()))?;
    Ok(())
}

pub fn shard_name(prefix: &str, index: usize, num_shards: usize) -> String {
    format!("{prefix}-{index:05}-of-{num_shards:05}")
}

/// Writes `lines` in order across `num_shards` files under `dir`, each shard
/// holding a contiguous run. Every shard file is created, even when empty.
pub fn write_shards(
    dir: &Path,
    prefix: &str,
    lines: &[String],
    num_shards: usize,
) -> Result<Vec<PathBuf>> {
    ensure!(num_shards > 0, "at least one output shard is required");

    let mut written = Vec::with_capacity(num_shards);
    for index in 0..num_shards {
        let start = index * lines.len() / num_shards;
        let end = (index + 1) * lines.len() / num_shards;
        let path = dir.join(shard_name(prefix, index, num_shards));

        let file =
            File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        for line in &lines[start..end] {
            writeln!(out, "{line}").with_context(|| format!("cannot write {}", path.display()))?;
        }
        out.flush()
            .with_context(|| format!("cannot write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Leading directories of a glob pattern, up to the first wildcard component.
fn pattern_dir(pattern: &str) -> PathBuf {
    let mut dir = PathBuf::new();
    let mut components = Path::new(pattern).components().peekable();
    while let Some(component) = components.next() {
        if components.peek().is_none() {
            break;
        }
        if component
            .as_os_str()
            .to_string_lossy()
            .contains(|c: char| matches!(c, '*' | '?' | '['))
        {
            break;
        }
        dir.push(component);
    }
    if dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        dir
    }
}
