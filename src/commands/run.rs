use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::SplitSource;
use crate::error::SplitError;
use crate::models::{Config, SplitReport, Strategy};

/// Options for a split run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input file; `None` or `-` reads standard input
    pub input: Option<PathBuf>,
    /// Lines per part
    pub line_count: Option<i64>,
    /// Number of parts
    pub chunk_count: Option<i64>,
    /// Bytes per part
    pub byte_count: Option<i64>,
    /// Overrides the configured output directory
    pub output_dir: Option<PathBuf>,
}

/// Pick the strategy from the options; at most one may be given
pub fn resolve_strategy(options: &RunOptions, config: &Config) -> Result<Strategy, SplitError> {
    let chosen: Vec<Strategy> = [
        options.line_count.map(Strategy::lines),
        options.chunk_count.map(Strategy::chunks),
        options.byte_count.map(Strategy::bytes),
    ]
    .into_iter()
    .flatten()
    .collect();

    match chosen.as_slice() {
        [] => Ok(Strategy::lines(config.split.line_count)),
        [strategy] => Ok(*strategy),
        _ => Err(SplitError::ConflictingOptions),
    }
}

/// Split the input described by `options` into parts.
///
/// Configuration is read from `working_dir`; a relative output directory is
/// resolved by the process as usual.
pub fn run_split(working_dir: &Path, options: RunOptions) -> Result<SplitReport, SplitError> {
    let config = Config::load_from_dir(working_dir)?;
    let strategy = resolve_strategy(&options, &config)?;
    let config = config.with_overrides(options.output_dir.clone());
    let output_dir = config.split.output_dir.as_path();

    prepare_output_dir(output_dir, config.behavior.create_output_dir)?;

    let mut source = open_input(options.input.as_deref())?;
    info!(
        "Splitting {} by {} (unit {})",
        describe_input(options.input.as_deref()),
        strategy.kind(),
        strategy.unit()
    );

    let report = strategy.split(&mut source, output_dir)?;
    info!("{}", report);

    Ok(report)
}

fn prepare_output_dir(output_dir: &Path, create: bool) -> Result<(), SplitError> {
    if create && !output_dir.as_os_str().is_empty() && !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
        info!("Created output directory: {}", output_dir.display());
    }
    Ok(())
}

fn is_stdin(input: Option<&Path>) -> bool {
    match input {
        None => true,
        Some(path) => path.as_os_str() == "-",
    }
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn SplitSource>, SplitError> {
    match input {
        Some(path) if !is_stdin(input) => {
            let file = File::open(path).map_err(|e| SplitError::OpenInput(path.to_path_buf(), e))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(std::io::stdin())),
    }
}

fn describe_input(input: Option<&Path>) -> String {
    match input {
        Some(path) if !is_stdin(input) => path.display().to_string(),
        _ => "standard input".to_string(),
    }
}
