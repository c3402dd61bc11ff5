use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use splitclone::commands::{run_split, RunOptions};
use splitclone::SplitError;

/// splitclone - split a file into parts by lines, bytes or part count
#[derive(Parser)]
#[command(name = "splitclone")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Lines per part (default 1000 when no other mode is given)
    #[arg(
        short = 'l',
        value_name = "LINE_COUNT",
        allow_negative_numbers = true,
        conflicts_with_all = ["chunk_count", "byte_count"]
    )]
    line_count: Option<i64>,

    /// Split into this many parts of equal size
    #[arg(
        short = 'n',
        value_name = "CHUNK_COUNT",
        allow_negative_numbers = true,
        conflicts_with = "byte_count"
    )]
    chunk_count: Option<i64>,

    /// Bytes per part
    #[arg(short = 'b', value_name = "BYTE_COUNT", allow_negative_numbers = true)]
    byte_count: Option<i64>,

    /// Directory for the output parts (defaults to the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print a JSON summary of the written parts
    #[arg(long)]
    json: bool,

    /// Input file; reads standard input when omitted or "-"
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let options = RunOptions {
        input: cli.file,
        line_count: cli.line_count,
        chunk_count: cli.chunk_count,
        byte_count: cli.byte_count,
        output_dir: cli.output_dir,
    };

    let result = std::env::current_dir()
        .map_err(SplitError::Io)
        .and_then(|working_dir| run_split(&working_dir, options));

    match result {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_status(&e));
        }
    }
}

/// Usage-style failures exit with 2 like clap's own errors; everything else with 1
fn exit_status(error: &SplitError) -> i32 {
    if error.is_configuration() {
        2
    } else {
        1
    }
}
