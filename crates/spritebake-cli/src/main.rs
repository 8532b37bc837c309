//! spritebake - Aseprite sheet exports to engine-ready sprite descriptors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use spritebake_cli::batch::{print_summary, run_batch, BatchOptions};
use spritebake_cli::input::{check_output_dir, collect_inputs};

/// Convert Aseprite sheet exports into engine-ready sprite descriptors.
///
/// Each input descriptor yields one output descriptor in the output
/// directory, named after the input with its extension replaced by `.json`.
#[derive(Parser)]
#[command(name = "spritebake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Descriptor files to convert
    #[arg(short, long, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Directory to scan recursively for .json descriptor files
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Output directory for converted descriptors (must exist)
    #[arg(short, long)]
    output: PathBuf,

    /// Worker threads for the batch (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Pretty-print output descriptors
    #[arg(long)]
    pretty: bool,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let files = collect_inputs(&cli.files, cli.dir.as_deref())?;
    check_output_dir(&cli.output)?;

    let summary = run_batch(
        &files,
        &cli.output,
        &BatchOptions {
            jobs: cli.jobs,
            pretty: cli.pretty,
            quiet: cli.json,
        },
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
