//! Parallel batch conversion driver.
//!
//! Each input file is converted independently: read, parse, convert, write.
//! Failures are isolated per file; the batch always attempts every input and
//! reports all failures at the end. Files are processed by a rayon pool
//! bounded by the `--jobs` setting, with no shared mutable state between
//! tasks.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use spritebake_core::{convert, ConvertError, ConvertWarning};
use spritebake_export::SheetExport;

use crate::json_output::{error_codes, JsonError, JsonWarning};

/// Knobs for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Worker-pool width; 0 means one thread per core.
    pub jobs: usize,
    /// Pretty-print output descriptors.
    pub pretty: bool,
    /// Suppress per-file progress lines (used by `--json`).
    pub quiet: bool,
}

/// Result of converting a single descriptor file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Path of the input descriptor.
    pub input: String,
    /// Path of the written output, if conversion succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Whether conversion succeeded.
    pub success: bool,
    /// Error, if conversion failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
    /// Non-fatal conditions (dropped clips, empty tags).
    pub warnings: Vec<JsonWarning>,
    /// Wall-clock conversion time in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a whole batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
    /// Per-file results in input order.
    pub results: Vec<FileResult>,
}

/// Where the descriptor for `input` is written: the input's base name with
/// its original extension replaced by `.json`.
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_os_string();
    name.push(".json");
    out_dir.join(name)
}

/// Converts every file in the input set, writing results into `out_dir`.
///
/// Results come back in input order regardless of completion order.
pub fn run_batch(files: &[PathBuf], out_dir: &Path, options: &BatchOptions) -> Result<BatchSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()?;

    let results: Vec<FileResult> = pool.install(|| {
        files
            .par_iter()
            .map(|input| {
                let result = process_file(input, out_dir, options.pretty);
                if !options.quiet {
                    // One write per file so parallel output stays line-atomic.
                    print!("{}", format_file_line(&result));
                }
                result
            })
            .collect()
    });

    let converted = results.iter().filter(|r| r.success).count();
    Ok(BatchSummary {
        total: results.len(),
        converted,
        failed: results.len() - converted,
        results,
    })
}

/// Converts one descriptor file, capturing the outcome instead of failing
/// the batch.
fn process_file(input: &Path, out_dir: &Path, pretty: bool) -> FileResult {
    let start = Instant::now();
    let outcome = convert_one(input, out_dir, pretty);
    let duration_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok((output, warnings)) => FileResult {
            input: input.display().to_string(),
            output: Some(output.display().to_string()),
            success: true,
            error: None,
            warnings: warnings.iter().map(JsonWarning::from).collect(),
            duration_ms,
        },
        Err(error) => FileResult {
            input: input.display().to_string(),
            output: None,
            success: false,
            error: Some(error),
            warnings: Vec::new(),
            duration_ms,
        },
    }
}

fn convert_one(
    input: &Path,
    out_dir: &Path,
    pretty: bool,
) -> std::result::Result<(PathBuf, Vec<ConvertWarning>), JsonError> {
    let text = std::fs::read_to_string(input).map_err(|e| {
        JsonError::new(
            error_codes::FILE_READ,
            format!("{}: {}", input.display(), e),
        )
    })?;

    let export: SheetExport = serde_json::from_str(&text).map_err(|e| {
        JsonError::new(error_codes::PARSE, format!("{}: {}", input.display(), e))
    })?;

    let source_dir = input.parent().unwrap_or_else(|| Path::new("."));
    let conversion = convert(&export, source_dir).map_err(|e| match e {
        ConvertError::Export(_) => JsonError::new(error_codes::INVALID_EXPORT, e.to_string()),
        ConvertError::Embed(_) => JsonError::new(error_codes::IMAGE_EMBED, e.to_string()),
    })?;

    let json = if pretty {
        serde_json::to_string_pretty(&conversion.doc)
    } else {
        serde_json::to_string(&conversion.doc)
    }
    .map_err(|e| JsonError::new(error_codes::SERIALIZE, e.to_string()))?;

    let out_path = output_path(out_dir, input);
    std::fs::write(&out_path, json).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("{}: {}", out_path.display(), e),
        )
    })?;

    Ok((out_path, conversion.warnings))
}

fn format_file_line(result: &FileResult) -> String {
    use std::fmt::Write;

    let time = format!("{}ms", result.duration_ms);
    let mut line = String::new();
    match (result.success, &result.error) {
        (true, _) => {
            let _ = writeln!(
                line,
                "{} {} {}",
                "✓".green().bold(),
                result.input,
                time.dimmed()
            );
        }
        (false, Some(error)) => {
            let _ = writeln!(
                line,
                "{} {} {} {}",
                "✗".red().bold(),
                result.input,
                time.dimmed(),
                error.message
            );
        }
        (false, None) => {
            let _ = writeln!(line, "{} {}", "✗".red().bold(), result.input);
        }
    }
    for warning in &result.warnings {
        let _ = writeln!(line, "  {} {}", "warning:".yellow().bold(), warning.message);
    }
    line
}

/// Prints the end-of-batch summary block.
pub fn print_summary(summary: &BatchSummary) {
    println!("\n{}", "=".repeat(60));
    println!(
        "{} {} converted, {} failed, {} total",
        "Batch summary:".cyan().bold(),
        summary.converted.to_string().green(),
        if summary.failed > 0 {
            summary.failed.to_string().red().to_string()
        } else {
            summary.failed.to_string()
        },
        summary.total
    );
    for result in summary.results.iter().filter(|r| !r.success) {
        if let Some(error) = &result.error {
            println!(
                "  {} {} [{}] {}",
                "FAIL".red().bold(),
                result.input,
                error.code,
                error.message
            );
        }
    }
}
