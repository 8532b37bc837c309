//! Input discovery and checking.
//!
//! The input set is the deduplicated union of explicitly listed files and a
//! recursive `.json` scan of an optional directory. All checks here are
//! CLI-level: they run before any file is processed, so a bad argument never
//! produces a half-written batch.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Errors from assembling and checking the input set.
#[derive(Debug)]
pub enum InputError {
    /// Neither `--files` nor `--dir` yielded any descriptor files.
    NoFiles,

    /// A listed file does not exist.
    NotFound(PathBuf),

    /// A listed path is a directory, not a file.
    NotAFile(PathBuf),

    /// A listed file does not have a `.json` extension.
    NotJson(PathBuf),

    /// A directory scan failed.
    Scan(walkdir::Error),

    /// The output destination is missing or not a directory.
    BadOutputDir(PathBuf),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NoFiles => write!(f, "no descriptor files provided"),
            InputError::NotFound(path) => {
                write!(f, "file \"{}\" does not exist", path.display())
            }
            InputError::NotAFile(path) => {
                write!(f, "file \"{}\" is a directory", path.display())
            }
            InputError::NotJson(path) => {
                write!(f, "file \"{}\" is not a .json file", path.display())
            }
            InputError::Scan(err) => write!(f, "directory scan failed: {}", err),
            InputError::BadOutputDir(path) => write!(
                f,
                "output destination \"{}\" is not a directory",
                path.display()
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Scan(err) => Some(err),
            _ => None,
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map(|ext| ext == "json").unwrap_or(false)
}

/// Assembles the input set from explicit files and an optional scan root.
///
/// Explicit files must each exist, be regular files, and end in `.json`; the
/// scan silently keeps only `.json` files. The result is sorted and
/// deduplicated, so batch ordering is stable regardless of argument order.
pub fn collect_inputs(files: &[PathBuf], dir: Option<&Path>) -> Result<Vec<PathBuf>, InputError> {
    let mut set: BTreeSet<PathBuf> = BTreeSet::new();

    for file in files {
        if !file.exists() {
            return Err(InputError::NotFound(file.clone()));
        }
        if file.is_dir() {
            return Err(InputError::NotAFile(file.clone()));
        }
        if !is_json(file) {
            return Err(InputError::NotJson(file.clone()));
        }
        set.insert(file.clone());
    }

    if let Some(root) = dir {
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(InputError::Scan)?;
            if entry.file_type().is_file() && is_json(entry.path()) {
                set.insert(entry.path().to_path_buf());
            }
        }
    }

    if set.is_empty() {
        return Err(InputError::NoFiles);
    }
    Ok(set.into_iter().collect())
}

/// Checks that the output destination exists and is a directory.
pub fn check_output_dir(path: &Path) -> Result<(), InputError> {
    if !path.is_dir() {
        return Err(InputError::BadOutputDir(path.to_path_buf()));
    }
    Ok(())
}
