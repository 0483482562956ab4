use std::fs;
use std::path::{Path, PathBuf};

use colored::*;

use crate::util::errors::AppError;

/// Recursively searches a directory tree for files whose base name matches `name`.
///
/// The walk is depth-first: each directory's entries are visited in listing
/// order, descending into subdirectories as they are encountered. Matching is
/// an exact comparison when `case_sensitive` is true, and a case-folded
/// comparison otherwise. Entries that are neither plain files nor directories
/// are skipped.
///
/// # Arguments
///
/// * `root` - The directory to start the search from.
/// * `name` - The filename to look for.
/// * `case_sensitive` - Whether letter case distinguishes filenames.
///
/// # Returns
///
/// * `Result<Vec<PathBuf>, AppError>` - Full paths of every match in traversal
///   order, or `AppError::DirectoryNotFound` if `root` is not a directory.
///
/// A directory that cannot be listed mid-walk is reported on stderr and its
/// subtree skipped; the rest of the search continues. Symlinked directories
/// are followed without cycle detection, so a symlink loop will not terminate.
///
/// # Examples
///
/// ```no_run
/// use seekrs::fsutil::find_file;
/// use std::path::Path;
/// let hits = find_file(Path::new("."), "Cargo.toml", true).unwrap();
/// println!("Found {} matches", hits.len());
/// ```
pub fn find_file(root: &Path, name: &str, case_sensitive: bool) -> Result<Vec<PathBuf>, AppError> {
    if !root.is_dir() {
        return Err(AppError::DirectoryNotFound(root.to_path_buf()));
    }

    // Fold the target once rather than per entry
    let folded_name = if case_sensitive {
        None
    } else {
        Some(name.to_lowercase())
    };

    let mut found = Vec::new();
    search_dir(root, name, folded_name.as_deref(), &mut found);
    Ok(found)
}

/// Visits one directory, appending matches to `found` and recursing into
/// subdirectories. Listing failures cost only this directory's subtree.
fn search_dir(dir: &Path, name: &str, folded_name: Option<&str>, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!(
                "{}",
                AppError::ReadDirError(dir.to_path_buf(), e)
                    .to_string()
                    .red()
            );
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!(
                    "{}",
                    AppError::ReadDirError(dir.to_path_buf(), e)
                        .to_string()
                        .red()
                );
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            search_dir(&path, name, folded_name, found);
        } else if path.is_file() {
            let base = entry.file_name();
            let base = base.to_string_lossy();

            let matched = match folded_name {
                Some(folded) => base.to_lowercase() == folded,
                None => base == name,
            };

            if matched {
                found.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests;
