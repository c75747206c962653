//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Turning PATH operands into the list of files to search.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use walkdir::{DirEntry, WalkDir};

/// Extension of the files picked up when walking directories.
pub const PO_EXTENSION: &str = "po";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("{0}: No such file or directory")]
    NotFound(String),

    #[error("{0}: Is a directory")]
    IsADirectory(String),
}

/// Resolve PATH operands into candidate files.
///
/// Returns `Ok(None)` when there is nothing to search at all: no operands
/// and no `-r`. With `-r` and no operands the current directory is walked.
/// Regular files are taken as given, whatever their extension; directories
/// are walked for `.po` files, and are an error without `-r`.
pub fn resolve_paths(paths: &[String], recursive: bool) -> Result<Option<Vec<PathBuf>>, PathError> {
    if paths.is_empty() {
        if !recursive {
            return Ok(None);
        }
        return Ok(Some(find_po_files(Path::new("."))));
    }

    let mut files = Vec::new();

    for operand in paths {
        let path = Path::new(operand);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            if !recursive {
                return Err(PathError::IsADirectory(operand.clone()));
            }
            files.extend(find_po_files(path));
        } else {
            return Err(PathError::NotFound(operand.clone()));
        }
    }

    log::debug!("{} candidate file(s) from {} operand(s)", files.len(), paths.len());
    Ok(Some(files))
}

/// Every `.po` file below `root`, hidden files and directories skipped.
///
/// Walking `.` yields paths relative to it, without the `./` prefix.
pub fn find_po_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| {
            entry.path().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == PO_EXTENSION)
        })
        .map(|entry| {
            let path = entry.path();
            path.strip_prefix(".").unwrap_or(path).to_path_buf()
        })
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Drop every path that goes through a directory named `dir`.
///
/// Redundant trailing slashes in `dir` are ignored; the test is a plain
/// substring test on `dir/`.
pub fn exclude_dir(files: Vec<PathBuf>, dir: &str) -> Vec<PathBuf> {
    let needle = format!("{}{MAIN_SEPARATOR}", dir.trim_end_matches(MAIN_SEPARATOR));

    files
        .into_iter()
        .filter(|file| {
            let keep = !file.to_string_lossy().contains(&needle);
            if !keep {
                log::debug!("excluding {}", file.display());
            }
            keep
        })
        .collect()
}
