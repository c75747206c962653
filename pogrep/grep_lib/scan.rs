//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::po_lib::po_file::PoFile;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A translated entry whose text matched the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub file: PathBuf,
    /// Line of the entry's msgid, when known
    pub line: Option<usize>,
    pub msgid: String,
    pub msgstr: String,
}

/// Which side of each entry the pattern is tried against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchScope {
    pub original: bool,
    pub translation: bool,
}

impl Default for SearchScope {
    fn default() -> Self {
        SearchScope {
            original: true,
            translation: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// One message per file that could not be read, in encounter order
    pub errors: Vec<String>,
    pub matches: Vec<Match>,
}

/// Search every file in turn. A file that cannot be parsed is reported in
/// `errors` and skipped; it never stops the scan.
pub fn scan(pattern: &Regex, files: &[PathBuf], scope: SearchScope) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for file in files {
        match PoFile::open(file) {
            Ok(po) => {
                let before = outcome.matches.len();
                scan_po_file(pattern, file, &po, scope, &mut outcome.matches);
                log::debug!(
                    "{}: {} entries, {} matched",
                    file.display(),
                    po.entries.len(),
                    outcome.matches.len() - before
                );
            }
            Err(e) => {
                log::debug!("{}: {e}", file.display());
                outcome.errors.push(format!(
                    "{} doesn't seem to be a translation file",
                    file.display()
                ));
            }
        }
    }

    outcome
}

/// Append the matching entries of an already parsed file to `matches`.
///
/// Only translated entries are considered; obsolete (`#~`) ones included.
pub fn scan_po_file(
    pattern: &Regex,
    file: &Path,
    po: &PoFile,
    scope: SearchScope,
    matches: &mut Vec<Match>,
) {
    for entry in &po.entries {
        let msgstr = entry.translation();
        if msgstr.is_empty() {
            continue;
        }

        if (scope.original && pattern.is_match(&entry.msgid))
            || (scope.translation && pattern.is_match(msgstr))
        {
            matches.push(Match {
                file: file.to_path_buf(),
                line: Some(entry.line),
                msgid: entry.msgid.clone(),
                msgstr: msgstr.to_string(),
            });
        }
    }
}
