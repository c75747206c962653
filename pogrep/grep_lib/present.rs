//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use super::colors::{ColorProfile, Role};
use super::highlight::{highlight, LinePrefix};
use super::scan::Match;
use super::table::{fancy_grid, fill};
use regex::Regex;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

/// Columns taken by the table borders and padding.
const TABLE_DECORATION: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentOptions {
    /// Prefix the original text with `<line>:` (and `<file>:`)
    pub line_numbers: bool,
    /// Only list the files that matched
    pub files_only: bool,
    /// Terminal width the table is fitted to
    pub width: usize,
}

/// Write the search results to `out`: a two column table (original,
/// translation), or with `files_only` the matching file names.
///
/// `colors` is `None` when output is not colored.
pub fn present<W: Write>(
    out: &mut W,
    matches: &[Match],
    pattern: &Regex,
    options: &PresentOptions,
    colors: Option<&ColorProfile>,
) -> io::Result<()> {
    if options.files_only {
        return write_file_names(out, matches, colors);
    }

    if matches.is_empty() {
        return Ok(());
    }

    let files: HashSet<&Path> = matches.iter().map(|m| m.file.as_path()).collect();
    let column_width = (options.width.saturating_sub(TABLE_DECORATION) / 2).max(1);

    let mut prefixes = Vec::new();
    let mut rows = Vec::with_capacity(matches.len());

    for m in matches {
        let mut left = m.msgid.clone();

        if options.line_numbers {
            let line = m.line.map(|n| format!("{n}:")).unwrap_or_default();
            let file = if files.len() > 1 {
                format!("{}:", m.file.display())
            } else {
                String::new()
            };
            left = format!("{file}{line}{left}");
            prefixes.push(LinePrefix { line, file });
        }

        rows.push(vec![fill(&left, column_width), fill(&m.msgstr, column_width)]);
    }

    let table = fancy_grid(&rows);
    match colors {
        Some(colors) => writeln!(out, "{}", highlight(&table, pattern, colors, &prefixes)),
        None => writeln!(out, "{table}"),
    }
}

/// Each matching file once, in the order first seen.
fn write_file_names<W: Write>(
    out: &mut W,
    matches: &[Match],
    colors: Option<&ColorProfile>,
) -> io::Result<()> {
    let mut seen = HashSet::new();

    for m in matches {
        if !seen.insert(m.file.as_path()) {
            continue;
        }

        let name = m.file.display().to_string();
        match colors {
            Some(colors) => writeln!(out, "{}", colors.paint(Role::FileName, &name))?,
            None => writeln!(out, "{name}")?,
        }
    }

    Ok(())
}
