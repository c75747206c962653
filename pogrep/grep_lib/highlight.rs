//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Coloring of already rendered text.
//!
//! Matches are colored first. Line prefixes (`file:line:`) are colored
//! afterwards, so a prefix that itself contains a match must be looked for
//! in its match-colored form.

use super::colors::{ColorProfile, Role, RESET};
use regex::{Captures, Regex};

/// The `<file>:` and `<line>:` parts that precede one displayed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinePrefix {
    /// e.g. `42:`
    pub line: String,
    /// e.g. `about.po:`, empty when only one file is involved
    pub file: String,
}

impl LinePrefix {
    pub fn new(line: impl Into<String>, file: impl Into<String>) -> Self {
        LinePrefix {
            line: line.into(),
            file: file.into(),
        }
    }
}

/// Color every match of `pattern` in `text`, then the first remaining
/// occurrence of each prefix, in order.
///
/// Each prefix is looked up as `" " + file + line`. One prefix colors one
/// occurrence: callers pass one prefix per displayed entry.
pub fn highlight(
    text: &str,
    pattern: &Regex,
    colors: &ColorProfile,
    prefixes: &[LinePrefix],
) -> String {
    let match_start = colors.start(Role::SelectedMatch);
    let file_start = colors.start(Role::FileName);
    let line_start = colors.start(Role::LineNumber);

    let mut result = mark_matches(text, pattern, &match_start);

    for prefix in prefixes {
        let plain = format!(" {}{}", prefix.file, prefix.line);
        let marked = mark_matches(&plain, pattern, &match_start);

        // The match pass may already have colored part of this prefix
        let target = if !match_start.is_empty() && marked.contains(&match_start) {
            marked
        } else {
            plain
        };

        let replacement = format!(
            " {file_start}{}{line_start}{}{RESET}",
            prefix.file, prefix.line
        );
        result = result.replacen(&target, &replacement, 1);
    }

    result
}

/// Wrap each match of `pattern` in `start` .. [`RESET`].
fn mark_matches(text: &str, pattern: &Regex, start: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures| format!("{start}{}{RESET}", &caps[0]))
        .into_owned()
}
