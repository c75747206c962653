//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use regex::Regex;

/// How the user's PATTERN operand is to be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    pub fixed_strings: bool,
    pub word_regexp: bool,
    pub ignore_case: bool,
}

impl PatternOptions {
    /// Regular expression source for `pattern`.
    ///
    /// Applied in order: `-F` escapes, `-w` adds word boundaries, `-i`
    /// prepends the case-insensitive flag.
    pub fn build(&self, pattern: &str) -> String {
        let mut source = if self.fixed_strings {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        };

        if self.word_regexp {
            source = format!(r"\b(?:{source})\b");
        }

        if self.ignore_case {
            source = format!("(?i){source}");
        }

        source
    }

    pub fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        let source = self.build(pattern);
        log::debug!("pattern {pattern:?} compiled as {source:?}");
        Regex::new(&source)
    }
}
