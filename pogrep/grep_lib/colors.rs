//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Output colors, configured the way grep(1) is.
//!
//! Defaults come from grep itself. `GREP_COLOR` (deprecated) sets the match
//! colors; `GREP_COLORS` is a `:`-separated list of `key=value` pairs that
//! takes precedence over it.

use std::env;
use std::str::FromStr;

/// Select graphic rendition reset, followed by erase to end of line.
pub const RESET: &str = "\x1b[m\x1b[K";

const ROLE_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `mt`: both `ms` and `mc`
    MatchedText,
    /// `ms`: matched text in a selected line
    SelectedMatch,
    /// `mc`: matched text in a context line
    ContextMatch,
    /// `fn`
    FileName,
    /// `ln`
    LineNumber,
    /// `bn`
    ByteOffset,
    /// `se`
    Separator,
    /// `sl`
    SelectedLine,
    /// `cx`
    ContextLine,
    /// `rv`
    Reverse,
    /// `ne`
    NoErase,
}

impl Role {
    pub const ALL: [Role; ROLE_COUNT] = [
        Role::MatchedText,
        Role::SelectedMatch,
        Role::ContextMatch,
        Role::FileName,
        Role::LineNumber,
        Role::ByteOffset,
        Role::Separator,
        Role::SelectedLine,
        Role::ContextLine,
        Role::Reverse,
        Role::NoErase,
    ];

    /// Two letter name used in `GREP_COLORS`.
    pub fn key(self) -> &'static str {
        match self {
            Role::MatchedText => "mt",
            Role::SelectedMatch => "ms",
            Role::ContextMatch => "mc",
            Role::FileName => "fn",
            Role::LineNumber => "ln",
            Role::ByteOffset => "bn",
            Role::Separator => "se",
            Role::SelectedLine => "sl",
            Role::ContextLine => "cx",
            Role::Reverse => "rv",
            Role::NoErase => "ne",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Role {
    type Err = ColorsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| ColorsError::UnknownRole(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorsError {
    #[error("'{0}' is not a key=value pair")]
    MissingValue(String),

    #[error("unknown color capability '{0}'")]
    UnknownRole(String),
}

/// SGR parameters for every [`Role`]; `None` means "no styling".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorProfile {
    values: [Option<String>; ROLE_COUNT],
}

impl Default for ColorProfile {
    fn default() -> Self {
        let mut profile = ColorProfile {
            values: Default::default(),
        };
        for (role, value) in [
            (Role::SelectedMatch, "01;31"), // bold red
            (Role::ContextMatch, "01;31"),  // bold red
            (Role::FileName, "35"),         // magenta
            (Role::LineNumber, "32"),       // green
            (Role::ByteOffset, "32"),       // green
            (Role::Separator, "36"),        // cyan
            (Role::SelectedLine, ""),
            (Role::ContextLine, ""),
        ] {
            profile.set(role, value);
        }
        profile
    }
}

impl ColorProfile {
    /// Defaults, then `GREP_COLOR`, then `GREP_COLORS`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("GREP_COLOR").ok().as_deref(),
            env::var("GREP_COLORS").ok().as_deref(),
        )
    }

    pub fn from_vars(grep_color: Option<&str>, grep_colors: Option<&str>) -> Self {
        let mut profile = ColorProfile::default();

        if let Some(value) = grep_color {
            profile.apply_grep_color(value);
        }

        if let Some(spec) = grep_colors {
            if let Err(e) = profile.apply_grep_colors(spec) {
                log::debug!("ignoring GREP_COLORS={spec:?}: {e}");
            }
        }

        profile
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        self.values[role.index()].as_deref()
    }

    pub fn set(&mut self, role: Role, value: &str) {
        self.values[role.index()] = Some(value.to_string());
    }

    /// Escape sequence that starts `role`'s styling, empty when unset.
    pub fn start(&self, role: Role) -> String {
        match self.get(role) {
            Some(sgr) => format!("\x1b[{sgr}m\x1b[K"),
            None => String::new(),
        }
    }

    /// Wrap `text` in `role`'s styling.
    pub fn paint(&self, role: Role, text: &str) -> String {
        format!("{}{text}{RESET}", self.start(role))
    }

    /// Deprecated `GREP_COLOR`: a single SGR string for the match roles.
    pub fn apply_grep_color(&mut self, value: &str) {
        for role in [Role::MatchedText, Role::SelectedMatch, Role::ContextMatch] {
            self.set(role, value);
        }
    }

    /// `GREP_COLORS`, walked from the last pair to the first. A pair with an
    /// empty value takes the last non-empty value seen on the way.
    ///
    /// Nothing is applied unless every pair parses.
    pub fn apply_grep_colors(&mut self, spec: &str) -> Result<(), ColorsError> {
        let mut pending = Vec::new();
        let mut last_value = "";

        for pair in spec.split(':').rev() {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ColorsError::MissingValue(pair.to_string()))?;
            let role: Role = key.parse()?;
            if !value.is_empty() {
                last_value = value;
            }
            pending.push((role, last_value));
        }

        for (role, value) in pending {
            self.set(role, value);
        }

        Ok(())
    }
}
