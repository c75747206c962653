//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! pogrep library
//!
//! - po_lib: reading .po files
//! - grep_lib: path resolution, entry scanning, coloring and output

pub mod grep_lib;
pub mod po_lib;

use clap::{Parser, ValueEnum};
use gettextrs::gettext;
use grep_lib::colors::ColorProfile;
use grep_lib::error::Result;
use grep_lib::paths::{exclude_dir, resolve_paths};
use grep_lib::pattern::PatternOptions;
use grep_lib::present::{present, PresentOptions};
use grep_lib::scan::{scan, SearchScope};
use std::io::{self, IsTerminal, Write};

/// When to color the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Never,
    Always,
    Auto,
}

/// pogrep - find translations examples by grepping in .po files
#[derive(Debug, Parser)]
#[command(
    version,
    about = gettext("pogrep - find translations examples by grepping in .po files"),
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    #[arg(short = 'F', long, help = gettext("Interpret PATTERN as a fixed string, not a regular expression"))]
    pub fixed_strings: bool,

    #[arg(short = 'i', long, help = gettext("Ignore case distinctions in PATTERN and input"))]
    pub ignore_case: bool,

    #[arg(short = 'w', long, help = gettext("Select only matches that form whole words"))]
    pub word_regexp: bool,

    #[arg(short = 'n', long, help = gettext("Prefix each entry with its line number within its file"))]
    pub line_number: bool,

    #[arg(short = 'l', long, help = gettext("Print only the names of files containing matches"))]
    pub files_with_matches: bool,

    #[arg(short = 's', long, help = gettext("Suppress error messages about files that are not translation files"))]
    pub no_messages: bool,

    #[arg(short = 'r', long, help = gettext("Search directories recursively; with no PATH, search the working directory"))]
    pub recursive: bool,

    #[arg(long, help = gettext("Also search the translated text (right column)"))]
    pub translation: bool,

    #[arg(long, help = gettext("Do not search the original text (left column)"))]
    pub no_source: bool,

    #[arg(long, value_name = "DIR", help = gettext("Skip files below any directory named DIR"))]
    pub exclude_dir: Option<String>,

    #[arg(
        long,
        visible_alias = "colour",
        value_enum,
        value_name = "WHEN",
        default_value_t = ColorWhen::Auto,
        help = gettext("Color matches, file names and line numbers, as set by GREP_COLORS")
    )]
    pub color: ColorWhen,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = gettext("Print help"))]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = gettext("Print version"))]
    version: Option<bool>,

    #[arg(help = gettext("Regular expression to search for"))]
    pub pattern: String,

    #[arg(help = gettext("Files or directories to search"))]
    pub paths: Vec<String>,
}

impl Args {
    pub fn pattern_options(&self) -> PatternOptions {
        PatternOptions {
            fixed_strings: self.fixed_strings,
            word_regexp: self.word_regexp,
            ignore_case: self.ignore_case,
        }
    }

    pub fn search_scope(&self) -> SearchScope {
        SearchScope {
            original: !self.no_source,
            translation: self.translation,
        }
    }

    /// `auto` colors only when standard output is a terminal.
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorWhen::Never => false,
            ColorWhen::Always => true,
            ColorWhen::Auto => io::stdout().is_terminal(),
        }
    }
}

/// Run a search, reporting a fatal error on `stderr` before returning it.
pub fn run<STDOUT: Write, STDERR: Write>(
    mut stdout: STDOUT,
    mut stderr: STDERR,
    args: Args,
) -> Result<()> {
    match run_impl(&mut stdout, &mut stderr, args) {
        Ok(()) => Ok(()),
        Err(error) => {
            writeln!(stderr, "pogrep: {error}")?;
            Err(error)
        }
    }
}

fn run_impl<STDOUT: Write, STDERR: Write>(
    stdout: &mut STDOUT,
    stderr: &mut STDERR,
    args: Args,
) -> Result<()> {
    let Some(mut files) = resolve_paths(&args.paths, args.recursive)? else {
        log::debug!("no PATH and no -r: nothing to search");
        return Ok(());
    };

    if let Some(dir) = &args.exclude_dir {
        files = exclude_dir(files, dir);
    }

    let pattern = args.pattern_options().compile(&args.pattern)?;
    let colors = args.use_color().then(ColorProfile::from_env);

    let outcome = scan(&pattern, &files, args.search_scope());

    if !args.no_messages {
        for error in &outcome.errors {
            writeln!(stderr, "{error}")?;
        }
    }

    let options = PresentOptions {
        line_numbers: args.line_number,
        files_only: args.files_with_matches,
        width: plib::terminal::get_terminal_width(),
    };
    present(stdout, &outcome.matches, &pattern, &options, colors.as_ref())?;
    stdout.flush()?;

    Ok(())
}
