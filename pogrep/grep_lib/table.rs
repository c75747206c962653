//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Word wrapping and box-drawn grid tables.
//!
//! Widths are counted in terminal columns, so wide (CJK) characters take two.

use textwrap::{Options, WordSeparator, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines at most `width` columns wide.
///
/// Whitespace runs, newlines included, become single spaces. Words are
/// packed greedily; a word wider than `width` is broken up.
pub fn fill(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    textwrap::fill(&words.join(" "), options)
}

/// Border characters of one horizontal rule.
struct Rule {
    left: char,
    fill: char,
    junction: char,
    right: char,
}

const TOP: Rule = Rule {
    left: '╒',
    fill: '═',
    junction: '╤',
    right: '╕',
};

const BETWEEN: Rule = Rule {
    left: '├',
    fill: '─',
    junction: '┼',
    right: '┤',
};

const BOTTOM: Rule = Rule {
    left: '╘',
    fill: '═',
    junction: '╧',
    right: '╛',
};

/// Render `rows` as a grid: every cell boxed, one space of padding, cells
/// left aligned, multi-line cells kept on consecutive lines.
///
/// An empty table renders as an empty string.
pub fn fancy_grid(rows: &[Vec<String>]) -> String {
    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if ncols == 0 {
        return String::new();
    }

    let mut widths = vec![0_usize; ncols];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            let cell_width = cell.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
            widths[col] = widths[col].max(cell_width);
        }
    }

    let mut out: Vec<String> = Vec::new();
    out.push(rule(&TOP, &widths));

    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            out.push(rule(&BETWEEN, &widths));
        }

        let cells: Vec<Vec<&str>> = (0..ncols)
            .map(|col| row.get(col).map_or_else(Vec::new, |cell| cell.lines().collect()))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for i in 0..height {
            let mut line = String::from("│");
            for (col, cell) in cells.iter().enumerate() {
                let text = cell.get(i).copied().unwrap_or("");
                let pad = widths[col] - text.width();
                line.push(' ');
                line.push_str(text);
                line.push_str(&" ".repeat(pad + 1));
                line.push('│');
            }
            out.push(line);
        }
    }

    out.push(rule(&BOTTOM, &widths));
    out.join("\n")
}

fn rule(rule: &Rule, widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| rule.fill.to_string().repeat(w + 2))
        .collect();
    format!(
        "{}{}{}",
        rule.left,
        segments.join(&rule.junction.to_string()),
        rule.right
    )
}
