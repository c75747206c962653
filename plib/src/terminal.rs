//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::mem::MaybeUninit;

/// Historical default terminal width.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Width of the terminal attached to standard output, in columns.
///
/// `COLUMNS` wins when it holds a positive number, then the kernel's idea of
/// the window size, then [`DEFAULT_TERMINAL_WIDTH`].
pub fn get_terminal_width() -> usize {
    // COLUMNS is usually automatically set and it even changes when the
    // terminal window is resized.
    if let Some(columns) = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| parse_columns(&value))
    {
        return columns;
    }

    query_stdout_width().unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

fn parse_columns(value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(columns) => Some(columns),
    }
}

fn query_stdout_width() -> Option<usize> {
    let mut winsize: MaybeUninit<libc::winsize> = MaybeUninit::zeroed();

    // Only stdout matters: a table piped elsewhere falls back to the default.
    let ret = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
    if ret != 0 {
        return None;
    }

    let winsize = unsafe { winsize.assume_init() };
    match winsize.ws_col {
        0 => None,
        columns => Some(columns as usize),
    }
}
