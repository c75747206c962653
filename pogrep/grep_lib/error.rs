//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use super::paths::PathError;

/// Errors that end a pogrep run.
///
/// Files that fail to parse are not errors: they are reported and skipped.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait GetExitCode {
    fn get_exit_code(&self) -> i32;
}

impl<T> GetExitCode for Result<T> {
    fn get_exit_code(&self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(Error::Path(_)) => 1,
            Err(_) => 2,
        }
    }
}
