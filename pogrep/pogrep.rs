//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};
use pogrep::grep_lib::error::GetExitCode;
use pogrep::{run, Args};
use std::io;

fn main() {
    setlocale(LocaleCategory::LcAll, "");
    if textdomain(plib::PROJECT_NAME).is_err() {
        // Ignore error - translation may not be available
    }
    let _ = bind_textdomain_codeset(plib::PROJECT_NAME, "UTF-8");

    env_logger::init();
    let args = Args::parse();

    let result = run(io::stdout().lock(), io::stderr().lock(), args);
    std::process::exit(result.get_exit_code())
}
