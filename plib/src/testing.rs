//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Variables that change what the utilities print and must not leak in from
/// the developer's shell.
const SCRUBBED_VARS: [&str; 4] = ["GREP_COLOR", "GREP_COLORS", "COLUMNS", "RUST_LOG"];

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Location of a workspace binary built by the current cargo profile.
pub fn bin_path(cmd: &str) -> PathBuf {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}", cmd)
    } else {
        format!("target/release/{}", cmd)
    };

    // plib lives one level below the workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join(relpath)
}

/// Run a test command in `cwd` (or the package directory when `None`) with
/// extra environment variables.
///
/// This is the core test runner; the other helpers are thin wrappers.
pub fn run_test_base(
    cmd: &str,
    args: &[String],
    cwd: Option<&Path>,
    env_vars: &[(&str, &str)],
) -> Output {
    let mut command = Command::new(bin_path(cmd));
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for key in SCRUBBED_VARS {
        command.env_remove(key);
    }
    for (key, value) in env_vars {
        command.env(key, value);
    }
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    command
        .output()
        .unwrap_or_else(|e| panic!("failed to run command {cmd}: {e}"))
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args, None, &[]);
    check_output(&plan, &output);
}

/// Run a test with custom environment variables
pub fn run_test_with_env(plan: TestPlan, env_vars: &[(&str, &str)]) {
    let output = run_test_base(&plan.cmd, &plan.args, None, env_vars);
    check_output(&plan, &output);
}

/// Run a test from another working directory, e.g. a fixture tree.
pub fn run_test_in_dir(plan: TestPlan, dir: &Path) {
    let output = run_test_base(&plan.cmd, &plan.args, Some(dir), &[]);
    check_output(&plan, &output);
}

pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args, None, &[]);
    checker(&plan, &output);
}
