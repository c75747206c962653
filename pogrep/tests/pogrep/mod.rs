//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{
    run_test, run_test_in_dir, run_test_with_checker, run_test_with_env, TestPlan,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ABOUT: &str = "tests/pogrep/about.po";
const GLOSSARY: &str = "tests/pogrep/glossary.po";
const NOTES: &str = "tests/pogrep/notes.txt";

fn plan(args: &[&str], expected_out: &str, expected_err: &str, expected_exit_code: i32) -> TestPlan {
    TestPlan {
        cmd: String::from("pogrep"),
        args: args.iter().map(|s| s.to_string()).collect(),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code,
    }
}

fn pogrep_test(args: &[&str], expected_out: &str) {
    run_test(plan(args, expected_out, "", 0));
}

/// A tree of .po files, plus files the walk must leave out.
fn po_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let po = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n";
    for file in [
        "first.po",
        "second.po",
        "library/lib1.po",
        "venv/file1.po",
        ".hidden/secret.po",
        ".dotfile.po",
    ] {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, po).unwrap();
    }
    fs::write(dir.path().join("file1.txt"), "Hello\n").unwrap();
    dir
}

#[test]
fn test_pogrep_nothing_to_search() {
    pogrep_test(&["About"], "");
}

#[test]
fn test_pogrep_missing_file() {
    run_test(plan(
        &["About", "tests/pogrep/missing.po"],
        "",
        "pogrep: tests/pogrep/missing.po: No such file or directory\n",
        1,
    ));
}

#[test]
fn test_pogrep_directory_needs_recursion() {
    run_test(plan(
        &["About", "tests/pogrep"],
        "",
        "pogrep: tests/pogrep: Is a directory\n",
        1,
    ));
}

#[test]
fn test_pogrep_invalid_pattern() {
    run_test_with_checker(plan(&["-l", "(About", ABOUT], "", "", 2), |plan, output| {
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("pogrep: invalid pattern: "));
        assert!(stderr.contains("unclosed group"));
        assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    });
}

#[test]
fn test_pogrep_files_with_matches() {
    pogrep_test(&["-l", "About", ABOUT, GLOSSARY], "tests/pogrep/about.po\n");
    pogrep_test(
        &["-l", "Glossary|About", GLOSSARY, ABOUT, GLOSSARY],
        "tests/pogrep/glossary.po\ntests/pogrep/about.po\n",
    );
}

#[test]
fn test_pogrep_untranslated_and_obsolete_entries() {
    pogrep_test(&["-l", "Many thanks", ABOUT], "");
    pogrep_test(&["-l", "abstract method", GLOSSARY], "tests/pogrep/glossary.po\n");
    pogrep_test(&["-l", "abstract base", GLOSSARY], "tests/pogrep/glossary.po\n");
}

#[test]
fn test_pogrep_pattern_options() {
    pogrep_test(&["-l", ".", ABOUT, GLOSSARY], "tests/pogrep/about.po\ntests/pogrep/glossary.po\n");
    pogrep_test(&["-l", "-F", ".", ABOUT, GLOSSARY], "tests/pogrep/about.po\n");
    pogrep_test(&["-l", "about these", ABOUT], "");
    pogrep_test(&["-l", "-i", "about these", ABOUT], "tests/pogrep/about.po\n");
    pogrep_test(&["-l", "-w", "Gloss", GLOSSARY], "");
    pogrep_test(&["-l", "-w", "Glossary", GLOSSARY], "tests/pogrep/glossary.po\n");
}

#[test]
fn test_pogrep_not_a_translation_file() {
    run_test(plan(
        &["-l", "About", NOTES, ABOUT],
        "tests/pogrep/about.po\n",
        "tests/pogrep/notes.txt doesn't seem to be a translation file\n",
        0,
    ));
    pogrep_test(&["-l", "-s", "About", NOTES, ABOUT], "tests/pogrep/about.po\n");
}

#[test]
fn test_pogrep_table() {
    run_test_with_env(
        plan(
            &["About", ABOUT],
            "╒═════════════╤═════════════════╕\n\
             │ About these │ À propos de ces │\n\
             │ documents   │ documents       │\n\
             ╘═════════════╧═════════════════╛\n",
            "",
            0,
        ),
        &[("COLUMNS", "47")],
    );
}

#[test]
fn test_pogrep_table_line_numbers_several_files() {
    run_test_with_env(
        plan(
            &["-n", "Glossary|About", ABOUT, GLOSSARY],
            "╒═════════════════════════════════════╤═══════════════════════════╕\n\
             │ tests/pogrep/about.po:9:About these │ À propos de ces documents │\n\
             │ documents                           │                           │\n\
             ├─────────────────────────────────────┼───────────────────────────┤\n\
             │ tests/pogrep/glossary.po:6:Glossary │ Glossaire                 │\n\
             ╘═════════════════════════════════════╧═══════════════════════════╛\n",
            "",
            0,
        ),
        &[("COLUMNS", "80")],
    );
}

#[test]
fn test_pogrep_table_translation_only() {
    run_test_with_env(
        plan(
            &["--translation", "--no-source", "documentation", ABOUT],
            "╒═════════════════════════════════════╤═════════════════════════════════════╕\n\
             │ These documents are generated from  │ Ces documents sont générés à partir │\n\
             │ reStructuredText sources by Sphinx, │ de sources en reStructuredText par  │\n\
             │ a document processor specifically   │ Sphinx, un analyseur de documents   │\n\
             │ written for the Python              │ spécialement conçu pour la          │\n\
             │ documentation.                      │ documentation Python.               │\n\
             ├─────────────────────────────────────┼─────────────────────────────────────┤\n\
             │ Contributors to the Python          │ Contributeurs de la documentation   │\n\
             │ Documentation                       │ Python                              │\n\
             ╘═════════════════════════════════════╧═════════════════════════════════════╛\n",
            "",
            0,
        ),
        &[("COLUMNS", "80")],
    );
}

#[test]
fn test_pogrep_table_includes_obsolete_entries() {
    run_test_with_env(
        plan(
            &["-n", "abstract", GLOSSARY],
            "╒════════════════════════╤══════════════════════════╕\n\
             │ 10:abstract base class │ classe de base abstraite │\n\
             ├────────────────────────┼──────────────────────────┤\n\
             │ 13:abstract method     │ méthode abstraite        │\n\
             ╘════════════════════════╧══════════════════════════╛\n",
            "",
            0,
        ),
        &[("COLUMNS", "80")],
    );
}

#[test]
fn test_pogrep_no_match_prints_nothing() {
    pogrep_test(&["-n", "Lorem ipsum", ABOUT, GLOSSARY], "");
}

#[test]
fn test_pogrep_color_always() {
    run_test_with_env(
        plan(
            &["-n", "--color=always", "About", ABOUT],
            "╒═════════════════════════╤═══════════════════════════╕\n\
             │ \x1b[35m\x1b[K\x1b[33m\x1b[K9:\x1b[m\x1b[K\x1b[04;31m\x1b[KAbout\x1b[m\x1b[K these documents │ À propos de ces documents │\n\
             ╘═════════════════════════╧═══════════════════════════╛\n",
            "",
            0,
        ),
        &[("COLUMNS", "80"), ("GREP_COLORS", "ms=04;31:ln=33")],
    );
}

#[test]
fn test_pogrep_color_files_with_matches() {
    run_test_with_env(
        plan(
            &["-l", "--colour=always", "About", ABOUT],
            "\x1b[35m\x1b[Ktests/pogrep/about.po\x1b[m\x1b[K\n",
            "",
            0,
        ),
        &[("GREP_COLOR", "01;32")],
    );
}

#[test]
fn test_pogrep_recursive_current_directory() {
    let tree = po_tree();
    run_test_in_dir(
        plan(
            &["-l", "-r", "Hello"],
            "first.po\nlibrary/lib1.po\nsecond.po\nvenv/file1.po\n",
            "",
            0,
        ),
        tree.path(),
    );
    run_test_in_dir(
        plan(
            &["-l", "-r", "--exclude-dir=venv/", "Hello"],
            "first.po\nlibrary/lib1.po\nsecond.po\n",
            "",
            0,
        ),
        tree.path(),
    );
}

#[test]
fn test_pogrep_recursive_directory_operand() {
    let tree = po_tree();
    let root = tree.path();
    let base = root.file_name().unwrap().to_str().unwrap();
    let expected: String = ["first.po", "library/lib1.po", "second.po"]
        .iter()
        .map(|file| format!("{base}/{file}\n"))
        .collect();

    run_test_in_dir(
        plan(
            &["-l", "-r", "--exclude-dir", "venv", "Hello", base],
            &expected,
            "",
            0,
        ),
        root.parent().unwrap_or(Path::new("/")),
    );
}
