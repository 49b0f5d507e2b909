//! Integration tests for concatenating several sources

use clap::Parser;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture, rcat, run_rcat, write_file};
use rcat::{Cli, Concatenator, Source};

// ============================================================================
// Ordering and Continuity
// ============================================================================

#[test]
fn files_are_concatenated_in_argument_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_file(temp_dir.path(), "first.txt", b"1\n");
    let second = write_file(temp_dir.path(), "second.txt", b"2\n");

    let (stdout, _stderr, exit_code) = run_rcat(
        &[second.to_str().unwrap(), first.to_str().unwrap()],
        b"",
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, b"2\n1\n");
}

#[test]
fn numbering_is_continuous_across_files_and_stdin() {
    let lines = fixture("lines.txt");
    let unterminated = fixture("unterminated.txt");

    let (stdout, _stderr, exit_code) = run_rcat(
        &[
            "-b",
            lines.to_str().unwrap(),
            "-",
            unterminated.to_str().unwrap(),
        ],
        b"from stdin\n",
    );

    assert_eq!(exit_code, 0);
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "     1\talpha\n     2\t\tbeta\n\n\n\n     3\tgamma\n     4\tfrom stdin\n     5\tone\n     6\ttwo"
    );
}

#[test]
fn number_all_counts_every_line_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_file(temp_dir.path(), "a.txt", b"x\ny\n");
    let b = write_file(temp_dir.path(), "b.txt", b"\nz\n");

    let (stdout, _stderr, _exit_code) =
        run_rcat(&["-n", a.to_str().unwrap(), b.to_str().unwrap()], b"");

    let numbers: Vec<u32> = String::from_utf8(stdout)
        .unwrap()
        .lines()
        .map(|line| line.split('\t').next().unwrap().trim().parse().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn unterminated_file_joins_the_next_one() {
    let temp_dir = TempDir::new().unwrap();
    let other = write_file(temp_dir.path(), "other.txt", b"three\n");

    let (stdout, _stderr, _exit_code) = run_rcat(
        &[
            fixture("unterminated.txt").to_str().unwrap(),
            other.to_str().unwrap(),
        ],
        b"",
    );

    assert_eq!(stdout, b"one\ntwothree\n");
}

#[test]
fn squeeze_applies_across_file_boundary() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_file(temp_dir.path(), "a.txt", b"a\n\n");
    let b = write_file(temp_dir.path(), "b.txt", b"\n\nb\n");

    let (stdout, _stderr, _exit_code) =
        run_rcat(&["-s", a.to_str().unwrap(), b.to_str().unwrap()], b"");

    assert_eq!(stdout, b"a\n\nb\n");
}

// ============================================================================
// Failing Sources
// ============================================================================

#[test]
fn missing_file_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let present = write_file(temp_dir.path(), "present.txt", b"kept\n");
    let missing = temp_dir.path().join("missing.txt");

    let (stdout, stderr, exit_code) = run_rcat(
        &["-n", missing.to_str().unwrap(), present.to_str().unwrap()],
        b"",
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, b"     1\tkept\n");
    assert_eq!(
        stderr,
        format!("rcat: {}: No such file or directory\n", missing.display())
    );
}

#[test]
#[cfg(unix)]
fn directory_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let present = write_file(temp_dir.path(), "present.txt", b"kept\n");

    rcat()
        .args([temp_dir.path().to_str().unwrap(), present.to_str().unwrap()])
        .assert()
        .success()
        .stdout("kept\n")
        .stderr(predicate::str::starts_with(format!(
            "rcat: {}: ",
            temp_dir.path().display()
        )));
}

#[test]
fn all_sources_missing_still_exits_0() {
    rcat()
        .args(["/nonexistent/a.txt", "/nonexistent/b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/nonexistent/a.txt"))
        .stderr(predicate::str::contains("/nonexistent/b.txt"));
}

// ============================================================================
// Library API
// ============================================================================

#[test]
fn library_run_matches_binary_output() {
    let lines = fixture("lines.txt");
    let cli = Cli::try_parse_from(["rcat", "-sT", lines.to_str().unwrap()]).unwrap();
    let config = cli.options().resolve();

    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = Concatenator::new(&config)
        .run(&cli.sources(), &mut out, &mut diag)
        .unwrap();

    assert_eq!(out, b"alpha\n^Ibeta\n\ngamma\n");
    assert!(diag.is_empty());
    assert_eq!(summary.lines, 6);
    assert_eq!(summary.completed, 1);

    let (stdout, _stderr, _exit_code) = run_rcat(&["-sT", lines.to_str().unwrap()], b"");
    assert_eq!(stdout, out);
}

#[test]
fn sources_default_to_stdin() {
    let cli = Cli::try_parse_from(["rcat", "-n"]).unwrap();
    assert_eq!(cli.sources(), vec![Source::Stdin]);
}
