//! End-to-end tests of the `link-rank` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn link_rank_cmd() -> Command {
    Command::cargo_bin("link-rank").unwrap()
}

fn create_corpus(dir: &TempDir) {
    let pages = [
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a> <a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a> <a href="4.html">4</a>"#),
        ("4.html", r#"<a href="2.html">2</a>"#),
    ];
    for (name, body) in pages.iter() {
        fs::write(dir.path().join(name), format!("<html><body>{body}</body></html>")).unwrap();
    }
}

#[test]
fn prints_both_tables() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    link_rank_cmd()
        .arg(dir.path())
        .arg("--seed")
        .arg("3407")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("  2.html: 0.42"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let run = || {
        link_rank_cmd()
            .arg(dir.path())
            .args(["--seed", "7", "--samples", "500"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn missing_argument_is_a_usage_error() {
    link_rank_cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_argument_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    link_rank_cmd()
        .arg(dir.path())
        .arg("extra")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_damping_fails() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    link_rank_cmd()
        .arg(dir.path())
        .args(["--damping", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn zero_samples_fails() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    link_rank_cmd()
        .arg(dir.path())
        .args(["--samples", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples=0"));
}
