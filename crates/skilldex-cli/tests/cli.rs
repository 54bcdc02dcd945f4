//! Binary smoke tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_skill(root: &std::path::Path, rel: &str, content: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), content).unwrap();
}

fn skilldex() -> Command {
    Command::cargo_bin("skilldex").unwrap()
}

#[test]
fn build_writes_index_and_reports_summary() {
    let tmp = TempDir::new().unwrap();
    write_skill(
        tmp.path(),
        "tools/alpha",
        "---\nname: Alpha\ndescription: Does X\n---\nBody\n",
    );
    let out = tmp.path().join("site/public/skills-index.json");

    skilldex()
        .args(["build", "--root"])
        .arg(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Built skills index: 1 skills across 1 categories",
        ));

    assert!(out.exists());
}

#[test]
fn build_fails_on_malformed_document() {
    let tmp = TempDir::new().unwrap();
    write_skill(tmp.path(), "tools/bad", "---\nname: Bad\nnever closed\n");
    let out = tmp.path().join("out.json");

    skilldex()
        .args(["build", "--root"])
        .arg(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .failure();

    assert!(!out.exists());
}

#[test]
fn stats_and_search_read_the_artifact() {
    let tmp = TempDir::new().unwrap();
    write_skill(
        tmp.path(),
        "tools/pdf-splitter",
        "---\nname: PDF Splitter\ndescription: Splits PDF documents\n---\n",
    );
    let out = tmp.path().join("skills-index.json");

    skilldex()
        .args(["build", "--root"])
        .arg(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    skilldex()
        .args(["stats", "--index"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skills across 1 categories"));

    skilldex()
        .args(["search", "pdf", "--index"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF Splitter"));

    skilldex()
        .args(["search", "nothing-matches-this", "--index"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills matching"));
}

#[test]
fn show_prints_detail_or_fails_cleanly() {
    let tmp = TempDir::new().unwrap();
    write_skill(
        tmp.path(),
        "tools/alpha",
        "---\nname: Alpha\ndescription: Does X\ncommands:\n  - x\n---\nAlpha body\n",
    );
    let out = tmp.path().join("skills-index.json");

    skilldex()
        .args(["build", "--root"])
        .arg(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    skilldex()
        .args(["show", "tools/alpha", "--index"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha body"));

    skilldex()
        .args(["show", "tools/missing", "--index"])
        .arg(&out)
        .assert()
        .failure();
}

#[test]
fn stats_fails_when_index_is_missing() {
    skilldex()
        .args(["stats", "--index", "/no/such/skills-index.json"])
        .assert()
        .failure();
}
