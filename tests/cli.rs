//! End-to-end tests driving the `agenda` binary against temporary stores.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn todo(&self) -> PathBuf {
        self.dir.path().join("todo.txt")
    }

    fn done(&self) -> PathBuf {
        self.dir.path().join("done.txt")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("agenda").unwrap();
        cmd.env("HOME", self.dir.path())
            .env("AGENDA_TODO_FILE", self.todo())
            .env("AGENDA_ARCHIVE_FILE", self.done())
            .env_remove("AGENDA_CONFIG")
            .env_remove("AGENDA_DEBUG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn write_todo(&self, lines: &[&str]) {
        write_lines(&self.todo(), lines);
    }
}

fn write_lines(path: &Path, lines: &[&str]) {
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents).unwrap();
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_add_then_list() {
    let env = Env::new();

    env.cmd()
        .args(["add", "Buy", "milk", "@Shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk @Shop"));
    env.cmd()
        .args(["add", "01032024", "0930", "(a)", "Pay", "rent", "+Bills"])
        .assert()
        .success();

    assert_eq!(
        read_lines(&env.todo()),
        vec!["Buy milk @Shop", "01032024 0930 (A) Pay rent +Bills"]
    );

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 01032024 0930 (A) Pay rent +Bills\n1 Buy milk @Shop"));
}

#[test]
fn test_add_without_description_fails() {
    let env = Env::new();

    env.cmd()
        .args(["add", "01032024", "+Bills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing description"));

    assert!(!env.todo().exists());
}

#[test]
fn test_list_without_store_is_empty() {
    let env = Env::new();

    env.cmd()
        .arg("l")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks (0 items)"));
}

#[test]
fn test_remove_out_of_range_leaves_store() {
    let env = Env::new();
    env.write_todo(&["One", "Two"]);

    env.cmd()
        .args(["remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose a task between 1 and 2"));
    env.cmd()
        .args(["r", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a number"));
    env.cmd()
        .args(["remove", "99999999999999999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose a task between 1 and 2"));

    assert_eq!(read_lines(&env.todo()), vec!["One", "Two"]);
}

#[test]
fn test_done_moves_line_to_archive() {
    let env = Env::new();
    env.write_todo(&["One", "(B) Two @Home"]);

    env.cmd()
        .args(["done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed: 2 (B) Two @Home"));

    assert_eq!(read_lines(&env.todo()), vec!["One"]);
    assert_eq!(read_lines(&env.done()), vec!["(B) Two @Home"]);
}

#[test]
fn test_prioritize_then_list_json() {
    let env = Env::new();
    env.write_todo(&["Later", "Sooner"]);

    env.cmd().args(["p", "2", "c"]).assert().success();

    let output = env.cmd().args(["list", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["items"][0]["index"], 2);
    assert_eq!(value["items"][0]["line"], "(C) Sooner");
    assert_eq!(value["items"][1]["index"], 1);
}

#[test]
fn test_prioritize_rejects_bad_letter() {
    let env = Env::new();
    env.write_todo(&["Task"]);

    env.cmd()
        .args(["prioritize", "1", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a single letter"));
}

#[test]
fn test_chart_counts_archive() {
    let env = Env::new();
    let yesterday = chrono::Local::now().date_naive() - chrono::Duration::days(1);
    let stamp = yesterday.format("%d%m%Y").to_string();
    write_lines(&env.done(), &[&format!("{stamp} Done"), &format!("{stamp} Also done"), "Undated"]);

    let output = env.cmd().args(["chart", "3", "--output", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["counts"][2]["count"], 2);
}

#[test]
fn test_chart_rejects_huge_day_count() {
    let env = Env::new();

    env.cmd()
        .args(["chart", "100000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_config_abort_policy() {
    let env = Env::new();
    env.write_todo(&["Fine", "+Orphan"]);
    let config = env.dir.path().join("config.yaml");
    fs::write(&config, "storage:\n  on_invalid_line: abort\n").unwrap();

    env.cmd()
        .args(["list", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
