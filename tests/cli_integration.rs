//! CLI integration tests for the contacts binary
//!
//! These tests drive the binary end to end: one-shot `exec` commands,
//! interactive sessions over piped stdin, and persistence between runs.

use chrono::{Datelike, Local};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command instance for the contacts binary, isolated from user config
fn contacts_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("contacts"));
    cmd.env_remove("CONTACTS_BOOK")
        .env_remove("CONTACTS_CONFIG")
        .arg("--config")
        .arg(dir.join("config.toml"))
        .arg("--book")
        .arg(book_path(dir));
    cmd
}

fn book_path(dir: &Path) -> PathBuf {
    dir.join("addressbook.jsonl")
}

fn exec(dir: &Path, words: &[&str]) -> assert_cmd::assert::Assert {
    contacts_cmd(dir).arg("exec").args(words).assert()
}

// =============================================================================
// One-shot Commands
// =============================================================================

#[test]
fn test_add_then_update() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["add", "Bob", "1111111111"])
        .success()
        .stdout("Contact added\n");

    exec(dir.path(), &["add", "Bob", "2222222222"])
        .success()
        .stdout("Contact updated\n");

    exec(dir.path(), &["phone", "Bob"])
        .success()
        .stdout("Bob: 1111111111, 2222222222\n");
}

#[test]
fn test_all_on_empty_book() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["all"])
        .success()
        .stdout("No contacts found.\n");
}

#[test]
fn test_unknown_command() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["frobnicate", "Bob"])
        .success()
        .stdout("Invalid command.\n");

    exec(dir.path(), &["all"])
        .success()
        .stdout("No contacts found.\n");
}

#[test]
fn test_read_only_commands_do_not_write_book() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["hello"]).success();
    exec(dir.path(), &["frobnicate"]).success();
    exec(dir.path(), &["all"]).success();

    assert!(!book_path(dir.path()).exists());

    exec(dir.path(), &["add", "Ann", "0123456789"]).success();
    assert!(book_path(dir.path()).exists());
}

#[test]
fn test_command_is_case_insensitive() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["ADD", "Ann", "0123456789"])
        .success()
        .stdout("Contact added\n");
}

#[test]
fn test_error_messages() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["phone", "Nobody"])
        .success()
        .stdout("Error: Contact not found.\n");

    exec(dir.path(), &["add", "Ann", "12345"])
        .success()
        .stdout(predicate::str::contains(
            "Error: Please provide: <name> <phone>. Phone number must be exactly 10 digits.",
        ));

    exec(dir.path(), &["show-birthday"])
        .success()
        .stdout("Error: No arguments provided. Please provide <name>.\n");
}

#[test]
fn test_birthday_roundtrip() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["add", "Ann", "0123456789"]).success();
    exec(dir.path(), &["add-birthday", "Ann", "29.02.2024"])
        .success()
        .stdout("Birthday added.\n");

    exec(dir.path(), &["show-birthday", "Ann"])
        .success()
        .stdout("Ann's birthday is on 29.02.2024.\n");

    exec(dir.path(), &["all"])
        .success()
        .stdout("Contact name: Ann, phones: 0123456789, birthday: 29.02.2024\n");
}

#[test]
fn test_birthday_today_is_upcoming() {
    let dir = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    // 2000 is a leap year, so 29 February still has a date
    let birthday = today.with_year(2000).unwrap();

    exec(dir.path(), &["add", "Ann", "0123456789"]).success();
    exec(
        dir.path(),
        &["add-birthday", "Ann", &birthday.format("%d.%m.%Y").to_string()],
    )
    .success();

    exec(dir.path(), &["birthdays"])
        .success()
        .stdout(format!("Ann: {}\n", birthday.format("%d.%m")));
}

#[test]
fn test_no_upcoming_birthdays() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["add", "Ann", "0123456789"]).success();

    exec(dir.path(), &["birthdays"])
        .success()
        .stdout("No upcoming birthdays.\n");
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_book_written_as_jsonl() {
    let dir = TempDir::new().unwrap();

    exec(dir.path(), &["add", "Ann", "0123456789"]).success();
    exec(dir.path(), &["add", "Bob", "1111111111"]).success();

    let content = fs::read_to_string(book_path(dir.path())).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["name"], "Ann");
    assert_eq!(first["phones"][0], "0123456789");
}

#[test]
fn test_corrupt_book_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(book_path(dir.path()), "not json\n").unwrap();

    exec(dir.path(), &["all"])
        .failure()
        .stderr(predicate::str::contains("Failed to load contact book"));
}

#[test]
fn test_book_path_from_env() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.jsonl");

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("contacts"))
        .env("CONTACTS_BOOK", &custom)
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.jsonl"));
}

#[test]
fn test_book_path_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "book = \"from-config.jsonl\"\n").unwrap();

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("contacts"))
        .env_remove("CONTACTS_BOOK")
        .arg("--config")
        .arg(&config)
        .arg("path")
        .assert()
        .success()
        .stdout("from-config.jsonl\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "birthday_window_days = 0\n").unwrap();

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("contacts"))
        .env_remove("CONTACTS_BOOK")
        .arg("--config")
        .arg(&config)
        .arg("path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("birthday_window_days"));
}

// =============================================================================
// Interactive Session Tests
// =============================================================================

#[test]
fn test_repl_session() {
    let dir = TempDir::new().unwrap();

    contacts_cmd(dir.path())
        .write_stdin("hello\nadd Ann 0123456789\n\nphone Ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Ann: 0123456789"))
        .stdout(predicate::str::contains("Good bye!"));

    exec(dir.path(), &["phone", "Ann"])
        .success()
        .stdout("Ann: 0123456789\n");
}

#[test]
fn test_repl_stops_at_exit() {
    let dir = TempDir::new().unwrap();

    contacts_cmd(dir.path())
        .arg("repl")
        .write_stdin("close\nadd Ann 0123456789\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));

    exec(dir.path(), &["all"])
        .success()
        .stdout("No contacts found.\n");
}

#[test]
fn test_repl_saves_on_end_of_input() {
    let dir = TempDir::new().unwrap();

    contacts_cmd(dir.path())
        .write_stdin("add Ann 0123456789\n")
        .assert()
        .success();

    assert!(book_path(dir.path()).exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    contacts_cmd(dir.path())
        .args(["--verbose", "exec", "all"])
        .assert()
        .success()
        .stdout("No contacts found.\n")
        .stderr(predicate::str::contains("[verbose:session] Loaded 0 contact(s)"));
}
