//! E2E тесты для CLI инструмента `bai2-inspect`.
//!
//! Тестируем:
//! - вывод сводки и JSON
//! - опции разбора (флаги и файл опций)
//! - коды возврата и сообщения об ошибках

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска bai2-inspect.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn inspect() -> Command {
    Command::cargo_bin("bai2-inspect").unwrap()
}

// ============================================================================
// Успешный разбор
// ============================================================================

#[test]
fn test_summary_to_stdout() {
    inspect()
        .args(["--input", fixture("daily.bai2").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("file 121140399 -> 9999999999"))
        .stdout(predicate::str::contains("account 3300000001 USD total 1500000"))
        .stdout(predicate::str::contains("DEPOSIT CHECK DEPOSIT BRANCH 12"))
        .stderr(predicate::str::contains("Verified 1 group(s), 1 account(s), 1 transaction(s)"));
}

#[test]
fn test_stdin_input() {
    let data = fs::read_to_string(fixture("eod.bai2")).unwrap();

    inspect()
        .write_stdin(data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Incoming Money Transfer FED WIRE IN"));
}

#[test]
fn test_json_to_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("daily.json");

    inspect()
        .args([
            "-i",
            fixture("daily_with_summary.bai2").to_str().unwrap(),
            "--format",
            "json",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["header"]["sender_identification"], "121140399");
    assert_eq!(json["groups"][0]["header"]["group_status"], "update");

    let account = &json["groups"][0]["accounts"][0];
    assert_eq!(account["header"]["summaries"].as_array().unwrap().len(), 3);
    assert_eq!(account["transactions"][0]["funds_type"]["availability"]["kind"], "distributed");
}

#[test]
fn test_records_format() {
    let output = inspect()
        .args(["-i", fixture("daily.bai2").to_str().unwrap(), "--format", "records"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // продолжение `88` влито в запись `16`
    assert!(records.iter().all(|r| r["code"] != "continuation"));

    let tx = records.iter().find(|r| r["code"] == "transaction_detail").unwrap();
    assert_eq!(tx["physical_record_count"], 2);
    assert_eq!(tx["fields"]["transaction_detail"]["text"], "DEPOSIT\nCHECK DEPOSIT BRANCH 12");
}

// ============================================================================
// Опции
// ============================================================================

#[test]
fn test_summary_flag() {
    let input = fixture("daily_summary_excluded.bai2");

    inspect()
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("control total invalid for account 3300000001"));

    inspect()
        .args(["-i", input.to_str().unwrap(), "--account-control-ignores-summary-amounts"])
        .assert()
        .success();
}

#[test]
fn test_options_file() {
    let dir = tempdir().unwrap();
    let options = dir.path().join("options.json");
    fs::write(&options, r#"{"continuations_slash_delimit_end_of_line_only": true}"#).unwrap();

    inspect()
        .args([
            "-i",
            fixture("eod_with_slash_in_text.bai2").to_str().unwrap(),
            "--options",
            options.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("BRANCH DEPOSIT /REF 2015-04/001"));
}

#[test]
fn test_options_file_with_unknown_key() {
    let dir = tempdir().unwrap();
    let options = dir.path().join("options.json");
    fs::write(&options, r#"{"ignore_summaries": true}"#).unwrap();

    inspect()
        .args([
            "-i",
            fixture("daily.bai2").to_str().unwrap(),
            "--options",
            options.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options file"))
        .stderr(predicate::str::contains("continuations_slash_delimit_end_of_line_only"))
        .stderr(predicate::str::contains("ignore_summaries"));
}

// ============================================================================
// Ошибки
// ============================================================================

#[test]
fn test_invalid_checksum() {
    inspect()
        .args(["-i", fixture("invalid_checksum_eod.bai2").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to parse BAI2 input"))
        .stderr(predicate::str::contains("expected 4200000, actually 4200001"));
}

#[test]
fn test_unsupported_version() {
    inspect()
        .args(["-i", fixture("unsupported_version.bai2").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported BAI version '3'"));
}

#[test]
fn test_missing_input_file() {
    inspect()
        .args(["-i", "/nonexistent/statement.bai2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_empty_stdin() {
    inspect().write_stdin("").assert().failure().stderr(predicate::str::contains("empty input"));
}
