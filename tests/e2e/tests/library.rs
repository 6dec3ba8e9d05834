//! E2E тесты публичного API библиотеки `bai2` на фикстурах.

use bai2::{
    BaiFile, Entity, Error, IntegrityError, ParseError, ParseOptions,
    fields::{Availability, END_OF_DAY, GroupStatus, ScheduledFunds},
    type_code::{Direction, Scope},
};
use e2e_tests::{fixture, parse_fixture};

fn defaults() -> ParseOptions {
    ParseOptions::default()
}

fn ignoring_summaries() -> ParseOptions {
    ParseOptions::default().with("account_control_ignores_summary_amounts", true).unwrap()
}

fn slash_at_end_only() -> ParseOptions {
    ParseOptions::default().with("continuations_slash_delimit_end_of_line_only", true).unwrap()
}

/// Ошибка целостности, которую вернул разбор фикстуры.
fn integrity_error(name: &str, options: &ParseOptions) -> IntegrityError {
    match BaiFile::parse_file(fixture(name), options) {
        Err(Error::Integrity(err)) => err,
        other => panic!("expected integrity error for {name}, got {other:?}"),
    }
}

// ============================================================================
// Корректные файлы
// ============================================================================

#[test]
fn test_daily_file_structure() {
    let file = parse_fixture("daily.bai2", &defaults()).unwrap();

    assert_eq!(file.sender(), "121140399");
    assert_eq!(file.receiver(), "9999999999");
    assert_eq!(file.creation_datetime().to_rfc3339(), "2015-04-01T09:00:00+00:00");
    assert_eq!(file.header().physical_record_length, Some(80));
    assert_eq!(file.groups().len() as u64, file.trailer().number_of_groups);

    let group = &file.groups()[0];
    assert_eq!(group.destination(), "9999999999");
    assert_eq!(group.originator(), "121140399");
    assert_eq!(group.group_status(), GroupStatus::Update);
    // 2400 означает полночь следующего дня
    assert_eq!(group.as_of_datetime().to_rfc3339(), "2015-04-01T00:00:00+00:00");
    assert_eq!(group.accounts().len() as u64, group.trailer().number_of_accounts);

    let account = &group.accounts()[0];
    assert_eq!(account.customer(), "3300000001");
    assert_eq!(account.currency_code(), Some("USD"));
    assert_eq!(account.transactions().len(), 1);

    let tx = &account.transactions()[0];
    assert_eq!(tx.amount(), 1_500_000);
    assert_eq!(tx.text(), "DEPOSIT\nCHECK DEPOSIT BRANCH 12");
    assert_eq!(tx.type_code().code, 174);
    assert_eq!(tx.type_code().transaction, Some(Direction::Credit));
    assert_eq!(tx.type_code().scope, Some(Scope::Detail));
    assert_eq!(tx.type_code().description, Some("Other Deposit"));
    assert_eq!(tx.physical_record_count(), 2);
}

#[test]
fn test_control_totals_add_up() {
    for name in ["daily.bai2", "daily_with_summary.bai2", "eod.bai2"] {
        let file = parse_fixture(name, &defaults()).unwrap();

        let groups: i64 = file.groups().iter().map(|g| g.trailer().group_control_total).sum();
        assert_eq!(groups, file.trailer().file_control_total, "{name}");

        for group in file.groups() {
            let accounts: i64 =
                group.accounts().iter().map(|a| a.trailer().account_control_total).sum();
            assert_eq!(accounts, group.trailer().group_control_total, "{name}");
        }
    }
}

#[test]
fn test_eod_value_dated_end_of_day() {
    let file = parse_fixture("eod.bai2", &defaults()).unwrap();

    assert_eq!(file.receiver(), "3333333333");
    let group = &file.groups()[0];
    // пустое время группы означает конец дня
    assert_eq!(group.as_of_datetime().to_rfc3339(), "2015-04-03T00:00:00+00:00");

    let tx = &group.accounts()[0].transactions()[0];
    assert_eq!(tx.type_code().description, Some("Incoming Money Transfer"));
    assert_eq!(tx.bank_reference(), "FW0002");
    assert_eq!(tx.customer_reference(), "");

    let availability = tx.funds_type().availability.as_ref().unwrap();
    assert!(matches!(availability, Availability::ValueDated { time: END_OF_DAY, .. }));
    assert_eq!(availability.value_datetime().unwrap().to_rfc3339(), "2015-04-04T00:00:00+00:00");
}

#[test]
fn test_summaries_are_decoded() {
    let file = parse_fixture("daily_with_summary.bai2", &defaults()).unwrap();
    let account = &file.groups()[0].accounts()[0];

    let codes: Vec<u16> = account.summaries().iter().map(|s| s.type_code.code).collect();
    assert_eq!(codes, [10, 15, 100]);
    assert_eq!(account.summaries()[2].item_count, Some(1));
    assert_eq!(account.summaries()[2].funds_type.code, "0");

    let tx = &account.transactions()[0];
    assert_eq!(
        tx.funds_type().availability,
        Some(Availability::Distributed {
            immediate: 100_000,
            one_day: 100_000,
            more_than_one_day: 50_000
        })
    );
    assert_eq!(tx.customer_reference(), "INV-77");
}

// ============================================================================
// Опции
// ============================================================================

#[test]
fn test_summary_flag_selects_checksum_formula() {
    assert!(parse_fixture("daily_with_summary.bai2", &defaults()).is_ok());
    assert!(matches!(
        integrity_error("daily_with_summary.bai2", &ignoring_summaries()),
        IntegrityError::ControlTotal { expected: 1_750_000, actual: 250_000, .. }
    ));

    assert!(parse_fixture("daily_summary_excluded.bai2", &ignoring_summaries()).is_ok());
    assert!(matches!(
        integrity_error("daily_summary_excluded.bai2", &defaults()),
        IntegrityError::ControlTotal { expected: 250_000, actual: 1_750_000, .. }
    ));
}

#[test]
fn test_slash_in_continuation_text() {
    let file = parse_fixture("eod_with_slash_in_text.bai2", &slash_at_end_only()).unwrap();
    let tx = &file.groups()[0].accounts()[0].transactions()[0];

    assert_eq!(tx.text(), "BRANCH DEPOSIT\n/REF 2015-04/001");
    assert_eq!(
        tx.funds_type().availability,
        Some(Availability::Scheduled {
            entries: vec![
                ScheduledFunds { days: 0, amount: 50_000 },
                ScheduledFunds { days: 1, amount: 48_765 },
            ]
        })
    );

    // по умолчанию `,/` обрезает продолжение целиком
    let file = parse_fixture("eod_with_slash_in_text.bai2", &defaults()).unwrap();
    let tx = &file.groups()[0].accounts()[0].transactions()[0];
    assert_eq!(tx.text(), "BRANCH DEPOSIT");
    assert_eq!(tx.physical_record_count(), 2);
}

#[test]
fn test_unknown_option_name() {
    assert!(matches!(
        ParseOptions::default().with("ignore_summaries", true),
        Err(bai2::OptionsError::Unknown(name)) if name == "ignore_summaries"
    ));
}

// ============================================================================
// Ошибки
// ============================================================================

#[test]
fn test_invalid_checksum_names_account() {
    assert_eq!(
        integrity_error("invalid_checksum_eod.bai2", &defaults()),
        IntegrityError::ControlTotal {
            entity: Entity::Account { customer: "3300000002".to_string() },
            expected: 4_200_000,
            actual: 4_200_001,
        }
    );
}

#[test]
fn test_missing_continuation_breaks_record_count() {
    assert_eq!(
        integrity_error("daily_with_missing_continuation.bai2", &defaults()),
        IntegrityError::RecordCount {
            entity: Entity::Account { customer: "3300000001".to_string() },
            expected: 4,
            actual: 3,
        }
    );
}

#[test]
fn test_unsupported_version() {
    let err = BaiFile::parse_file(fixture("unsupported_version.bai2"), &defaults()).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnsupportedVersion(ref v)) if v == "3"));
}

#[test]
fn test_truncated_file() {
    let data = std::fs::read_to_string(fixture("daily.bai2")).unwrap();
    let truncated: String = data.lines().take(6).map(|line| format!("{line}\n")).collect();

    assert!(matches!(
        BaiFile::parse(&truncated, &defaults()),
        Err(Error::Parse(ParseError::UnexpectedEof { .. }))
    ));
}

#[test]
fn test_missing_file() {
    let err = parse_fixture("no_such_file.bai2", &defaults()).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Io(_))));
}
