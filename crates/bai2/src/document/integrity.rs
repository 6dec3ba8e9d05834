//! Проверка контрольных сумм построенного документа.
//!
//! Каждый уровень сверяет трейлер с дочерними сущностями: их число, сумму
//! объявленных ими контрольных сумм и число физических записей. Уровень
//! возвращает проверенное число записей, чтобы родитель учёл его в своём.
//! Заголовок и трейлер учитываются по числу своих физических строк,
//! то есть по одной, если у них не было продолжений.

use tracing::trace;

use super::{Account, BaiFile, Group};
use crate::{
    error::{Entity, IntegrityError},
    options::ParseOptions,
    record::Record,
};

/// Проверяет весь файл и возвращает число его физических записей.
pub(super) fn verify_file(file: &BaiFile, options: &ParseOptions) -> Result<u64, IntegrityError> {
    let entity = || Entity::File;
    let trailer = &file.trailer;

    check_children(entity, trailer.number_of_groups, file.groups.len())?;
    check_total(
        entity,
        trailer.file_control_total,
        sum(file.groups.iter().map(|g| g.trailer.group_control_total)),
    )?;

    let mut records = own_records(&file.header_record, &file.trailer_record);
    for group in &file.groups {
        records += verify_group(group, options)?;
    }
    check_records(entity, trailer.number_of_records, records)?;

    Ok(records)
}

fn verify_group(group: &Group, options: &ParseOptions) -> Result<u64, IntegrityError> {
    let entity = || Entity::Group { originator: group.originator().to_string() };
    let trailer = &group.trailer;

    check_children(entity, trailer.number_of_accounts, group.accounts.len())?;
    check_total(
        entity,
        trailer.group_control_total,
        sum(group.accounts.iter().map(|a| a.trailer.account_control_total)),
    )?;

    let mut records = own_records(&group.header_record, &group.trailer_record);
    for account in &group.accounts {
        records += verify_account(account, options)?;
    }
    check_records(entity, trailer.number_of_records, records)?;

    trace!(originator = group.originator(), records, "verified group");
    Ok(records)
}

fn verify_account(account: &Account, options: &ParseOptions) -> Result<u64, IntegrityError> {
    let entity = || Entity::Account { customer: account.customer().to_string() };
    let trailer = &account.trailer;

    let mut total = sum(account.transactions.iter().map(|tx| tx.detail.amount));
    if !options.account_control_ignores_summary_amounts {
        total += sum(account.header.summaries.iter().map(|s| s.amount));
    }
    check_total(entity, trailer.account_control_total, total)?;

    let records = own_records(&account.header_record, &account.trailer_record)
        + account.transactions.iter().map(|tx| tx.record.physical_record_count()).sum::<u64>();
    check_records(entity, trailer.number_of_records, records)?;

    trace!(customer = account.customer(), records, "verified account");
    Ok(records)
}

fn own_records(header: &Record, trailer: &Record) -> u64 {
    header.physical_record_count() + trailer.physical_record_count()
}

/// Точная сумма: суммы `i64` не переполняют накопитель `i128`.
fn sum(amounts: impl Iterator<Item = i64>) -> i128 {
    amounts.map(i128::from).sum()
}

fn check_children(
    entity: impl FnOnce() -> Entity,
    expected: u64,
    actual: usize,
) -> Result<(), IntegrityError> {
    let actual = actual as u64;
    if expected == actual {
        Ok(())
    } else {
        Err(IntegrityError::ChildCount { entity: entity(), expected, actual })
    }
}

fn check_total(
    entity: impl FnOnce() -> Entity,
    expected: i64,
    actual: i128,
) -> Result<(), IntegrityError> {
    let expected = i128::from(expected);
    if expected == actual {
        Ok(())
    } else {
        Err(IntegrityError::ControlTotal { entity: entity(), expected, actual })
    }
}

fn check_records(
    entity: impl FnOnce() -> Entity,
    expected: u64,
    actual: u64,
) -> Result<(), IntegrityError> {
    if expected == actual {
        Ok(())
    } else {
        Err(IntegrityError::RecordCount { entity: entity(), expected, actual })
    }
}
