//! Слияние записей продолжения `88` с продолжаемыми записями.

use super::{Record, RecordCode};
use crate::{error::ParseError, fields::TransactionDetail};

/// Вливает каждое продолжение в предшествующую логическую запись.
///
/// Продолжение текста транзакции присоединяется через перевод строки,
/// пустое продолжение строку не добавляет. Любое другое продолжение
/// начинает следующее поле, так что запись, разбитая на любой границе полей,
/// читается как одна строка через запятую. Каждое слияние увеличивает
/// счётчик физических записей.
pub fn merge_continuations(records: Vec<Record>) -> Result<Vec<Record>, ParseError> {
    let mut merged: Vec<Record> = Vec::with_capacity(records.len());

    for record in records {
        if record.code() != RecordCode::Continuation {
            merged.push(record);
            continue;
        }

        let last =
            merged.pop().ok_or(ParseError::OrphanContinuation { line: record.line() })?;
        let payload = record.payload();
        let separator = match separator_for(&last) {
            "\n" if payload.is_empty() => "",
            separator => separator,
        };
        merged.push(last.extended(separator, payload));
    }

    Ok(merged)
}

fn separator_for(record: &Record) -> &'static str {
    if record.code() == RecordCode::TransactionDetail
        && TransactionDetail::reaches_text(record.raw())
    {
        "\n"
    } else {
        ","
    }
}
