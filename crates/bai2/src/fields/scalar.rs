//! Курсор по полям и разбор скалярных значений BAI2.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::{
    error::ParseError,
    record::RecordCode,
    type_code::{self, TypeCode},
};

/// Секунды от полуночи, обозначающие конец дня.
///
/// В BAI2 записывается как `2400`, `9999` или пустое поле времени.
pub const END_OF_DAY: u32 = 86_400;

/// Проходит по полям одной записи, разделённым запятыми.
///
/// Отсутствующие хвостовые поля читаются как пустые: так BAI2 опускает
/// необязательные значения в конце записи.
pub(crate) struct FieldCursor<'a> {
    record: RecordCode,
    rest: Option<&'a str>,
}

impl<'a> FieldCursor<'a> {
    /// Ставит курсор после двузначного кода записи.
    pub(crate) fn new(record: RecordCode, raw: &'a str) -> Self {
        let mut cursor = Self { record, rest: Some(raw) };
        cursor.next_field();
        cursor
    }

    pub(crate) fn record(&self) -> RecordCode {
        self.record
    }

    /// Следующее поле или `None`, если запись закончилась.
    pub(crate) fn next_field(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.split_once(',') {
            Some((field, tail)) => {
                self.rest = Some(tail);
                Some(field)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }

    /// Следующее поле; пустое, если запись закончилась.
    pub(crate) fn field(&mut self) -> &'a str {
        self.next_field().unwrap_or_default()
    }

    /// Следующее поле, которое обязано быть непустым.
    pub(crate) fn required(&mut self, name: &'static str) -> Result<&'a str, ParseError> {
        match self.next_field() {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ParseError::MissingField { record: self.record, field: name }),
        }
    }

    /// Всё непрочитанное, вместе с разделителями.
    pub(crate) fn remainder(&mut self) -> &'a str {
        self.rest.take().unwrap_or_default()
    }

    /// Шёл ли за последним прочитанным полем разделитель.
    pub(crate) fn is_delimited(&self) -> bool {
        self.rest.is_some()
    }

    /// Остался ли непрочитанный текст помимо разделителей.
    pub(crate) fn has_content(&self) -> bool {
        self.rest.is_some_and(|rest| rest.chars().any(|c| c != ','))
    }

    pub(crate) fn int<T: FromStr>(&mut self, name: &'static str) -> Result<T, ParseError> {
        let value = self.required(name)?;
        parse_number(self.record, name, value)
    }

    pub(crate) fn optional_int<T: FromStr>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>, ParseError> {
        let value = self.field();
        if value.is_empty() {
            return Ok(None);
        }
        parse_number(self.record, name, value).map(Some)
    }

    pub(crate) fn amount(&mut self, name: &'static str) -> Result<i64, ParseError> {
        let value = self.field();
        parse_amount(self.record, name, value)
    }

    pub(crate) fn date(&mut self, name: &'static str) -> Result<NaiveDate, ParseError> {
        let value = self.required(name)?;
        parse_date(self.record, name, value)
    }

    pub(crate) fn time(&mut self, name: &'static str) -> Result<u32, ParseError> {
        let value = self.field();
        parse_time(self.record, name, value)
    }

    pub(crate) fn type_code(&mut self, name: &'static str) -> Result<TypeCode, ParseError> {
        let value = self.required(name)?;
        parse_type_code(self.record, name, value)
    }

    pub(crate) fn optional_string(&mut self) -> Option<String> {
        Some(self.field()).filter(|v| !v.is_empty()).map(str::to_string)
    }
}

fn invalid(record: RecordCode, field: &'static str, value: &str) -> ParseError {
    ParseError::InvalidField { record, field, value: value.to_string() }
}

fn parse_number<T: FromStr>(
    record: RecordCode,
    field: &'static str,
    value: &str,
) -> Result<T, ParseError> {
    value.trim().parse().map_err(|_| invalid(record, field, value))
}

/// Разбирает сумму со знаком в минимальных единицах; пустое поле равно нулю.
pub(crate) fn parse_amount(
    record: RecordCode,
    field: &'static str,
    value: &str,
) -> Result<i64, ParseError> {
    if value.trim().is_empty() {
        return Ok(0);
    }
    parse_number(record, field, value)
}

/// Разбирает дату `YYMMDD`.
pub(crate) fn parse_date(
    record: RecordCode,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, ParseError> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(record, field, value));
    }
    NaiveDate::parse_from_str(value, "%y%m%d").map_err(|_| invalid(record, field, value))
}

/// Разбирает время `HHMM` в секунды от полуночи.
///
/// `9999` и пустое поле означают конец дня.
pub(crate) fn parse_time(
    record: RecordCode,
    field: &'static str,
    value: &str,
) -> Result<u32, ParseError> {
    if value.is_empty() || value == "9999" {
        return Ok(END_OF_DAY);
    }
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(record, field, value));
    }
    let hours: u32 = parse_number(record, field, &value[..2])?;
    let minutes: u32 = parse_number(record, field, &value[2..])?;
    if minutes > 59 || hours > 24 || (hours == 24 && minutes > 0) {
        return Err(invalid(record, field, value));
    }
    Ok(hours * 3600 + minutes * 60)
}

/// Принимает только версию формата 2.
pub(crate) fn parse_version(value: &str) -> Result<u8, ParseError> {
    match value {
        "2" => Ok(2),
        other => Err(ParseError::UnsupportedVersion(other.to_string())),
    }
}

/// Разбирает и разрешает числовой код типа.
pub(crate) fn parse_type_code(
    record: RecordCode,
    field: &'static str,
    value: &str,
) -> Result<TypeCode, ParseError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(record, field, value));
    }
    let code = parse_number(record, field, value)?;
    Ok(type_code::lookup(code))
}
