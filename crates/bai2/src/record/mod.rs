//! Логические записи BAI2.
//!
//! [`Record`] — одна логическая строка: двузначный код, очищенный от
//! разделителей текст и число влитых в неё физических строк. Записи создают
//! [`lex`] и [`merge_continuations`], а в типизированные поля они
//! декодируются только после этого, см. [`Record::fields`].

mod continuation;
mod lexer;

use std::fmt;

use serde::Serialize;

pub use continuation::merge_continuations;
pub use lexer::{clean_delimiters, lex};

use crate::{error::ParseError, fields::Fields};

/// Тип записи по первым двум символам строки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCode {
    /// `01`
    FileHeader,
    /// `02`
    GroupHeader,
    /// `03`
    AccountIdentifier,
    /// `16`
    TransactionDetail,
    /// `49`
    AccountTrailer,
    /// `88`
    Continuation,
    /// `98`
    GroupTrailer,
    /// `99`
    FileTrailer,
    /// Любой другой префикс.
    Unrecognized,
}

impl RecordCode {
    /// Классифицирует строку по двухсимвольному префиксу.
    ///
    /// ```
    /// use bai2::record::RecordCode;
    ///
    /// assert_eq!(RecordCode::from_prefix("16"), RecordCode::TransactionDetail);
    /// assert_eq!(RecordCode::from_prefix("17"), RecordCode::Unrecognized);
    /// ```
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "01" => Self::FileHeader,
            "02" => Self::GroupHeader,
            "03" => Self::AccountIdentifier,
            "16" => Self::TransactionDetail,
            "49" => Self::AccountTrailer,
            "88" => Self::Continuation,
            "98" => Self::GroupTrailer,
            "99" => Self::FileTrailer,
            _ => Self::Unrecognized,
        }
    }

    /// Возвращает имя кода в snake_case.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FileHeader => "file_header",
            Self::GroupHeader => "group_header",
            Self::AccountIdentifier => "account_identifier",
            Self::TransactionDetail => "transaction_detail",
            Self::AccountTrailer => "account_trailer",
            Self::Continuation => "continuation",
            Self::GroupTrailer => "group_trailer",
            Self::FileTrailer => "file_trailer",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Код заголовка, непосредственно под которым должна лежать запись.
    ///
    /// `None` для заголовка файла, продолжений и нераспознанных записей.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self {
            Self::GroupHeader | Self::FileTrailer => Some(Self::FileHeader),
            Self::AccountIdentifier | Self::GroupTrailer => Some(Self::GroupHeader),
            Self::TransactionDetail | Self::AccountTrailer => Some(Self::AccountIdentifier),
            Self::FileHeader | Self::Continuation | Self::Unrecognized => None,
        }
    }
}

impl fmt::Display for RecordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Одна логическая запись.
///
/// После создания не меняется: слияние с продолжением создаёт новую запись,
/// а не изменяет продолжаемую.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    code: RecordCode,
    raw: String,
    line: usize,
    physical_record_count: u64,
}

impl Record {
    /// Создаёт запись из строки, уже очищенной от разделителей.
    pub(crate) fn new(raw: String, line: usize) -> Self {
        let code = RecordCode::from_prefix(raw.get(..2).unwrap_or_default());
        Self { code, raw, line, physical_record_count: 1 }
    }

    /// Дополняет запись содержимым продолжения и возвращает новую.
    pub(crate) fn extended(&self, separator: &str, payload: &str) -> Self {
        let mut raw = String::with_capacity(self.raw.len() + separator.len() + payload.len());
        raw.push_str(&self.raw);
        raw.push_str(separator);
        raw.push_str(payload);
        Self {
            code: self.code,
            raw,
            line: self.line,
            physical_record_count: self.physical_record_count + 1,
        }
    }

    /// Тип записи.
    #[must_use]
    pub fn code(&self) -> RecordCode {
        self.code
    }

    /// Очищенный текст вместе с продолжениями.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Номер физической строки (1-based) первой строки записи.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Число физических строк, вошедших в запись.
    #[must_use]
    pub fn physical_record_count(&self) -> u64 {
        self.physical_record_count
    }

    /// Текст после кода записи и разделителя.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.raw.split_once(',').map_or("", |(_, rest)| rest)
    }

    /// Декодирует типизированные поля записи.
    ///
    /// Декодирование зависит только от итогового текста, поэтому вызывать
    /// его следует только для уже слитых записей.
    pub fn fields(&self) -> Result<Fields, ParseError> {
        crate::fields::decode(self.code, &self.raw, self.line)
    }
}
