//! Типизированные поля для каждого типа записи.
//!
//! У заголовков и трейлеров фиксированный позиционный список полей. Записи
//! идентификатора счёта и транзакции самоописываемые: число полей зависит
//! от кодов типа средств внутри них (см. [`availability`]).

pub mod availability;
pub(crate) mod scalar;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

pub use availability::{Availability, FundsType, ScheduledFunds};
pub use scalar::END_OF_DAY;

use self::scalar::{FieldCursor, parse_version};
use crate::{error::ParseError, record::RecordCode, type_code::TypeCode};

/// Собирает из даты и времени в секундах от полуночи метку времени UTC.
///
/// Конец дня переходит в полночь следующего дня.
#[must_use]
pub fn compose_datetime(date: NaiveDate, seconds: u32) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc() + TimeDelta::seconds(i64::from(seconds))
}

/// Декодированные поля одной записи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fields {
    FileHeader(FileHeader),
    GroupHeader(GroupHeader),
    AccountIdentifier(AccountIdentifier),
    TransactionDetail(TransactionDetail),
    AccountTrailer(AccountTrailer),
    Continuation(Continuation),
    GroupTrailer(GroupTrailer),
    FileTrailer(FileTrailer),
}

/// Декодирует `raw` по раскладке полей для `code`.
pub(crate) fn decode(code: RecordCode, raw: &str, line: usize) -> Result<Fields, ParseError> {
    Ok(match code {
        RecordCode::FileHeader => Fields::FileHeader(FileHeader::decode(raw)?),
        RecordCode::GroupHeader => Fields::GroupHeader(GroupHeader::decode(raw)?),
        RecordCode::AccountIdentifier => {
            Fields::AccountIdentifier(AccountIdentifier::decode(raw)?)
        }
        RecordCode::TransactionDetail => {
            Fields::TransactionDetail(TransactionDetail::decode(raw)?)
        }
        RecordCode::AccountTrailer => Fields::AccountTrailer(AccountTrailer::decode(raw)?),
        RecordCode::Continuation => Fields::Continuation(Continuation::decode(raw)),
        RecordCode::GroupTrailer => Fields::GroupTrailer(GroupTrailer::decode(raw)?),
        RecordCode::FileTrailer => Fields::FileTrailer(FileTrailer::decode(raw)?),
        RecordCode::Unrecognized => {
            return Err(ParseError::UnrecognizedRecord {
                line,
                prefix: raw.chars().take(2).collect(),
            });
        }
    })
}

/// `01` заголовок файла.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    pub sender_identification: String,
    pub receiver_identification: String,
    pub file_creation_date: NaiveDate,
    /// Секунды от полуночи.
    pub file_creation_time: u32,
    pub file_identification_number: String,
    pub physical_record_length: Option<u32>,
    pub block_size: Option<u32>,
    /// Всегда 2; другие версии отклоняются.
    pub version_number: u8,
}

impl FileHeader {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let mut f = FieldCursor::new(RecordCode::FileHeader, raw);
        Ok(Self {
            sender_identification: f.required("sender_identification")?.to_string(),
            receiver_identification: f.required("receiver_identification")?.to_string(),
            file_creation_date: f.date("file_creation_date")?,
            file_creation_time: f.time("file_creation_time")?,
            file_identification_number: f.field().to_string(),
            physical_record_length: f.optional_int("physical_record_length")?,
            block_size: f.optional_int("block_size")?,
            version_number: parse_version(f.field())?,
        })
    }
}

/// Статус обработки группы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    /// `1`
    Update,
    /// `2`
    Deletion,
    /// `3`
    Correction,
    /// `4`
    TestOnly,
}

impl GroupStatus {
    fn from_field(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Self::Update),
            "2" => Some(Self::Deletion),
            "3" => Some(Self::Correction),
            "4" => Some(Self::TestOnly),
            _ => None,
        }
    }
}

/// Насколько окончательна дата отчёта группы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AsOfDateModifier {
    /// `1`
    InterimPreviousDay,
    /// `2`
    FinalPreviousDay,
    /// `3`
    InterimSameDay,
    /// `4`
    FinalSameDay,
}

impl AsOfDateModifier {
    fn from_field(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Self::InterimPreviousDay),
            "2" => Some(Self::FinalPreviousDay),
            "3" => Some(Self::InterimSameDay),
            "4" => Some(Self::FinalSameDay),
            _ => None,
        }
    }
}

/// `02` заголовок группы.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupHeader {
    pub ultimate_receiver_identification: String,
    pub originator_identification: String,
    pub group_status: GroupStatus,
    pub as_of_date: NaiveDate,
    /// Секунды от полуночи.
    pub as_of_time: u32,
    pub currency_code: Option<String>,
    pub as_of_date_modifier: Option<AsOfDateModifier>,
}

impl GroupHeader {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let record = RecordCode::GroupHeader;
        let mut f = FieldCursor::new(record, raw);
        let ultimate_receiver_identification = f.field().to_string();
        let originator_identification = f.required("originator_identification")?.to_string();
        let status = f.required("group_status")?;
        let group_status = GroupStatus::from_field(status).ok_or_else(|| {
            ParseError::InvalidField { record, field: "group_status", value: status.to_string() }
        })?;
        let as_of_date = f.date("as_of_date")?;
        let as_of_time = f.time("as_of_time")?;
        let currency_code = f.optional_string();
        let as_of_date_modifier = match f.field() {
            "" => None,
            value => Some(AsOfDateModifier::from_field(value).ok_or_else(|| {
                ParseError::InvalidField {
                    record,
                    field: "as_of_date_modifier",
                    value: value.to_string(),
                }
            })?),
        };
        Ok(Self {
            ultimate_receiver_identification,
            originator_identification,
            group_status,
            as_of_date,
            as_of_time,
            currency_code,
            as_of_date_modifier,
        })
    }
}

/// Один итог или статус из записи идентификатора счёта.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub type_code: TypeCode,
    /// Минимальные единицы валюты; пустое поле читается как 0.
    pub amount: i64,
    pub item_count: Option<u64>,
    pub funds_type: FundsType,
}

/// `03` идентификатор счёта с итогами.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountIdentifier {
    pub customer_account_number: String,
    pub currency_code: Option<String>,
    pub summaries: Vec<Summary>,
}

impl AccountIdentifier {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let mut f = FieldCursor::new(RecordCode::AccountIdentifier, raw);
        let customer_account_number = f.required("customer_account_number")?.to_string();
        let currency_code = f.optional_string();

        let mut summaries = Vec::new();
        while f.has_content() {
            summaries.push(Summary {
                type_code: f.type_code("type_code")?,
                amount: f.amount("amount")?,
                item_count: f.optional_int("item_count")?,
                funds_type: FundsType::read(&mut f)?,
            });
        }

        Ok(Self { customer_account_number, currency_code, summaries })
    }
}

/// `16` транзакция.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionDetail {
    pub type_code: TypeCode,
    /// Минимальные единицы валюты; пустое поле читается как 0.
    pub amount: i64,
    pub funds_type: FundsType,
    pub bank_reference: String,
    pub customer_reference: String,
    /// Свободный текст, строки продолжений соединены через `\n`.
    pub text: String,
}

impl TransactionDetail {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let mut f = FieldCursor::new(RecordCode::TransactionDetail, raw);
        let type_code = f.type_code("type_code")?;
        let amount = f.amount("amount")?;
        let funds_type = FundsType::read(&mut f)?;
        let bank_reference = f.field().to_string();
        let customer_reference = f.field().to_string();
        let text = f.remainder().trim_start_matches('\n').to_string();
        Ok(Self { type_code, amount, funds_type, bank_reference, customer_reference, text })
    }

    /// Содержит ли `raw` разделитель, открывающий текстовое поле.
    ///
    /// Неполный или некорректный префикс до текста не дошёл.
    pub(crate) fn reaches_text(raw: &str) -> bool {
        let mut f = FieldCursor::new(RecordCode::TransactionDetail, raw);
        f.next_field().is_some()
            && f.next_field().is_some()
            && f.is_delimited()
            && FundsType::read(&mut f).is_ok()
            && f.next_field().is_some()
            && f.next_field().is_some()
            && f.is_delimited()
    }
}

/// `49` трейлер счёта.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountTrailer {
    pub account_control_total: i64,
    pub number_of_records: u64,
}

impl AccountTrailer {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let mut f = FieldCursor::new(RecordCode::AccountTrailer, raw);
        Ok(Self {
            account_control_total: f.int("account_control_total")?,
            number_of_records: f.int("number_of_records")?,
        })
    }
}

/// `98` трейлер группы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTrailer {
    pub group_control_total: i64,
    pub number_of_accounts: u64,
    pub number_of_records: u64,
}

impl GroupTrailer {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let mut f = FieldCursor::new(RecordCode::GroupTrailer, raw);
        Ok(Self {
            group_control_total: f.int("group_control_total")?,
            number_of_accounts: f.int("number_of_accounts")?,
            number_of_records: f.int("number_of_records")?,
        })
    }
}

/// `99` трейлер файла.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTrailer {
    pub file_control_total: i64,
    pub number_of_groups: u64,
    pub number_of_records: u64,
}

impl FileTrailer {
    pub(crate) fn decode(raw: &str) -> Result<Self, ParseError> {
        let mut f = FieldCursor::new(RecordCode::FileTrailer, raw);
        Ok(Self {
            file_control_total: f.int("file_control_total")?,
            number_of_groups: f.int("number_of_groups")?,
            number_of_records: f.int("number_of_records")?,
        })
    }
}

/// `88` продолжение в том виде, в каком оно было до слияния.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Continuation {
    pub continuation: String,
}

impl Continuation {
    fn decode(raw: &str) -> Self {
        let mut f = FieldCursor::new(RecordCode::Continuation, raw);
        Self { continuation: f.remainder().to_string() }
    }
}
