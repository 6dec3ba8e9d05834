//! Тип средств и подзаписи доступности.
//!
//! Код типа средств определяет, сколько полей идёт следом:
//!
//! | код  | поля                                            |
//! |------|-------------------------------------------------|
//! | `S`  | суммы: сразу, через день, более чем через день  |
//! | `V`  | дата (`YYMMDD`) и время (`HHMM`) валютирования  |
//! | `D`  | число `n`, затем `n` пар (дни, сумма)           |
//! | иное | нет                                             |

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::scalar::FieldCursor;
use crate::error::ParseError;

/// Код типа средств вместе с описываемой им доступностью.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundsType {
    /// Исходный код типа средств (`0`, `1`, `2`, `S`, `V`, `D`, `Z`, ...).
    pub code: String,
    /// Разбивка доступности, есть для `S`, `V` и `D`.
    pub availability: Option<Availability>,
}

/// Когда средства становятся доступны.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Availability {
    /// Тип `S`: суммы по дням доступности.
    Distributed {
        /// Доступно сразу.
        immediate: i64,
        /// Доступно через день.
        one_day: i64,
        /// Доступно более чем через день.
        more_than_one_day: i64,
    },
    /// Тип `V`: все средства доступны в заданный момент.
    ValueDated {
        /// Дата валютирования.
        date: NaiveDate,
        /// Время валютирования в секундах от полуночи.
        time: u32,
    },
    /// Тип `D`: суммы по числу дней.
    Scheduled {
        /// По элементу на каждый день доступности.
        entries: Vec<ScheduledFunds>,
    },
}

/// Один элемент распределения доступности `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledFunds {
    /// Дней до доступности суммы.
    pub days: u32,
    /// Сумма в минимальных единицах.
    pub amount: i64,
}

impl Availability {
    /// Момент, когда средства с валютированием становятся доступны.
    #[must_use]
    pub fn value_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::ValueDated { date, time } => Some(super::compose_datetime(*date, *time)),
            _ => None,
        }
    }
}

impl FundsType {
    /// Читает код типа средств и следующие за ним поля доступности.
    pub(crate) fn read(cursor: &mut FieldCursor<'_>) -> Result<Self, ParseError> {
        let code = cursor.field().trim().to_string();
        let availability = match code.as_str() {
            "S" => Some(Availability::Distributed {
                immediate: cursor.amount("immediate_availability")?,
                one_day: cursor.amount("one_day_availability")?,
                more_than_one_day: cursor.amount("more_than_one_day_availability")?,
            }),
            "V" => Some(Availability::ValueDated {
                date: cursor.date("value_date")?,
                time: cursor.time("value_time")?,
            }),
            "D" => Some(read_scheduled(cursor)?),
            _ => None,
        };
        Ok(Self { code, availability })
    }
}

fn read_scheduled(cursor: &mut FieldCursor<'_>) -> Result<Availability, ParseError> {
    let declared: usize = cursor.int("number_of_distributions")?;
    let mut entries = Vec::with_capacity(declared.min(64));

    for available in 0..declared {
        let (Some(days), Some(amount)) = (cursor.next_field(), cursor.next_field()) else {
            return Err(ParseError::MalformedAvailability {
                record: cursor.record(),
                declared,
                available,
            });
        };
        entries.push(ScheduledFunds {
            days: days.trim().parse().map_err(|_| ParseError::InvalidField {
                record: cursor.record(),
                field: "availability_days",
                value: days.to_string(),
            })?,
            amount: super::scalar::parse_amount(cursor.record(), "availability_amount", amount)?,
        });
    }

    Ok(Availability::Scheduled { entries })
}
