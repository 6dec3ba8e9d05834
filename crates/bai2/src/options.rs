//! Настройки парсера.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Опции для известных отступлений банков от стандарта BAI2.
///
/// Обе опции по умолчанию `false`, что соответствует поведению по стандарту.
///
/// Опции можно задавать по имени, опечатки при этом отклоняются:
///
/// ```
/// use bai2::ParseOptions;
///
/// let opts = ParseOptions::default()
///     .with("account_control_ignores_summary_amounts", true)
///     .unwrap();
/// assert!(opts.account_control_ignores_summary_amounts);
///
/// assert!(ParseOptions::default().with("ignore_summaries", true).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Контрольная сумма счёта включает только суммы транзакций, без сумм
    /// итоговых записей из идентификатора счёта.
    pub account_control_ignores_summary_amounts: bool,

    /// Разделителем считается только `/` в самом конце строки, поэтому
    /// продолженный текст транзакции может начинаться с `/`.
    pub continuations_slash_delimit_end_of_line_only: bool,
}

impl ParseOptions {
    /// Имена всех известных опций.
    pub const NAMES: [&'static str; 2] =
        ["account_control_ignores_summary_amounts", "continuations_slash_delimit_end_of_line_only"];

    /// Возвращает копию, в которой опция с именем `name` равна `value`.
    pub fn with(mut self, name: &str, value: bool) -> Result<Self, OptionsError> {
        match name {
            "account_control_ignores_summary_amounts" => {
                self.account_control_ignores_summary_amounts = value;
            }
            "continuations_slash_delimit_end_of_line_only" => {
                self.continuations_slash_delimit_end_of_line_only = value;
            }
            other => return Err(OptionsError::Unknown(other.to_string())),
        }
        Ok(self)
    }
}
