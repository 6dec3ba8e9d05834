//! # e2e-tests - End-to-end тесты библиотеки `bai2` и CLI `bai2-inspect`
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `daily.bai2` — дневной отчёт, текст транзакции продолжен записью `88`
//! - `daily_with_summary.bai2` — счёт с суммарными записями, входящими в контрольную сумму
//! - `daily_summary_excluded.bai2` — тот же счёт, но банк не включает суммарные записи в контрольную сумму
//! - `eod.bai2` — отчёт на конец дня с валютированием `9999`
//! - `eod_with_slash_in_text.bai2` — продолжение текста начинается с `/`
//! - `invalid_checksum_eod.bai2` — сумма транзакций не совпадает с трейлером счёта
//! - `daily_with_missing_continuation.bai2` — трейлер счёта учитывает отсутствующую запись `88`
//! - `unsupported_version.bai2` — версия формата 3

use std::path::PathBuf;

use anyhow::Context;
use bai2::{BaiFile, ParseOptions};

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Разобрать фикстуру с заданными опциями.
pub fn parse_fixture(name: &str, options: &ParseOptions) -> anyhow::Result<BaiFile> {
    BaiFile::parse_file(fixture(name), options).with_context(|| format!("fixture {name}"))
}
