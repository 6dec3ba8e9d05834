//! Парсер и верификатор банковских выписок в формате BAI2.
//!
//! Файл BAI2 — построчная иерархия записей с разделителем-запятой:
//! File → Group → Account → Transaction. Каждый уровень закрывается трейлером
//! с контрольной суммой и счётчиками записей. Крейт превращает такой файл
//! в неизменяемый проверенный документ:
//!
//! 1. [`record::lex`] режет текст на записи и очищает разделители,
//! 2. [`record::merge_continuations`] вливает записи продолжения `88` в запись,
//!    которую они продолжают,
//! 3. записи вкладываются друг в друга по парам заголовок/трейлер,
//! 4. каждая запись декодируется в типизированные [`fields`],
//! 5. счётчики и контрольные суммы трейлеров проверяются на каждом уровне.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use bai2::{BaiFile, ParseOptions};
//!
//! let options = ParseOptions::default();
//! let file = BaiFile::parse_file("statement.bai2", &options)?;
//!
//! for group in file.groups() {
//!     for account in group.accounts() {
//!         for tx in account.transactions() {
//!             println!("{} {} {}", account.customer(), tx.amount(), tx.text());
//!         }
//!     }
//! }
//! # Ok::<(), bai2::Error>(())
//! ```
//!
//! Разбор синхронный и не разделяет состояние между вызовами; документы — обычные
//! владеющие данные и могут передаваться между потоками.

pub mod document;
pub mod error;
pub mod fields;
pub mod options;
pub mod record;
pub mod type_code;

mod tree;

pub use document::{Account, BaiFile, Group, Transaction};
pub use error::{Entity, Error, IntegrityError, OptionsError, ParseError, Result};
pub use options::ParseOptions;
