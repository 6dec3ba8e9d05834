//! Модуль ошибок разбора и проверки BAI2.

use std::fmt;

use thiserror::Error;

use crate::record::RecordCode;

/// Главная ошибка, возвращаемая [`BaiFile::parse`](crate::BaiFile::parse).
///
/// Разбор возвращает либо полностью проверенный документ, либо ровно одну такую ошибку.
#[derive(Debug, Error)]
pub enum Error {
    /// Вход не соответствует грамматике BAI2.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Вход корректен, но контрольные суммы трейлеров не сходятся.
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Неизвестное имя опции.
    #[error("options error: {0}")]
    Options(#[from] OptionsError),

    /// Ошибка ввода/вывода при чтении файла с диска.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ошибка структуры или отдельного поля.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Во входных данных нет ни одной записи.
    #[error("empty input")]
    EmptyInput,

    /// Строка начинается с кода записи, которого нет в таблице BAI2.
    #[error("unrecognized record code '{prefix}' at line {line}")]
    UnrecognizedRecord {
        /// Номер физической строки (1-based).
        line: usize,
        /// Первые два символа строки.
        prefix: String,
    },

    /// Первая запись не является заголовком файла.
    #[error("expected file header (01) at line {line}, found {found}")]
    ExpectedFileHeader {
        /// Номер физической строки (1-based).
        line: usize,
        /// Код фактически найденной записи.
        found: RecordCode,
    },

    /// Заголовок, трейлер или транзакция оказались под чужим родителем.
    #[error("parsing {record} at line {line}: expected {expected} parent, found {actual}")]
    UnexpectedParent {
        /// Номер физической строки (1-based).
        line: usize,
        /// Код размещаемой записи.
        record: RecordCode,
        /// Код, который должен быть у объемлющего уровня.
        expected: RecordCode,
        /// Фактический код объемлющего уровня.
        actual: RecordCode,
    },

    /// Запись, которой нет места в иерархии, например второй заголовок файла.
    #[error("unexpected {record} at line {line}")]
    UnexpectedRecord {
        /// Номер физической строки (1-based).
        line: usize,
        /// Код записи.
        record: RecordCode,
    },

    /// Запись пришла после того, как трейлер файла закрыл последний уровень.
    #[error("{record} at line {line} has no enclosing record")]
    NoOpenRecord {
        /// Номер физической строки (1-based).
        line: usize,
        /// Код записи без родителя.
        record: RecordCode,
    },

    /// Продолжение встретилось раньше записи, которую оно могло бы продолжить.
    #[error("continuation at line {line} has no preceding record")]
    OrphanContinuation {
        /// Номер физической строки (1-based).
        line: usize,
    },

    /// Вход закончился, пока заголовок ещё ждал свой трейлер.
    #[error("reached unexpected end of input (EOF) with {open} still open")]
    UnexpectedEof {
        /// Код самого внутреннего незакрытого уровня.
        open: RecordCode,
    },

    /// Уровень состоит не ровно из заголовка и трейлера.
    #[error("unexpected records at {level} level (line {line}): found [{}]", join_codes(.found))]
    UnexpectedRecords {
        /// Номер физической строки (1-based) первой записи уровня.
        line: usize,
        /// Код заголовка уровня.
        level: RecordCode,
        /// Коды записей, попавших на уровень.
        found: Vec<RecordCode>,
    },

    /// Заголовок файла объявляет версию формата, отличную от 2.
    #[error("unsupported BAI version '{0}', only version 2 is supported")]
    UnsupportedVersion(String),

    /// Отсутствует обязательное поле.
    #[error("{record}: missing field '{field}'")]
    MissingField {
        /// Тип записи, которой принадлежит поле.
        record: RecordCode,
        /// Имя поля.
        field: &'static str,
    },

    /// Поле присутствует, но не декодируется.
    #[error("{record}: invalid value for '{field}': '{value}'")]
    InvalidField {
        /// Тип записи, которой принадлежит поле.
        record: RecordCode,
        /// Имя поля.
        field: &'static str,
        /// Исходный текст поля.
        value: String,
    },

    /// Блок доступности `D` объявляет больше пар, чем есть в записи.
    #[error("{record}: distributed availability declares {declared} entries, only {available} present")]
    MalformedAvailability {
        /// Тип записи, которой принадлежит блок.
        record: RecordCode,
        /// Число элементов, объявленное записью.
        declared: usize,
        /// Фактически присутствующие полные пары (дни, сумма).
        available: usize,
    },
}

fn join_codes(codes: &[RecordCode]) -> String {
    codes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Уровень иерархии документа, на котором не сошлась проверка.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// Файл целиком.
    File,
    /// Группа, определяемая отправителем.
    Group {
        /// Идентификатор отправителя из заголовка группы.
        originator: String,
    },
    /// Счёт, определяемый номером счёта клиента.
    Account {
        /// Номер счёта клиента из записи идентификатора счёта.
        customer: String,
    },
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Group { originator } => write!(f, "group (originator {originator})"),
            Self::Account { customer } => write!(f, "account {customer}"),
        }
    }
}

/// Несовпадение контрольной суммы или счётчика при проверке.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// Число дочерних сущностей расходится с трейлером.
    #[error("number of children invalid for {entity}: expected {expected}, actually {actual}")]
    ChildCount {
        /// Где найдено расхождение.
        entity: Entity,
        /// Значение, объявленное трейлером.
        expected: u64,
        /// Число разобранных дочерних сущностей.
        actual: u64,
    },

    /// Сумма дочерних сумм расходится с контрольной суммой трейлера.
    #[error("control total invalid for {entity}: expected {expected}, actually {actual}")]
    ControlTotal {
        /// Где найдено расхождение.
        entity: Entity,
        /// Сумма, объявленная трейлером.
        expected: i128,
        /// Пересчитанная сумма, без переполнения.
        actual: i128,
    },

    /// Число физических записей расходится с трейлером.
    #[error("record count invalid for {entity}: expected {expected}, actually {actual}")]
    RecordCount {
        /// Где найдено расхождение.
        entity: Entity,
        /// Значение, объявленное трейлером.
        expected: u64,
        /// Пересчитанное значение.
        actual: u64,
    },
}

impl IntegrityError {
    /// Возвращает сущность, на которой возникло расхождение.
    #[must_use]
    pub fn entity(&self) -> &Entity {
        match self {
            Self::ChildCount { entity, .. }
            | Self::ControlTotal { entity, .. }
            | Self::RecordCount { entity, .. } => entity,
        }
    }
}

/// Ошибка установки [`ParseOptions`](crate::ParseOptions) по имени.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Опции с таким именем нет.
    #[error("unknown option '{0}'")]
    Unknown(String),
}

/// Сокращение для результатов всего конвейера разбора.
pub type Result<T> = std::result::Result<T, Error>;
