//! Восстановление иерархии файл/группа/счёт/транзакция.
//!
//! Вложенность в BAI2 неявная: заголовок открывает уровень, трейлер его закрывает.
//! [`build_tree`] проходит плоский поток записей со стеком открытых уровней
//! и проверяет только пары кодов записей. Содержимое полей не смотрится.

use crate::{
    error::ParseError,
    record::{Record, RecordCode},
};

/// Уровень иерархии в процессе восстановления.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseNode {
    /// Код записи, открывшей уровень.
    pub(crate) code: RecordCode,
    /// Записи уровня: первым заголовок, последним трейлер.
    pub(crate) records: Vec<Record>,
    pub(crate) children: Vec<ParseNode>,
}

impl ParseNode {
    fn new(record: Record) -> Self {
        Self { code: record.code(), records: vec![record], children: Vec::new() }
    }

    /// Строка записи, открывшей уровень.
    pub(crate) fn line(&self) -> usize {
        self.records.first().map_or(0, Record::line)
    }

    /// Коды записей этого уровня.
    pub(crate) fn record_codes(&self) -> Vec<RecordCode> {
        self.records.iter().map(Record::code).collect()
    }
}

/// Строит дерево узлов с корнем в заголовке файла.
///
/// Открытые уровни лежат на стеке как владеющие узлы и прикрепляются
/// к родителю, когда трейлер их закрывает.
pub(crate) fn build_tree(records: Vec<Record>) -> Result<ParseNode, ParseError> {
    let mut records = records.into_iter();

    let first = records.next().ok_or(ParseError::EmptyInput)?;
    if first.code() != RecordCode::FileHeader {
        return Err(ParseError::ExpectedFileHeader { line: first.line(), found: first.code() });
    }

    let mut stack = vec![ParseNode::new(first)];
    let mut root = None;

    for record in records {
        let Some(top) = stack.last_mut() else {
            return Err(ParseError::NoOpenRecord { line: record.line(), record: record.code() });
        };

        match record.code() {
            RecordCode::GroupHeader | RecordCode::AccountIdentifier => {
                expect_parent(top, &record)?;
                stack.push(ParseNode::new(record));
            }
            RecordCode::AccountTrailer | RecordCode::GroupTrailer | RecordCode::FileTrailer => {
                expect_parent(top, &record)?;
                top.records.push(record);
                if let Some(closed) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(closed),
                        None => root = Some(closed),
                    }
                }
            }
            RecordCode::TransactionDetail => {
                expect_parent(top, &record)?;
                top.children.push(ParseNode::new(record));
            }
            // only reachable when records were not merged beforehand
            RecordCode::Continuation => match top.children.last_mut() {
                Some(child) => child.records.push(record),
                None => top.records.push(record),
            },
            RecordCode::FileHeader => {
                return Err(ParseError::UnexpectedRecord {
                    line: record.line(),
                    record: record.code(),
                });
            }
            RecordCode::Unrecognized => {
                return Err(ParseError::UnrecognizedRecord {
                    line: record.line(),
                    prefix: record.raw().chars().take(2).collect(),
                });
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::UnexpectedEof { open: open.code });
    }
    root.ok_or(ParseError::EmptyInput)
}

fn expect_parent(top: &ParseNode, record: &Record) -> Result<(), ParseError> {
    match record.code().parent() {
        Some(expected) if expected == top.code => Ok(()),
        Some(expected) => Err(ParseError::UnexpectedParent {
            line: record.line(),
            record: record.code(),
            expected,
            actual: top.code,
        }),
        None => Err(ParseError::UnexpectedRecord { line: record.line(), record: record.code() }),
    }
}
