//! Проверенная иерархия документа BAI2.
//!
//! [`BaiFile::parse`] — точка входа библиотеки. Запускает весь конвейер
//! (разбиение, слияние продолжений, построение дерева, декодирование, проверка)
//! и возвращает либо полный проверенный [`BaiFile`], либо первую найденную ошибку.
//!
//! ```
//! use bai2::{BaiFile, ParseOptions};
//!
//! let data = "\
//! 01,121140399,9999999999,150401,0900,1,80,1,2/
//! 02,9999999999,121140399,1,150331,2400,USD,2/
//! 03,3300000001,USD,/
//! 16,174,1500000,0,BR0001,CR0001,DEPOSIT/
//! 49,1500000,3/
//! 98,1500000,1,5/
//! 99,1500000,1,7/
//! ";
//!
//! let file = BaiFile::parse(data, &ParseOptions::default()).unwrap();
//! let account = &file.groups()[0].accounts()[0];
//! assert_eq!(account.customer(), "3300000001");
//! assert_eq!(account.transactions()[0].amount(), 1_500_000);
//! assert_eq!(account.transactions()[0].text(), "DEPOSIT");
//! ```

mod integrity;

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::ParseError,
    fields::{
        AccountIdentifier, AccountTrailer, AsOfDateModifier, FileHeader, FileTrailer, FundsType,
        GroupHeader, GroupStatus, GroupTrailer, Summary, TransactionDetail, compose_datetime,
    },
    options::ParseOptions,
    record::{self, Record, RecordCode},
    tree::{self, ParseNode},
    type_code::{Direction, TypeCode},
};

/// Разобранный и проверенный файл BAI2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaiFile {
    #[serde(skip)]
    header_record: Record,
    #[serde(skip)]
    trailer_record: Record,
    header: FileHeader,
    trailer: FileTrailer,
    groups: Vec<Group>,
}

/// Группа счетов от одного отправителя.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    #[serde(skip)]
    header_record: Record,
    #[serde(skip)]
    trailer_record: Record,
    header: GroupHeader,
    trailer: GroupTrailer,
    accounts: Vec<Account>,
}

/// Один счёт с итогами и транзакциями.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    #[serde(skip)]
    header_record: Record,
    #[serde(skip)]
    trailer_record: Record,
    header: AccountIdentifier,
    trailer: AccountTrailer,
    transactions: Vec<Transaction>,
}

/// Одна транзакция.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    #[serde(skip)]
    record: Record,
    #[serde(flatten)]
    detail: TransactionDetail,
}

impl BaiFile {
    /// Разбирает и проверяет целиком файл BAI2 из памяти.
    ///
    /// # Ошибки
    ///
    /// [`Error::Parse`](crate::Error::Parse), если текст не соответствует
    /// грамматике, [`Error::Integrity`](crate::Error::Integrity), если не сходится
    /// контрольная сумма или счётчик трейлера.
    pub fn parse(data: &str, options: &ParseOptions) -> crate::Result<Self> {
        let records = record::lex(data, options);
        debug!(records = records.len(), "lexed physical records");

        let records = record::merge_continuations(records)?;
        debug!(records = records.len(), "merged continuations");

        let root = tree::build_tree(records)?;
        debug!(groups = root.children.len(), "built record tree");

        let file = Self::from_node(root)?;
        let records = integrity::verify_file(&file, options)?;
        debug!(records, "verified file integrity");

        Ok(file)
    }

    /// Читает файл по пути `path` и разбирает его через [`BaiFile::parse`].
    ///
    /// # Ошибки
    ///
    /// [`Error::Io`](crate::Error::Io), если файл не читается, иначе как
    /// [`BaiFile::parse`].
    pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> crate::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = data.len(), "read input file");
        Self::parse(&data, options)
    }

    fn from_node(node: ParseNode) -> Result<Self, ParseError> {
        let (header_record, trailer_record, children) = split_level(node, RecordCode::FileTrailer)?;
        Ok(Self {
            header: FileHeader::decode(header_record.raw())?,
            trailer: FileTrailer::decode(trailer_record.raw())?,
            groups: children.into_iter().map(Group::from_node).collect::<Result<_, _>>()?,
            header_record,
            trailer_record,
        })
    }

    /// Идентификатор отправителя.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.header.sender_identification
    }

    /// Идентификатор получателя.
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.header.receiver_identification
    }

    /// Дата и время создания файла.
    #[must_use]
    pub fn creation_datetime(&self) -> DateTime<Utc> {
        compose_datetime(self.header.file_creation_date, self.header.file_creation_time)
    }

    #[must_use]
    pub fn file_identification_number(&self) -> &str {
        &self.header.file_identification_number
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Все поля заголовка, включая длину записи, размер блока и версию.
    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Объявленные контрольная сумма и счётчики.
    #[must_use]
    pub fn trailer(&self) -> &FileTrailer {
        &self.trailer
    }
}

impl Group {
    fn from_node(node: ParseNode) -> Result<Self, ParseError> {
        let (header_record, trailer_record, children) =
            split_level(node, RecordCode::GroupTrailer)?;
        Ok(Self {
            header: GroupHeader::decode(header_record.raw())?,
            trailer: GroupTrailer::decode(trailer_record.raw())?,
            accounts: children.into_iter().map(Account::from_node).collect::<Result<_, _>>()?,
            header_record,
            trailer_record,
        })
    }

    /// Конечный получатель группы.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.header.ultimate_receiver_identification
    }

    /// Отправитель группы.
    #[must_use]
    pub fn originator(&self) -> &str {
        &self.header.originator_identification
    }

    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        self.header.currency_code.as_deref()
    }

    #[must_use]
    pub fn group_status(&self) -> GroupStatus {
        self.header.group_status
    }

    /// Дата и время, на которые в группе указаны остатки.
    #[must_use]
    pub fn as_of_datetime(&self) -> DateTime<Utc> {
        compose_datetime(self.header.as_of_date, self.header.as_of_time)
    }

    #[must_use]
    pub fn as_of_date_modifier(&self) -> Option<AsOfDateModifier> {
        self.header.as_of_date_modifier
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    #[must_use]
    pub fn header(&self) -> &GroupHeader {
        &self.header
    }

    #[must_use]
    pub fn trailer(&self) -> &GroupTrailer {
        &self.trailer
    }
}

impl Account {
    fn from_node(node: ParseNode) -> Result<Self, ParseError> {
        let (header_record, trailer_record, children) =
            split_level(node, RecordCode::AccountTrailer)?;
        Ok(Self {
            header: AccountIdentifier::decode(header_record.raw())?,
            trailer: AccountTrailer::decode(trailer_record.raw())?,
            transactions: children
                .into_iter()
                .map(Transaction::from_node)
                .collect::<Result<_, _>>()?,
            header_record,
            trailer_record,
        })
    }

    /// Номер счёта клиента.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.header.customer_account_number
    }

    /// Валюта счёта; `None` означает валюту группы.
    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        self.header.currency_code.as_deref()
    }

    /// Итоги и статусы из записи идентификатора счёта.
    #[must_use]
    pub fn summaries(&self) -> &[Summary] {
        &self.header.summaries
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn trailer(&self) -> &AccountTrailer {
        &self.trailer
    }
}

impl Transaction {
    fn from_node(node: ParseNode) -> Result<Self, ParseError> {
        let line = node.line();
        let found = node.record_codes();
        let mut records = node.records.into_iter();
        match (records.next(), records.next()) {
            (Some(record), None)
                if record.code() == RecordCode::TransactionDetail && node.children.is_empty() =>
            {
                let detail = TransactionDetail::decode(record.raw())?;
                Ok(Self { record, detail })
            }
            _ => Err(ParseError::UnexpectedRecords {
                line,
                level: RecordCode::TransactionDetail,
                found,
            }),
        }
    }

    /// Сумма в минимальных единицах валюты счёта.
    #[must_use]
    pub fn amount(&self) -> i64 {
        self.detail.amount
    }

    /// Свободный текст, строки продолжений соединены через `\n`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.detail.text
    }

    #[must_use]
    pub fn type_code(&self) -> &TypeCode {
        &self.detail.type_code
    }

    #[must_use]
    pub fn bank_reference(&self) -> &str {
        &self.detail.bank_reference
    }

    #[must_use]
    pub fn customer_reference(&self) -> &str {
        &self.detail.customer_reference
    }

    #[must_use]
    pub fn funds_type(&self) -> &FundsType {
        &self.detail.funds_type
    }

    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.detail.type_code.transaction == Some(Direction::Credit)
    }

    #[must_use]
    pub fn is_debit(&self) -> bool {
        self.detail.type_code.transaction == Some(Direction::Debit)
    }

    /// Число физических строк транзакции вместе с продолжениями.
    #[must_use]
    pub fn physical_record_count(&self) -> u64 {
        self.record.physical_record_count()
    }
}

/// Делит уровень на запись заголовка, запись трейлера и дочерние узлы.
///
/// Ошибка, если на уровне не ровно заголовок и парный ему трейлер.
fn split_level(
    node: ParseNode,
    trailer: RecordCode,
) -> Result<(Record, Record, Vec<ParseNode>), ParseError> {
    let line = node.line();
    let level = node.code;
    let found = node.record_codes();
    let mut records = node.records.into_iter();
    match (records.next(), records.next(), records.next()) {
        (Some(head), Some(tail), None) if head.code() == level && tail.code() == trailer => {
            Ok((head, tail, node.children))
        }
        _ => Err(ParseError::UnexpectedRecords { line, level, found }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{Entity, Error, IntegrityError},
        fields::END_OF_DAY,
        type_code::Scope,
    };

    const MINIMAL: &str = "\
01,121140399,9999999999,150401,0900,1,80,1,2/
02,9999999999,121140399,1,150331,2400,USD,2/
03,3300000001,USD,/
16,174,1500000,0,BR0001,CR0001,DEPOSIT/
49,1500000,3/
98,1500000,1,5/
99,1500000,1,7/
";

    fn parse(data: &str) -> crate::Result<BaiFile> {
        BaiFile::parse(data, &ParseOptions::default())
    }

    #[test]
    fn minimal_file_builds_one_of_each() {
        let file = parse(MINIMAL).unwrap();

        assert_eq!(file.sender(), "121140399");
        assert_eq!(file.receiver(), "9999999999");
        assert_eq!(file.creation_datetime().to_rfc3339(), "2015-04-01T09:00:00+00:00");
        assert_eq!(file.header().version_number, 2);
        assert_eq!(file.groups().len(), 1);

        let group = &file.groups()[0];
        assert_eq!(group.destination(), "9999999999");
        assert_eq!(group.originator(), "121140399");
        assert_eq!(group.currency_code(), Some("USD"));
        assert_eq!(group.group_status(), GroupStatus::Update);
        assert_eq!(group.as_of_datetime().to_rfc3339(), "2015-04-01T00:00:00+00:00");
        assert_eq!(group.accounts().len(), 1);

        let account = &group.accounts()[0];
        assert_eq!(account.customer(), "3300000001");
        assert!(account.summaries().is_empty());
        assert_eq!(account.transactions().len(), 1);

        let tx = &account.transactions()[0];
        assert_eq!(tx.amount(), 1_500_000);
        assert_eq!(tx.text(), "DEPOSIT");
        assert_eq!(tx.type_code().code, 174);
        assert_eq!(tx.type_code().scope, Some(Scope::Detail));
        assert_eq!(tx.bank_reference(), "BR0001");
        assert_eq!(tx.customer_reference(), "CR0001");
        assert!(tx.is_credit());
        assert!(!tx.is_debit());
        assert_eq!(tx.physical_record_count(), 1);
    }

    #[test]
    fn file_record_count_off_by_one_names_file() {
        let data = MINIMAL.replace("99,1500000,1,7/", "99,1500000,1,8/");
        match parse(&data) {
            Err(Error::Integrity(err)) => {
                assert_eq!(
                    err,
                    IntegrityError::RecordCount { entity: Entity::File, expected: 8, actual: 7 }
                );
            }
            other => panic!("expected integrity error, got {other:?}"),
        }
    }

    #[test]
    fn short_distribution_is_a_parse_error() {
        let data = MINIMAL.replace(
            "16,174,1500000,0,BR0001,CR0001,DEPOSIT/",
            "16,174,1500000,D,2,0,1500000/",
        );
        assert!(matches!(
            parse(&data),
            Err(Error::Parse(ParseError::MalformedAvailability { declared: 2, available: 1, .. }))
        ));
    }

    #[test]
    fn continued_text_matches_single_line_text() {
        let split = MINIMAL
            .replace("DEPOSIT/", "CHECK/\n88,DEPOSIT/")
            .replace("49,1500000,3/", "49,1500000,4/")
            .replace("98,1500000,1,5/", "98,1500000,1,6/")
            .replace("99,1500000,1,7/", "99,1500000,1,8/");

        let split = parse(&split).unwrap();
        let tx = &split.groups()[0].accounts()[0].transactions()[0];
        assert_eq!(tx.text(), "CHECK\nDEPOSIT");
        assert_eq!(tx.physical_record_count(), 2);

        let detail = TransactionDetail::decode("16,174,1500000,0,BR0001,CR0001,CHECK\nDEPOSIT")
            .unwrap();
        assert_eq!(detail.text, tx.text());
    }

    #[test]
    fn record_split_at_any_field_matches_single_line() {
        let single = "16,195,250000,S,100000,100000,50000,WIRE001,INV-77,INCOMING WIRE";
        let expected = TransactionDetail::decode(single).unwrap();

        let splits = [
            "16,195,250000,S,100000,100000,50000/\n88,WIRE001,INV-77,INCOMING WIRE/",
            "16,195,250000/\n88,S,100000,100000/\n88,50000,WIRE001,INV-77,INCOMING WIRE/",
            "16,195,250000,S,100000,100000,50000,WIRE001,INV-77/\n88,INCOMING WIRE/",
        ];
        for split in splits {
            let data = MINIMAL
                .replace("16,174,1500000,0,BR0001,CR0001,DEPOSIT/", split)
                .replace("49,1500000,3/", &format!("49,250000,{}/", split.lines().count() + 2))
                .replace("98,1500000,1,5/", &format!("98,250000,1,{}/", split.lines().count() + 4))
                .replace("99,1500000,1,7/", &format!("99,250000,1,{}/", split.lines().count() + 6));

            let file = parse(&data).unwrap();
            let tx = &file.groups()[0].accounts()[0].transactions()[0];
            assert_eq!(tx.detail, expected, "{split}");
            assert_eq!(tx.physical_record_count(), split.lines().count() as u64);
        }
    }

    #[test]
    fn continued_account_header_counts_both_lines() {
        let data = "\
01,121140399,9999999999,150401,0900,1,80,1,2/
02,9999999999,121140399,1,150331,0800,USD,2/
03,3300000001,USD,010,500000,,/
88,015,750000,,/
16,195,250000,0,,,WIRE/
49,1500000,4/
98,1500000,1,6/
99,1500000,1,8/
";
        let file = parse(data).unwrap();
        let account = &file.groups()[0].accounts()[0];
        let amounts: Vec<i64> = account.summaries().iter().map(|s| s.amount).collect();
        assert_eq!(amounts, [500000, 750000]);
        assert_eq!(file.groups()[0].as_of_datetime().to_rfc3339(), "2015-03-31T08:00:00+00:00");
    }

    #[test]
    fn unsupported_version_fails() {
        let data = MINIMAL.replace("0900,1,80,1,2/", "0900,1,80,1,3/");
        assert!(matches!(
            parse(&data),
            Err(Error::Parse(ParseError::UnsupportedVersion(version))) if version == "3"
        ));
    }

    #[test]
    fn level_with_extra_record_fails() {
        let file = ParseNode {
            code: RecordCode::FileHeader,
            records: vec![
                Record::new("01,A,B,150401,0900,1,,,2".to_string(), 1),
                Record::new("88,EXTRA".to_string(), 2),
                Record::new("99,0,0,3".to_string(), 3),
            ],
            children: Vec::new(),
        };
        assert_eq!(
            BaiFile::from_node(file),
            Err(ParseError::UnexpectedRecords {
                line: 1,
                level: RecordCode::FileHeader,
                found: vec![
                    RecordCode::FileHeader,
                    RecordCode::Continuation,
                    RecordCode::FileTrailer
                ],
            })
        );
    }

    #[test]
    fn transaction_with_extra_record_fails() {
        let node = ParseNode {
            code: RecordCode::TransactionDetail,
            records: vec![
                Record::new("16,174,1,0,,,".to_string(), 4),
                Record::new("88,LATE".to_string(), 5),
            ],
            children: Vec::new(),
        };
        assert!(matches!(
            Transaction::from_node(node),
            Err(ParseError::UnexpectedRecords { line: 4, level: RecordCode::TransactionDetail, .. })
        ));
    }

    #[test]
    fn value_dated_transaction_at_end_of_day() {
        let data = MINIMAL.replace(
            "16,174,1500000,0,BR0001,CR0001,DEPOSIT/",
            "16,195,1500000,V,150403,9999,FW0002,,FED WIRE IN/",
        );
        let file = parse(&data).unwrap();
        let tx = &file.groups()[0].accounts()[0].transactions()[0];
        let availability = tx.funds_type().availability.as_ref().unwrap();
        assert!(matches!(
            availability,
            crate::fields::Availability::ValueDated { time: END_OF_DAY, .. }
        ));
        assert_eq!(
            availability.value_datetime().unwrap().to_rfc3339(),
            "2015-04-04T00:00:00+00:00"
        );
        assert_eq!(tx.type_code().description, Some("Incoming Money Transfer"));
    }

    #[test]
    fn serializes_without_raw_records() {
        let file = parse(MINIMAL).unwrap();
        let json = serde_json::to_value(&file).unwrap();

        assert_eq!(json["header"]["sender_identification"], "121140399");
        assert_eq!(json["header"]["file_creation_date"], "2015-04-01");
        let tx = &json["groups"][0]["accounts"][0]["transactions"][0];
        assert_eq!(tx["amount"], 1_500_000);
        assert_eq!(tx["type_code"]["transaction"], "credit");
        assert!(tx.get("record").is_none());
    }

    #[test]
    fn parse_file_reports_missing_file() {
        let err = BaiFile::parse_file("/nonexistent/statement.bai2", &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
