use crate::ids::AccountNumber;
use crate::{Account, Money, TransactionKind, TransactionRecord};

use serde::Serialize;

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Display form of a [`TransactionRecord`]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub date: String,
    pub kind: String,
    pub amount: String,
}

impl From<&TransactionRecord> for StatementLine {
    fn from(record: &TransactionRecord) -> Self {
        return Self {
            date: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            kind: record.kind.to_string(),
            amount: record.amount.to_string(),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub account: AccountNumber,
    pub balance: Money,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    pub fn build(account: &Account, kind: Option<TransactionKind>) -> Self {
        return Self {
            account: account.number,
            balance: account.balance(),
            lines: account
                .history
                .entries_matching(kind)
                .map(StatementLine::from)
                .collect(),
        };
    }
}
