use crate::{Money, TransactionKind};

use chrono::{DateTime, Local, NaiveDate};

/// Immutable entry describing a transaction that was successfully applied to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

/// Represents a WORM (Write Once, Read Many) log of the transactions applied to one account
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record stamped with the current local time, returning its index
    pub fn record(&mut self, kind: TransactionKind, amount: Money) -> usize {
        self.record_at(kind, amount, Local::now())
    }

    pub fn record_at(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        timestamp: DateTime<Local>,
    ) -> usize {
        let index = self.entries.len();

        self.entries.push(TransactionRecord {
            kind,
            amount,
            timestamp,
        });

        index
    }

    /// Replays records in insertion order, keeping only `kind` when one is given
    pub fn entries_matching(
        &self,
        kind: Option<TransactionKind>,
    ) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.entries
            .iter()
            .filter(move |entry| kind.map_or(true, |kind| entry.kind == kind))
    }

    /// Records whose local date is today, evaluated at call time
    pub fn entries_today(&self) -> Vec<&TransactionRecord> {
        self.entries_on(Local::now().date_naive())
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<&TransactionRecord> {
        self.entries
            .iter()
            .filter(|entry| entry.timestamp.date_naive() == date)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
