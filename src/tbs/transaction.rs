use crate::{Account, Money, Result};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransactionKindError {
    #[error("Unknown transaction kind: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        };
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        return match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            _ => Err(TransactionKindError::Unknown(s.to_string())),
        };
    }
}

/// Transaction represents a requested change to an account's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        return match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        };
    }

    pub fn amount(&self) -> Money {
        return match self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => *amount,
        };
    }

    /// Applies the transaction to `account`, recording it in the account's history only when
    /// the balance change succeeded
    pub fn apply(&self, account: &mut Account) -> Result {
        match self {
            Self::Deposit { amount } => account.deposit(*amount)?,
            Self::Withdrawal { amount } => account.withdraw(*amount)?,
        }

        let index = account.history.record(self.kind(), self.amount());

        log::debug!(
            "Recorded {:?} on account {} at history index {index}",
            self,
            account.number
        );

        return Ok(());
    }
}
