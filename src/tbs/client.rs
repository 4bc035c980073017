use crate::ids::{AccountNumber, TaxId};
use crate::{Account, Result, Transaction};

use chrono::NaiveDate;

use thiserror::Error;

/// Maximum number of transactions one account may register per calendar day
pub const DAILY_TRANSACTION_LIMIT: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClientError {
    #[error("Daily transaction limit of {limit} reached for account {account}")]
    DailyLimitExceeded { account: AccountNumber, limit: usize },
}

/// Personal details of an individual client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub tax_id: TaxId,
    pub full_name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub individual: Individual,
    pub address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(individual: Individual, address: String) -> Self {
        return Self {
            individual,
            address,
            accounts: Vec::new(),
        };
    }

    pub fn tax_id(&self) -> &TaxId {
        return &self.individual.tax_id;
    }

    pub fn name(&self) -> &str {
        return &self.individual.full_name;
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        return &self.accounts;
    }

    pub fn first_account(&self) -> Option<AccountNumber> {
        return self.accounts.first().copied();
    }

    /// Duplicates are not filtered out
    pub fn attach_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Applies `transaction` to `account` unless the account already reached its daily limit
    pub fn request_transaction(&self, account: &mut Account, transaction: Transaction) -> Result {
        let today = account.history.entries_today().len();

        if today >= DAILY_TRANSACTION_LIMIT {
            log::warn!(
                "Client {} hit the daily limit on account {} with {today} transactions",
                self.tax_id(),
                account.number
            );

            Err(ClientError::DailyLimitExceeded {
                account: account.number,
                limit: DAILY_TRANSACTION_LIMIT,
            })?
        }

        transaction.apply(account)?;

        return Ok(());
    }
}
