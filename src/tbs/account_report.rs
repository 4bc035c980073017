
use crate::Account;

use serde::Serialize;

/// Row of the account listing
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub branch: String,
    pub number: u32,
    pub holder: String,
    pub balance: String,
}

impl AccountReport {
    pub fn build(account: &Account, holder: &str) -> Self {
        return Self {
            branch: account.branch.to_string(),
            number: account.number.0,
            holder: holder.to_string(),
            balance: account.balance().to_string(),
        };
    }
}
