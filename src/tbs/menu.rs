use std::str::FromStr;

use thiserror::Error;

pub const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OperationError {
    #[error("Invalid operation: {0:?}")]
    Invalid(String),
}

/// Operator command selected from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s.trim() {
            "d" => Ok(Self::Deposit),
            "s" => Ok(Self::Withdraw),
            "e" => Ok(Self::Statement),
            "nc" => Ok(Self::NewAccount),
            "lc" => Ok(Self::ListAccounts),
            "nu" => Ok(Self::NewClient),
            "q" => Ok(Self::Quit),
            other => Err(OperationError::Invalid(other.to_string())),
        };
    }
}
