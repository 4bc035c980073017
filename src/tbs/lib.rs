mod account;
mod account_report;
pub mod audit;
mod client;
mod directory;
mod history;
pub mod ids;
pub mod menu;
mod money;
mod result;
pub mod session;
mod statement;
mod transaction;
pub mod writer;

pub use account::{Account, AccountError, AccountKind, CheckingPolicy, BRANCH_CODE};
pub use account_report::AccountReport;
pub use client::{Client, ClientError, Individual, DAILY_TRANSACTION_LIMIT};
pub use directory::{Directory, DirectoryError};
pub use history::{History, TransactionRecord};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use statement::{Statement, StatementLine};
pub use transaction::{Transaction, TransactionKind, TransactionKindError};
