use crate::ids::{AccountNumber, TaxId};
use crate::{History, Money, Result, TransactionKind};

use thiserror::Error;

pub const BRANCH_CODE: &str = "0001";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {0}, must be greater than zero")]
    InvalidAmount(Money),

    #[error("Insufficient funds: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Withdrawal of {requested} exceeds the per-withdrawal limit of {limit}")]
    LimitExceeded { requested: Money, limit: Money },

    #[error("Maximum number of withdrawals reached: {count} of {max}")]
    WithdrawalCountExceeded { count: usize, max: usize },
}

/// Extra rules a checking account applies before any withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub withdrawal_limit: Money,
    pub max_withdrawals: usize,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        return Self {
            withdrawal_limit: Money::units(500),
            max_withdrawals: 3,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Standard,
    Checking(CheckingPolicy),
}

impl AccountKind {
    /// Hook evaluated before the shared withdrawal rules.
    ///
    /// Note: the checking withdrawal count covers the whole history, not only today.
    fn validate_withdrawal(&self, history: &History, amount: Money) -> Result {
        let policy = match self {
            Self::Standard => return Ok(()),
            Self::Checking(policy) => policy,
        };

        let count = history
            .entries_matching(Some(TransactionKind::Withdrawal))
            .count();

        if amount > policy.withdrawal_limit {
            Err(AccountError::LimitExceeded {
                requested: amount,
                limit: policy.withdrawal_limit,
            })?
        }

        if count >= policy.max_withdrawals {
            Err(AccountError::WithdrawalCountExceeded {
                count,
                max: policy.max_withdrawals,
            })?
        }

        return Ok(());
    }
}

#[derive(Debug)]
pub struct Account {
    pub number: AccountNumber,
    pub branch: &'static str,
    pub owner: TaxId,
    pub kind: AccountKind,
    pub history: History,
    balance: Money,
}

impl Account {
    pub fn new(number: AccountNumber, owner: TaxId, kind: AccountKind) -> Self {
        return Self {
            number,
            branch: BRANCH_CODE,
            owner,
            kind,
            history: History::new(),
            balance: Money::ZERO,
        };
    }

    pub fn new_standard(number: AccountNumber, owner: TaxId) -> Self {
        return Self::new(number, owner, AccountKind::Standard);
    }

    pub fn new_checking(number: AccountNumber, owner: TaxId) -> Self {
        return Self::new(
            number,
            owner,
            AccountKind::Checking(CheckingPolicy::default()),
        );
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn deposit(&mut self, amount: Money) -> Result {
        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(amount))?
        }

        self.balance.add(&amount)?;

        log::debug!("Deposited {amount} into account {}", self.number);

        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> Result {
        self.kind.validate_withdrawal(&self.history, amount)?;

        if amount > self.balance {
            Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            })?
        }

        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(amount))?
        }

        self.balance.sub(&amount)?;

        log::debug!("Withdrew {amount} from account {}", self.number);

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Transaction;

    const SOME_NUMBER: AccountNumber = AccountNumber(7);

    fn owner() -> TaxId {
        TaxId::new("111")
    }

    fn account_error(result: Result) -> AccountError {
        let err = result.unwrap_err();
        return err
            .downcast::<AccountError>()
            .expect("expected an AccountError");
    }

    #[test]
    fn new_account_defaults() {
        let account = Account::new_checking(SOME_NUMBER, owner());

        assert_eq!(account.branch, "0001");
        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.history.is_empty());
        assert_eq!(
            account.kind,
            AccountKind::Checking(CheckingPolicy {
                withdrawal_limit: Money(50000),
                max_withdrawals: 3,
            })
        );
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in [Money::ZERO, Money(-1), Money::units(-500)] {
            for mut account in [
                Account::new_standard(SOME_NUMBER, owner()),
                Account::new_checking(SOME_NUMBER, owner()),
            ] {
                account.deposit(Money::units(100)).unwrap();

                assert_eq!(
                    account_error(account.deposit(amount)),
                    AccountError::InvalidAmount(amount)
                );
                assert_eq!(
                    account_error(account.withdraw(amount)),
                    AccountError::InvalidAmount(amount)
                );
                assert_eq!(account.balance(), Money::units(100));
            }
        }
    }

    #[test]
    fn withdraw_more_than_balance() {
        let mut account = Account::new_standard(SOME_NUMBER, owner());
        account.deposit(Money(999)).unwrap();

        assert_eq!(
            account_error(account.withdraw(Money(1000))),
            AccountError::InsufficientFunds {
                requested: Money(1000),
                balance: Money(999),
            }
        );
        assert_eq!(account.balance(), Money(999));
    }

    #[test]
    fn balance_matches_applied_transactions() {
        let mut account = Account::new_standard(SOME_NUMBER, owner());

        let deposits = [Money(10000), Money(2550), Money(1)];
        let withdrawals = [Money(3000), Money(2551), Money(5000)];

        for amount in deposits {
            Transaction::Deposit { amount }.apply(&mut account).unwrap();
        }
        for amount in withdrawals {
            Transaction::Withdrawal { amount }
                .apply(&mut account)
                .unwrap();
        }

        assert_eq!(account.balance(), Money(12551 - 10551));
        assert_eq!(account.history.len(), 6);
    }

    #[test]
    fn standard_account_has_no_withdrawal_limits() {
        let mut account = Account::new_standard(SOME_NUMBER, owner());
        account.deposit(Money::units(10_000)).unwrap();

        account.withdraw(Money::units(600)).unwrap();
        for _ in 0..5 {
            Transaction::Withdrawal {
                amount: Money::units(1),
            }
            .apply(&mut account)
            .unwrap();
        }

        assert_eq!(account.balance(), Money::units(10_000 - 605));
    }

    #[test]
    fn checking_limit_applies_regardless_of_balance() {
        let mut account = Account::new_checking(SOME_NUMBER, owner());
        account.deposit(Money::units(100_000)).unwrap();

        assert_eq!(
            account_error(account.withdraw(Money(50001))),
            AccountError::LimitExceeded {
                requested: Money(50001),
                limit: Money(50000),
            }
        );

        account.withdraw(Money(50000)).unwrap();
    }

    #[test]
    fn checking_limit_is_checked_before_funds() {
        let mut account = Account::new_checking(SOME_NUMBER, owner());

        assert!(matches!(
            account_error(account.withdraw(Money::units(600))),
            AccountError::LimitExceeded { .. }
        ));
    }

    #[test]
    fn checking_withdrawal_count_is_all_time() {
        let mut account = Account::new_checking(SOME_NUMBER, owner());
        account.deposit(Money::units(1000)).unwrap();

        let long_ago = chrono::Local::now() - chrono::Duration::days(30);
        account
            .history
            .record_at(TransactionKind::Withdrawal, Money::units(1), long_ago);

        for _ in 0..2 {
            Transaction::Withdrawal {
                amount: Money::units(1),
            }
            .apply(&mut account)
            .unwrap();
        }

        assert_eq!(
            account_error(account.withdraw(Money::units(1))),
            AccountError::WithdrawalCountExceeded { count: 3, max: 3 }
        );
        assert_eq!(account.balance(), Money::units(998));
    }
}
