use crate::ids::{AccountNumber, TaxId};
use crate::{
    Account, AccountReport, Client, Individual, Money, Result, Statement, Transaction,
    TransactionKind,
};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Client not found: {0}")]
    ClientNotFound(TaxId),

    #[error("Client {0} has no accounts")]
    AccountNotFound(TaxId),

    #[error("A client with tax id {0} already exists")]
    DuplicateClient(TaxId),
}

/// In-memory registry of every client and account known to the bank
#[derive(Debug, Default)]
pub struct Directory {
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn register_client(&mut self, individual: Individual, address: String) -> Result<&Client> {
        if self.find_client_by_tax_id(&individual.tax_id).is_some() {
            Err(DirectoryError::DuplicateClient(individual.tax_id.clone()))?
        }

        log::info!("Registering client {}", individual.tax_id);

        self.clients.push(Client::new(individual, address));

        let index = self.clients.len() - 1;
        Ok(&self.clients[index])
    }

    pub fn find_client_by_tax_id(&self, tax_id: &TaxId) -> Option<&Client> {
        self.clients.iter().find(|client| client.tax_id() == tax_id)
    }

    /// Only the first account of a client takes part in operator workflows
    pub fn find_first_account(&self, client: &Client) -> Option<&Account> {
        let number = client.first_account()?;
        self.account(number)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number == number)
    }

    /// Opens a checking account with the next sequential number and attaches it to the client
    pub fn open_checking_account(&mut self, tax_id: &TaxId) -> Result<AccountNumber> {
        let number = AccountNumber(u32::try_from(self.accounts.len() + 1)?);

        let client = self
            .clients
            .iter_mut()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| DirectoryError::ClientNotFound(tax_id.clone()))?;

        client.attach_account(number);
        self.accounts
            .push(Account::new_checking(number, client.tax_id().clone()));

        log::info!("Opened checking account {number} for client {tax_id}");

        Ok(number)
    }

    pub fn deposit(&mut self, tax_id: &TaxId, amount: Money) -> Result {
        self.request_transaction(tax_id, Transaction::Deposit { amount })
    }

    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Money) -> Result {
        self.request_transaction(tax_id, Transaction::Withdrawal { amount })
    }

    pub fn statement(&self, tax_id: &TaxId, kind: Option<TransactionKind>) -> Result<Statement> {
        let client = self
            .find_client_by_tax_id(tax_id)
            .ok_or_else(|| DirectoryError::ClientNotFound(tax_id.clone()))?;

        let account = self
            .find_first_account(client)
            .ok_or_else(|| DirectoryError::AccountNotFound(tax_id.clone()))?;

        Ok(Statement::build(account, kind))
    }

    /// Listing of every account in opening order
    pub fn account_reports(&self) -> Vec<AccountReport> {
        self.accounts
            .iter()
            .map(|account| {
                let holder = self
                    .find_client_by_tax_id(&account.owner)
                    .map(|client| client.name())
                    .unwrap_or_default();

                AccountReport::build(account, holder)
            })
            .collect()
    }

    fn request_transaction(&mut self, tax_id: &TaxId, transaction: Transaction) -> Result {
        let client = self
            .clients
            .iter()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| DirectoryError::ClientNotFound(tax_id.clone()))?;

        let number = client
            .first_account()
            .ok_or_else(|| DirectoryError::AccountNotFound(tax_id.clone()))?;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number == number)
            .ok_or_else(|| DirectoryError::AccountNotFound(tax_id.clone()))?;

        log::debug!("Client {tax_id} requesting {transaction:?} on account {number}");

        client.request_transaction(account, transaction)
    }
}
