use crate::audit::{audited, AuditLog};
use crate::ids::TaxId;
use crate::menu::{Operation, MENU};
use crate::writer::render_table;
use crate::{Directory, DirectoryError, Individual, Money, Result, TransactionKind};

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use thiserror::Error;

const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid birth date {0:?}, expected dd/mm/yyyy")]
    InvalidBirthDate(String),

    #[error("Full name must not be empty")]
    EmptyName,
}

/// Interactive operator loop over a [`Directory`].
///
/// Generic over its streams so scripted input can drive it.
pub struct Session<R, W> {
    input: R,
    output: W,
    directory: Directory,
    audit: AuditLog,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, audit: AuditLog) -> Self {
        return Self {
            input,
            output,
            directory: Directory::new(),
            audit,
        };
    }

    pub fn directory(&self) -> &Directory {
        return &self.directory;
    }

    pub fn into_output(self) -> W {
        return self.output;
    }

    /// Runs until `q` or end of input. Only stream errors are returned.
    pub fn run(&mut self) -> Result {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    log::debug!("End of input, leaving session");
                    break;
                }
            };

            let operation = match line.parse::<Operation>() {
                Ok(operation) => operation,
                Err(e) => {
                    log::debug!("{e}");
                    writeln!(
                        self.output,
                        "\n@@@ Invalid operation, please select the desired operation again. @@@"
                    )?;
                    continue;
                }
            };

            log::debug!("Operator selected {operation:?}");

            match operation {
                Operation::Deposit => self.transact(TransactionKind::Deposit)?,
                Operation::Withdraw => self.transact(TransactionKind::Withdrawal)?,
                Operation::Statement => self.statement()?,
                Operation::NewAccount => self.new_account()?,
                Operation::ListAccounts => self.list_accounts()?,
                Operation::NewClient => self.new_client()?,
                Operation::Quit => break,
            }
        }

        return Ok(());
    }

    fn transact(&mut self, kind: TransactionKind) -> Result {
        let tax_id = self.prompt_tax_id()?;

        // the amount is only asked for known clients
        let known = self.directory.find_client_by_tax_id(&tax_id).is_some();
        let amount = if known {
            let label = format!("Enter the {} amount: ", kind.to_string().to_lowercase());
            Some(self.prompt(&label)?)
        } else {
            None
        };

        let function = match kind {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdraw",
        };
        let amount_arg = amount.clone().unwrap_or_default();

        let directory = &mut self.directory;
        let outcome = audited(
            &self.audit,
            function,
            &[tax_id.as_str(), amount_arg.as_str()],
            || {
                let amount = amount.ok_or_else(|| DirectoryError::ClientNotFound(tax_id.clone()))?;
                let amount = Money::parse(&amount)?;

                match kind {
                    TransactionKind::Deposit => directory.deposit(&tax_id, amount)?,
                    TransactionKind::Withdrawal => directory.withdraw(&tax_id, amount)?,
                }

                return Ok(format!("\n=== {kind} of {amount} completed successfully! ==="));
            },
        );

        return self.report(outcome);
    }

    fn statement(&mut self) -> Result {
        let tax_id = self.prompt_tax_id()?;
        let filter = self.prompt("Filter by kind (deposit/withdrawal, empty for all): ")?;

        let directory = &self.directory;
        let outcome = audited(
            &self.audit,
            "show_statement",
            &[tax_id.as_str(), filter.trim()],
            || {
                let kind = match filter.trim() {
                    "" => None,
                    kind => Some(kind.parse::<TransactionKind>()?),
                };

                let statement = directory.statement(&tax_id, kind)?;

                let body = if statement.lines.is_empty() {
                    "No transactions were made.\n".to_string()
                } else {
                    render_table(&statement.lines)?
                };

                return Ok(format!(
                    "\n================ STATEMENT ================\n{body}\nBalance: {}\n===========================================",
                    statement.balance
                ));
            },
        );

        return self.report(outcome);
    }

    fn new_client(&mut self) -> Result {
        let tax_id = self.prompt("Enter the tax id (numbers only): ")?;
        let tax_id = TaxId::new(&tax_id);

        let details = if self.directory.find_client_by_tax_id(&tax_id).is_some() {
            None
        } else {
            Some((
                self.prompt("Enter the full name: ")?,
                self.prompt("Enter the birth date (dd/mm/yyyy): ")?,
                self.prompt("Enter the address (street, number - district - city/state): ")?,
            ))
        };

        let directory = &mut self.directory;
        let outcome = audited(&self.audit, "create_client", &[tax_id.as_str()], || {
            let (full_name, birth_date, address) =
                details.ok_or_else(|| DirectoryError::DuplicateClient(tax_id.clone()))?;

            let full_name = full_name.trim().to_string();
            if full_name.is_empty() {
                Err(InputError::EmptyName)?
            }

            let birth_date = NaiveDate::parse_from_str(birth_date.trim(), BIRTH_DATE_FORMAT)
                .map_err(|_| InputError::InvalidBirthDate(birth_date.clone()))?;

            let individual = Individual {
                tax_id: tax_id.clone(),
                full_name,
                birth_date,
            };

            directory.register_client(individual, address.trim().to_string())?;

            return Ok("\n=== Client created successfully! ===".to_string());
        });

        return self.report(outcome);
    }

    fn new_account(&mut self) -> Result {
        let tax_id = self.prompt_tax_id()?;

        let directory = &mut self.directory;
        let outcome = audited(&self.audit, "create_account", &[tax_id.as_str()], || {
            let number = directory.open_checking_account(&tax_id)?;

            return Ok(format!("\n=== Account {number} created successfully! ==="));
        });

        return self.report(outcome);
    }

    fn list_accounts(&mut self) -> Result {
        let reports = self.directory.account_reports();

        if reports.is_empty() {
            writeln!(self.output, "\n@@@ No accounts found! @@@")?;
            return Ok(());
        }

        let outcome = render_table(&reports).map(|table| format!("\n{table}"));

        return self.report(outcome);
    }

    fn report(&mut self, outcome: Result<String>) -> Result {
        match outcome {
            Ok(message) => writeln!(self.output, "{message}")?,
            Err(e) => writeln!(self.output, "\n@@@ Operation failed! {e} @@@")?,
        }

        return Ok(());
    }

    fn prompt_tax_id(&mut self) -> Result<TaxId> {
        let tax_id = self.prompt("Enter the client's tax id: ")?;
        return Ok(TaxId::new(&tax_id));
    }

    /// Missing input reads as an empty answer
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        return Ok(self.read_line()?.unwrap_or_default());
    }

    /// Bytes that are not UTF-8 are replaced, so a garbled line is answered like any other bad input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();

        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);

        return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use tempfile::TempDir;

    fn run_script(script: impl Into<Vec<u8>>) -> (String, Directory) {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLog::new(temp_dir.path().join("log.txt"));

        let mut session = Session::new(Cursor::new(script.into()), Vec::new(), audit);
        session.run().unwrap();

        let Session {
            output, directory, ..
        } = session;

        (String::from_utf8(output).unwrap(), directory)
    }

    #[test]
    fn invalid_operation_reprompts() {
        let (output, _) = run_script("zz\nq\n");

        assert!(output.contains("@@@ Invalid operation, please select the desired operation again. @@@"));
        assert_eq!(output.matches("[q]\tQuit").count(), 2);
    }

    #[test]
    fn end_of_input_quits() {
        let (output, directory) = run_script("");

        assert!(output.contains("MENU"));
        assert!(directory.clients().is_empty());
    }

    #[test]
    fn deposit_for_unknown_client_does_not_ask_for_amount() {
        let (output, _) = run_script("d\n999\nq\n");

        assert!(output.contains("Client not found: 999"));
        assert!(!output.contains("Enter the deposit amount"));
    }

    #[test]
    fn invalid_birth_date_is_reported() {
        let (output, directory) = run_script("nu\n111\nAda\n31-01-1990\nSome street\nq\n");

        assert!(output.contains("Invalid birth date"));
        assert!(directory.clients().is_empty());
    }

    #[test]
    fn invalid_amount_text_is_reported() {
        let script = "nu\n111\nAda\n31/01/1990\nSome street\nnc\n111\nd\n111\nten\nq\n";
        let (output, directory) = run_script(script);

        assert!(output.contains("Money parse error"));
        assert_eq!(directory.accounts()[0].balance(), Money::ZERO);
    }

    #[test]
    fn empty_statement() {
        let script = "nu\n111\nAda\n31/01/1990\nSome street\nnc\n111\ne\n111\n\nq\n";
        let (output, _) = run_script(script);

        assert!(output.contains("No transactions were made."));
        assert!(output.contains("Balance: 0.00"));
    }

    #[test]
    fn statement_filtered_by_kind() {
        let script = "nu\n111\nAda\n31/01/1990\nSome street\nnc\n111\n\
                      d\n111\n300\ns\n111\n120\ne\n111\nWithdrawal\nq\n";
        let (output, _) = run_script(script);

        assert!(output.contains(",Withdrawal,120.00\n"));
        assert!(!output.contains(",Deposit,"));
        assert!(output.contains("Balance: 180.00"));
    }

    #[test]
    fn statement_with_unknown_kind() {
        let script = "nu\n111\nAda\n31/01/1990\nSome street\nnc\n111\ne\n111\ntransfer\nq\n";
        let (output, _) = run_script(script);

        assert!(output.contains("Unknown transaction kind: \"transfer\""));
        assert!(!output.contains("STATEMENT"));
    }

    #[test]
    fn non_utf8_line_is_an_invalid_operation() {
        let (output, _) = run_script(vec![0xff, b'\n', b'q', b'\n']);

        assert!(output.contains("@@@ Invalid operation, please select the desired operation again. @@@"));
        assert_eq!(output.matches("[q]\tQuit").count(), 2);
    }

    #[test]
    fn non_utf8_amount_is_reported() {
        let mut script = b"nu\n111\nAda\n31/01/1990\nSome street\nnc\n111\nd\n111\n".to_vec();
        script.extend([0xc3, 0x28, b'\n', b'q', b'\n']);

        let (output, directory) = run_script(script);

        assert!(output.contains("Money parse error"));
        assert_eq!(directory.accounts()[0].balance(), Money::ZERO);
    }
}
