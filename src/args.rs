use tbs::{audit::DEFAULT_AUDIT_LOG, Result};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),
}

/// Parses the arguments after the program name, accepting at most one: the audit log filepath
pub fn parse_audit_log_arg(mut args: impl Iterator<Item = String>) -> Result<PathBuf> {
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIT_LOG));

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!(
            "Unexpected argument {extra:?}, only the audit log path is accepted."
        )))?
    }

    if path.as_os_str().is_empty() {
        Err(InputArgsError::Parse("Audit log path must not be empty.".to_string()))?
    }

    return Ok(path);
}
