use crate::statement::TIMESTAMP_FORMAT;
use crate::Result;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub const DEFAULT_AUDIT_LOG: &str = "log.txt";

/// Append-only, best-effort text log of the operator commands that were executed
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        return Self { path: path.into() };
    }

    pub fn path(&self) -> &Path {
        return &self.path;
    }

    pub fn record(&self, function: &str, args: &[&str]) -> Result {
        let line = format_entry(Local::now(), function, args);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{line}")?;

        return Ok(());
    }
}

pub fn format_entry(at: DateTime<Local>, function: &str, args: &[&str]) -> String {
    let args = args
        .iter()
        .map(|arg| format!("'{arg}'"))
        .collect::<Vec<_>>()
        .join(", ");

    return format!(
        "[{}] Function '{function}' executed with args ({args}) and kwargs {{}}.",
        at.format(TIMESTAMP_FORMAT)
    );
}

/// Runs `handler`, then writes the audit line whatever the handler's outcome was.
///
/// A failed audit write is only logged, the handler's result is always returned.
pub fn audited<T>(
    audit: &AuditLog,
    function: &str,
    args: &[&str],
    handler: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let result = handler();

    match &result {
        Ok(_) => log::info!("{function} succeeded"),
        Err(e) => log::info!("{function} failed: {e}"),
    }

    if let Err(e) = audit.record(function, args) {
        log::warn!("Couldn't write audit entry to {:?}: {e}", audit.path());
    }

    return result;
}
