mod args;
mod config;

use tbs::{audit::AuditLog, session::Session, Result};

use std::io;

fn main() -> Result {
    let config = config::configure_app()?;

    log::debug!("Application configured. Beginning session...");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), AuditLog::new(config.audit_log));

    session.run()?;

    log::debug!("Session finished successfully!");

    Ok(())
}
