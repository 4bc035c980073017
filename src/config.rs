use crate::args;

use tbs::Result;

use std::{env, path::PathBuf};

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Settings resolved at startup
#[derive(Debug)]
pub struct AppConfig {
    pub audit_log: PathBuf,
}

/// Starts logging on stderr, so it never interleaves with the operator menu on stdout, and
/// resolves the audit log path from the command line
pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let audit_log = args::parse_audit_log_arg(env::args().skip(1))?;
    log::debug!("Writing audit entries to: {audit_log:?}");

    return Ok(AppConfig { audit_log });
}
