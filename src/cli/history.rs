//! Audit history command

use crate::audit::AuditLogger;
use crate::display::format_history;
use crate::error::LedgerResult;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> LedgerResult<()> {
    let entries = logger.read_recent(limit)?;
    print!("{}", format_history(&entries));
    Ok(())
}
