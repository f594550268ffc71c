//! Ticket audit snapshots
//!
//! Diagnostic JSON copies of tickets. Snapshots are never read back and are
//! not the source of truth for ticket state.

mod audit_sink;
mod file_audit_sink;

pub use audit_sink::AuditSink;
pub use file_audit_sink::FileAuditSink;

#[cfg(test)]
pub use audit_sink::MockAuditSink;
