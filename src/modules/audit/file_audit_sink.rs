use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::AuditSink;
use crate::core::error::{AppError, Result};
use crate::features::tickets::models::Ticket;
use crate::shared::constants::AUDIT_FILE_PREFIX;

/// Writes ticket snapshots as pretty JSON files into a directory
pub struct FileAuditSink {
    dir: PathBuf,
}

impl FileAuditSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `ticket_{id}.json`, or `ticket_draft_{uuid}.json` before the store assigned an id
    ///
    /// `TicketService` snapshots before persisting, so snapshots written during
    /// ticket creation are always drafts with `"id": null` and are never keyed
    /// by the ticket id.
    fn snapshot_path(&self, ticket: &Ticket) -> PathBuf {
        let file_name = match ticket.id {
            Some(id) => format!("{}{}.json", AUDIT_FILE_PREFIX, id),
            None => format!("{}draft_{}.json", AUDIT_FILE_PREFIX, Uuid::now_v7()),
        };
        self.dir.join(file_name)
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn write_ticket_snapshot(&self, ticket: &Ticket) -> Result<()> {
        let json = serde_json::to_vec_pretty(ticket)
            .map_err(|e| AppError::Audit(format!("Failed to serialize ticket: {}", e)))?;

        let path = self.snapshot_path(ticket);
        tokio::fs::write(&path, json).await.map_err(|e| {
            AppError::Audit(format!(
                "Failed to write snapshot {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!("Ticket snapshot written: {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::models::Priority;
    use crate::features::users::models::User;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn ticket(id: Option<i64>) -> Ticket {
        Ticket {
            id,
            title: "Payment Failure".to_string(),
            description: "Card payments are declined".to_string(),
            priority: Priority::High,
            assigned_user: User::new("alice"),
            created: Utc::now(),
            price_dollars: Decimal::new(100, 0),
            account_manager: Some(User::new("morgan")),
        }
    }

    #[tokio::test]
    async fn test_snapshot_keyed_by_id_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path());
        let original = ticket(Some(7));

        sink.write_ticket_snapshot(&original).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("ticket_7.json")).unwrap();
        let restored: Ticket = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, original);
        assert!(raw.contains("\"priceDollars\": 100.0"));
    }

    #[tokio::test]
    async fn test_snapshot_without_id_is_written_as_draft() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path());

        sink.write_ticket_snapshot(&ticket(None)).await.unwrap();
        sink.write_ticket_snapshot(&ticket(None)).await.unwrap();

        let drafts: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(drafts.len(), 2);
        assert!(drafts
            .iter()
            .all(|name| name.starts_with("ticket_draft_") && name.ends_with(".json")));
    }

    #[tokio::test]
    async fn test_missing_directory_is_audit_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path().join("does-not-exist"));

        let result = sink.write_ticket_snapshot(&ticket(Some(1))).await;

        assert!(matches!(result, Err(AppError::Audit(_))));
    }
}
