//! Modules layer - Infrastructure components for external integrations
//!
//! Collaborators the ticket service calls: user directory, ticket storage,
//! administrator notifications and audit snapshots.

pub mod audit;
pub mod directory;
pub mod notification;
pub mod storage;
