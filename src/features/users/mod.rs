//! Users as seen by the ticket desk.
//!
//! Users are owned by the directory (`modules::directory`); this feature only
//! defines the model tickets reference.

pub mod models;
