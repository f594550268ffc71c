//! User directory
//!
//! Read-only lookup of users and the account manager. The directory owns
//! user records; ticket logic only reads them.

mod memory_user_directory;
mod user_directory;

pub use memory_user_directory::InMemoryUserDirectory;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use user_directory::MockUserDirectory;
