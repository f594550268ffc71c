use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::users::models::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    ///
    /// Finds a user by username.
    ///
    /// ### Returns
    /// `None` when no user has that username
    ///
    async fn get_user(&self, username: &str) -> Result<Option<User>>;

    ///
    /// Returns the account manager attached to paying customers' tickets.
    ///
    async fn get_account_manager(&self) -> Result<User>;
}
