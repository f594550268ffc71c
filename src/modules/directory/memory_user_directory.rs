use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::UserDirectory;
use crate::core::config::DirectoryConfig;
use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// User directory held in process memory
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, User>>,
    account_manager_username: String,
}

impl InMemoryUserDirectory {
    pub fn new(account_manager: User, users: impl IntoIterator<Item = User>) -> Self {
        let mut by_username: HashMap<String, User> = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        let account_manager_username = account_manager.username.clone();
        by_username.insert(account_manager_username.clone(), account_manager);

        Self {
            users: RwLock::new(by_username),
            account_manager_username,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        let users = config.users.iter().map(User::new);
        Self::new(User::new(&config.account_manager_username), users)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_user(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn get_account_manager(&self) -> Result<User> {
        self.users
            .read()
            .await
            .get(&self.account_manager_username)
            .cloned()
            .ok_or_else(|| {
                AppError::Directory(format!(
                    "Account manager '{}' is missing from the directory",
                    self.account_manager_username
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> InMemoryUserDirectory {
        InMemoryUserDirectory::from_config(&DirectoryConfig {
            account_manager_username: "morgan".to_string(),
            users: vec!["alice".to_string(), "bob".to_string()],
        })
    }

    #[tokio::test]
    async fn test_get_user_found_and_missing() {
        let directory = directory();

        let alice = directory.get_user("alice").await.unwrap();
        assert_eq!(alice, Some(User::new("alice")));

        assert_eq!(directory.get_user("Alice").await.unwrap(), None);
        assert_eq!(directory.get_user("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_account_manager_is_also_a_user() {
        let directory = directory();

        let manager = directory.get_account_manager().await.unwrap();
        assert_eq!(manager.username, "morgan");
        assert_eq!(directory.get_user("morgan").await.unwrap(), Some(manager));
        assert_eq!(directory.len().await, 3);
    }
}
