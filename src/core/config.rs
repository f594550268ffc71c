use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub directory: DirectoryConfig,
    pub notification: NotificationConfig,
    pub audit: AuditConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Seed data for the in-process user directory
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Username returned for every paying customer's account manager
    pub account_manager_username: String,
    /// Additional usernames tickets can be assigned to
    pub users: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub admin_email: String,
    /// When set, high-priority alerts are POSTed here instead of only logged
    pub webhook_url: Option<String>,
    pub timeout: Duration,
    pub failure_policy: SideEffectPolicy,
}

#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Directory that receives `ticket_{id}.json` snapshots
    pub dir: PathBuf,
    pub failure_policy: SideEffectPolicy,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// What ticket creation does when a side effect (notification, audit) fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffectPolicy {
    /// Abort the operation and return the collaborator's error
    Propagate,
    /// Log the failure and carry on
    Isolate,
}

impl FromStr for SideEffectPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(SideEffectPolicy::Propagate),
            "isolate" => Ok(SideEffectPolicy::Isolate),
            other => Err(format!(
                "Invalid failure policy '{}', expected 'propagate' or 'isolate'",
                other
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            directory: DirectoryConfig::from_env()?,
            notification: NotificationConfig::from_env()?,
            audit: AuditConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = split_list(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DirectoryConfig {
    const DEFAULT_ACCOUNT_MANAGER: &'static str = "account-manager";

    pub fn from_env() -> Result<Self, String> {
        let account_manager_username = env::var("ACCOUNT_MANAGER_USERNAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ACCOUNT_MANAGER.to_string());

        let users = split_list(&env::var("DIRECTORY_USERS").unwrap_or_default());

        Ok(Self {
            account_manager_username,
            users,
        })
    }
}

impl NotificationConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string());

        let webhook_url = env::var("NOTIFICATION_WEBHOOK_URL")
            .ok()
            .filter(|s| !s.is_empty());

        let timeout_secs = env::var("NOTIFICATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "NOTIFICATION_TIMEOUT_SECS must be a valid number".to_string())?;

        let failure_policy = env::var("NOTIFICATION_FAILURE_POLICY")
            .unwrap_or_else(|_| "propagate".to_string())
            .parse::<SideEffectPolicy>()?;

        Ok(Self {
            admin_email,
            webhook_url,
            timeout: Duration::from_secs(timeout_secs),
            failure_policy,
        })
    }
}

impl AuditConfig {
    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("AUDIT_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        let failure_policy = env::var("AUDIT_FAILURE_POLICY")
            .unwrap_or_else(|_| "isolate".to_string())
            .parse::<SideEffectPolicy>()?;

        Ok(Self {
            dir,
            failure_policy,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Ticket Desk API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Ticket creation and assignment".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

/// Parse a comma-separated list, dropping blanks
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_effect_policy_parse() {
        assert_eq!(
            "propagate".parse::<SideEffectPolicy>(),
            Ok(SideEffectPolicy::Propagate)
        );
        assert_eq!(
            " Isolate ".parse::<SideEffectPolicy>(),
            Ok(SideEffectPolicy::Isolate)
        );
        assert!("ignore".parse::<SideEffectPolicy>().is_err());
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(
            split_list("alice, bob,,  carol ,"),
            vec!["alice".to_string(), "bob".to_string(), "carol".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
