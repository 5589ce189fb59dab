//! Application configuration, loaded from the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("invalid value for {name}: {message}")]
    Invalid { name: String, message: String },
}

/// Settings for the quiz recommendation model.
///
/// Absent entirely when no API key is configured, in which case the
/// quiz always answers with the built-in fallback.
pub struct RecommendConfig {
    pub api_key: SecretString,
    pub model: String,
    pub endpoint: String,
}

impl std::fmt::Debug for RecommendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Full application configuration.
#[derive(Debug)]
pub struct HandoraConfig {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Substring of the email local part that grants the admin role.
    pub admin_marker: String,
    pub recommend: Option<RecommendConfig>,
}

impl HandoraConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but unparseable.
    /// All variables have defaults except `GEMINI_API_KEY`, whose
    /// absence disables the recommendation client.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_env("HANDORA_HOST", "127.0.0.1")?;
        let port = parse_env("HANDORA_PORT", "3000")?;
        let data_dir = PathBuf::from(get_env_or_default("HANDORA_DATA_DIR", "data"));
        let admin_marker = get_env_or_default("HANDORA_ADMIN_MARKER", "admin");

        let recommend = get_optional_env("GEMINI_API_KEY").map(|key| RecommendConfig {
            api_key: key.into(),
            model: get_env_or_default("GEMINI_MODEL", "gemini-2.0-flash"),
            endpoint: get_env_or_default(
                "GEMINI_API_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
        });

        Ok(Self {
            host,
            port,
            data_dir,
            admin_marker,
            recommend,
        })
    }

    /// The address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether an email address gets the admin role.
    ///
    /// Matches when the local part contains the configured marker,
    /// case-insensitively.
    #[must_use]
    pub fn grants_admin(&self, email: &handora_core::Email) -> bool {
        email
            .local_part()
            .to_lowercase()
            .contains(&self.admin_marker.to_lowercase())
    }
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_env<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(name, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use handora_core::Email;

    fn config_with_marker(marker: &str) -> HandoraConfig {
        HandoraConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_dir: PathBuf::from("data"),
            admin_marker: marker.to_string(),
            recommend: None,
        }
    }

    #[test]
    fn test_grants_admin_checks_local_part_only() {
        let config = config_with_marker("admin");
        assert!(config.grants_admin(&Email::parse("admin@handora.example").unwrap()));
        assert!(config.grants_admin(&Email::parse("shop-Admin@handora.example").unwrap()));
        assert!(!config.grants_admin(&Email::parse("mai@admin.example").unwrap()));
        assert!(!config.grants_admin(&Email::parse("mai@handora.example").unwrap()));
    }

    #[test]
    fn test_recommend_config_debug_redacts_key() {
        let config = RecommendConfig {
            api_key: "super-secret".into(),
            model: "gemini-2.0-flash".to_string(),
            endpoint: "https://example.com".to_string(),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_socket_addr() {
        let config = config_with_marker("admin");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
