use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;
use crate::messaging::{FcmClient, ServiceAccountKey, TopicPublisher, DEFAULT_API_BASE_URL};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub publisher: Arc<dyn TopicPublisher>,
}

impl AppState {
    /// Builds the process-wide messaging client. Called once at startup.
    pub fn initialize(config: Config) -> Result<Self, ConfigError> {
        let credentials = ServiceAccountKey::from_file(&config.credentials_path)?;
        let project_id = config
            .fcm_project_id
            .clone()
            .unwrap_or_else(|| credentials.project_id.clone());

        let client = FcmClient::new(
            project_id,
            credentials,
            config.fcm_api_base_url.clone(),
            config.fcm_timeout,
        )?;
        tracing::info!(project_id = client.project_id(), "FCM client initialized");

        Ok(Self {
            config: Arc::new(config),
            publisher: Arc::new(client),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub credentials_path: PathBuf,
    pub fcm_project_id: Option<String>,
    pub fcm_api_base_url: String,
    pub fcm_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let timeout = lookup("FCM_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string());

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: port.parse().map_err(|_| ConfigError::NotANumber {
                name: "PORT",
                value: port.clone(),
            })?,
            credentials_path: lookup("GOOGLE_APPLICATION_CREDENTIALS")
                .map(PathBuf::from)
                .ok_or(ConfigError::Missing("GOOGLE_APPLICATION_CREDENTIALS"))?,
            fcm_project_id: lookup("FCM_PROJECT_ID").filter(|id| !id.is_empty()),
            fcm_api_base_url: lookup("FCM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            fcm_timeout: Duration::from_secs(timeout.parse().map_err(|_| {
                ConfigError::NotANumber {
                    name: "FCM_TIMEOUT_SECS",
                    value: timeout.clone(),
                }
            })?),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config =
            Config::from_lookup(lookup(&[("GOOGLE_APPLICATION_CREDENTIALS", "/etc/key.json")]))
                .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.credentials_path, PathBuf::from("/etc/key.json"));
        assert_eq!(config.fcm_project_id, None);
        assert_eq!(config.fcm_api_base_url, "https://fcm.googleapis.com");
        assert_eq!(config.fcm_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GOOGLE_APPLICATION_CREDENTIALS", "key.json"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("FCM_PROJECT_ID", "league-app"),
            ("FCM_API_BASE_URL", "http://localhost:9099"),
            ("FCM_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.fcm_project_id.as_deref(), Some("league-app"));
        assert_eq!(config.fcm_api_base_url, "http://localhost:9099");
        assert_eq!(config.fcm_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_config_requires_credentials() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GOOGLE_APPLICATION_CREDENTIALS")));
    }

    #[test]
    fn test_config_rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[
            ("GOOGLE_APPLICATION_CREDENTIALS", "key.json"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a number, got \"http\"");
    }

    #[test]
    fn test_initialize_fails_without_key_file() {
        let config = Config::from_lookup(lookup(&[(
            "GOOGLE_APPLICATION_CREDENTIALS",
            "/nonexistent/service-account.json",
        )]))
        .unwrap();

        assert!(matches!(
            AppState::initialize(config),
            Err(ConfigError::Messaging(_))
        ));
    }
}
