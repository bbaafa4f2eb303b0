use std::{str::FromStr, time::Duration};

use github_api::GitHubClientConfig;
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

use crate::domain::services::SearchCacheConfig;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub github: GitHubSettings,
    pub cache: CacheSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct GitHubSettings {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    pub api_version: String,
    pub user_agent: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub timeout_secs: u64,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct CacheSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_capacity: u64,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub time_to_live_secs: u64,
}

impl GitHubSettings {
    pub fn client_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone().filter(|token| !token.trim().is_empty()),
            api_version: self.api_version.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl CacheSettings {
    pub fn cache_config(&self) -> SearchCacheConfig {
        SearchCacheConfig {
            max_capacity: self.max_capacity,
            time_to_live: Duration::from_secs(self.time_to_live_secs),
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|err| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", err))
    })?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|err| config::ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {}", err)))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("REPO_SEARCH")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(Environment::from_str("LOCAL").unwrap(), Environment::Local);
        assert_eq!(
            Environment::from_str("Production").unwrap(),
            Environment::Production
        );
        assert!(Environment::from_str("staging").is_err());
        assert_eq!(Environment::Local.to_string(), "local");
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let settings = GitHubSettings {
            base_url: "https://api.github.com".to_string(),
            token: Some("  ".to_string()),
            api_version: "2022-11-28".to_string(),
            user_agent: "repo-search".to_string(),
            timeout_secs: 5,
        };

        let config = settings.client_config();
        assert_eq!(config.token, None);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn cache_settings_convert_to_seconds() {
        let settings = CacheSettings {
            max_capacity: 50,
            time_to_live_secs: 120,
        };

        let config = settings.cache_config();
        assert_eq!(config.max_capacity, 50);
        assert_eq!(config.time_to_live, Duration::from_secs(120));
    }

    #[test]
    fn settings_deserialize_from_yaml_sources() {
        let yaml = r#"
application:
  host: 127.0.0.1
  port: "8080"
github:
  base_url: https://api.github.com
  api_version: "2022-11-28"
  user_agent: repo-search
  timeout_secs: 10
cache:
  max_capacity: 1000
  time_to_live_secs: 600
"#;
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.application.port, 8080);
        assert_eq!(settings.github.token, None);
        assert_eq!(settings.cache.time_to_live_secs, 600);
    }
}
