use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, io, path::Path};

const DEFAULT_BASE_URL: &str = "https://drive.ebrains.eu";
const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_CONFIG_FILE_NAME: &str = "ebrains-drive.yaml";
pub const TOKEN_ENV_VAR: &str = "EBRAINS_DRIVE_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: Config::default_base_url(),
            token: None,
            log_level: Config::default_log_level(),
        }
    }
}

impl Config {
    /// Loads `ebrains-drive.yaml` from the working directory, falling back to
    /// defaults when the file is absent.
    pub async fn load() -> Result<Config> {
        let config = Config::read_or_default(DEFAULT_CONFIG_FILE_NAME).await?;

        Ok(config.with_env_token(env::var(TOKEN_ENV_VAR).ok()))
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let config = Config::read(path).await?;

        Ok(config.with_env_token(env::var(TOKEN_ENV_VAR).ok()))
    }

    async fn read(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        Config::parse(&config_string, path.display())
    }

    async fn read_or_default(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        match tokio::fs::read_to_string(path).await {
            Ok(config_string) => Config::parse(&config_string, path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                Ok(Config::default())
            }
            Err(err) => {
                Err(err).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    fn parse(config_string: &str, source: impl std::fmt::Display) -> Result<Config> {
        serde_yaml::from_str::<Config>(config_string)
            .with_context(|| format!("Cannot parse config file {}", source))
    }

    fn with_env_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        self
    }

    pub fn level(&self) -> Result<log::Level> {
        self.log_level
            .parse::<log::Level>()
            .with_context(|| format!("Invalid log level {}", self.log_level))
    }

    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_owned()
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }
}
