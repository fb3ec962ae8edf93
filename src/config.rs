use serde::{Deserialize, Serialize};
use tokio::fs;

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    pub address: SocketAddr,
}

impl Config {
    /// Reads `config.ron` from the user configuration directory, if any, and
    /// applies `DEXA_*` environment overrides on top.
    pub async fn load() -> Result<Self, anywho::Error> {
        Self::read(&config_path())
            .await?
            .with_overrides(|key| env::var(key).ok())
    }

    async fn read(path: &Path) -> Result<Self, anywho::Error> {
        if !fs::try_exists(path).await? {
            return Ok(Self::default());
        }

        log::info!("Loading configuration: {}", path.display());

        Ok(ron::from_str(&fs::read_to_string(path).await?)?)
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, anywho::Error> {
        if let Some(endpoint) = var("DEXA_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Some(user_agent) = var("DEXA_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Some(address) = var("DEXA_ADDRESS") {
            self.address = address.parse()?;
        }

        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://graphqlpokemon.favware.tech/v8".to_owned(),
            user_agent: "Favware/Dexa <Alexa API service>".to_owned(),
            address: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dexa")
        .join("config.ron")
}
