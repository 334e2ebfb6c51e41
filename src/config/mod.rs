// Configuration: defaults < config file < environment < command line
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{ZetaError, ZetaResult};

pub const DEFAULT_AGENT_URL: &str = "http://localhost:8000";
pub const AGENT_URL_ENV: &str = "ZETA_AGENT_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Root of the agent service exposing `/api/chat` and `/api/execute`.
    pub base_url: String,
    /// Unset means requests may hang forever, like a browser `fetch`.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AGENT_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl AgentConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Chain name shown in activity log lines.
    pub name: String,
    pub explorer_label: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "ZetaChain".to_string(),
            explorer_label: "View on ZetaScan".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(text: &str) -> ZetaResult<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/zeta-intent/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zeta-intent").join("config.toml"))
    }

    /// Loads `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> ZetaResult<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ZetaError::config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(&path)?;
        Self::from_toml(&text)
    }

    /// Applies `ZETA_AGENT_URL` (if set) and then the command-line override.
    pub fn with_overrides(mut self, env_url: Option<String>, cli_url: Option<String>) -> ZetaResult<Self> {
        if let Some(url) = env_url.filter(|u| !u.is_empty()) {
            self.agent.base_url = url;
        }
        if let Some(url) = cli_url {
            self.agent.base_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ZetaResult<()> {
        let url = Url::parse(&self.agent.base_url).map_err(|e| {
            ZetaError::config(format!("invalid agent url {:?}: {}", self.agent.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ZetaError::config(format!(
                "agent url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.agent.request_timeout_secs == Some(0) {
            return Err(ZetaError::config("request_timeout_secs must be positive"));
        }
        Ok(())
    }
}
