use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use volatility_model::DEFAULT_MAX_WINDOW;

const CONFIG_FILE: &str = "server.toml";
const ENV_PREFIX: &str = "VOLATILITY";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_prediction_window: u32,
    /// Seeds the root generator. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            max_prediction_window: DEFAULT_MAX_WINDOW,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Defaults, then `server.toml` if present, then `VOLATILITY_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(CONFIG_FILE)
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let cfg = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("max_prediction_window", i64::from(defaults.max_prediction_window))?
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        cfg.try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
