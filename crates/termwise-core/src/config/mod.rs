use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermwiseError};
use crate::ranking::RankingConfig;

mod env;
mod session;

pub use session::{DEFAULT_RECENT_LIMIT, DEFAULT_REQUEST_LOG_CAPACITY, SessionConfig};

pub const ENV_MAX_SUGGESTIONS: &str = "TERMWISE_MAX_SUGGESTIONS";
pub const ENV_RECENT_LIMIT: &str = "TERMWISE_RECENT_LIMIT";
pub const ENV_REQUEST_LOG_CAPACITY: &str = "TERMWISE_REQUEST_LOG_CAPACITY";
pub const ENV_SEED_FILE: &str = "TERMWISE_SEED_FILE";

/// Runtime settings. Resolution order: defaults, then an optional TOML file,
/// then `TERMWISE_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub ranking: RankingConfig,
    pub session: SessionConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_with(env::read_process_env);
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                TermwiseError::NotFound(format!("config file {}", path.display()))
            } else {
                TermwiseError::Io(err)
            }
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlays values from `lookup`. Unparseable or out-of-range numbers keep
    /// the current value.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.ranking.max_suggestions = env::usize_at_least(
            lookup(ENV_MAX_SUGGESTIONS).as_deref(),
            self.ranking.max_suggestions,
            1,
        );
        self.session.recent_limit = env::usize_at_least(
            lookup(ENV_RECENT_LIMIT).as_deref(),
            self.session.recent_limit,
            0,
        );
        self.session.request_log_capacity = env::usize_at_least(
            lookup(ENV_REQUEST_LOG_CAPACITY).as_deref(),
            self.session.request_log_capacity,
            0,
        );
        if let Some(seed_file) = env::non_empty(lookup(ENV_SEED_FILE).as_deref()) {
            self.seed_file = Some(PathBuf::from(seed_file));
        }
    }

    fn validate(&self) -> Result<()> {
        if self.ranking.max_suggestions == 0 {
            return Err(TermwiseError::Validation(
                "ranking.max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
