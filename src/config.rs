use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::game::{Rules, ANSWERS_PER_LEVEL, QUESTION_SECS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub question_secs: u32,
    pub answers_per_level: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_secs: QUESTION_SECS,
            answers_per_level: ANSWERS_PER_LEVEL,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question_secs == 0 {
            return Err(ConfigError::Invalid(
                "question_secs must be at least 1".into(),
            ));
        }
        if self.answers_per_level == 0 {
            return Err(ConfigError::Invalid(
                "answers_per_level must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl From<&RuntimeSettings> for Config {
    fn from(rs: &RuntimeSettings) -> Self {
        Self {
            question_secs: rs.question_secs,
            answers_per_level: rs.answers_per_level,
        }
    }
}

/// Stored config with command line overrides applied
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub question_secs: u32,
    pub answers_per_level: u32,
    pub seed: Option<u64>,
}

impl RuntimeSettings {
    pub fn merge(
        cfg: &Config,
        question_secs: Option<u32>,
        answers_per_level: Option<u32>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            question_secs: question_secs.unwrap_or(cfg.question_secs),
            answers_per_level: answers_per_level.unwrap_or(cfg.answers_per_level),
            seed,
        }
    }

    pub fn rules(&self) -> Rules {
        Rules {
            question_secs: self.question_secs,
            answers_per_level: self.answers_per_level,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "mathsprint") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("mathsprint_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like [`ConfigStore::load`] but reports why the stored file was unusable.
    /// A missing file is not an error.
    pub fn try_load(&self) -> Result<Config, ConfigError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };
        let cfg = serde_json::from_slice::<Config>(&bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        self.try_load().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "{e}, using defaults");
            Config::default()
        })
    }

    fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        cfg.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
