//! Configuration loading
//!
//! Credentials for the two external services come from the environment;
//! tunables (model, top-k, profile path) come from an optional TOML file at
//! `~/.profiletwin/config.toml`, created with defaults on first run.
//! Missing credentials are fatal before the chat loop starts.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, TwinError};
use crate::rag::pipeline::RagConfig;

/// Environment variable naming the vector index REST endpoint
pub const ENV_VECTOR_URL: &str = "UPSTASH_VECTOR_REST_URL";
/// Environment variable naming the vector index REST token
pub const ENV_VECTOR_TOKEN: &str = "UPSTASH_VECTOR_REST_TOKEN";
/// Environment variable naming the completion API key
pub const ENV_GROQ_API_KEY: &str = "GROQ_API_KEY";

/// Credentials for the external services
#[derive(Debug, Clone)]
pub struct Credentials {
    pub vector_url: String,
    pub vector_token: String,
    pub groq_api_key: String,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read credentials through a lookup function (tests substitute maps)
    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String> {
            match get(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(TwinError::Config(format!("{} is not set", key))),
            }
        };

        Ok(Self {
            vector_url: require(ENV_VECTOR_URL)?,
            vector_token: require(ENV_VECTOR_TOKEN)?,
            groq_api_key: require(ENV_GROQ_API_KEY)?,
        })
    }
}

/// Tunables persisted in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Completion model
    pub model: String,
    /// Results requested per question
    pub top_k: usize,
    /// Profile document loaded on first run
    pub profile: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let rag = RagConfig::default();
        Self {
            model: rag.model,
            top_k: rag.top_k,
            profile: PathBuf::from("profile.json"),
        }
    }
}

impl Settings {
    /// Load settings from a file, creating it with defaults if absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let settings = Settings::default();
            settings.save(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| TwinError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| TwinError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Write settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| TwinError::Config(format!("cannot create config dir: {}", e)))?;
        }
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| TwinError::Config(format!("cannot serialize config: {}", e)))?;
        fs::write(path, toml_string)
            .map_err(|e| TwinError::Config(format!("cannot write {}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TwinError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".profiletwin").join("config.toml"))
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Settings,
}

impl Config {
    /// Load credentials from the environment and settings from the given
    /// file (or the default location)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let settings = match config_path {
            Some(path) => Settings::load(path)?,
            None => Settings::load(&Settings::default_path()?)?,
        };
        Ok(Self {
            credentials,
            settings,
        })
    }

    /// Pipeline configuration derived from the settings
    pub fn rag_config(&self) -> RagConfig {
        RagConfig {
            top_k: self.settings.top_k,
            model: self.settings.model.clone(),
            ..RagConfig::default()
        }
    }
}
