//! API credential resolution.
//!
//! The key is looked up once at startup, in this order:
//!
//! 1. the process environment variable (default `GROQ_API_KEY`)
//! 2. the same variable in an env file (default `api_key.env`)
//! 3. a literal `api_key` from the config file
//!
//! The env file is read as `KEY=value` pairs without touching the process
//! environment. A missing or blank key is an error; nothing is sent
//! unauthenticated.

use secrecy::SecretString;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default env file read at startup
pub const DEFAULT_ENV_FILE: &str = "api_key.env";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error(
        "API key not found: set {var} in the environment or in {env_file}, or configure provider.api_key"
    )]
    Missing { var: String, env_file: String },

    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },
}

/// Where the key was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    EnvFile,
    ConfigFile,
}

/// Lookup parameters
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    var: String,
    env_file: PathBuf,
    configured: Option<String>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self {
            var: DEFAULT_API_KEY_ENV.to_string(),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            configured: None,
        }
    }
}

impl CredentialResolver {
    pub fn new(var: impl Into<String>, env_file: impl Into<PathBuf>) -> Self {
        Self {
            var: var.into(),
            env_file: env_file.into(),
            configured: None,
        }
    }

    /// Literal key from the config file, used as the last resort
    pub fn with_configured_key(mut self, key: Option<String>) -> Self {
        self.configured = key;
        self
    }

    /// Resolve against the real process environment.
    pub fn resolve(&self) -> Result<(SecretString, CredentialSource), CredentialError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with a custom environment lookup.
    pub fn resolve_with<F>(
        &self,
        lookup: F,
    ) -> Result<(SecretString, CredentialSource), CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(&self.var).filter(|k| !k.trim().is_empty()) {
            debug!("API key taken from ${}", self.var);
            return Ok((SecretString::from(key), CredentialSource::Environment));
        }

        if let Some(key) = self.read_env_file()? {
            debug!("API key taken from {}", self.env_file.display());
            return Ok((SecretString::from(key), CredentialSource::EnvFile));
        }

        if let Some(key) = self.configured.clone().filter(|k| !k.trim().is_empty()) {
            debug!("API key taken from config file");
            return Ok((SecretString::from(key), CredentialSource::ConfigFile));
        }

        Err(CredentialError::Missing {
            var: self.var.clone(),
            env_file: self.env_file.display().to_string(),
        })
    }

    fn read_env_file(&self) -> Result<Option<String>, CredentialError> {
        if !self.env_file.exists() {
            return Ok(None);
        }

        let to_error = |e: dotenv::Error| CredentialError::EnvFile {
            path: self.env_file.clone(),
            message: e.to_string(),
        };

        for item in dotenv::from_path_iter(&self.env_file).map_err(to_error)? {
            let (name, value) = item.map_err(to_error)?;
            if name == self.var && !value.trim().is_empty() {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
