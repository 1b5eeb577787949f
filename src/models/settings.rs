//! Settings Models
//!
//! Connection settings stored in settings.json.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use scanbridge_core::{LogLevel, ProxyConfig};

pub use scanbridge_rpc::DEFAULT_TIMEOUT_SECS;

/// Environment variable holding the passphrase for encrypted password files
pub const DEFAULT_PASSWORD_KEY_ENV: &str = "SCANBRIDGE_PASSWORD_KEY";

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_key_env() -> String {
    DEFAULT_PASSWORD_KEY_ENV.to_string()
}

/// Where the account password comes from.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PasswordSource {
    /// Stored inline in the settings file
    Plain { value: String },
    /// Stored in an encrypted password file; the passphrase is read from `key_env`
    EncryptedFile {
        path: PathBuf,
        #[serde(default = "default_key_env")]
        key_env: String,
    },
}

impl PasswordSource {
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain {
            value: value.into(),
        }
    }

    pub fn encrypted_file(path: impl Into<PathBuf>) -> Self {
        Self::EncryptedFile {
            path: path.into(),
            key_env: default_key_env(),
        }
    }
}

impl fmt::Debug for PasswordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { .. } => f.debug_struct("Plain").field("value", &"***").finish(),
            Self::EncryptedFile { path, key_env } => f
                .debug_struct("EncryptedFile")
                .field("path", path)
                .field("key_env", key_env)
                .finish(),
        }
    }
}

/// Settings needed to reach and authenticate against the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the service; the RPC endpoint is `{server_url}/rpc`
    pub server_url: String,
    pub username: String,
    pub password: PasswordSource,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
    /// Verbosity of the client's own logging
    #[serde(default)]
    pub log_level: LogLevel,
}

impl ServerSettings {
    /// Settings with an inline password and default timeout/log level
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            username: username.into(),
            password: PasswordSource::plain(password),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
            log_level: LogLevel::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if self.server_url.trim().is_empty() {
            return Err("Server URL was not provided.".to_string());
        }
        let url = url::Url::parse(self.server_url.trim())
            .map_err(|e| format!("Server URL is not valid: {} ({})", self.server_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Server URL must use http or https: {}",
                self.server_url
            ));
        }

        if self.username.trim().is_empty() {
            return Err("User name was not provided.".to_string());
        }

        match &self.password {
            PasswordSource::Plain { value } if value.trim().is_empty() => {
                return Err("Password was not provided.".to_string());
            }
            PasswordSource::EncryptedFile { path, key_env } => {
                if path.as_os_str().is_empty() {
                    return Err("Password file path was not provided.".to_string());
                }
                if key_env.trim().is_empty() {
                    return Err("Password key variable name was not provided.".to_string());
                }
            }
            PasswordSource::Plain { .. } => {}
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }

        if let Some(proxy) = &self.proxy {
            proxy.validate()?;
        }

        Ok(())
    }
}
