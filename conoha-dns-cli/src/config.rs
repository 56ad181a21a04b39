//! Configuration from the environment
//!
//! `~/.conoha-env` is loaded first without overriding variables that are
//! already set, then every setting is read exactly once into [`Settings`].

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use conoha_dns_provider::{
    AuthConfig, Credentials, DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, ProviderConfig, Result,
};

/// Env file in the user's home directory.
pub const ENV_FILE_NAME: &str = ".conoha-env";

/// Variable the acquired token is stored under.
pub const TOKEN_VAR: &str = "CONOHA_TOKEN";

const FALLBACK_TOKEN_VAR: &str = "API_TOKEN";
const USER_ID_VAR: &str = "CONOHA_USER_ID";
const PASSWORD_VAR: &str = "CONOHA_PASSWORD";
const PROJECT_ID_VAR: &str = "TENANT_ID";
const API_URL_VAR: &str = "CONOHA_DNS_API_URL";
const AUTH_URL_VAR: &str = "CONOHA_AUTH_URL";

/// Everything a command needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub provider: ProviderConfig,
    pub auth: AuthConfig,
    /// Where a freshly issued token is persisted, if a home directory exists.
    pub env_file: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env(env_file: Option<PathBuf>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), env_file)
    }

    /// Read settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F, env_file: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let credentials = Credentials::from_parts(
            get(TOKEN_VAR).or_else(|| get(FALLBACK_TOKEN_VAR)),
            get(USER_ID_VAR),
            get(PASSWORD_VAR),
            get(PROJECT_ID_VAR),
        )?;

        let api_base_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let provider = ProviderConfig::with_base_url(api_base_url);
        let auth = AuthConfig {
            auth_base_url: get(AUTH_URL_VAR)
                .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string()),
            credentials,
        };

        Ok(Self {
            provider,
            auth,
            env_file,
        })
    }
}

/// `~/.conoha-env`, when a home directory can be determined.
pub fn default_env_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(ENV_FILE_NAME))
}

/// Load variables from `path` into the process environment.
///
/// Existing variables win. A missing file is not an error; a malformed one
/// is logged and skipped.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            log::debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            log::warn!("Ignoring env file {}: {e}", path.display());
            false
        }
    }
}

/// Append `CONOHA_TOKEN=<token>` to the env file, creating it if needed.
pub fn persist_token(path: &Path, token: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "\n{TOKEN_VAR}={token}\n")?;
    file.flush()
}
