//! Application settings loaded from a dotenv file and the process environment

use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Default dotenv file looked up in the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Value shipped in `.env.example`; treated the same as an empty key
pub const API_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

/// Immutable application settings
///
/// Resolved once at process entry and passed to every consumer by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub debug: bool,
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub model_name: String,
    pub eth_rpc_url: String,
    pub network: String,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Web3AI API".to_string(),
            debug: false,
            openai_api_key: String::new(),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            model_name: "gpt-3.5-turbo".to_string(),
            eth_rpc_url: "https://eth.llamarpc.com".to_string(),
            network: "mainnet".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.openai_api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("debug", &self.debug)
            .field("openai_api_key", &api_key)
            .field("openai_api_base", &self.openai_api_base)
            .field("model_name", &self.model_name)
            .field("eth_rpc_url", &self.eth_rpc_url)
            .field("network", &self.network)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Settings {
    /// Load settings from a dotenv file, then overlay the process environment
    ///
    /// A missing file is not an error. Environment variables win over file
    /// entries, and keys are matched case-insensitively.
    ///
    /// # Arguments
    /// * `env_file` - Path of the dotenv file (defaults to `.env`)
    pub fn load(env_file: Option<&Path>) -> Self {
        let path = env_file.unwrap_or_else(|| Path::new(DEFAULT_ENV_FILE));
        let mut pairs = read_env_file(path);
        // Non-UTF-8 variables cannot hold any recognised setting.
        pairs.extend(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }));
        Self::from_pairs(pairs)
    }

    /// Resolve settings from key/value pairs; later pairs override earlier ones
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            settings.apply(key.as_ref(), value.into());
        }
        settings
    }

    /// Set the server address
    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Whether the API key is set to something other than the placeholder
    pub fn has_usable_api_key(&self) -> bool {
        let key = self.openai_api_key.trim();
        !key.is_empty() && key != API_KEY_PLACEHOLDER
    }

    /// Address the info service binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn apply(&mut self, key: &str, value: String) {
        match key.to_ascii_lowercase().as_str() {
            "app_name" => self.app_name = value,
            "debug" => match parse_bool(&value) {
                Some(flag) => self.debug = flag,
                None => warn!(value = %value, "Ignoring non-boolean DEBUG value"),
            },
            "openai_api_key" => self.openai_api_key = value,
            "openai_api_base" => self.openai_api_base = value,
            "model_name" => self.model_name = value,
            "eth_rpc_url" => self.eth_rpc_url = value,
            "network" => self.network = value,
            "host" => self.host = value,
            "port" => match value.trim().parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!(value = %value, "Ignoring invalid PORT value"),
            },
            _ => {}
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_env_file(path: &Path) -> Vec<(String, String)> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!("No env file at {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read env file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut pairs = Vec::new();
    for item in iter {
        match item {
            Ok(pair) => pairs.push(pair),
            Err(e) => warn!("Skipping malformed line in {}: {}", path.display(), e),
        }
    }
    pairs
}
