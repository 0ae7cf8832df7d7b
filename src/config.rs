use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key. Unset or blank switches the catalog into demo mode.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Response language requested from TMDB
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,

    /// Default number of movies returned by a search
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Timeout applied to every catalog request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Idle time after which an untouched session is dropped; 0 keeps sessions forever
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Which catalog backs the session: the live TMDB API or the built-in sample set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMode {
    Live { api_key: String },
    Demo,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_language() -> String {
    "zh-TW".to_string()
}

fn default_result_limit() -> usize {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_session_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tmdb_api_url: default_tmdb_api_url(),
            tmdb_language: default_tmdb_language(),
            result_limit: default_result_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            session_ttl_secs: default_session_ttl_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The single switch between live and demo catalogs
    pub fn catalog_mode(&self) -> CatalogMode {
        match self.tmdb_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => CatalogMode::Live {
                api_key: key.to_string(),
            },
            _ => CatalogMode::Demo,
        }
    }

    /// Session idle limit, `None` when expiry is disabled
    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        if self.session_ttl_secs == 0 {
            return None;
        }
        let secs = i64::try_from(self.session_ttl_secs).unwrap_or(i64::MAX);
        Some(chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
