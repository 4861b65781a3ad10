use std::time::Duration;

use url::Url;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://bgp.he.net/";

/// Pause between two consecutive fetches of a batch.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_USER_AGENT: &str = concat!("henet/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the fetcher and the scrape service.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Root of the looking-glass site; domain paths are resolved against it.
    pub base_url: Url,

    /// Minimum gap between the end of one fetch and the start of the next
    /// within a batch. `Duration::ZERO` disables pacing.
    pub delay: Duration,

    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,

    pub user_agent: String,
}

impl ScrapeConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse and set the base URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, AppError> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// - `HENET_BASE_URL` (optional, defaults to `https://bgp.he.net/`)
    /// - `HENET_DELAY_MS` (optional, defaults to 250)
    /// - `HENET_TIMEOUT_SECS` (optional, defaults to 30)
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("HENET_BASE_URL") {
            config.base_url = parse_base_url(&raw)?;
        }

        if let Ok(raw) = std::env::var("HENET_DELAY_MS") {
            let ms: u64 = raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid HENET_DELAY_MS '{raw}': must be a non-negative integer"
                ))
            })?;
            config.delay = Duration::from_millis(ms);
        }

        if let Ok(raw) = std::env::var("HENET_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid HENET_TIMEOUT_SECS '{raw}': must be a positive integer"
                ))
            })?;
            if secs == 0 {
                return Err(AppError::ConfigError(
                    "HENET_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::ConfigError(format!(
            "Base URL scheme '{scheme}' is not allowed (only http/https)"
        ))),
    }
}
