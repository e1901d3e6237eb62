/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `NOTES_API_URL`          | `http://localhost:3000` |
    /// | `NOTES_API_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// An unparsable timeout falls back to the default with a warning.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("NOTES_API_URL")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("NOTES_API_TIMEOUT_SECS") {
            None => 10,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid NOTES_API_TIMEOUT_SECS, using default"
                );
                10
            }),
        };

        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Create a config pointing at an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: 10,
        }
    }
}
