use std::time::Duration;

/// Settings for the generative-text provider. Present only when an API key
/// is configured.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Optional
/// integrations stay disabled until their variables are set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Owner used when a create or sync request omits `userId`.
    pub default_user_id: Option<String>,
    /// Generative-text provider; `None` means template content only.
    pub ai: Option<AiSettings>,
    /// GitHub scraper endpoint; `None` disables sync.
    pub github_scanner_url: Option<String>,
    /// Timeout for one scraper call in seconds (default: `60`).
    pub github_timeout_secs: u64,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `3001`                          |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `DEFAULT_USER_ID`      | unset                           |
    /// | `AI_API_KEY`           | unset (AI disabled)             |
    /// | `AI_API_URL`           | `https://api.anthropic.com`     |
    /// | `AI_MODEL`             | `claude-3-haiku-20240307`       |
    /// | `AI_TIMEOUT_SECS`      | `30`                            |
    /// | `GITHUB_SCANNER_URL`   | unset (sync disabled)           |
    /// | `GITHUB_TIMEOUT_SECS`  | `60`                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let ai = non_empty_var("AI_API_KEY").map(|api_key| {
            let timeout_secs: u64 = std::env::var("AI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .expect("AI_TIMEOUT_SECS must be a valid u64");
            AiSettings {
                api_url: non_empty_var("AI_API_URL")
                    .unwrap_or_else(|| skillforge_ai::anthropic::DEFAULT_BASE_URL.into()),
                api_key,
                model: non_empty_var("AI_MODEL")
                    .unwrap_or_else(|| skillforge_ai::anthropic::DEFAULT_MODEL.into()),
                timeout: Duration::from_secs(timeout_secs),
            }
        });

        let github_timeout_secs: u64 = std::env::var("GITHUB_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("GITHUB_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_user_id: non_empty_var("DEFAULT_USER_ID"),
            ai,
            github_scanner_url: non_empty_var("GITHUB_SCANNER_URL"),
            github_timeout_secs,
        }
    }
}
