use fenscout_core::position::{clamp_sighting_limit, DEFAULT_SIGHTING_LIMIT};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum sighting rows fetched per position lookup (default: `50`).
    pub sighting_limit: i64,
    /// Bearer token the indexer must present to `POST /api/v1/videos`.
    /// Ingest is disabled when unset.
    pub ingest_token: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SIGHTING_LIMIT`       | `50`                       |
    /// | `INGEST_TOKEN`         | unset (ingest disabled)    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let sighting_limit: i64 = std::env::var("SIGHTING_LIMIT")
            .map(|v| v.parse().expect("SIGHTING_LIMIT must be a valid i64"))
            .unwrap_or(DEFAULT_SIGHTING_LIMIT);

        let ingest_token = std::env::var("INGEST_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            sighting_limit: clamp_sighting_limit(Some(sighting_limit)),
            ingest_token,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:5173 , ,https://fenscout.app"),
            vec!["http://localhost:5173", "https://fenscout.app"]
        );
    }

    #[test]
    fn empty_origin_list() {
        assert!(parse_origins("").is_empty());
    }
}
