use crate::auth::session::SessionConfig;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

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
    /// Shared admin secret. `None` is a server misconfiguration that the
    /// auth endpoint reports as a 500.
    pub admin_password: Option<String>,
    /// Session token signing and lifetime.
    pub session: SessionConfig,
    /// Postgres URL. Without one the server runs on the in-memory store.
    pub database_url: Option<String>,
    pub log_format: LogFormat,
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
    /// | `ADMIN_PASSWORD`       | --                         |
    /// | `SESSION_SECRET`       | `ADMIN_PASSWORD`           |
    /// | `SESSION_EXPIRY_MINS`  | `480`                      |
    /// | `DATABASE_URL`         | --                         |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Panics
    ///
    /// Panics on malformed numeric values so misconfiguration fails fast at
    /// startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = get("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = get("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session = SessionConfig {
            secret: get("SESSION_SECRET"),
            expiry_mins: get("SESSION_EXPIRY_MINS")
                .map(|v| v.parse().expect("SESSION_EXPIRY_MINS must be a valid i64"))
                .unwrap_or(SessionConfig::DEFAULT_EXPIRY_MINS),
        };

        let log_format = match get("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_password: get("ADMIN_PASSWORD"),
            session,
            database_url: get("DATABASE_URL"),
            log_format,
        }
    }

    /// Key used to sign session tokens: `SESSION_SECRET`, or the admin
    /// password when no dedicated secret is configured.
    pub fn session_secret(&self) -> Option<&str> {
        self.session
            .secret
            .as_deref()
            .or(self.admin_password.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.admin_password, None);
        assert_eq!(config.session.expiry_mins, 480);
        assert_eq!(config.database_url, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn empty_admin_password_counts_as_missing() {
        let config = config_from(&[("ADMIN_PASSWORD", "")]);
        assert_eq!(config.admin_password, None);
        assert_eq!(config.session_secret(), None);
    }

    #[test]
    fn session_secret_falls_back_to_admin_password() {
        let config = config_from(&[("ADMIN_PASSWORD", "spike")]);
        assert_eq!(config.session_secret(), Some("spike"));

        let config = config_from(&[("ADMIN_PASSWORD", "spike"), ("SESSION_SECRET", "dig")]);
        assert_eq!(config.session_secret(), Some("dig"));
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let config = config_from(&[("CORS_ORIGINS", "https://a.example, https://b.example,")]);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn malformed_port_panics() {
        config_from(&[("PORT", "eighty")]);
    }
}
