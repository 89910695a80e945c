//! Process configuration read from the environment at startup.

use std::net::SocketAddr;

use axum::http::HeaderValue;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
pub const DEFAULT_CORS_ORIGINS: &str = "*";

#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DynamoDB endpoint override. `None` uses the regional AWS endpoint.
    pub database_url: Option<String>,
    pub db_name: String,
    pub status_checks_table: String,
    pub cors_origins: AllowedOrigins,
    pub bind_addr: SocketAddr,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { name: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} environment variable must be set", name),
            ConfigError::Invalid { name, value } => {
                write!(f, "Invalid value for {}: {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        AppConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let db_name = var("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
        let status_checks_table =
            var("STATUS_CHECKS_TABLE").unwrap_or_else(|| format!("{}_status_checks", db_name));

        let raw_origins = var("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string());
        let cors_origins = parse_origins(&raw_origins)?;

        let raw_bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: raw_bind_addr.clone(),
        })?;

        Ok(AppConfig {
            database_url: var("DATABASE_URL"),
            db_name,
            status_checks_table,
            cors_origins,
            bind_addr,
        })
    }
}

/// Parses a comma-separated origin list. A `*` entry allows every origin.
pub fn parse_origins(raw: &str) -> Result<AllowedOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(AllowedOrigins::Any);
    }

    entries
        .into_iter()
        .map(|entry| {
            HeaderValue::from_str(entry).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: entry.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AllowedOrigins::List)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DB_NAME", "brain")]).unwrap();

        assert_eq!(config.db_name, "brain");
        assert_eq!(config.status_checks_table, "brain_status_checks");
        assert_eq!(config.cors_origins, AllowedOrigins::Any);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_missing_db_name() {
        let err = config_from(&[]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DB_NAME"));
        assert_eq!(err.to_string(), "DB_NAME environment variable must be set");
    }

    #[test]
    fn test_blank_db_name_counts_as_missing() {
        assert_eq!(
            config_from(&[("DB_NAME", "  ")]).unwrap_err(),
            ConfigError::Missing("DB_NAME")
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DB_NAME", "brain"),
            ("STATUS_CHECKS_TABLE", "custom-table"),
            ("DATABASE_URL", "http://localhost:8000"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.status_checks_table, "custom-table");
        assert_eq!(config.database_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.cors_origins,
            AllowedOrigins::List(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config_from(&[("DB_NAME", "brain"), ("BIND_ADDR", "nowhere")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "BIND_ADDR",
                value: "nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_parse_origins_wildcard_wins() {
        assert_eq!(
            parse_origins("https://a.example,*").unwrap(),
            AllowedOrigins::Any
        );
        assert_eq!(parse_origins(" , ").unwrap(), AllowedOrigins::Any);
    }

    #[test]
    fn test_parse_origins_rejects_control_characters() {
        assert!(parse_origins("https://a.example\n").is_ok());
        assert!(matches!(
            parse_origins("https://bad\u{7f}.example"),
            Err(ConfigError::Invalid { name: "CORS_ORIGINS", .. })
        ));
    }
}
