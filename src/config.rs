use serde::Deserialize;
use std::env;
use std::str::FromStr;

const MIN_BODY_BYTES: usize = 1024;
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Shared secret expected in `Authorization: Bearer <token>`.
    pub api_token: String,
    pub max_body_bytes: Option<usize>,
    pub workers: Option<usize>,
    pub swagger_ui: Option<bool>,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config: Config = cfg.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Rejects configurations that would start an unusable or unsafe server.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !self
            .host
            .chars()
            .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port < 1024 {
            return Err(config::ConfigError::Message(
                "Port must be 1024 or higher for security reasons".to_string(),
            ));
        }

        if self.api_token.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "API_TOKEN must be set to a non-empty value".to_string(),
            ));
        }

        if let Some(limit) = self.max_body_bytes {
            if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&limit) {
                return Err(config::ConfigError::Message(format!(
                    "max_body_bytes must be between {} and {} bytes",
                    MIN_BODY_BYTES, MAX_BODY_BYTES
                )));
            }
        }

        if self.workers == Some(0) {
            return Err(config::ConfigError::Message(
                "workers must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    pub fn effective_max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(1024 * 1024)
    }

    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    pub fn swagger_ui_enabled(&self) -> bool {
        self.swagger_ui.unwrap_or(true)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
    pub sql_log: Option<bool>,
}

impl DatabaseSettings {
    pub fn default_from_url(url: String) -> Self {
        Self {
            url,
            max_connections: parse_env_var("DATABASE_MAX_CONNECTIONS"),
            min_connections: parse_env_var("DATABASE_MIN_CONNECTIONS"),
            connect_timeout_secs: parse_env_var("DATABASE_CONNECT_TIMEOUT_SECS"),
            acquire_timeout_secs: parse_env_var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            idle_timeout_secs: parse_env_var("DATABASE_IDLE_TIMEOUT_SECS"),
            sql_log: parse_env_var("DATABASE_SQL_LOG"),
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        env::var("DATABASE_URL").map(Self::default_from_url)
    }
}

fn parse_env_var<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|value| value.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            api_token: "secret".to_string(),
            max_body_bytes: None,
            workers: None,
            swagger_ui: None,
            cors_allowed_origin: None,
        }
    }

    #[test]
    fn accepts_minimal_config() {
        let config = base();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_max_body_bytes(), 1024 * 1024);
        assert!(config.swagger_ui_enabled());
    }

    #[test]
    fn rejects_blank_token() {
        let config = Config {
            api_token: "   ".to_string(),
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_privileged_port_and_odd_host() {
        assert!(Config { port: 80, ..base() }.validate().is_err());
        assert!(
            Config {
                host: "local host;".to_string(),
                ..base()
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn rejects_body_limit_out_of_range() {
        assert!(
            Config {
                max_body_bytes: Some(10),
                ..base()
            }
            .validate()
            .is_err()
        );
        assert!(
            Config {
                max_body_bytes: Some(64 * 1024),
                ..base()
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn rejects_zero_workers() {
        assert!(
            Config {
                workers: Some(0),
                ..base()
            }
            .validate()
            .is_err()
        );
    }
}
