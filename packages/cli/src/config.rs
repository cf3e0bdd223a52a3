use std::env;
use std::num::ParseIntError;
use thiserror::Error;

use stackfeed_questions::DatabaseConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(env::var("PORT").ok(), 4000)?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        // Missing database credentials are not a config error; they surface as
        // a connection failure at first use.
        let database = DatabaseConfig {
            user: env::var("DB_USER").unwrap_or_default(),
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            database: env::var("DB_NAME").unwrap_or_default(),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            port: parse_port(env::var("DB_PORT").ok(), 5432)?,
        };

        Ok(Config {
            port,
            cors_origin,
            database,
        })
    }
}

fn parse_port(raw: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match raw {
        Some(value) => Ok(value.parse::<u16>()?),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_defaults_when_unset() {
        assert_eq!(parse_port(None, 4000).unwrap(), 4000);
        assert_eq!(parse_port(None, 5432).unwrap(), 5432);
    }

    #[test]
    fn test_parse_port_reads_value() {
        assert_eq!(parse_port(Some("8080".to_string()), 4000).unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        assert!(parse_port(Some("not-a-port".to_string()), 4000).is_err());
        assert!(parse_port(Some("70000".to_string()), 4000).is_err());
    }
}
