use std::env;

use errors::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::ConfigError("DATABASE_URL must be set".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => parse_flag(&value).ok_or_else(|| {
                Error::ConfigError(format!("RUN_MIGRATIONS must be true or false, got {}", value))
            })?,
        };

        Ok(Config {
            database_url,
            bind_address,
            run_migrations,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
