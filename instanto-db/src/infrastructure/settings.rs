use std::time::Duration;

use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub log_level: String,
    pub run_migrations: bool,
}

/// What the pool factory needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Settings {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a custom variable lookup.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = get_required(&lookup, "DATABASE_URL").context("DATABASE_URL is required")?;
        let max_connections = parse_u32_var(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let acquire_timeout_secs = parse_u64_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?;
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let run_migrations = parse_bool_var(&lookup, "RUN_MIGRATIONS", false)?;

        Ok(Self {
            database: DatabaseSettings {
                url,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            log_level,
            run_migrations,
        })
    }
}

fn get_required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    let value = lookup(key).ok_or_else(|| anyhow!("{key} is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_u32_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> Result<u32> {
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<u32>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_bool_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some("1" | "true" | "yes") => Ok(true),
        Some("0" | "false" | "no") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be true or false, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::Settings;

    fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let settings =
            settings_from(&[("DATABASE_URL", "mysql://u:p@localhost/instanto")]).expect("valid");
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.database.acquire_timeout, Duration::from_secs(5));
        assert_eq!(settings.log_level, "info");
        assert!(!settings.run_migrations);
    }

    #[test]
    fn missing_url_is_an_error() {
        assert!(settings_from(&[]).is_err());
        assert!(settings_from(&[("DATABASE_URL", "   ")]).is_err());
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = settings_from(&[("DATABASE_URL", "mysql://x"), ("DB_MAX_CONNECTIONS", "0")])
            .expect_err("must fail");
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn log_level_falls_back_to_rust_log() {
        let settings = settings_from(&[("DATABASE_URL", "mysql://x"), ("RUST_LOG", "debug")])
            .expect("valid");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn run_migrations_accepts_common_spellings() {
        let settings = settings_from(&[("DATABASE_URL", "mysql://x"), ("RUN_MIGRATIONS", "true")])
            .expect("valid");
        assert!(settings.run_migrations);
        assert!(
            settings_from(&[("DATABASE_URL", "mysql://x"), ("RUN_MIGRATIONS", "maybe")]).is_err()
        );
    }
}
