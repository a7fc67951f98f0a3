//! Runner configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use blog_infra::DatabaseConfig;
use blog_verifier::DEFAULT_SEED_COUNT;

/// Contract runner configuration.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Base URL of the server under test.
    pub api_base_url: String,
    /// The database the server under test writes to.
    pub database: DatabaseConfig,
    pub seed_count: usize,
    /// Fixed RNG seed for reproducible fixtures.
    pub fixture_seed: Option<u64>,
    pub request_timeout: Duration,
}

impl CheckConfig {
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("TEST_DATABASE_URL").context("TEST_DATABASE_URL must be set")?;

        let mut database = DatabaseConfig::new(database_url);
        database.max_connections = 5;
        database.min_connections = 1;

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            database,
            seed_count: parse_var("SEED_COUNT")?.unwrap_or(DEFAULT_SEED_COUNT),
            fixture_seed: parse_var("FIXTURE_SEED")?,
            request_timeout: Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS")?.unwrap_or(30)),
        })
    }
}

/// Unset is `None`; set but unparseable is an error.
fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(None),
    }
}
