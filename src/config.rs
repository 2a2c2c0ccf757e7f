use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    /// Base URL of the upstream recruitment API.
    pub job_board_base_url: String,
    pub sync_query_text: String,
    /// External id of the area the background sync is restricted to.
    pub sync_area: Option<String>,
    pub sync_page_size: u32,
    /// Interval between background sync runs; unset disables the worker.
    pub sync_interval_secs: Option<u64>,
    pub sync_throttle_ms: u64,
    pub api_rps: u32,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            job_board_base_url: get_env_or("JOB_BOARD_BASE_URL", "https://api.hh.ru/"),
            sync_query_text: get_env_or("SYNC_QUERY_TEXT", "rust"),
            sync_area: env::var("SYNC_AREA").ok(),
            sync_page_size: get_env_parse_or("SYNC_PAGE_SIZE", 100)?,
            sync_interval_secs: get_env_parse_opt("SYNC_INTERVAL_SECS")?,
            sync_throttle_ms: get_env_parse_or("SYNC_THROTTLE_MS", 1000)?,
            api_rps: get_env_parse_or("API_RPS", 50)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
