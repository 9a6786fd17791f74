//! 环境变量配置

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// 读取 `.env`（如果存在）和进程环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = require("DATABASE_URL")?;
        let raw_port = require("PORT")?;
        let port = raw_port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;
        let static_dir = lookup("STATIC_DIR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        Ok(Self {
            database_url,
            port,
            static_dir,
        })
    }
}
