//! Server Configuration
//!
//! Values come from the environment, with `.env` loaded first if present.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_DATABASE_URL: &str = "todo.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file path, or `:memory:`
    pub database_url: PathBuf,
    pub bind_addr: SocketAddr,
    /// Directory holding the built browser client
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let bind_addr = bind_addr
            .parse()
            .map_err(|e| ServerError::Config(format!("BIND_ADDR {:?}: {}", bind_addr, e)))?;

        Ok(Self {
            database_url: PathBuf::from(database_url),
            bind_addr,
            static_dir: PathBuf::from(static_dir),
        })
    }
}
