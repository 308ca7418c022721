use serde::{Deserialize, Serialize};
use crate::config::constants::{DEFAULT_DB_PATH, DEFAULT_SERVER_PORT};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,

    #[serde(default = "ServerConfig::default_db_path")]
    pub db_path: String,
}

impl ServerConfig {
    fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    fn default_db_path() -> String {
        DEFAULT_DB_PATH.to_string()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::default_port(),
            db_path: Self::default_db_path(),
        }
    }
}
