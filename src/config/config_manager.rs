use std::fs;
use crate::errors::{QaFlowError, QaFlowResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load() -> QaFlowResult<Config> {
        let config_location = dirs::home_dir()
            .map(|d| d.join("qaflow/config.toml"))
            .unwrap_or_default();

        if config_location.exists() {
            println!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location).map_err(|e| {
                QaFlowError::ConfigurationFileError {
                    path: config_location.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> QaFlowResult<()> {
        let sample_config = r#"# QA Flow Server Configuration

[server]
# Port the HTTP API listens on
port = 8000

# SQLite database file
db_path = "qaflow.db"

[gate]
# Minimum average risk score (percent); a branch below this fails the gate
min_risk = 70.0

# Minimum average security score (percent)
min_security = 70.0

# Maximum critical findings tolerated across the aggregation window
max_critical = 0

# Maximum high findings tolerated across the aggregation window
max_high = 5

# How many of the most recent analyses feed the gate
fetch_limit = 100
"#;

        let config_dir = dirs::home_dir()
            .map(|d| d.join("qaflow"))
            .ok_or_else(|| QaFlowError::system_error("config init", "cannot resolve home directory"))?;
        fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            return Err(QaFlowError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} instead of re-running init", config_path.display())),
            ));
        }

        fs::write(&config_path, sample_config)?;
        println!("📝 Sample configuration written to: {}", config_path.display());
        Ok(())
    }
}
