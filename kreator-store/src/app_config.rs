use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub shop: ShopSettings,
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShopSettings {
    /// Service charge base at process start
    pub service_charge_base: f64,
}

/// Passcodes for the operator panel
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub profit_passcode: String,
    pub config_passcode: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, ConfigError> {
        let s = Self::defaults()?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // e.g. KREATOR__SERVER__PORT=9000
            .add_source(config::Environment::with_prefix("KREATOR").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Builder preloaded with the values every file may override
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.port", 8080)?
            .set_default(
                "shop.service_charge_base",
                kreator_catalog::ShopConfig::DEFAULT_SERVICE_CHARGE_BASE,
            )?
            .set_default("admin.profit_passcode", "5150")?
            .set_default("admin.config_passcode", "5051")
    }
}
