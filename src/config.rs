use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::BaseCounts;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub vegetation: VegetationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct VegetationSettings {
    #[serde(default = "default_transmission_base_count")]
    pub transmission_base_count: usize,
    #[serde(default = "default_distribution_base_count")]
    pub distribution_base_count: usize,
}

impl Default for VegetationSettings {
    fn default() -> Self {
        Self {
            transmission_base_count: default_transmission_base_count(),
            distribution_base_count: default_distribution_base_count(),
        }
    }
}

impl VegetationSettings {
    pub fn base_counts(&self) -> BaseCounts {
        BaseCounts {
            transmission: self.transmission_base_count,
            distribution: self.distribution_base_count,
        }
    }
}

fn default_transmission_base_count() -> usize { 50 }
fn default_distribution_base_count() -> usize { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VEGETATION__)
    /// 5. A bare PORT variable, as set by hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VEGETATION__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("VEGETATION")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour a bare `PORT` variable on top of the layered configuration
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    apply_port_override(settings, std::env::var("PORT").ok().as_deref())
}

/// Override `server.port` when `port` is a valid u16; anything else is ignored
fn apply_port_override(settings: Config, port: Option<&str>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port.and_then(|p| p.parse::<u16>().ok()) {
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}
