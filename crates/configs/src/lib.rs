use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// The three services shipped by this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Ufo,
    Weather,
    WeatherOpenapi,
}

impl ServiceKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ufo => "ufo",
            Self::Weather => "weather",
            Self::WeatherOpenapi => "weather_openapi",
        }
    }

    fn env_prefix(self) -> &'static str {
        match self {
            Self::Ufo => "UFO",
            Self::Weather => "WEATHER",
            Self::WeatherOpenapi => "WEATHER_OPENAPI",
        }
    }

    fn default_port(self) -> u16 {
        match self {
            Self::Ufo => 50051,
            Self::Weather => 8083,
            Self::WeatherOpenapi => 8089,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ufo: ServiceConfig,
    pub weather: ServiceConfig,
    pub weather_openapi: ServiceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ufo: ServiceConfig::defaults_for(ServiceKind::Ufo),
            weather: ServiceConfig::defaults_for(ServiceKind::Weather),
            weather_openapi: ServiceConfig::defaults_for(ServiceKind::WeatherOpenapi),
        }
    }
}

/// On-disk shape of the config file. Every field is optional; omitted values
/// take the defaults of the section's service.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    ufo: ServiceSection,
    #[serde(default)]
    weather: ServiceSection,
    #[serde(default)]
    weather_openapi: ServiceSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceSection {
    host: Option<String>,
    port: Option<u16>,
    worker_threads: Option<usize>,
    request_timeout_secs: Option<u64>,
    shutdown_timeout_secs: Option<u64>,
}

impl ServiceSection {
    fn resolve(self, kind: ServiceKind) -> ServiceConfig {
        let defaults = ServiceConfig::defaults_for(kind);
        ServiceConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            worker_threads: self.worker_threads,
            request_timeout_secs: self.request_timeout_secs.unwrap_or(defaults.request_timeout_secs),
            shutdown_timeout_secs: self.shutdown_timeout_secs.unwrap_or(defaults.shutdown_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub worker_threads: Option<usize>,
    pub request_timeout_secs: u64,
    pub shutdown_timeout_secs: u64,
}

fn default_host() -> String { "localhost".into() }
fn default_request_timeout() -> u64 { 10 }
fn default_shutdown_timeout() -> u64 { 10 }

impl ServiceConfig {
    pub fn defaults_for(kind: ServiceKind) -> Self {
        Self {
            host: default_host(),
            port: kind.default_port(),
            worker_threads: None,
            request_timeout_secs: default_request_timeout(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }

    /// Build from `<PREFIX>_HOST`, `<PREFIX>_PORT`, ... falling back to defaults.
    pub fn from_env(kind: ServiceKind) -> Self {
        Self::from_lookup(kind, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(kind: ServiceKind, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = kind.env_prefix();
        let var = |name: &str| lookup(&format!("{prefix}_{name}"));
        let mut cfg = Self::defaults_for(kind);
        if let Some(host) = var("HOST") {
            cfg.host = host;
        }
        if let Some(port) = var("PORT").and_then(|p| p.parse().ok()) {
            cfg.port = port;
        }
        if let Some(w) = var("WORKER_THREADS").and_then(|w| w.parse().ok()) {
            cfg.worker_threads = Some(w);
        }
        if let Some(t) = var("REQUEST_TIMEOUT_SECS").and_then(|t| t.parse().ok()) {
            cfg.request_timeout_secs = t;
        }
        if let Some(t) = var("SHUTDOWN_TIMEOUT_SECS").and_then(|t| t.parse().ok()) {
            cfg.shutdown_timeout_secs = t;
        }
        cfg
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    fn normalize(&mut self, section: &str) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("{section}.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        if self.request_timeout_secs == 0 || self.shutdown_timeout_secs == 0 {
            return Err(anyhow!("{section} timeouts must be positive seconds"));
        }
        Ok(())
    }
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("read config file {path}"))?;
    load_from_str(&content).with_context(|| format!("parse config file {path}"))
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let file: FileConfig = toml::from_str(content)?;
    Ok(AppConfig {
        ufo: file.ufo.resolve(ServiceKind::Ufo),
        weather: file.weather.resolve(ServiceKind::Weather),
        weather_openapi: file.weather_openapi.resolve(ServiceKind::WeatherOpenapi),
    })
}

impl AppConfig {
    /// Config file when present, environment variables otherwise.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_from(&config_path())
    }

    /// Only a missing file falls back to the environment; a file that cannot
    /// be read or parsed is an error.
    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => load_from_str(&content).with_context(|| format!("parse config file {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(e).with_context(|| format!("read config file {path}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        Self {
            ufo: ServiceConfig::from_env(ServiceKind::Ufo),
            weather: ServiceConfig::from_env(ServiceKind::Weather),
            weather_openapi: ServiceConfig::from_env(ServiceKind::WeatherOpenapi),
        }
    }

    pub fn service(&self, kind: ServiceKind) -> &ServiceConfig {
        match kind {
            ServiceKind::Ufo => &self.ufo,
            ServiceKind::Weather => &self.weather,
            ServiceKind::WeatherOpenapi => &self.weather_openapi,
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.ufo.normalize("ufo")?;
        self.weather.normalize("weather")?;
        self.weather_openapi.normalize("weather_openapi")?;
        Ok(())
    }
}
