//! Service config loader (strict parsing).
//!
//! Loaded once at startup. A missing file means built-in defaults; a present
//! but invalid file is fatal.

pub mod schema;

use std::fs;
use std::path::Path;

use revenue_core::error::{Result, RevenueError};

pub use schema::{MetricGroups, ServiceConfig, ServiceSection, WebhookSection};

/// Environment variable naming the YAML config file.
pub const CONFIG_PATH_ENV: &str = "REVENUE_AGENT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "revenue-agent.yaml";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";

pub fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        RevenueError::InvalidConfig(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| RevenueError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_or_default(path: &Path) -> Result<ServiceConfig> {
    if path.exists() {
        tracing::info!(path = %path.display(), "loading config file");
        load_from_file(path)
    } else {
        tracing::info!(path = %path.display(), "no config file, using built-in defaults");
        Ok(ServiceConfig::default())
    }
}

/// Replace the port of `service.listen`, keeping the host.
pub fn apply_port_override(cfg: &mut ServiceConfig, port: Option<&str>) -> Result<()> {
    let Some(raw) = port else {
        return Ok(());
    };
    let port: u16 = raw
        .trim()
        .parse()
        .map_err(|e| RevenueError::InvalidConfig(format!("{PORT_ENV}={raw:?} is not a port: {e}")))?;

    let mut addr = cfg.service.listen_addr()?;
    addr.set_port(port);
    cfg.service.listen = addr.to_string();
    Ok(())
}

/// Resolve the config file from the environment, then apply `PORT`.
pub fn load_from_env() -> Result<ServiceConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut cfg = load_or_default(Path::new(&path))?;
    apply_port_override(&mut cfg, std::env::var(PORT_ENV).ok().as_deref())?;
    Ok(cfg)
}
