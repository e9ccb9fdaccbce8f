use hound_core::RelayConfig;
use std::{env, path::PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "HOUND_RELAY_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "hound-relay.toml";

/// Load the relay configuration.
///
/// An explicit path (flag or `HOUND_RELAY_CONFIG`) must exist. The default
/// `hound-relay.toml` is optional; without it every section uses defaults
/// and the client key must come from the environment.
pub fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<RelayConfig> {
    let (path, required) = config_path(explicit);

    if !required && !path.exists() {
        tracing::info!(path = %path.display(), "no config file found, using defaults");
        return Ok(RelayConfig::default());
    }

    let cfg = RelayConfig::from_file(&path)
        .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(cfg)
}

fn config_path(explicit: Option<PathBuf>) -> (PathBuf, bool) {
    if let Some(p) = explicit {
        return (p, true);
    }
    if let Ok(p) = env::var(CONFIG_ENV) {
        return (PathBuf::from(p), true);
    }
    (PathBuf::from(DEFAULT_CONFIG_PATH), false)
}
