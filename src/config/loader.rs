use crate::config::Config;
use crate::error::IconlineError;
use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load configuration with priority: Env vars > Config file > Defaults
pub fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => load_config_file(&path)?,
        None => load_config_from_default_locations(),
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

/// First readable file in the search path, else defaults.
fn load_config_from_default_locations() -> Config {
    for path in get_config_search_paths() {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => return config,
            Err(err) => warn!("skipping config {}: {:#}", path.display(), err),
        }
    }

    debug!("no config file found, using defaults");
    Config::default()
}

pub fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".iconline.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("iconline").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        let dotted = home.join(".config").join("iconline").join("config.json");
        if !paths.contains(&dotted) {
            paths.push(dotted);
        }
    }

    paths
}

pub fn load_config_file(path: &Path) -> Result<Config, IconlineError> {
    let content = fs::read_to_string(path).map_err(|source| IconlineError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str(&content).map_err(|source| IconlineError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Apply environment variable overrides to configuration
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(theme) = env::var("ICONLINE_THEME") {
        config.theme = theme;
    }
    if let Ok(color) = env::var("ICONLINE_WARM_COLOR") {
        config.warm_color = Some(color);
    }
    if let Ok(color) = env::var("ICONLINE_COOL_COLOR") {
        config.cool_color = Some(color);
    }
    if let Ok(color) = env::var("ICONLINE_PLAIN_COLOR") {
        config.plain_color = Some(color);
    }
    if let Some(darkness) = env_number("ICONLINE_DARKNESS") {
        config.darkness = Some(darkness);
    }
    if let Some(desaturation) = env_number("ICONLINE_DESATURATION") {
        config.desaturation = Some(desaturation);
    }
}

fn env_number(key: &str) -> Option<f64> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("ignoring {}={:?}: not a finite number", key, raw);
            None
        }
    }
}
