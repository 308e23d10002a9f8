use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::ChatConfig;
use crate::utils::validate_file_size;

/// Parse a chat config file
///
/// Accepts either the config endpoint's envelope (`{"data": {...}}`) or a bare
/// config object.
pub fn parse_config_file(path: &Path) -> Result<ChatConfig> {
    // Open file and validate size to avoid TOCTOU race condition
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse a chat config from JSON text, unwrapping the `data` envelope when present
pub fn parse_config_str(contents: &str) -> Result<ChatConfig> {
    if contents.trim().is_empty() {
        bail!("Config is empty");
    }

    let value: Value = serde_json::from_str(contents).context("Config is not valid JSON")?;
    let payload = match value {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or_default()
        }
        Value::Object(map) => Value::Object(map),
        _ => bail!("Config must be a JSON object"),
    };

    serde_json::from_value(payload).context("Config does not match the expected schema")
}

/// Load the primary config, falling back to a local config when it cannot be loaded
///
/// The fallback is typically an "error config" whose welcome message explains
/// that the chatbot is unavailable.
pub fn load_config_with_fallback(primary: &Path, fallback: &Path) -> Result<ChatConfig> {
    match parse_config_file(primary) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Failed to load config {}: {:#}", primary.display(), e);
            debug!("Falling back to {}", fallback.display());
            parse_config_file(fallback)
        }
    }
}
