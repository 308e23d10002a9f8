use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable naming the default config payload file
pub const CONFIG_ENV_VAR: &str = "SMARTER_CHAT_CONFIG";

/// Resolve the config file path: explicit argument first, then `SMARTER_CHAT_CONFIG`
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let from_env = env::var(CONFIG_ENV_VAR)
        .with_context(|| format!("No config file given and {} is not set", CONFIG_ENV_VAR))?;
    Ok(PathBuf::from(from_env))
}
