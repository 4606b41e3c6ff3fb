use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads configuration from `path` (optional file) plus `VERSO__*` environment
/// variables, validates it, and stores it for the lifetime of the process.
/// Subsequent calls return the already-initialized instance.
pub fn init_config(path: &str) -> anyhow::Result<Arc<StaticConfig>> {
    use anyhow::Context;

    if let Some(existing) = CONFIG.get() {
        return Ok(existing.clone());
    }

    let config = StaticConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path))?;
    config.validate().context("invalid configuration")?;

    Ok(CONFIG.get_or_init(|| Arc::new(config)).clone())
}
