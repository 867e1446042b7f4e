use anyhow::Context;
use serde::de::DeserializeOwned;

/// Reads a TOML config file. Bots run fine without one; every field a bot
/// reads has a default.
pub fn load<T: DeserializeOwned>(path: impl AsRef<std::path::Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}
