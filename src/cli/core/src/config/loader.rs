/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::DotreactConfig;

pub const CONFIG_FILE: &str = "dotreact.toml";

/// Walk upward from `start` to find `dotreact.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_config(path: &Path) -> Result<DotreactConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: DotreactConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Explicit path, else upward discovery from `start`, else defaults.
/// Returns the config file path when one was loaded.
pub fn resolve_config(
  explicit: Option<&Path>,
  start: &Path,
) -> Result<(Option<PathBuf>, DotreactConfig)> {
  if let Some(path) = explicit {
    return Ok((Some(path.to_path_buf()), load_config(path)?));
  }
  match find_config(start) {
    Ok(path) => {
      log::debug!("using {}", path.display());
      let config = load_config(&path)?;
      Ok((Some(path), config))
    }
    Err(err) => {
      log::debug!("{err:#}, using defaults");
      Ok((None, DotreactConfig::default()))
    }
  }
}
