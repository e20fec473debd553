/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use dotreact_compiler::GenerateOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DotreactConfig {
  /// Shape of the emitted component module.
  #[serde(default)]
  pub generate: GenerateOptions,
  #[serde(default)]
  pub output: OutputSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
  #[serde(default = "default_extension")]
  pub extension: String,
  /// Relative to the directory holding `dotreact.toml`.
  pub out_dir: Option<String>,
}

impl Default for OutputSection {
  fn default() -> Self {
    Self { extension: default_extension(), out_dir: None }
  }
}

fn default_extension() -> String {
  "tsx".to_string()
}

impl DotreactConfig {
  pub fn validate(&self) -> Result<()> {
    let ext = &self.output.extension;
    if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
      bail!("output.extension must be a bare extension like \"tsx\", got {ext:?}");
    }
    if self.generate.function_name.trim().is_empty() {
      bail!("generate.function_name must not be empty");
    }
    Ok(())
  }
}
