/* src/cli/core/src/inspect.rs */

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::compile::read_input;

/// Document JSON for a template.
pub fn document_json(template: &str, compact: bool) -> Result<String> {
  let document = dotreact_compiler::parse(template)?;
  let json = if compact {
    serde_json::to_string(&document)
  } else {
    serde_json::to_string_pretty(&document)
  };
  json.context("failed to serialize document")
}

pub fn run_ast(input: Option<&Path>, compact: bool) -> Result<()> {
  let template = read_input(input)?;
  let source = input.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
  let json = document_json(&template, compact).with_context(|| format!("failed to parse {source}"))?;
  let mut stdout = std::io::stdout().lock();
  writeln!(stdout, "{json}").context("failed to write stdout")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compact_document_json() {
    let json = document_json("<b>{{! it.x }}</b>", true).unwrap();
    assert_eq!(
      json,
      r#"{"type":"root","children":[{"type":"element","tagName":"b","attributes":[],"children":[{"type":"dotEncoded","value":"it.x"}]}]}"#
    );
  }

  #[test]
  fn pretty_document_json_is_indented() {
    let json = document_json("<b></b>", false).unwrap();
    assert!(json.contains("\n  \"children\""));
  }

  #[test]
  fn parse_errors_surface() {
    let err = document_json("{{?}}", true).unwrap_err();
    assert!(err.downcast_ref::<dotreact_compiler::CompileError>().is_some());
  }
}
