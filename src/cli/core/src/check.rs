/* src/cli/core/src/check.rs */

use std::path::{Path, PathBuf};

use anyhow::Result;
use dotreact_compiler::{CompileError, GenerateOptions};

use crate::compile::{collect_templates, read_input};
use crate::ui;

/// Expand directories into the templates they hold.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();
  for input in inputs {
    if input.is_dir() {
      files.extend(collect_templates(input)?);
    } else {
      files.push(input.clone());
    }
  }
  Ok(files)
}

fn check_file(path: &Path, options: &GenerateOptions) -> Result<std::result::Result<(), CompileError>> {
  let template = read_input(Some(path))?;
  Ok(dotreact_compiler::generate_with_options(&template, options).map(|_| ()))
}

/// Parse and generate every input. Returns the number of failing templates.
pub fn run_check(inputs: &[PathBuf], options: &GenerateOptions) -> Result<usize> {
  let files = expand_inputs(inputs)?;
  ui::banner("check");

  let mut failed = 0;
  for file in &files {
    match check_file(file, options)? {
      Ok(()) => ui::ok(&file.display().to_string()),
      Err(err) => {
        failed += 1;
        ui::fail(&file.display().to_string());
        ui::detail(&format!("{}: {err}", err.code()));
      }
    }
  }

  ui::blank();
  if failed == 0 {
    ui::ok(&format!("{} templates ok", files.len()));
  } else {
    ui::fail(&format!("{failed} of {} templates failed", files.len()));
  }
  Ok(failed)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn counts_failing_templates() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("good.dot"), "<p>{{! it.a }}</p>").unwrap();
    fs::write(tmp.path().join("style.dot"), r#"<p style=""></p>"#).unwrap();
    fs::write(tmp.path().join("lex.dot"), "<p>{{! it.a </p>").unwrap();

    let failed = run_check(&[tmp.path().to_path_buf()], &GenerateOptions::default()).unwrap();
    assert_eq!(failed, 2);
  }

  #[test]
  fn missing_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.dot");
    assert!(run_check(&[missing], &GenerateOptions::default()).is_err());
  }
}
