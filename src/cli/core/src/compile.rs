/* src/cli/core/src/compile.rs */

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use dotreact_compiler::GenerateOptions;

use crate::config::DotreactConfig;
use crate::ui;

const TEMPLATE_EXTENSIONS: &[&str] = &["dot", "html", "jst"];

pub fn is_template(path: &Path) -> bool {
  path.extension().and_then(|e| e.to_str()).is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

/// Template text from a file, or stdin when no path is given.
pub fn read_input(input: Option<&Path>) -> Result<String> {
  match input {
    Some(path) => {
      std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
    None => {
      let mut text = String::new();
      std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
      Ok(text)
    }
  }
}

/// Template files directly inside `dir`, sorted by name.
pub fn collect_templates(dir: &Path) -> Result<Vec<PathBuf>> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
  let mut files = Vec::new();
  for entry in entries {
    let path = entry.with_context(|| format!("failed to read {}", dir.display()))?.path();
    if path.is_file() && is_template(&path) {
      files.push(path);
    }
  }
  files.sort();
  Ok(files)
}

pub fn compile_file(path: &Path, options: &GenerateOptions) -> Result<String> {
  let template = read_input(Some(path))?;
  dotreact_compiler::generate_with_options(&template, options)
    .with_context(|| format!("failed to compile {}", path.display()))
}

/// Compile every template in `dir` to `<out_dir>/<stem>.<extension>`.
pub fn compile_dir(
  dir: &Path,
  out_dir: &Path,
  options: &GenerateOptions,
  extension: &str,
) -> Result<Vec<PathBuf>> {
  let files = collect_templates(dir)?;
  if files.is_empty() {
    bail!("no templates (*.dot, *.html, *.jst) found in {}", dir.display());
  }
  std::fs::create_dir_all(out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;

  let mut written = Vec::with_capacity(files.len());
  for file in &files {
    let code = compile_file(file, options)?;
    let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("template");
    let target = out_dir.join(format!("{stem}.{extension}"));
    std::fs::write(&target, &code)
      .with_context(|| format!("failed to write {}", target.display()))?;
    log::debug!("{} -> {}", file.display(), target.display());
    written.push(target);
  }
  Ok(written)
}

/// Output directory for directory mode: `--out`, then `output.out_dir`
/// relative to the config file, then the input directory itself.
fn resolve_out_dir(
  out: Option<&Path>,
  config: &DotreactConfig,
  config_path: Option<&Path>,
  input: &Path,
) -> PathBuf {
  if let Some(out) = out {
    return out.to_path_buf();
  }
  match &config.output.out_dir {
    Some(dir) => {
      let base = config_path.and_then(Path::parent).unwrap_or_else(|| Path::new("."));
      base.join(dir)
    }
    None => input.to_path_buf(),
  }
}

pub fn run_compile(
  input: Option<&Path>,
  out: Option<&Path>,
  config: &DotreactConfig,
  config_path: Option<&Path>,
) -> Result<()> {
  let options = &config.generate;

  if let Some(dir) = input.filter(|p| p.is_dir()) {
    let out_dir = resolve_out_dir(out, config, config_path, dir);
    ui::banner("compile");
    ui::arrow(&format!("compiling {}", dir.display()));
    let written = compile_dir(dir, &out_dir, options, &config.output.extension)?;
    for target in &written {
      ui::ok(&target.display().to_string());
    }
    ui::blank();
    ui::detail(&format!("{} modules written to {}", written.len(), out_dir.display()));
    return Ok(());
  }

  let code = match input {
    Some(path) => compile_file(path, options)?,
    None => {
      let template = read_input(None)?;
      dotreact_compiler::generate_with_options(&template, options)
        .context("failed to compile stdin")?
    }
  };

  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, &code).with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!("{}  {} lines", path.display(), code.lines().count()));
    }
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(code.as_bytes()).context("failed to write stdout")?;
      stdout.write_all(b"\n").context("failed to write stdout")?;
    }
  }
  Ok(())
}
