/* src/cli/core/src/main.rs */

mod check;
mod compile;
mod config;
mod inspect;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use config::resolve_config;

#[derive(Parser)]
#[command(name = "dotreact", about = "Compile doT templates into React components", version)]
struct Cli {
  /// Increase log verbosity (-v debug, -vv trace)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Compile a template (or a directory of templates) into TSX
  Compile {
    /// Template file or directory; reads stdin if omitted
    input: Option<PathBuf>,
    /// Output file, or output directory when INPUT is a directory
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Path to dotreact.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the parsed template tree as JSON
  Ast {
    /// Template file; reads stdin if omitted
    input: Option<PathBuf>,
    /// Single-line JSON
    #[arg(long)]
    compact: bool,
  },
  /// Compile templates without writing output and report failures
  Check {
    /// Template files or directories
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Path to dotreact.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

fn init_logger(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logger(cli.verbose);
  let cwd = std::env::current_dir().context("failed to get cwd")?;

  match cli.command {
    Command::Compile { input, out, config } => {
      let (config_path, config) = resolve_config(config.as_deref(), &cwd)?;
      compile::run_compile(input.as_deref(), out.as_deref(), &config, config_path.as_deref())?;
    }
    Command::Ast { input, compact } => {
      inspect::run_ast(input.as_deref(), compact)?;
    }
    Command::Check { inputs, config } => {
      let (_, config) = resolve_config(config.as_deref(), &cwd)?;
      let failed = check::run_check(&inputs, &config.generate)?;
      if failed > 0 {
        std::process::exit(1);
      }
    }
  }

  Ok(())
}
