/* src/compiler/rust/src/lib.rs */

mod ast;
mod error;
mod options;
mod parser;
mod render;
mod serialize;
mod token;

#[cfg(test)]
mod tests;

pub use ast::{Alternate, Attribute, ConditionalBlock, Document, Element, IteratorBlock, Node};
pub use error::{CompileError, Result};
pub use options::GenerateOptions;
pub use render::{Rendered, render};
pub use token::{Event, Token, normalize_line_breaks, tokenize};

use parser::TreeBuilder;

/// Parse a doT template into a `Document`.
pub fn parse(template: &str) -> Result<Document> {
  let normalized = normalize_line_breaks(template);
  let tokens = tokenize(&normalized)?;
  log::debug!("tokenized {} bytes into {} events", normalized.len(), tokens.len());
  TreeBuilder::build(tokens)
}

/// Compile a doT template into a TSX module with the default function shape.
pub fn generate(template: &str) -> Result<String> {
  generate_with_options(template, &GenerateOptions::default())
}

pub fn generate_with_options(template: &str, options: &GenerateOptions) -> Result<String> {
  let document = parse(template)?;
  let rendered = render(&document, options)?;
  Ok(rendered.to_module(options))
}
