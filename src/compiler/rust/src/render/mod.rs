/* src/compiler/rust/src/render/mod.rs */

mod attr;
mod helpers;
mod style;

use std::collections::BTreeSet;

use crate::ast::{Alternate, ConditionalBlock, Document, Element, IteratorBlock, Node};
use crate::error::{CompileError, Result};
use crate::options::GenerateOptions;

use helpers::{escape_jsx_text, js_string};

/// Output of the code generator before it is laid out as a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
  /// Expression returned by the generated function.
  pub markup: String,
  pub imports: Vec<String>,
  /// Root-level evaluated blocks, in source order.
  pub hoisted: Vec<String>,
}

impl Rendered {
  pub fn to_module(&self, options: &GenerateOptions) -> String {
    let indent = &options.indent;
    let mut out = String::new();
    for import in &self.imports {
      out.push_str(import);
      out.push('\n');
    }
    if !self.imports.is_empty() {
      out.push('\n');
    }
    out.push_str(&format!(
      "export default function {}({}) {{\n",
      options.function_name, options.parameter
    ));
    for statement in &self.hoisted {
      out.push_str(&format!("{indent}{statement}\n"));
    }
    if !self.hoisted.is_empty() {
      out.push('\n');
    }
    out.push_str(&format!("{indent}return {};\n}}", self.markup));
    out
  }
}

/// Where a node's output lands, which decides its bracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
  /// Sole content of the document.
  Root,
  /// Sole content of a conditional branch or iterator body.
  Bare,
  /// Between JSX tags, either as element content or inside a fragment.
  Markup,
}

fn wrap(expr: String, slot: Slot) -> String {
  match slot {
    Slot::Markup => format!("{{{expr}}}"),
    Slot::Root | Slot::Bare => expr,
  }
}

fn visible(nodes: &[Node]) -> Vec<&Node> {
  nodes.iter().filter(|n| !n.is_silent()).collect()
}

fn text_only(nodes: &[&Node]) -> Option<String> {
  nodes
    .iter()
    .map(|n| match n {
      Node::Text { value } => Some(value.as_str()),
      _ => None,
    })
    .collect()
}

struct Generator<'o> {
  options: &'o GenerateOptions,
  imports: BTreeSet<String>,
  hoisted: Vec<String>,
}

/// Render a parsed template into the pieces of a component module.
pub fn render(document: &Document, options: &GenerateOptions) -> Result<Rendered> {
  let mut generator = Generator { options, imports: BTreeSet::new(), hoisted: Vec::new() };
  let markup = generator.document(document)?;
  log::debug!(
    "rendered {} root nodes ({} hoisted, {} imports)",
    document.children.len(),
    generator.hoisted.len(),
    generator.imports.len()
  );
  Ok(Rendered {
    markup,
    imports: generator.imports.into_iter().collect(),
    hoisted: generator.hoisted,
  })
}

impl Generator<'_> {
  fn document(&mut self, document: &Document) -> Result<String> {
    let mut content = Vec::new();
    for node in visible(&document.children) {
      match node {
        Node::Evaluated { value } if content.is_empty() => self.hoisted.push(value.clone()),
        _ => content.push(node),
      }
    }
    match content.as_slice() {
      [] => Ok("null".to_string()),
      [only] => self.node(only, Slot::Root),
      many => Ok(format!("<>{}</>", self.sequence(many, Slot::Markup)?)),
    }
  }

  fn sequence(&mut self, nodes: &[&Node], slot: Slot) -> Result<String> {
    let mut out = String::new();
    for node in nodes {
      out.push_str(&self.node(node, slot)?);
    }
    Ok(out)
  }

  fn node(&mut self, node: &Node, slot: Slot) -> Result<String> {
    match node {
      Node::Element(element) => self.element(element),
      Node::Text { value } if slot == Slot::Markup => Ok(escape_jsx_text(value)),
      Node::Text { value } => Ok(js_string(value)),
      Node::Comment { .. } => Ok(String::new()),
      Node::Encoded { value } => Ok(wrap(value.clone(), slot)),
      Node::Interpolated { value } => Ok(wrap(self.parse_markup(value), slot)),
      Node::Conditional(block) => Ok(wrap(self.ternary(block)?, slot)),
      Node::Iterator(block) => {
        let expr = self.map_expression(block)?;
        // a bare `.map()` is not an element, so the document root keeps a fragment
        Ok(if slot == Slot::Root { format!("<>{{{expr}}}</>") } else { wrap(expr, slot) })
      }
      Node::Evaluated { value } => Err(CompileError::unsupported(format!(
        "evaluated block `{value}` is only allowed at the start of the template"
      ))),
      Node::Attribute(attribute) => Err(CompileError::unsupported(format!(
        "attribute `{}` outside of a tag",
        attribute.name
      ))),
    }
  }

  fn element(&mut self, element: &Element) -> Result<String> {
    let mut open = element.tag_name.clone();
    for node in visible(&element.attributes) {
      open.push(' ');
      open.push_str(&self.attribute_area_item(node)?);
    }
    let children = self.sequence(&visible(&element.children), Slot::Markup)?;
    Ok(format!("<{open}>{children}</{}>", element.tag_name))
  }

  /// `null`, a string literal, the single node bare, or a fragment.
  fn branch(&mut self, nodes: &[Node]) -> Result<String> {
    let nodes = visible(nodes);
    if nodes.is_empty() {
      return Ok("null".to_string());
    }
    if let Some(text) = text_only(&nodes) {
      return Ok(js_string(&text));
    }
    match nodes.as_slice() {
      [only] => self.node(only, Slot::Bare),
      many => Ok(format!("<>{}</>", self.sequence(many, Slot::Markup)?)),
    }
  }

  fn ternary(&mut self, block: &ConditionalBlock) -> Result<String> {
    let primary = self.branch(&block.children)?;
    let alternate = match &block.alternate {
      None => "null".to_string(),
      Some(Alternate::Else(nodes)) => self.branch(nodes)?,
      Some(Alternate::ElseIf(next)) => self.ternary(next)?,
    };
    Ok(format!("{} ? {primary} : {alternate}", block.test))
  }

  fn map_expression(&mut self, block: &IteratorBlock) -> Result<String> {
    let body = self.branch(&block.children)?;
    Ok(format!("{}?.map(({}) => ({body}))", block.iterated, iterator_params(block)))
  }

  fn parse_markup(&mut self, expr: &str) -> String {
    self.imports.insert(self.options.markup_import.clone());
    format!("{}({expr})", self.options.markup_parser)
  }
}

fn iterator_params(block: &IteratorBlock) -> String {
  match &block.index {
    Some(index) => format!("{}, {index}", block.item),
    None => block.item.clone(),
  }
}
