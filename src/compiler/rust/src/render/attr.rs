/* src/compiler/rust/src/render/attr.rs */

use crate::ast::{Alternate, Attribute, ConditionalBlock, IteratorBlock, Node};
use crate::error::{CompileError, Result};

use super::helpers::{escape_template, js_string, jsx_attribute_name, object_key};
use super::{Generator, iterator_params, visible};

fn is_style(attribute: &Attribute) -> bool {
  attribute.name.eq_ignore_ascii_case("style")
}

fn literal_value(parts: &[Node]) -> Option<String> {
  parts
    .iter()
    .map(|n| match n {
      Node::Text { value } => Some(value.as_str()),
      _ => None,
    })
    .collect()
}

impl Generator<'_> {
  /// One entry of an element's attribute area, in JSX attribute position.
  pub(super) fn attribute_area_item(&mut self, node: &Node) -> Result<String> {
    match node {
      Node::Attribute(attribute) => self.jsx_attribute(attribute),
      // whole attributes under a directive become a conditional object spread
      Node::Conditional(block) => Ok(format!("{{...({})}}", self.spread_ternary(block)?)),
      Node::Encoded { value } => Ok(format!("{{...{value}}}")),
      Node::Iterator(block) => Err(CompileError::unsupported(format!(
        "iterator over `{}` cannot wrap attributes",
        block.iterated
      ))),
      other => Err(CompileError::unsupported(format!("{} in attribute position", other.kind()))),
    }
  }

  fn jsx_attribute(&mut self, attribute: &Attribute) -> Result<String> {
    let name = jsx_attribute_name(&attribute.name);
    if is_style(attribute) {
      return Ok(format!("style={{{}}}", self.style_object(attribute)?));
    }
    let parts = attribute.children.as_slice();
    if parts.is_empty() {
      return Ok(name.to_string());
    }
    if let Some(text) = literal_value(parts) {
      return Ok(if text.contains('"') {
        format!("{name}={{{}}}", js_string(&text))
      } else {
        format!("{name}=\"{text}\"")
      });
    }
    match parts {
      [Node::Encoded { value } | Node::Interpolated { value }] => Ok(format!("{name}={{{value}}}")),
      _ => Ok(format!("{name}={{{}}}", self.template_literal(parts)?)),
    }
  }

  /// `test ? {..} : {..}` selecting between attribute objects.
  fn spread_ternary(&mut self, block: &ConditionalBlock) -> Result<String> {
    let primary = self.object_literal(&block.children)?;
    let alternate = match &block.alternate {
      None => "{}".to_string(),
      Some(Alternate::Else(nodes)) => self.object_literal(nodes)?,
      Some(Alternate::ElseIf(next)) => format!("({})", self.spread_ternary(next)?),
    };
    Ok(format!("{} ? {primary} : {alternate}", block.test))
  }

  fn object_literal(&mut self, nodes: &[Node]) -> Result<String> {
    let mut entries = Vec::new();
    for node in visible(nodes) {
      entries.push(self.object_entry(node)?);
    }
    Ok(format!("{{{}}}", entries.join(", ")))
  }

  fn object_entry(&mut self, node: &Node) -> Result<String> {
    match node {
      Node::Attribute(attribute) => {
        let key = object_key(jsx_attribute_name(&attribute.name));
        let value = if is_style(attribute) {
          self.style_object(attribute)?
        } else if attribute.children.is_empty() {
          "true".to_string()
        } else {
          self.value_expression(&attribute.children)?
        };
        Ok(format!("{key}: {value}"))
      }
      Node::Conditional(block) => Ok(format!("...({})", self.spread_ternary(block)?)),
      Node::Encoded { value } => Ok(format!("...{value}")),
      Node::Iterator(block) => Err(CompileError::unsupported(format!(
        "iterator over `{}` cannot wrap attributes",
        block.iterated
      ))),
      other => Err(CompileError::unsupported(format!("{} in attribute position", other.kind()))),
    }
  }

  /// Attribute value as a JS expression, for key/value composition.
  fn value_expression(&mut self, parts: &[Node]) -> Result<String> {
    if let Some(text) = literal_value(parts) {
      return Ok(js_string(&text));
    }
    match parts {
      [Node::Encoded { value } | Node::Interpolated { value }] => Ok(value.clone()),
      [Node::Conditional(block)] => self.value_ternary(block),
      _ => self.template_literal(parts),
    }
  }

  fn value_ternary(&mut self, block: &ConditionalBlock) -> Result<String> {
    let primary = self.value_branch(&block.children)?;
    let alternate = match &block.alternate {
      None => "null".to_string(),
      Some(Alternate::Else(nodes)) => self.value_branch(nodes)?,
      Some(Alternate::ElseIf(next)) => self.value_ternary(next)?,
    };
    Ok(format!("{} ? {primary} : {alternate}", block.test))
  }

  fn value_branch(&mut self, parts: &[Node]) -> Result<String> {
    if parts.is_empty() { Ok("null".to_string()) } else { self.value_expression(parts) }
  }

  pub(super) fn template_literal(&mut self, parts: &[Node]) -> Result<String> {
    Ok(format!("`{}`", self.compose(parts)?))
  }

  /// Body of a template literal: literal text verbatim, dynamic parts as `${..}`.
  fn compose(&mut self, parts: &[Node]) -> Result<String> {
    let mut out = String::new();
    for part in parts {
      match part {
        Node::Text { value } => out.push_str(&escape_template(value)),
        Node::Encoded { value } | Node::Interpolated { value } => {
          out.push_str(&format!("${{{value}}}"));
        }
        Node::Conditional(block) => out.push_str(&self.compose_conditional(block)?),
        Node::Iterator(block) => out.push_str(&self.compose_iterator(block)?),
        Node::Evaluated { value } => {
          return Err(CompileError::unsupported(format!(
            "evaluated block `{value}` inside an attribute value"
          )));
        }
        Node::Element(_) | Node::Attribute(_) | Node::Comment { .. } => {
          return Err(CompileError::unsupported(format!(
            "{} inside an attribute value",
            part.kind()
          )));
        }
      }
    }
    Ok(out)
  }

  pub(super) fn compose_conditional(&mut self, block: &ConditionalBlock) -> Result<String> {
    let primary = self.compose(&block.children)?;
    let alternate = match &block.alternate {
      None => String::new(),
      Some(Alternate::Else(nodes)) => self.compose(nodes)?,
      Some(Alternate::ElseIf(next)) => self.compose_conditional(next)?,
    };
    Ok(format!("${{{} ? `{primary}` : `{alternate}`}}", block.test))
  }

  fn compose_iterator(&mut self, block: &IteratorBlock) -> Result<String> {
    let body = self.compose(&block.children)?;
    Ok(format!(
      "${{{}?.map(({}) => `{body}`).join(\"\") ?? \"\"}}",
      block.iterated,
      iterator_params(block)
    ))
  }
}
