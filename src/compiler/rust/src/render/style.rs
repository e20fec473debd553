/* src/compiler/rust/src/render/style.rs */

use serde_json::{Map, Value};

use crate::ast::{Alternate, Attribute, ConditionalBlock, Node};
use crate::error::{CompileError, Result};

use super::Generator;
use super::helpers::{escape_template, js_string, style_property_name};

/// Parse `a: b; c: d` into an ordered style object.
fn literal_declarations(text: &str) -> Map<String, Value> {
  let mut map = Map::new();
  for declaration in text.split(';') {
    let Some((property, value)) = declaration.split_once(':') else { continue };
    let value = value.trim();
    let key = style_property_name(property);
    if key.is_empty() || value.is_empty() {
      continue;
    }
    map.insert(key, Value::String(value.to_string()));
  }
  map
}

enum Piece {
  Literal(String),
  /// Already rendered `${..}` substitution.
  Substitution(String),
}

/// A `property: value` declaration being scanned across value parts.
#[derive(Default)]
struct Declaration {
  property: String,
  value: Vec<Piece>,
  in_value: bool,
}

impl Declaration {
  fn push_char(&mut self, c: char) {
    if !self.in_value {
      self.property.push(c);
    } else if let Some(Piece::Literal(s)) = self.value.last_mut() {
      s.push(c);
    } else {
      self.value.push(Piece::Literal(c.to_string()));
    }
  }

  fn push_substitution(&mut self, fragment: String) {
    self.value.push(Piece::Substitution(fragment));
  }

  /// Flush into `entries`; declarations without a property or value vanish.
  fn finish(&mut self, entries: &mut Vec<String>) {
    let Declaration { property, value, .. } = std::mem::take(self);
    let property = property.trim();
    if property.is_empty() {
      return;
    }
    let dynamic = value.iter().any(|p| matches!(p, Piece::Substitution(_)));
    let rendered = if dynamic {
      let body: String = value
        .iter()
        .map(|p| match p {
          Piece::Literal(s) => escape_template(s),
          Piece::Substitution(s) => s.clone(),
        })
        .collect();
      format!("`{}`", body.trim())
    } else {
      let text: String = value
        .iter()
        .filter_map(|p| match p {
          Piece::Literal(s) => Some(s.as_str()),
          Piece::Substitution(_) => None,
        })
        .collect();
      let text = text.trim();
      if text.is_empty() {
        return;
      }
      js_string(text)
    };
    entries.push(format!("{}: {rendered}", js_string(&style_property_name(property))));
  }
}

impl Generator<'_> {
  /// React style object for a `style` attribute.
  pub(super) fn style_object(&mut self, attribute: &Attribute) -> Result<String> {
    let parts = attribute.children.as_slice();
    let literal: Option<String> = parts
      .iter()
      .map(|n| match n {
        Node::Text { value } => Some(value.as_str()),
        _ => None,
      })
      .collect();
    if let Some(text) = literal {
      let map = literal_declarations(&text);
      if map.is_empty() {
        return Err(CompileError::style(format!("`style` value {text:?} has no declarations")));
      }
      return Ok(Value::Object(map).to_string());
    }
    let entries = self.style_entries(parts)?;
    if entries.is_empty() {
      return Err(CompileError::style("`style` value has no declarations"));
    }
    Ok(format!("{{ {} }}", entries.join(", ")))
  }

  fn style_entries(&mut self, parts: &[Node]) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut declaration = Declaration::default();
    for part in parts {
      match part {
        Node::Text { value } => {
          for c in value.chars() {
            match c {
              ';' => declaration.finish(&mut entries),
              ':' if !declaration.in_value => declaration.in_value = true,
              _ => declaration.push_char(c),
            }
          }
        }
        Node::Encoded { value } | Node::Interpolated { value } => {
          if !declaration.in_value {
            return Err(CompileError::style(format!(
              "dynamic property name `{value}` in style"
            )));
          }
          declaration.push_substitution(format!("${{{value}}}"));
        }
        Node::Conditional(block) if declaration.in_value => {
          let fragment = self.compose_conditional(block)?;
          declaration.push_substitution(fragment);
        }
        Node::Conditional(block) => {
          if !declaration.property.trim().is_empty() {
            return Err(CompileError::style(format!(
              "conditional `{}` inside a style property name",
              block.test
            )));
          }
          entries.push(format!("...({})", self.style_spread(block)?));
        }
        Node::Iterator(block) => {
          return Err(CompileError::unsupported(format!(
            "iterator over `{}` inside a style attribute",
            block.iterated
          )));
        }
        other => {
          return Err(CompileError::unsupported(format!(
            "{} inside a style attribute",
            other.kind()
          )));
        }
      }
    }
    declaration.finish(&mut entries);
    Ok(entries)
  }

  /// `test ? { .. } : { .. }` for conditionals wrapping whole declarations.
  fn style_spread(&mut self, block: &ConditionalBlock) -> Result<String> {
    let primary = self.style_branch(&block.children)?;
    let alternate = match &block.alternate {
      None => "{}".to_string(),
      Some(Alternate::Else(nodes)) => self.style_branch(nodes)?,
      Some(Alternate::ElseIf(next)) => format!("({})", self.style_spread(next)?),
    };
    Ok(format!("{} ? {primary} : {alternate}", block.test))
  }

  fn style_branch(&mut self, nodes: &[Node]) -> Result<String> {
    let entries = self.style_entries(nodes)?;
    Ok(if entries.is_empty() { "{}".to_string() } else { format!("{{ {} }}", entries.join(", ")) })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn literal_declarations_keep_source_order() {
    let map = literal_declarations("color: red; background-color: green;; display:none; bad");
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["color", "backgroundColor", "display"]);
  }

  #[test]
  fn literal_declarations_keep_colons_in_values() {
    let map = literal_declarations("background: url(http://x/y.png)");
    assert_eq!(map["background"], "url(http://x/y.png)");
  }

  #[test]
  fn declaration_without_value_vanishes() {
    let mut entries = Vec::new();
    let mut declaration = Declaration::default();
    for c in "color: ".chars() {
      if c == ':' {
        declaration.in_value = true;
      } else {
        declaration.push_char(c);
      }
    }
    declaration.finish(&mut entries);
    assert!(entries.is_empty());
  }
}
