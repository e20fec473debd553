/* src/compiler/rust/src/serialize.rs */

use crate::ast::{Alternate, Attribute, ConditionalBlock, Document, Node};
use crate::token::is_void_element;

impl Document {
  /// Template text that parses back into an equal `Document`.
  pub fn to_template(&self) -> String {
    let mut out = String::new();
    write_nodes(&mut out, &self.children);
    out
  }
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
  for node in nodes {
    write_node(out, node);
  }
}

/// Attribute-area nodes, each preceded by a space.
fn write_attribute_area(out: &mut String, nodes: &[Node]) {
  for node in nodes {
    out.push(' ');
    write_node(out, node);
  }
}

fn write_node(out: &mut String, node: &Node) {
  match node {
    Node::Element(element) => {
      out.push('<');
      out.push_str(&element.tag_name);
      write_attribute_area(out, &element.attributes);
      if element.children.is_empty() && is_void_element(&element.tag_name) {
        out.push_str("/>");
        return;
      }
      out.push('>');
      write_nodes(out, &element.children);
      out.push_str(&format!("</{}>", element.tag_name));
    }
    Node::Attribute(attribute) => write_attribute(out, attribute),
    Node::Text { value } => out.push_str(value),
    Node::Comment { value } => out.push_str(&format!("<!--{value}-->")),
    Node::Encoded { value } => out.push_str(&format!("{{{{! {value} }}}}")),
    Node::Interpolated { value } => out.push_str(&format!("{{{{= {value} }}}}")),
    Node::Evaluated { value } => out.push_str(&format!("{{{{ {value} }}}}")),
    Node::Iterator(block) => {
      out.push_str(&format!("{{{{~ {} :{}", block.iterated, block.item));
      if let Some(index) = &block.index {
        out.push_str(&format!(":{index}"));
      }
      out.push_str(" }}");
      write_children(out, &block.children);
      out.push_str("{{~}}");
    }
    Node::Conditional(block) => {
      out.push_str(&format!("{{{{? {} }}}}", block.test));
      write_branches(out, block);
      out.push_str("{{?}}");
    }
  }
}

fn write_branches(out: &mut String, block: &ConditionalBlock) {
  write_children(out, &block.children);
  match &block.alternate {
    None => {}
    Some(Alternate::Else(nodes)) => {
      out.push_str("{{??}}");
      write_children(out, nodes);
    }
    Some(Alternate::ElseIf(next)) => {
      out.push_str(&format!("{{{{?? {} }}}}", next.test));
      write_branches(out, next);
    }
  }
}

/// Directive bodies inside a tag hold attributes and need separators.
fn write_children(out: &mut String, nodes: &[Node]) {
  if nodes.iter().any(|n| matches!(n, Node::Attribute(_))) {
    write_attribute_area(out, nodes);
  } else {
    write_nodes(out, nodes);
  }
}

fn write_attribute(out: &mut String, attribute: &Attribute) {
  out.push_str(&attribute.name);
  if attribute.children.is_empty() {
    return;
  }
  let has_double_quote =
    attribute.children.iter().any(|n| matches!(n, Node::Text { value } if value.contains('"')));
  let quote = if has_double_quote { '\'' } else { '"' };
  out.push('=');
  out.push(quote);
  write_nodes(out, &attribute.children);
  out.push(quote);
}
