/* src/compiler/rust/src/ast.rs */

use serde::Serialize;

/// Whole parsed template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "root")]
pub struct Document {
  pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
  #[serde(rename = "element")]
  Element(Element),
  #[serde(rename = "attribute")]
  Attribute(Attribute),
  #[serde(rename = "text")]
  Text { value: String },
  #[serde(rename = "comment")]
  Comment { value: String },
  /// `{{! expr }}`
  #[serde(rename = "dotEncoded")]
  Encoded { value: String },
  /// `{{= expr }}`
  #[serde(rename = "dotInterpolated")]
  Interpolated { value: String },
  /// `{{ statements }}`
  #[serde(rename = "dotEvaluated")]
  Evaluated { value: String },
  #[serde(rename = "dotIterator")]
  Iterator(IteratorBlock),
  #[serde(rename = "dotConditional")]
  Conditional(ConditionalBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
  pub tag_name: String,
  /// Attributes plus directives wrapping whole attributes.
  pub attributes: Vec<Node>,
  pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
  pub name: String,
  /// Value parts; empty for a boolean attribute.
  pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IteratorBlock {
  #[serde(rename = "iteratedVariableName")]
  pub iterated: String,
  #[serde(rename = "currentIterationVariableName")]
  pub item: String,
  #[serde(rename = "currentIterationIndexVariableName", skip_serializing_if = "Option::is_none")]
  pub index: Option<String>,
  pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalBlock {
  pub test: String,
  pub children: Vec<Node>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub alternate: Option<Alternate>,
}

/// Else branch of a conditional: plain nodes, or a chained else-if.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Alternate {
  Else(Vec<Node>),
  ElseIf(Box<ConditionalBlock>),
}

impl Node {
  pub fn text(value: impl Into<String>) -> Self {
    Self::Text { value: value.into() }
  }

  /// Text made only of whitespace; skipped by the generator.
  pub fn is_blank(&self) -> bool {
    matches!(self, Self::Text { value } if value.trim().is_empty())
  }

  /// Nodes that produce no output of their own.
  pub(crate) fn is_silent(&self) -> bool {
    self.is_blank() || matches!(self, Self::Comment { .. })
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Element(_) => "element",
      Self::Attribute(_) => "attribute",
      Self::Text { .. } => "text",
      Self::Comment { .. } => "comment",
      Self::Encoded { .. } => "escaped expression",
      Self::Interpolated { .. } => "interpolated expression",
      Self::Evaluated { .. } => "evaluated block",
      Self::Iterator(_) => "iterator",
      Self::Conditional(_) => "conditional",
    }
  }
}

impl ConditionalBlock {
  /// Number of `test` expressions along the else-if chain, this one included.
  pub fn chain_len(&self) -> usize {
    match &self.alternate {
      Some(Alternate::ElseIf(next)) => 1 + next.chain_len(),
      _ => 1,
    }
  }
}
