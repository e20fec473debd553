/* src/compiler/rust/src/parser.rs */

use crate::ast::{Alternate, Attribute, ConditionalBlock, Document, Element, IteratorBlock, Node};
use crate::error::{CompileError, Result};
use crate::token::{Event, Token};

enum Frame {
  Root(Vec<Node>),
  Element { element: Element, reading_attributes: bool, opened_at: usize },
  Attribute { attribute: Attribute, opened_at: usize },
  Iterator { block: IteratorBlock, opened_at: usize },
  Conditional {
    block: ConditionalBlock,
    collecting_alternate: bool,
    /// Else-if continuation: closes into the conditional below it.
    chained: bool,
    opened_at: usize,
  },
}

impl Frame {
  fn describe(&self) -> String {
    match self {
      Self::Root(_) => "document".to_string(),
      Self::Element { element, .. } => format!("<{}>", element.tag_name),
      Self::Attribute { attribute, .. } => format!("attribute `{}`", attribute.name),
      Self::Iterator { block, .. } => format!("iterator over `{}`", block.iterated),
      Self::Conditional { block, .. } => format!("conditional `{}`", block.test),
    }
  }

  fn opened_at(&self) -> usize {
    match self {
      Self::Root(_) => 0,
      Self::Element { opened_at, .. }
      | Self::Attribute { opened_at, .. }
      | Self::Iterator { opened_at, .. }
      | Self::Conditional { opened_at, .. } => *opened_at,
    }
  }
}

/// Parse-local frame stack turning the event stream into a `Document`.
pub(crate) struct TreeBuilder {
  stack: Vec<Frame>,
}

impl TreeBuilder {
  pub(crate) fn new() -> Self {
    Self { stack: vec![Frame::Root(Vec::new())] }
  }

  pub(crate) fn build(tokens: Vec<Token>) -> Result<Document> {
    let mut builder = Self::new();
    for token in tokens {
      builder.feed(token)?;
    }
    builder.finish()
  }

  fn top(&mut self) -> &mut Frame {
    let last = self.stack.len() - 1;
    &mut self.stack[last]
  }

  pub(crate) fn feed(&mut self, token: Token) -> Result<()> {
    log::trace!("{:>6} {:?}", token.offset, token.event);
    let offset = token.offset;
    match token.event {
      Event::OpenTag(tag_name) => {
        let element = Element { tag_name, attributes: Vec::new(), children: Vec::new() };
        self.stack.push(Frame::Element { element, reading_attributes: false, opened_at: offset });
      }
      Event::StartAttributes => self.set_reading_attributes(true, offset)?,
      Event::StopAttributes => self.set_reading_attributes(false, offset)?,
      Event::CloseTag(name) => {
        self.expect_top(offset, &format!("</{name}>"), |f| matches!(f, Frame::Element { .. }))?;
        if let Frame::Element { element, .. } = self.top()
          && !element.tag_name.eq_ignore_ascii_case(&name)
        {
          return Err(CompileError::structural(
            offset,
            format!("</{name}> does not match <{}>", element.tag_name),
          ));
        }
        self.close_top(offset)?;
      }
      Event::OpenAttribute(name) => {
        let attribute = Attribute { name, children: Vec::new() };
        self.stack.push(Frame::Attribute { attribute, opened_at: offset });
      }
      Event::CloseAttribute => {
        self.expect_top(offset, "end of attribute value", |f| matches!(f, Frame::Attribute { .. }))?;
        self.close_top(offset)?;
      }
      Event::Text(value) => self.place(Node::Text { value }, offset)?,
      Event::Comment(value) => self.place(Node::Comment { value }, offset)?,
      Event::Encoded(value) => self.place(Node::Encoded { value }, offset)?,
      Event::Interpolated(value) => self.place(Node::Interpolated { value }, offset)?,
      Event::Evaluated(value) => self.place(Node::Evaluated { value }, offset)?,
      Event::OpenIterator { iterated, item, index } => {
        let block = IteratorBlock { iterated, item, index, children: Vec::new() };
        self.stack.push(Frame::Iterator { block, opened_at: offset });
      }
      Event::CloseIterator => {
        self.expect_top(offset, "{{~}}", |f| matches!(f, Frame::Iterator { .. }))?;
        self.close_top(offset)?;
      }
      Event::OpenConditional(test) => self.push_conditional(test, false, offset),
      Event::ElseIf(test) => {
        self.expect_conditional(offset, "{{?? ... }}")?;
        self.push_conditional(test, true, offset);
      }
      Event::Else => {
        self.expect_conditional(offset, "{{??}}")?;
        if let Frame::Conditional { collecting_alternate, .. } = self.top() {
          *collecting_alternate = true;
        }
      }
      Event::CloseConditional => {
        self.expect_top(offset, "{{?}}", |f| matches!(f, Frame::Conditional { .. }))?;
        self.close_top(offset)?;
      }
    }
    Ok(())
  }

  pub(crate) fn finish(mut self) -> Result<Document> {
    if self.stack.len() > 1 {
      let open = self.top();
      return Err(CompileError::structural(
        open.opened_at(),
        format!("{} is never closed", open.describe()),
      ));
    }
    match self.stack.pop() {
      Some(Frame::Root(children)) => Ok(Document { children }),
      _ => Err(CompileError::structural(0, "frame stack lost its root")),
    }
  }

  fn push_conditional(&mut self, test: String, chained: bool, offset: usize) {
    let block = ConditionalBlock { test, children: Vec::new(), alternate: None };
    self.stack.push(Frame::Conditional {
      block,
      collecting_alternate: false,
      chained,
      opened_at: offset,
    });
  }

  fn set_reading_attributes(&mut self, value: bool, offset: usize) -> Result<()> {
    let what = if value { "start of attributes" } else { "end of tag" };
    self.expect_top(offset, what, |f| matches!(f, Frame::Element { .. }))?;
    if let Frame::Element { reading_attributes, .. } = self.top() {
      *reading_attributes = value;
    }
    Ok(())
  }

  fn expect_top(&mut self, offset: usize, what: &str, ok: impl Fn(&Frame) -> bool) -> Result<()> {
    if self.stack.len() == 1 {
      return Err(CompileError::structural(offset, format!("unexpected {what}, nothing is open")));
    }
    let top = self.top();
    if ok(top) {
      Ok(())
    } else {
      Err(CompileError::structural(
        offset,
        format!("unexpected {what} while {} is open", top.describe()),
      ))
    }
  }

  fn expect_conditional(&mut self, offset: usize, what: &str) -> Result<()> {
    match self.top() {
      Frame::Conditional { collecting_alternate: false, .. } => Ok(()),
      Frame::Conditional { block, .. } => Err(CompileError::structural(
        offset,
        format!("unexpected {what}: conditional `{}` already has an else branch", block.test),
      )),
      other => Err(CompileError::structural(
        offset,
        format!("unexpected {what} while {} is open", other.describe()),
      )),
    }
  }

  /// Pop the current frame (and any else-if chain under it) and place the
  /// finished node into its parent.
  fn close_top(&mut self, offset: usize) -> Result<()> {
    let Some(frame) = self.stack.pop() else {
      return Err(CompileError::structural(offset, "frame stack is empty"));
    };
    let node = match frame {
      Frame::Root(_) => return Err(CompileError::structural(offset, "frame stack is empty")),
      Frame::Element { element, .. } => Node::Element(element),
      Frame::Attribute { attribute, .. } => Node::Attribute(attribute),
      Frame::Iterator { block, .. } => Node::Iterator(block),
      Frame::Conditional { mut block, mut chained, .. } => {
        while chained {
          match self.stack.pop() {
            Some(Frame::Conditional { block: mut head, chained: head_chained, .. }) => {
              head.alternate = Some(Alternate::ElseIf(Box::new(block)));
              block = head;
              chained = head_chained;
            }
            _ => return Err(CompileError::structural(offset, "else-if without its conditional")),
          }
        }
        Node::Conditional(block)
      }
    };
    self.place(node, offset)
  }

  fn place(&mut self, node: Node, offset: usize) -> Result<()> {
    let in_attribute_area = matches!(
      node,
      Node::Attribute(_)
        | Node::Encoded { .. }
        | Node::Interpolated { .. }
        | Node::Evaluated { .. }
        | Node::Iterator(_)
        | Node::Conditional(_)
    );
    match self.top() {
      Frame::Root(children) => children.push(node),
      Frame::Conditional { block, collecting_alternate: true, .. } => {
        match block.alternate.get_or_insert_with(|| Alternate::Else(Vec::new())) {
          Alternate::Else(nodes) => nodes.push(node),
          Alternate::ElseIf(_) => {
            return Err(CompileError::structural(offset, "else branch after else-if"));
          }
        }
      }
      Frame::Conditional { block, .. } => block.children.push(node),
      Frame::Element { element, reading_attributes: true, .. } if in_attribute_area => {
        element.attributes.push(node);
      }
      Frame::Element { element, .. } => element.children.push(node),
      Frame::Attribute { attribute, .. } => {
        if matches!(node, Node::Element(_) | Node::Attribute(_)) {
          return Err(CompileError::structural(
            offset,
            format!("{} inside the value of attribute `{}`", node.kind(), attribute.name),
          ));
        }
        attribute.children.push(node);
      }
      Frame::Iterator { block, .. } => block.children.push(node),
    }
    Ok(())
  }
}
