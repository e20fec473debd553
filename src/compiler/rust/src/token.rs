/* src/compiler/rust/src/token.rs */

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{CompileError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  OpenTag(String),
  CloseTag(String),
  /// Start of the attribute region after a tag name.
  StartAttributes,
  /// `>` or `/>` ending the attribute region.
  StopAttributes,
  OpenAttribute(String),
  CloseAttribute,
  Text(String),
  Comment(String),
  Encoded(String),
  Interpolated(String),
  Evaluated(String),
  OpenIterator { iterated: String, item: String, index: Option<String> },
  CloseIterator,
  OpenConditional(String),
  ElseIf(String),
  Else,
  CloseConditional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub event: Event,
  pub offset: usize,
}

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

pub(crate) fn is_void_element(tag: &str) -> bool {
  VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Collapse whitespace runs containing a line break into one space, or drop
/// them entirely between `>` and `<`.
pub fn normalize_line_breaks(template: &str) -> String {
  static RE: OnceLock<Regex> = OnceLock::new();
  let re = RE.get_or_init(|| Regex::new(r"(>?)[ \t]*(?:\r\n|\r|\n)\s*(<?)").unwrap());
  re.replace_all(template, |caps: &Captures| {
    let gt = &caps[1];
    let lt = &caps[2];
    if !gt.is_empty() && !lt.is_empty() { "><".to_string() } else { format!("{gt} {lt}") }
  })
  .into_owned()
}

/// Scan already-normalized template text into events.
pub fn tokenize(template: &str) -> Result<Vec<Token>> {
  Tokenizer::new(template).run()
}

struct TagState {
  name: String,
  /// Quote character of the attribute value being read.
  quote: Option<char>,
}

struct Tokenizer<'a> {
  src: &'a str,
  pos: usize,
  tag: Option<TagState>,
  tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
  fn new(src: &'a str) -> Self {
    Self { src, pos: 0, tag: None, tokens: Vec::new() }
  }

  fn emit(&mut self, event: Event, offset: usize) {
    self.tokens.push(Token { event, offset });
  }

  fn rest(&self) -> &'a str {
    &self.src[self.pos..]
  }

  fn find_from(&self, from: usize, needle: &str) -> Option<usize> {
    self.src[from..].find(needle).map(|rel| from + rel)
  }

  fn run(mut self) -> Result<Vec<Token>> {
    while self.pos < self.src.len() {
      match self.tag.as_ref().map(|t| t.quote) {
        Some(Some(quote)) => self.scan_value(quote)?,
        Some(None) => self.scan_tag()?,
        None => self.scan_content()?,
      }
    }
    if let Some(tag) = &self.tag {
      let what = if tag.quote.is_some() { "attribute value" } else { "start tag" };
      return Err(CompileError::lex(self.pos, format!("unterminated {what} in <{}>", tag.name)));
    }
    Ok(self.tokens)
  }

  fn scan_content(&mut self) -> Result<()> {
    let rest = self.rest();
    let start = self.pos;

    if let Some(after) = rest.strip_prefix("</") {
      let end = after
        .find('>')
        .ok_or_else(|| CompileError::lex(start, "unterminated closing tag"))?;
      let name = after[..end].trim();
      if !is_void_element(name) {
        self.emit(Event::CloseTag(name.to_string()), start);
      }
      self.pos = start + 2 + end + 1;
    } else if rest.starts_with("<!--") {
      let end = self
        .find_from(start + 4, "-->")
        .ok_or_else(|| CompileError::lex(start, "unterminated comment"))?;
      self.emit(Event::Comment(self.src[start + 4..end].to_string()), start);
      self.pos = end + 3;
    } else if let Some(after) = rest.strip_prefix("<!") {
      let end = after
        .find('>')
        .ok_or_else(|| CompileError::lex(start, "unterminated markup declaration"))?;
      self.emit(Event::Comment(after[..end].to_string()), start);
      self.pos = start + 2 + end + 1;
    } else if rest.starts_with("<{{") {
      return Err(CompileError::lex(start, "dynamic tag names are not supported"));
    } else if rest.starts_with('<') && rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
      let name_len = rest[1..]
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len() - 1);
      let name = rest[1..1 + name_len].to_string();
      self.emit(Event::OpenTag(name.clone()), start);
      self.emit(Event::StartAttributes, start + 1 + name_len);
      self.tag = Some(TagState { name, quote: None });
      self.pos = start + 1 + name_len;
    } else if rest.starts_with("{{") {
      self.scan_directive()?;
    } else {
      // the first character is always text, even a lone `<`
      let first = rest.chars().next().map_or(1, char::len_utf8);
      let end = self.text_end(start + first, &["{{", "<"]);
      self.emit(Event::Text(self.src[start..end].to_string()), start);
      self.pos = end;
    }
    Ok(())
  }

  fn scan_tag(&mut self) -> Result<()> {
    let rest = self.rest();
    let start = self.pos;
    let Some(c) = rest.chars().next() else { return Ok(()) };

    if rest.starts_with("/>") {
      self.finish_tag(start, true);
      self.pos += 2;
    } else if c == '>' {
      self.finish_tag(start, false);
      self.pos += 1;
    } else if rest.starts_with("{{") {
      self.scan_directive()?;
    } else if c.is_whitespace() {
      self.pos += c.len_utf8();
    } else if is_attribute_name_char(c) {
      let name_len = rest.find(|c: char| !is_attribute_name_char(c)).unwrap_or(rest.len());
      let name = rest[..name_len].to_string();
      let after = &rest[name_len..];
      self.emit(Event::OpenAttribute(name), start);
      if let Some(quote) = after.strip_prefix('=').and_then(|v| v.chars().next()) {
        if quote != '"' && quote != '\'' {
          return Err(CompileError::lex(
            start + name_len,
            "attribute values must be quoted with \" or '",
          ));
        }
        if let Some(tag) = self.tag.as_mut() {
          tag.quote = Some(quote);
        }
        self.pos = start + name_len + 2;
      } else if after.starts_with('=') {
        return Err(CompileError::lex(start + name_len, "missing attribute value"));
      } else {
        self.emit(Event::CloseAttribute, start + name_len);
        self.pos = start + name_len;
      }
    } else {
      return Err(CompileError::lex(start, format!("unexpected character `{c}` inside a tag")));
    }
    Ok(())
  }

  fn scan_value(&mut self, quote: char) -> Result<()> {
    let rest = self.rest();
    let start = self.pos;

    if rest.starts_with("{{") {
      self.scan_directive()?;
    } else if rest.starts_with(quote) {
      self.emit(Event::CloseAttribute, start);
      if let Some(tag) = self.tag.as_mut() {
        tag.quote = None;
      }
      self.pos += 1;
    } else {
      let mut buf = [0u8; 4];
      let quote: &str = quote.encode_utf8(&mut buf);
      let end = self.text_end(start, &["{{", quote]);
      self.emit(Event::Text(self.src[start..end].to_string()), start);
      self.pos = end;
    }
    Ok(())
  }

  fn finish_tag(&mut self, offset: usize, self_closing: bool) {
    self.emit(Event::StopAttributes, offset);
    if let Some(tag) = self.tag.take() {
      if self_closing || is_void_element(&tag.name) {
        self.emit(Event::CloseTag(tag.name), offset);
      }
    }
  }

  /// Nearest occurrence of any terminator at or after `from`, else end of input.
  fn text_end(&self, from: usize, terminators: &[&str]) -> usize {
    terminators.iter().filter_map(|t| self.find_from(from, t)).min().unwrap_or(self.src.len())
  }

  fn scan_directive(&mut self) -> Result<()> {
    let start = self.pos;
    let close = self
      .find_from(start + 2, "}}")
      .ok_or_else(|| CompileError::lex(start, "unterminated directive, missing `}}`"))?;
    let block = &self.src[start..close + 2];
    let event = parse_directive(block, start)?;
    self.emit(event, start);
    self.pos = close + 2;
    Ok(())
  }
}

fn is_attribute_name_char(c: char) -> bool {
  c.is_alphanumeric() || matches!(c, '-' | '_' | ':')
}

/// Classify a complete `{{ ... }}` block by its sigil.
fn parse_directive(block: &str, offset: usize) -> Result<Event> {
  static CONDITIONAL: OnceLock<Regex> = OnceLock::new();
  static ITERATOR: OnceLock<Regex> = OnceLock::new();

  let body = &block[2..block.len() - 2];
  let non_empty = |value: &str, what: &str| {
    let value = value.trim();
    if value.is_empty() {
      Err(CompileError::lex(offset, format!("empty {what} directive")))
    } else {
      Ok(value.to_string())
    }
  };

  if let Some(expr) = body.strip_prefix('=') {
    return Ok(Event::Interpolated(non_empty(expr, "interpolate")?));
  }
  if let Some(expr) = body.strip_prefix('!') {
    return Ok(Event::Encoded(non_empty(expr, "escape")?));
  }
  if body.starts_with('?') {
    let re = CONDITIONAL
      .get_or_init(|| Regex::new(r"^\{\{\?(\?)?\s*([\s\S]*?)\s*\}\}$").unwrap());
    let caps =
      re.captures(block).ok_or_else(|| CompileError::lex(offset, "malformed conditional"))?;
    let is_else = caps.get(1).is_some();
    let test = caps.get(2).map_or("", |m| m.as_str()).to_string();
    return Ok(match (is_else, test.is_empty()) {
      (true, false) => Event::ElseIf(test),
      (true, true) => Event::Else,
      (false, false) => Event::OpenConditional(test),
      (false, true) => Event::CloseConditional,
    });
  }
  if body.starts_with('~') {
    let re = ITERATOR.get_or_init(|| {
      Regex::new(
        r"^\{\{~\s*(?:\}\}|([\s\S]+?)\s*:\s*([\w$]+)\s*(?::\s*([\w$]+))?\s*\}\})$",
      )
      .unwrap()
    });
    let caps = re.captures(block).ok_or_else(|| {
      CompileError::lex(offset, "malformed iterator, expected `{{~ list :item[:index] }}`")
    })?;
    return Ok(match (caps.get(1), caps.get(2)) {
      (Some(iterated), Some(item)) => Event::OpenIterator {
        iterated: iterated.as_str().to_string(),
        item: item.as_str().to_string(),
        index: caps.get(3).map(|m| m.as_str().to_string()),
      },
      _ => Event::CloseIterator,
    });
  }
  Ok(Event::Evaluated(non_empty(body, "evaluate")?))
}
