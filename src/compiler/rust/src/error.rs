/* src/compiler/rust/src/error.rs */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompileError>;

/// Failure raised by `parse` or `generate`. Offsets are byte positions in the
/// line-break-normalized template text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
  #[error("lex error at offset {offset}: {message}")]
  Lex { offset: usize, message: String },

  #[error("structural error at offset {offset}: {message}")]
  Structural { offset: usize, message: String },

  #[error("unsupported construct: {message}")]
  Unsupported { message: String },

  #[error("style synthesis failed: {message}")]
  StyleSynthesis { message: String },
}

impl CompileError {
  pub fn lex(offset: usize, message: impl Into<String>) -> Self {
    Self::Lex { offset, message: message.into() }
  }

  pub fn structural(offset: usize, message: impl Into<String>) -> Self {
    Self::Structural { offset, message: message.into() }
  }

  pub fn unsupported(message: impl Into<String>) -> Self {
    Self::Unsupported { message: message.into() }
  }

  pub fn style(message: impl Into<String>) -> Self {
    Self::StyleSynthesis { message: message.into() }
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::Lex { .. } => "LEX_ERROR",
      Self::Structural { .. } => "STRUCTURAL_ERROR",
      Self::Unsupported { .. } => "UNSUPPORTED_CONSTRUCT",
      Self::StyleSynthesis { .. } => "STYLE_SYNTHESIS_ERROR",
    }
  }

  /// Position in the normalized template, when the error is tied to one.
  pub fn offset(&self) -> Option<usize> {
    match self {
      Self::Lex { offset, .. } | Self::Structural { offset, .. } => Some(*offset),
      Self::Unsupported { .. } | Self::StyleSynthesis { .. } => None,
    }
  }
}
