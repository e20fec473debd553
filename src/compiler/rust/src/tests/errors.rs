/* src/compiler/rust/src/tests/errors.rs */

use super::*;

#[test]
fn dynamic_tag_name_is_a_lex_error() {
  let err = generate("<{{? it.enabled }}abc{{?}}></{{? it.enabled }}abc{{?}}>").unwrap_err();
  assert_eq!(err.code(), "LEX_ERROR");
  assert_eq!(err.offset(), Some(0));
}

#[test]
fn unterminated_directive_reports_its_offset() {
  let err = parse("<p>hello {{= it.name </p>").unwrap_err();
  assert_eq!(err, CompileError::lex(9, "unterminated directive, missing `}}`"));
}

#[test]
fn unclosed_conditional_is_structural() {
  let err = parse("<div>{{? it.on }}<b></b></div>").unwrap_err();
  assert_eq!(err.code(), "STRUCTURAL_ERROR");
  let err = parse("{{? it.on }}<b></b>").unwrap_err();
  assert_eq!(err, CompileError::structural(0, "conditional `it.on` is never closed"));
}

#[test]
fn stray_close_tag_is_structural() {
  assert!(matches!(parse("<div></div></span>"), Err(CompileError::Structural { offset: 11, .. })));
}

#[test]
fn late_evaluation_is_unsupported() {
  let err = generate("<div></div>{{ let late = 1; }}").unwrap_err();
  assert_eq!(err.code(), "UNSUPPORTED_CONSTRUCT");
  let err = generate("<div>{{ let nested = 1; }}</div>").unwrap_err();
  assert_eq!(err.code(), "UNSUPPORTED_CONSTRUCT");
}

#[test]
fn errors_render_readable_messages() {
  let err = parse("{{~}}").unwrap_err();
  assert_eq!(err.to_string(), "structural error at offset 0: unexpected {{~}}, nothing is open");
}
