/* src/compiler/rust/src/render/helpers.rs */

use serde_json::Value;

// HTML attribute names that JSX spells differently.
const JSX_ATTRIBUTE_NAMES: &[(&str, &str)] = &[
  ("accept-charset", "acceptCharset"),
  ("accesskey", "accessKey"),
  ("autocapitalize", "autoCapitalize"),
  ("autocomplete", "autoComplete"),
  ("autofocus", "autoFocus"),
  ("autoplay", "autoPlay"),
  ("cellpadding", "cellPadding"),
  ("cellspacing", "cellSpacing"),
  ("charset", "charSet"),
  ("class", "className"),
  ("colspan", "colSpan"),
  ("contenteditable", "contentEditable"),
  ("crossorigin", "crossOrigin"),
  ("datetime", "dateTime"),
  ("enctype", "encType"),
  ("for", "htmlFor"),
  ("formaction", "formAction"),
  ("frameborder", "frameBorder"),
  ("http-equiv", "httpEquiv"),
  ("inputmode", "inputMode"),
  ("maxlength", "maxLength"),
  ("minlength", "minLength"),
  ("novalidate", "noValidate"),
  ("readonly", "readOnly"),
  ("referrerpolicy", "referrerPolicy"),
  ("rowspan", "rowSpan"),
  ("spellcheck", "spellCheck"),
  ("srcset", "srcSet"),
  ("tabindex", "tabIndex"),
  ("usemap", "useMap"),
];

pub(super) fn jsx_attribute_name(name: &str) -> &str {
  JSX_ATTRIBUTE_NAMES
    .iter()
    .find(|(html, _)| html.eq_ignore_ascii_case(name))
    .map_or(name, |&(_, jsx)| jsx)
}

/// Double-quoted JS string literal.
pub(super) fn js_string(s: &str) -> String {
  Value::String(s.to_string()).to_string()
}

pub(super) fn is_identifier(s: &str) -> bool {
  let mut chars = s.chars();
  chars.next().is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
    && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Object literal key: bare when it is an identifier, quoted otherwise.
pub(super) fn object_key(name: &str) -> String {
  if is_identifier(name) { name.to_string() } else { js_string(name) }
}

/// Literal text placed inside a template literal.
pub(super) fn escape_template(s: &str) -> String {
  s.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}

/// Literal text placed between JSX tags.
pub(super) fn escape_jsx_text(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '{' => out.push_str(r#"{"{"}"#),
      '}' => out.push_str(r#"{"}"}"#),
      '<' => out.push_str(r#"{"<"}"#),
      '>' => out.push_str(r#"{">"}"#),
      _ => out.push(ch),
    }
  }
  out
}

/// CSS property to React style key: `background-color` -> `backgroundColor`,
/// `-ms-x` -> `msX`, `-webkit-x` -> `WebkitX`. Custom properties stay as written.
pub(super) fn style_property_name(raw: &str) -> String {
  let raw = raw.trim();
  if raw.starts_with("--") {
    return raw.to_string();
  }
  let raw = match raw.strip_prefix("-ms-") {
    Some(rest) => format!("ms-{rest}"),
    None => raw.to_string(),
  };
  let mut out = String::with_capacity(raw.len());
  let mut chars = raw.chars();
  while let Some(c) = chars.next() {
    if c == '-' {
      match chars.next() {
        Some(next) => out.extend(next.to_uppercase()),
        None => out.push('-'),
      }
    } else {
      out.push(c);
    }
  }
  out
}
