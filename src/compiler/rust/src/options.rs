/* src/compiler/rust/src/options.rs */

use serde::Deserialize;

/// Shape of the emitted module. Every field has a default, so a partial
/// `[generate]` table in a config file is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
  pub function_name: String,
  /// Parameter list of the exported function, type annotation included.
  pub parameter: String,
  pub indent: String,
  /// Runtime helper turning a markup string into nodes.
  pub markup_parser: String,
  /// Import line recorded whenever `markup_parser` is used.
  pub markup_import: String,
}

impl Default for GenerateOptions {
  fn default() -> Self {
    Self {
      function_name: "tpl".to_string(),
      parameter: "it: any".to_string(),
      indent: "    ".to_string(),
      markup_parser: "parseHtml".to_string(),
      markup_import: r#"import parseHtml from "html-react-parser";"#.to_string(),
    }
  }
}
