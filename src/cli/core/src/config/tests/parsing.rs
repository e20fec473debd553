/* src/cli/core/src/config/tests/parsing.rs */

use super::*;

#[test]
fn parse_empty_config() {
  let config: DotreactConfig = toml::from_str("").unwrap();
  assert_eq!(config.output.extension, "tsx");
  assert!(config.output.out_dir.is_none());
  assert_eq!(config.generate.function_name, "tpl");
  assert_eq!(config.generate.parameter, "it: any");
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[generate]
function_name = "Widget"
parameter = "props: WidgetProps"
indent = "  "
markup_parser = "toNodes"
markup_import = 'import { toNodes } from "./markup";'

[output]
extension = "jsx"
out_dir = "src/generated"
"#;
  let config: DotreactConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.generate.function_name, "Widget");
  assert_eq!(config.generate.parameter, "props: WidgetProps");
  assert_eq!(config.generate.indent, "  ");
  assert_eq!(config.generate.markup_parser, "toNodes");
  assert_eq!(config.generate.markup_import, r#"import { toNodes } from "./markup";"#);
  assert_eq!(config.output.extension, "jsx");
  assert_eq!(config.output.out_dir.as_deref(), Some("src/generated"));
  config.validate().unwrap();
}

#[test]
fn parse_partial_generate_section() {
  let toml_str = r#"
[generate]
parameter = "data: Record<string, unknown>"
"#;
  let config: DotreactConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.generate.parameter, "data: Record<string, unknown>");
  assert_eq!(config.generate.function_name, "tpl");
  assert_eq!(config.generate.markup_parser, "parseHtml");
}

#[test]
fn reject_dotted_extension() {
  let config: DotreactConfig = toml::from_str("[output]\nextension = \".tsx\"\n").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("output.extension"), "got: {err}");
}

#[test]
fn reject_empty_function_name() {
  let config: DotreactConfig = toml::from_str("[generate]\nfunction_name = \" \"\n").unwrap();
  assert!(config.validate().is_err());
}
