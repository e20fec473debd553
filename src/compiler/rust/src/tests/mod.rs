/* src/compiler/rust/src/tests/mod.rs */

use super::*;

mod errors;
mod style;

const PARSER_IMPORT: &str = "import parseHtml from \"html-react-parser\";\n\n";

/// Default module wrapping a returned expression.
fn module(markup: &str) -> String {
  format!("export default function tpl(it: any) {{\n    return {markup};\n}}")
}

/// Same as `module`, with the markup parser import on top.
fn module_with_parser(markup: &str) -> String {
  format!("{PARSER_IMPORT}{}", module(markup))
}

fn compile(template: &str) -> String {
  generate(template).unwrap()
}
