/* src/compiler/wasm/src/lib.rs */

use wasm_bindgen::prelude::*;

fn js_error(err: &dotreact_compiler::CompileError) -> JsError {
  JsError::new(&format!("[{}] {err}", err.code()))
}

/// Document JSON for a template.
#[wasm_bindgen]
pub fn parse(template: &str) -> Result<String, JsError> {
  let document = dotreact_compiler::parse(template).map_err(|e| js_error(&e))?;
  serde_json::to_string(&document).map_err(|e| JsError::new(&e.to_string()))
}

/// Component module source for a template.
#[wasm_bindgen]
pub fn generate(template: &str) -> Result<String, JsError> {
  dotreact_compiler::generate(template).map_err(|e| js_error(&e))
}

/// Error code when the template does not compile, `undefined` otherwise.
#[wasm_bindgen]
pub fn error_code(template: &str) -> Option<String> {
  dotreact_compiler::generate(template).err().map(|e| e.code().to_string())
}
