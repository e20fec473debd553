/* src/compiler/rust/src/tests/style.rs */

use super::*;

fn styled(value: &str) -> String {
  compile(&format!(r#"<div style="{value}"></div>"#))
}

// -- Literal declarations --

#[test]
fn single_literal_declaration() {
  assert_eq!(styled("color: red;"), module(r#"<div style={{"color":"red"}}></div>"#));
  assert_eq!(styled("color: red"), module(r#"<div style={{"color":"red"}}></div>"#));
}

#[test]
fn several_literal_declarations_keep_order() {
  assert_eq!(
    styled("color: red; background-color: green; font-size: var(--foo);display:none;"),
    module(
      r#"<div style={{"color":"red","backgroundColor":"green","fontSize":"var(--foo)","display":"none"}}></div>"#
    )
  );
}

// -- Dynamic values --

#[test]
fn encoded_value_alone() {
  assert_eq!(styled("color: {{! it.color }};"), module(r#"<div style={{ "color": `${it.color}` }}></div>"#));
}

#[test]
fn encoded_value_with_unit() {
  assert_eq!(
    styled("padding: {{! it.padding }}px;"),
    module(r#"<div style={{ "padding": `${it.padding}px` }}></div>"#)
  );
}

#[test]
fn several_encoded_values_in_one_declaration() {
  assert_eq!(
    styled("padding: {{! it.top }} {{! it.right}} {{! it.bottom }} {{! it.right}};"),
    module(r#"<div style={{ "padding": `${it.top} ${it.right} ${it.bottom} ${it.right}` }}></div>"#)
  );
}

#[test]
fn literal_and_dynamic_declarations_mix() {
  assert_eq!(
    styled("background-color: red;color: {{! it.color }};"),
    module(r#"<div style={{ "backgroundColor": "red", "color": `${it.color}` }}></div>"#)
  );
}

#[test]
fn custom_property_keeps_its_name() {
  assert_eq!(
    styled("--accent: {{! it.accent }}"),
    module(r#"<div style={{ "--accent": `${it.accent}` }}></div>"#)
  );
}

#[test]
fn conditional_value() {
  assert_eq!(
    styled("color: {{? it.enabled}}green{{??}}red{{?}};"),
    module(r#"<div style={{ "color": `${it.enabled ? `green` : `red`}` }}></div>"#)
  );
  assert_eq!(
    styled("color: {{? it.enabled}}{{! it.color }}{{??}}transparent{{?}};"),
    module(r#"<div style={{ "color": `${it.enabled ? `${it.color}` : `transparent`}` }}></div>"#)
  );
}

#[test]
fn nested_conditional_values() {
  assert_eq!(
    styled("color: {{? it.enabled}}{{? it.green }}green{{??}}{{! it.color }}{{?}}{{??}}transparent{{?}};"),
    module(
      r#"<div style={{ "color": `${it.enabled ? `${it.green ? `green` : `${it.color}`}` : `transparent`}` }}></div>"#
    )
  );
}

// -- Conditionals around declarations --

#[test]
fn conditional_declaration() {
  assert_eq!(
    styled("{{? it.color }}color: {{! it.color}};{{?}}"),
    module(r#"<div style={{ ...(it.color ? { "color": `${it.color}` } : {}) }}></div>"#)
  );
}

#[test]
fn conditional_declarations_with_literals() {
  assert_eq!(
    styled("{{? it.padding }}padding: {{! it.padding}}px; margin: 0; color: {{! it.color}};{{?}}"),
    module(
      r#"<div style={{ ...(it.padding ? { "padding": `${it.padding}px`, "margin": "0", "color": `${it.color}` } : {}) }}></div>"#
    )
  );
}

#[test]
fn conditional_declarations_with_else() {
  assert_eq!(
    styled("{{? it.padding }}padding: {{! it.padding}}px; margin: 0;{{??}}padding: 0px; margin: 0;{{?}}"),
    module(
      r#"<div style={{ ...(it.padding ? { "padding": `${it.padding}px`, "margin": "0" } : { "padding": "0px", "margin": "0" }) }}></div>"#
    )
  );
}

#[test]
fn conditional_declaration_around_conditional_value() {
  assert_eq!(
    styled("{{? it.enabled}}color: {{? it.green }}green{{??}}{{! it.color }}{{?}};{{?}}"),
    module(
      r#"<div style={{ ...(it.enabled ? { "color": `${it.green ? `green` : `${it.color}`}` } : {}) }}></div>"#
    )
  );
}

#[test]
fn nested_conditional_declarations() {
  assert_eq!(
    styled(
      "{{? it.enabled}}{{? it.green }}color: green;{{??}}color: {{! it.color }}; {{?}}{{??}}color: transparent;{{?}};"
    ),
    module(concat!(
      r#"<div style={{ ...(it.enabled ? { ...(it.green ? { "color": "green" } : { "color": `${it.color}` }) }"#,
      r#" : { "color": "transparent" }) }}></div>"#,
    ))
  );
}

// -- Style under an attribute-area conditional --

#[test]
fn conditional_style_attribute() {
  assert_eq!(
    compile(r#"<div {{? it.enabled}}style="color: red;"{{?}}></div>"#),
    module(r#"<div {...(it.enabled ? {style: {"color":"red"}} : {})}></div>"#)
  );
}

#[test]
fn conditional_style_attribute_with_dynamic_value() {
  let expected = module(r#"<div {...(it.enabled ? {style: { "color": `${it.color}` }} : {})}></div>"#);
  assert_eq!(compile(r#"<div {{? it.enabled}}style="color: {{! it.color }};"{{?}} ></div>"#), expected);
  assert_eq!(compile(r#"<div {{? it.enabled}}style="color: {{! it.color }}"{{?}} ></div>"#), expected);
}

#[test]
fn conditional_style_attribute_with_several_values() {
  assert_eq!(
    compile(
      r#"<div {{? it.enabled}}style="padding: {{! it.paddingTop }} {{! it.paddingRight }} {{! it.paddingBottom }} {{! it.paddingLeft }};"{{?}}></div>"#
    ),
    module(
      r#"<div {...(it.enabled ? {style: { "padding": `${it.paddingTop} ${it.paddingRight} ${it.paddingBottom} ${it.paddingLeft}` }} : {})}></div>"#
    )
  );
}

// -- Failures --

#[test]
fn empty_style_fails() {
  let err = generate(r#"<div style=""></div>"#).unwrap_err();
  assert_eq!(err.code(), "STYLE_SYNTHESIS_ERROR");
  assert!(matches!(generate(r#"<div style="; ;"></div>"#), Err(CompileError::StyleSynthesis { .. })));
}

#[test]
fn dynamic_property_name_fails() {
  let err = generate(r#"<div style="{{! it.prop }}: red"></div>"#).unwrap_err();
  assert!(matches!(err, CompileError::StyleSynthesis { .. }));
}

#[test]
fn iterator_in_style_is_unsupported() {
  let err = generate(r#"<div style="{{~ it.rules :r }}{{! r }}{{~}}"></div>"#).unwrap_err();
  assert_eq!(err.code(), "UNSUPPORTED_CONSTRUCT");
}
