//! Handlebars-based template renderer for scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and
//! HTML escaping turned off. Strict mode means any `{{variable}}` referenced in a
//! template must be present in the data context; otherwise rendering fails with
//! [`ScaffoldError::UndefinedPlaceholder`]. Escaping is off because segments are
//! raw Rust and TOML source that must come back byte-for-byte.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "crate_name": "paint" });
//! let output = renderer.render("cursor_hero_{{crate_name}}_tool", &data)?;
//! ```

use handlebars::{Handlebars, RenderErrorReason};
use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Template renderer used for both file contents and file paths.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| match e.reason() {
                RenderErrorReason::MissingVariable(Some(name)) => {
                    ScaffoldError::UndefinedPlaceholder(name.clone())
                }
                RenderErrorReason::MissingVariable(None) => {
                    ScaffoldError::UndefinedPlaceholder(String::from("<unknown>"))
                }
                _ => ScaffoldError::TemplateRender(e.to_string()),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_substitutes() {
        let out = TemplateRenderer::new()
            .render("Hello {{name}}", &json!({ "name": "World" }))
            .unwrap();
        assert_eq!(out, "Hello World");
    }

    #[test]
    fn test_render_missing_placeholder() {
        let err = TemplateRenderer::new()
            .render("Hello {{missing}}", &json!({}))
            .unwrap_err();
        match err {
            ScaffoldError::UndefinedPlaceholder(name) => assert_eq!(name, "missing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_does_not_escape() {
        let text = "fn f(app: &mut App) -> Option<\"x\"> {}\n";
        let out = TemplateRenderer::new()
            .render("{{body}}", &json!({ "body": text }))
            .unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn test_render_does_not_expand_values() {
        let out = TemplateRenderer::new()
            .render("{{a}}", &json!({ "a": "{{b}}" }))
            .unwrap();
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn test_render_trailing_tilde_strips_newline() {
        let out = TemplateRenderer::new()
            .render("{{a}}-{{b~}}\n", &json!({ "a": "x", "b": "y" }))
            .unwrap();
        assert_eq!(out, "x-y");
    }

    #[test]
    fn test_render_malformed_template() {
        let err = TemplateRenderer::new()
            .render("{{#if a}}unterminated", &json!({ "a": true }))
            .unwrap_err();
        assert!(!matches!(err, ScaffoldError::UndefinedPlaceholder(_)));
    }
}
