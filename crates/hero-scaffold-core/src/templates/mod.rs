//! Template system for hero-scaffold.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Every template can use the naming variables:
//! - `{{crate_name}}` - snake-case base name (e.g., `voice_to_text`)
//! - `{{crate_name_pascal}}` - pascal-case form (e.g., `VoiceToText`)
//! - `{{crate_prefix}}` - workspace crate prefix from config (default `cursor_hero`)
//!
//! Matcher templates additionally use the segment names of their split plan, and any
//! template can use the extra `variables` from `hero-scaffold.config.json`.
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
