//! Crate naming variables supplied to every template.
//!
//! A pattern is instantiated from one base name typed by the user, e.g.
//! `voice_to_text`. Templates see it as `{{crate_name}}` and, pascal-cased, as
//! `{{crate_name_pascal}}` (`VoiceToText`).

use crate::error::{Result, ScaffoldError};

/// Per-pattern preconditions on the base name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingRules {
    /// Suffix the pattern appends itself (`new_tool` adds `_tool`), so the user must not.
    pub reserved_suffix: Option<&'static str>,
}

/// A validated base name and its pascal-case form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateName {
    snake: String,
    pascal: String,
}

impl CrateName {
    /// Validate `base` against `rules` and derive the pascal-case form.
    pub fn new(base: &str, rules: &NamingRules) -> Result<Self> {
        let snake = base.trim();
        let invalid = |reason: String| ScaffoldError::InvalidInputVariable {
            variable: "crate_name",
            value: base.to_string(),
            reason,
        };

        if snake.is_empty() {
            return Err(invalid("crate_name is required".into()));
        }
        if let Some(c) = snake
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(invalid(format!(
                "unexpected character '{c}' (use lowercase letters, digits and '_')"
            )));
        }
        if snake.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("must not start with a digit".into()));
        }
        if let Some(suffix) = rules.reserved_suffix {
            if snake.ends_with(suffix) {
                return Err(invalid(format!(
                    "must not end with '{suffix}', the pattern adds it"
                )));
            }
        }

        Ok(Self {
            snake: snake.to_string(),
            pascal: pascal_case(snake),
        })
    }

    /// The snake-case name, e.g. `voice_to_text`.
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// The pascal-case name, e.g. `VoiceToText`.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }
}

/// Capitalize every `_`-separated word and join them without separators.
///
/// Only the first character of each word is uppercased; the rest is lowercased,
/// so `ui_data` becomes `UiData`.
pub fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOL: NamingRules = NamingRules {
        reserved_suffix: Some("tool"),
    };

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("voice_to_text"), "VoiceToText");
        assert_eq!(pascal_case("tool"), "Tool");
        assert_eq!(pascal_case("ui_data"), "UiData");
        assert_eq!(pascal_case("main_camera2"), "MainCamera2");
    }

    #[test]
    fn test_pascal_case_collapses_empty_words() {
        assert_eq!(pascal_case("a__b"), "AB");
        assert_eq!(pascal_case("_lead"), "Lead");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_crate_name_valid() {
        let name = CrateName::new("voice_to_text", &TOOL).unwrap();
        assert_eq!(name.snake(), "voice_to_text");
        assert_eq!(name.pascal(), "VoiceToText");
    }

    #[test]
    fn test_crate_name_trims_whitespace() {
        let name = CrateName::new("  paint \n", &NamingRules::default()).unwrap();
        assert_eq!(name.snake(), "paint");
    }

    #[test]
    fn test_crate_name_empty() {
        for base in ["", "   "] {
            let err = CrateName::new(base, &NamingRules::default()).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidInputVariable { .. }));
        }
    }

    #[test]
    fn test_crate_name_reserved_suffix() {
        let err = CrateName::new("paint_tool", &TOOL).unwrap_err();
        assert!(err.to_string().contains("must not end with 'tool'"));
        assert!(CrateName::new("tool", &TOOL).is_err());
        // Without the rule the same name is fine.
        assert!(CrateName::new("paint_tool", &NamingRules::default()).is_ok());
    }

    #[test]
    fn test_crate_name_bad_characters() {
        for base in ["Paint", "paint-brush", "paint brush", "9lives"] {
            assert!(
                CrateName::new(base, &NamingRules::default()).is_err(),
                "{base} should be rejected"
            );
        }
    }
}
