//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! pronunciation and phrase tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).unwrap_or_else(|e| {
            warn!("settings rejected, using defaults: {e}");
            Settings::default()
        })
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
    pub unknown_ideograph: UnknownIdeographSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub separator: String,
    pub fold_fullwidth: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            fold_fullwidth: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    #[default]
    Skip,
    Placeholder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnknownIdeographSettings {
    pub policy: UnknownPolicy,
    pub placeholder: String,
}

impl Default for UnknownIdeographSettings {
    fn default() -> Self {
        Self {
            policy: UnknownPolicy::Skip,
            placeholder: "?".to_string(),
        }
    }
}

impl UnknownIdeographSettings {
    /// The placeholder character. Validation guarantees exactly one char.
    pub fn placeholder_char(&self) -> char {
        self.placeholder.chars().next().unwrap_or('?')
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let sep = &s.output.separator;
    if sep.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "output.separator".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if sep.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(SettingsError::InvalidValue {
            field: "output.separator".to_string(),
            reason: "must not contain ASCII letters or digits".to_string(),
        });
    }

    let mut chars = s.unknown_ideograph.placeholder.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() && !c.is_ascii_alphanumeric() => {}
        _ => {
            return Err(SettingsError::InvalidValue {
                field: "unknown_ideograph.placeholder".to_string(),
                reason: "must be a single ASCII punctuation character".to_string(),
            });
        }
    }
    if s.output.separator.contains(s.unknown_ideograph.placeholder_char()) {
        return Err(SettingsError::InvalidValue {
            field: "unknown_ideograph.placeholder".to_string(),
            reason: "must differ from the separator".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.output.separator, " ");
        assert!(s.output.fold_fullwidth);
        assert_eq!(s.unknown_ideograph.policy, UnknownPolicy::Skip);
        assert_eq!(s.unknown_ideograph.placeholder_char(), '?');
    }

    #[test]
    fn default_struct_matches_default_toml() {
        let parsed = parse_settings_toml(default_toml()).unwrap();
        let fallback = Settings::default();
        assert_eq!(parsed.output.separator, fallback.output.separator);
        assert_eq!(parsed.output.fold_fullwidth, fallback.output.fold_fullwidth);
        assert_eq!(parsed.unknown_ideograph.policy, fallback.unknown_ideograph.policy);
        assert_eq!(
            parsed.unknown_ideograph.placeholder,
            fallback.unknown_ideograph.placeholder
        );
    }

    #[test]
    fn parse_placeholder_policy() {
        let toml = r#"
[output]
separator = "|"
fold_fullwidth = false

[unknown_ideograph]
policy = "placeholder"
placeholder = "*"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.output.separator, "|");
        assert!(!s.output.fold_fullwidth);
        assert_eq!(s.unknown_ideograph.policy, UnknownPolicy::Placeholder);
        assert_eq!(s.unknown_ideograph.placeholder_char(), '*');
    }

    fn with(separator: &str, placeholder: &str) -> String {
        format!(
            "[output]\nseparator = {separator:?}\nfold_fullwidth = true\n\n\
             [unknown_ideograph]\npolicy = \"skip\"\nplaceholder = {placeholder:?}\n"
        )
    }

    #[test]
    fn reject_empty_separator() {
        let err = parse_settings_toml(&with("", "?")).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "output.separator"));
    }

    #[test]
    fn reject_alphanumeric_separator() {
        let err = parse_settings_toml(&with("x", "?")).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "output.separator"));
    }

    #[test]
    fn reject_letter_placeholder() {
        let err = parse_settings_toml(&with(" ", "X")).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "unknown_ideograph.placeholder")
        );
    }

    #[test]
    fn reject_multi_char_placeholder() {
        let err = parse_settings_toml(&with(" ", "??")).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn reject_placeholder_equal_to_separator() {
        let err = parse_settings_toml(&with("-", "-")).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn reject_unknown_policy() {
        let toml = with(" ", "?").replace("\"skip\"", "\"guess\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_after_settings_is_rejected() {
        let _ = settings();
        let err = init_custom(default_toml().to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
    }

    #[test]
    fn reject_missing_section() {
        let err = parse_settings_toml("[output]\nseparator = \" \"\nfold_fullwidth = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
