// TOML configuration for `QubeeHandle`.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use qubee_core::ValidationMode;

use crate::error::QubeeError;

/// Handle settings. Every field is optional in the file:
///
/// ```toml
/// preserve_case = false
/// mode = "strict"
/// aggressive = true
/// abbreviations = ["kkf", "fkn", "Obb"]
/// extra_stopwords = ["kunoo"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QubeeConfig {
    /// Keep the input's letter case in normalized output and tokens.
    pub preserve_case: bool,
    /// Validation policy, `"lenient"` or `"strict"`.
    pub mode: ValidationMode,
    /// Aggressive stemming.
    pub aggressive: bool,
    /// Replaces the built-in abbreviation list when set.
    pub abbreviations: Option<Vec<String>>,
    /// Added to the built-in stopwords.
    pub extra_stopwords: Vec<String>,
}

impl QubeeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, QubeeError> {
        let config: QubeeConfig = toml::from_str(text)?;
        debug!("loaded config: {config:?}");
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QubeeError> {
        let path = path.as_ref();
        debug!("reading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(QubeeConfig::from_toml_str("").unwrap(), QubeeConfig::default());
    }

    #[test]
    fn full_file() {
        let config = QubeeConfig::from_toml_str(
            r#"
            preserve_case = true
            mode = "Strict"
            aggressive = true
            abbreviations = ["kkf"]
            extra_stopwords = ["kunoo", "sunoo"]
            "#,
        )
        .unwrap();
        assert!(config.preserve_case);
        assert_eq!(config.mode, ValidationMode::Strict);
        assert!(config.aggressive);
        assert_eq!(config.abbreviations, Some(vec!["kkf".to_string()]));
        assert_eq!(config.extra_stopwords.len(), 2);
    }

    #[test]
    fn unknown_mode_fails() {
        let err = QubeeConfig::from_toml_str(r#"mode = "loose""#).unwrap_err();
        assert!(matches!(err, QubeeError::Config(_)));
        assert!(err.to_string().contains("loose"));
    }

    #[test]
    fn unknown_field_fails() {
        assert!(QubeeConfig::from_toml_str("agressive = true").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = QubeeConfig::from_path("/nonexistent/qubee.toml").unwrap_err();
        assert!(matches!(err, QubeeError::Io(_)));
    }
}
