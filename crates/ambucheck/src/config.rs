//! Configuration management for ambucheck.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "ambucheck";

/// Largest signature scale accepted by validation.
const MAX_SIGNATURE_SCALE: f32 = 2.0;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AMBUCHECK_`, sections split by `__`)
/// 2. TOML config file at `~/.config/ambucheck/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document configuration.
    pub document: DocumentConfig,
    /// Signature block configuration.
    pub signatures: SignatureConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Document-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Title printed at the top of every page.
    pub title: String,
    /// Number of selectable ambulance units (`01` through this number).
    pub unit_count: u8,
    /// Unit used when none is given.
    pub default_unit: String,
    /// Compress PDF content and image streams.
    pub compress: bool,
}

/// Signature block configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    /// Scale factor applied to signature images.
    pub scale: f32,
    /// Caption under the left signing line.
    pub responsible_label: String,
    /// Caption under the right signing line.
    pub coordinator_label: String,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the generated PDF is written to.
    /// Defaults to the current directory.
    pub directory: Option<PathBuf>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "AmbulanciasTVR CHECK LIST".to_string(),
            unit_count: 11,
            default_unit: "01".to_string(),
            compress: true,
        }
    }
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            scale: 0.45,
            responsible_label: "Responsable de turno".to_string(),
            coordinator_label: "Coordinador operativo / Director General".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources, reading `config_path` instead of
    /// the default file when given.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("AMBUCHECK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.document.title.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "document title cannot be empty".to_string(),
            });
        }

        if !(1..=99).contains(&self.document.unit_count) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "unit_count ({}) must be between 1 and 99",
                    self.document.unit_count
                ),
            });
        }

        if !self.units().contains(&self.document.default_unit) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "default_unit ({}) is not one of the {} selectable units",
                    self.document.default_unit, self.document.unit_count
                ),
            });
        }

        let scale = self.signatures.scale;
        if !(scale > 0.0 && scale <= MAX_SIGNATURE_SCALE) {
            return Err(Error::ConfigValidation {
                message: format!("signature scale ({scale}) must be in (0, {MAX_SIGNATURE_SCALE}]"),
            });
        }

        Ok(())
    }

    /// The selectable unit identifiers, `01` through `unit_count`.
    #[must_use]
    pub fn units(&self) -> Vec<String> {
        (1..=self.document.unit_count)
            .map(|n| format!("{n:02}"))
            .collect()
    }

    /// Resolve a requested unit against the selectable units.
    ///
    /// Bare numbers are zero-padded, so `3` resolves to `03`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if the unit is not selectable.
    pub fn resolve_unit(&self, unit: Option<&str>) -> Result<String> {
        let Some(raw) = unit else {
            return Ok(self.document.default_unit.clone());
        };

        let candidate = match raw.trim().parse::<u8>() {
            Ok(n) => format!("{n:02}"),
            Err(_) => raw.trim().to_string(),
        };

        if self.units().contains(&candidate) {
            Ok(candidate)
        } else {
            Err(Error::InvalidUnit {
                unit: raw.to_string(),
                max: self.document.unit_count,
            })
        }
    }

    /// Get the output directory, resolving to the current directory if not set.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.document.title, "AmbulanciasTVR CHECK LIST");
        assert_eq!(config.document.unit_count, 11);
        assert_eq!(config.document.default_unit, "01");
        assert!(config.document.compress);
        assert!((config.signatures.scale - 0.45).abs() < f32::EPSILON);
        assert!(config.output.directory.is_none());
    }

    #[test]
    fn test_default_signature_labels() {
        let signatures = SignatureConfig::default();
        assert_eq!(signatures.responsible_label, "Responsable de turno");
        assert_eq!(
            signatures.coordinator_label,
            "Coordinador operativo / Director General"
        );
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default();
        config.document.title = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("title"));
    }

    #[test]
    fn test_validate_zero_units() {
        let mut config = Config::default();
        config.document.unit_count = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("unit_count"));
    }

    #[test]
    fn test_validate_default_unit_out_of_range() {
        let mut config = Config::default();
        config.document.default_unit = "12".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("default_unit"));
    }

    #[test]
    fn test_validate_bad_scale() {
        let mut config = Config::default();
        config.signatures.scale = 0.0;
        assert!(config.validate().is_err());

        config.signatures.scale = 3.0;
        assert!(config.validate().is_err());

        config.signatures.scale = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_units() {
        let config = Config::default();
        let units = config.units();

        assert_eq!(units.len(), 11);
        assert_eq!(units.first().map(String::as_str), Some("01"));
        assert_eq!(units.last().map(String::as_str), Some("11"));
    }

    #[test]
    fn test_resolve_unit_default() {
        let config = Config::default();
        assert_eq!(config.resolve_unit(None).unwrap(), "01");
    }

    #[test]
    fn test_resolve_unit_pads_numbers() {
        let config = Config::default();
        assert_eq!(config.resolve_unit(Some("3")).unwrap(), "03");
        assert_eq!(config.resolve_unit(Some("07")).unwrap(), "07");
        assert_eq!(config.resolve_unit(Some(" 11 ")).unwrap(), "11");
    }

    #[test]
    fn test_resolve_unit_rejects_out_of_range() {
        let config = Config::default();
        assert!(matches!(
            config.resolve_unit(Some("12")),
            Err(Error::InvalidUnit { max: 11, .. })
        ));
        assert!(config.resolve_unit(Some("00")).is_err());
        assert!(config.resolve_unit(Some("abc")).is_err());
    }

    #[test]
    fn test_output_dir_default() {
        let config = Config::default();
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_output_dir_custom() {
        let mut config = Config::default();
        config.output.directory = Some(PathBuf::from("/srv/checklists"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/checklists"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("ambucheck"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[document]\nunit_count = 4\ndefault_unit = \"02\"\n\n[signatures]\nscale = 0.5\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.document.unit_count, 4);
        assert_eq!(config.document.default_unit, "02");
        assert!((config.signatures.scale - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.document.title, "AmbulanciasTVR CHECK LIST");
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[document]\nunit_count = 2\ndefault_unit = \"05\"\n").unwrap();

        let result = Config::load_from(Some(path));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("unit_count"));
        assert!(json.contains("responsible_label"));
    }

    #[test]
    fn test_document_config_deserialize() {
        let json = r#"{"title": "Otra lista", "compress": false}"#;
        let document: DocumentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(document.title, "Otra lista");
        assert!(!document.compress);
        assert_eq!(document.unit_count, 11);
    }
}
