use crate::utils::error::{RandsumError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub label: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RandsumError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RandsumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(label) = &self.output.label {
            validate_non_empty_string("output.label", label)?;
        }
        if let Some(file) = &self.output.file {
            validate_path("output.file", file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [output]
            label = "Sum: "
            file = "out/result.txt"

            [random]
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.output.label.as_deref(), Some("Sum: "));
        assert_eq!(config.output.file.as_deref(), Some("out/result.txt"));
        assert_eq!(config.random.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.output.label.is_none());
        assert!(config.output.file.is_none());
        assert!(config.random.seed.is_none());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[output\nlabel = ").unwrap_err();
        assert!(matches!(err, RandsumError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_negative_seed_is_rejected() {
        assert!(TomlConfig::from_toml_str("[random]\nseed = -1").is_err());
    }

    #[test]
    fn test_empty_file_fails_validation() {
        let config = TomlConfig::from_toml_str("[output]\nfile = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("randsum.toml");
        std::fs::write(&path, "[random]\nseed = 7\n").unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.random.seed, Some(7));

        let missing = TomlConfig::from_file(temp_dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(RandsumError::IoError(_))));
    }
}
