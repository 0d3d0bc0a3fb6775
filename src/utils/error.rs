use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandsumError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl RandsumError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RandsumError::IoError(e) => format!("檔案操作失敗: {}", e),
            RandsumError::ConfigError { message } => format!("配置錯誤: {}", message),
            RandsumError::ConfigValidationError { field, message } => {
                format!("配置欄位 '{}' 無效: {}", field, message)
            }
            RandsumError::InvalidConfigValueError { field, value, reason } => {
                format!("配置欄位 '{}' 的值 '{}' 無效: {}", field, value, reason)
            }
            RandsumError::MissingConfigError { field } => {
                format!("缺少必要配置: {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RandsumError::IoError(_) => "Check that the file exists and is readable",
            RandsumError::ConfigError { .. } | RandsumError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            RandsumError::InvalidConfigValueError { .. } => {
                "Fix the value in the configuration file or on the command line"
            }
            RandsumError::MissingConfigError { .. } => "Add the missing field to the configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, RandsumError>;
