pub mod toml_config;

use crate::core::GeneratorSettings;
use crate::domain::model::{DEFAULT_OUTPUT_FILE, RESULT_LABEL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "randsum")]
#[command(about = "Draw two random numbers, print their sum and exit with it")]
pub struct CliConfig {
    /// Seed the generator with a fixed value instead of the current time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the result to this file instead of gui.txt
    #[arg(long)]
    pub output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併後的執行設定：預設值 -> TOML -> 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub label: String,
    pub output_file: PathBuf,
    /// None 代表用目前時間播種
    pub seed: Option<u64>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            label: RESULT_LABEL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            seed: None,
        }
    }
}

impl RunSettings {
    pub fn apply_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(label) = &config.output.label {
            self.label = label.clone();
        }
        if let Some(file) = &config.output.file {
            self.output_file = PathBuf::from(file);
        }
        if config.random.seed.is_some() {
            self.seed = config.random.seed;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = &cli.config {
            tracing::debug!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            settings = settings.apply_toml(&config);
        }

        // 命令列覆蓋
        if let Some(output) = &cli.output {
            settings.output_file = PathBuf::from(output);
        }
        if cli.seed.is_some() {
            settings.seed = cli.seed;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            label: self.label.clone(),
        }
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("output.label", &self.label)?;
        validate_path("output.file", &self.output_file.to_string_lossy())?;
        Ok(())
    }
}
