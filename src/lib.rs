pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FileSink, SeededSource};
pub use crate::config::{toml_config::TomlConfig, RunSettings};
pub use crate::core::{global, GeneratorSettings, SumGenerator};
pub use crate::domain::model::{Draw, Sum, DEFAULT_OUTPUT_FILE, DRAW_UPPER_BOUND, RESULT_LABEL};
pub use crate::domain::ports::{RandomSource, SumSink};
pub use crate::utils::error::{RandsumError, Result};
