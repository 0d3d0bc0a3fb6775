pub mod error;
pub mod logger;
pub mod validation;

#[cfg(feature = "cli")]
pub mod monitor;
