pub mod generator;
pub mod global;

pub use crate::domain::model::{Draw, Sum};
pub use crate::domain::ports::{RandomSource, SumSink};
pub use crate::utils::error::Result;
pub use generator::{GeneratorSettings, SumGenerator};
