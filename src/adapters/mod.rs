// Adapters layer: concrete implementations of the domain ports (rng, file output).

pub mod random;
pub mod storage;

pub use random::SeededSource;
pub use storage::FileSink;
