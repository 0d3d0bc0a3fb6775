// Application layer: workflows built on top of the generator.

pub mod bench;
