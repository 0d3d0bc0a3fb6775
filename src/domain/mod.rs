// Domain layer: Sum/Draw models and the ports the generator depends on.

pub mod model;
pub mod ports;
