// Domain layer: user model and ports (interfaces).

pub mod model;
pub mod ports;
