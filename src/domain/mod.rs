// Domain layer: the values a run passes around and the ports the core talks through.

pub mod model;
pub mod ports;
