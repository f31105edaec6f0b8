// Domain layer: request, stages, command templates and the ports the engine drives.

pub mod model;
pub mod ports;
