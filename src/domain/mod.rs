// Domain layer: the course record and the ports the application talks through.

pub mod model;
pub mod ports;
