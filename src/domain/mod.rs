// Domain layer: card and embed models plus the ports adapters implement.

pub mod model;
pub mod ports;
