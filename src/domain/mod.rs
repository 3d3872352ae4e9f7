// Domain layer: record schemas, composite keys and the loading port.

pub mod decimal;
pub mod keys;
pub mod model;
pub mod ports;
