// Domain layer: the restaurant model, the clock port and order pricing.
// Depends on chrono/serde only; adapters supply concrete clocks.

pub mod model;
pub mod ports;
pub mod services;
