// Adapters layer: concrete implementations of domain ports.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
