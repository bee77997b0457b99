pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FixedClock, SystemClock};
pub use app::{build_report, clock_for, Report};
pub use config::RestaurantConfig;
pub use domain::model::{Item, Restaurant};
pub use domain::ports::Clock;
pub use domain::services::{OrderService, OrderSummary};
pub use utils::error::{RestaurantError, Result};
