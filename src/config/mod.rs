pub mod toml_config;

pub use toml_config::RestaurantConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-restaurant")]
#[command(about = "Check a restaurant's opening hours and price orders from its menu")]
pub struct CliConfig {
    /// Path to the restaurant's TOML definition
    #[arg(short, long, default_value = "restaurant.toml")]
    pub config: String,

    /// Evaluate opening hours at this HH:MM:SS time instead of the local clock
    #[arg(long)]
    pub at: Option<String>,

    /// Item name to price, repeat for each item
    #[arg(long = "order")]
    pub order: Vec<String>,

    /// Item names to take off the menu before answering
    #[arg(long = "remove")]
    pub remove: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("config", &self.config)?;
        validation::validate_file_extension("config", &self.config, &["toml"])?;
        if let Some(at) = &self.at {
            validation::parse_time_of_day("at", at)?;
        }
        for name in &self.order {
            validation::validate_non_empty_string("order", name)?;
        }
        for name in &self.remove {
            validation::validate_non_empty_string("remove", name)?;
        }
        Ok(())
    }
}
