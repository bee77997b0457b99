use crate::domain::model::Restaurant;
use crate::utils::error::{RestaurantError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub restaurant: RestaurantSection,
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSection {
    pub name: String,
    pub location: String,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price: u32,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl RestaurantConfig {
    /// Loads a restaurant definition from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a restaurant definition, substituting `${VAR}` from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RestaurantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as-is so validation reports them verbatim.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("restaurant.name", &self.restaurant.name)?;
        validation::validate_non_empty_string("restaurant.location", &self.restaurant.location)?;
        validation::parse_time_of_day("restaurant.opening_time", &self.restaurant.opening_time)?;
        validation::parse_time_of_day("restaurant.closing_time", &self.restaurant.closing_time)?;

        for (index, item) in self.menu.iter().enumerate() {
            validation::validate_non_empty_string(&format!("menu[{}].name", index), &item.name)?;
        }

        for name in validation::find_duplicate_names(self.menu.iter().map(|item| item.name.as_str())) {
            tracing::warn!(item = name, "Menu lists the same item more than once; lookups use the first entry");
        }

        Ok(())
    }

    /// Validates the definition and builds the restaurant with its menu in file order.
    pub fn into_restaurant(self) -> Result<Restaurant> {
        self.validate_config()?;

        let opening_time =
            validation::parse_time_of_day("restaurant.opening_time", &self.restaurant.opening_time)?;
        let closing_time =
            validation::parse_time_of_day("restaurant.closing_time", &self.restaurant.closing_time)?;

        let mut restaurant = Restaurant::new(
            self.restaurant.name,
            self.restaurant.location,
            opening_time,
            closing_time,
        );
        for item in self.menu {
            restaurant.add_to_menu(item.name, item.price);
        }

        Ok(restaurant)
    }
}

impl Validate for RestaurantConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
