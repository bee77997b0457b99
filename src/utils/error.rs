use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Item not found on menu: {name}")]
    ItemNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RestaurantError {
    pub fn item_not_found(name: impl Into<String>) -> Self {
        RestaurantError::ItemNotFound { name: name.into() }
    }

    /// Short hint printed next to the error by the CLI.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RestaurantError::ItemNotFound { .. } => {
                "Check the item name against the menu; names are case-sensitive"
            }
            RestaurantError::IoError(_) => "Make sure the file exists and is readable",
            RestaurantError::SerializationError(_) => "Retry without --json",
            RestaurantError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with [restaurant] and [[menu]] sections"
            }
            RestaurantError::InvalidConfigValueError { .. } => {
                "Times use the HH:MM:SS format and names must not be blank"
            }
        }
    }

    /// Process exit status for the CLI. 2 is left to clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            RestaurantError::ConfigValidationError { .. }
            | RestaurantError::InvalidConfigValueError { .. } => 1,
            RestaurantError::ItemNotFound { .. } => 4,
            RestaurantError::IoError(_) | RestaurantError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RestaurantError>;
