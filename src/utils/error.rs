use thiserror::Error;

#[derive(Error, Debug)]
pub enum MtgError {
    #[error("No card matching \"{name}\" in set \"{set}\"")]
    NotFoundInScope { name: String, set: String },

    #[error("No card found matching \"{query}\": {details}")]
    NotFound { query: String, details: String },

    #[error("Card API returned {status}: {details}")]
    Api { status: u16, details: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl MtgError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MtgError::NotFound { .. } | MtgError::NotFoundInScope { .. }
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MtgError::ConfigError { .. }
                | MtgError::ConfigValidationError { .. }
                | MtgError::InvalidConfigValueError { .. }
                | MtgError::MissingConfigError { .. }
        )
    }

    /// Text suitable for replying to the user who issued the command.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MtgError::NotFound { query, .. } => {
                format!("Couldn't find a card named \"{}\".", query)
            }
            MtgError::NotFoundInScope { name, set } => format!(
                "Couldn't find \"{}\" in set {}.",
                name,
                set.to_uppercase()
            ),
            MtgError::ValidationError { message } => message.clone(),
            MtgError::Api { .. } | MtgError::Http(_) => {
                "The card database is unavailable right now, try again later.".to_string()
            }
            e if e.is_config_error() => format!("Configuration problem: {}", e),
            e => format!("Something went wrong: {}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_not_found() {
            2
        } else if self.is_config_error() {
            3
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, MtgError>;
