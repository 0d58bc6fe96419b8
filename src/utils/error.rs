use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Invalid budget {value:?}: enter a positive whole number")]
    InvalidBudget { value: String },

    #[error("Invalid data in project {name:?}: every field is required and cost/profit must be positive whole numbers")]
    InvalidEntry { name: String },

    #[error("Add at least one project before submitting")]
    NoEntries,

    #[error("Could not reach the solver service: {0}")]
    Network(#[from] reqwest::Error),

    // Displays the bare message so a server-supplied `detail` surfaces
    // verbatim to the user.
    #[error("{message}")]
    Service { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    /// Local validation failures are detected before any network traffic.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FormError::InvalidBudget { .. } | FormError::InvalidEntry { .. } | FormError::NoEntries
        )
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
