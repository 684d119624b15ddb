use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure or non-success response from the recipe API
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// No recipe exists for the requested id
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Recipe data was malformed (missing or mistyped fields)
    #[error("Failed to parse recipe data: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
