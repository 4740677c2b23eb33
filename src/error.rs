use thiserror::Error;

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the target page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// All extraction strategies were exhausted without finding usable data
    #[error("Could not find recipe data (no schema.org/Recipe and heuristics failed for this page)")]
    NoRecipeFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
