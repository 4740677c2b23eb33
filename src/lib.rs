pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod model;
pub mod pipeline;
pub mod server;
pub mod stores;
pub mod text;

pub use crate::config::AppConfig;
pub use crate::error::ImportError;
pub use crate::model::ExtractedRecipe;

use crate::fetch::PageFetcher;

/// Fetch a page and run the extraction cascade over it, with default
/// configuration. One fetch attempt, no retries.
pub async fn import_recipe(url: &str) -> Result<ExtractedRecipe, ImportError> {
    let fetcher = PageFetcher::new(&AppConfig::default())?;
    import_recipe_with(&fetcher, url).await
}

/// Like [`import_recipe`] but reusing a caller-owned fetcher.
pub async fn import_recipe_with(
    fetcher: &PageFetcher,
    url: &str,
) -> Result<ExtractedRecipe, ImportError> {
    let (fetch_url, html) = fetcher.fetch(url).await?;
    pipeline::extract_recipe(&html, &fetch_url).ok_or(ImportError::NoRecipeFound)
}
