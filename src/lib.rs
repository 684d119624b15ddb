//! A client-side recipe browser core.
//!
//! Thin coordination layer over an external recipe API and a pluggable
//! view: search, recipe detail with servings rescale, a shopping list, and
//! likes persisted across sessions through a narrow key/value store.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod storage;
pub mod view;

pub use api::{HttpRecipeApi, RecipeApi, RecipeData, SearchHit};
pub use config::AppConfig;
pub use controller::{App, AppState, Event};
pub use error::AppError;
pub use models::{Ingredient, Like, Likes, Recipe, Search, ServingsChange, ShoppingList, ShoppingListItem};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use view::{paginate, TermView, View};

use std::time::Duration;

/// Search for recipes using ambient configuration and a default HTTP client.
pub async fn search_recipes(query: &str) -> Result<Vec<SearchHit>, AppError> {
    let config = AppConfig::load()?;
    let api = HttpRecipeApi::new(config.api_base_url, Some(Duration::from_secs(config.timeout)));
    api.search(query).await
}

/// Fetch and fully derive one recipe using ambient configuration and a
/// default HTTP client.
pub async fn fetch_recipe(id: &str) -> Result<Recipe, AppError> {
    let config = AppConfig::load()?;
    let api = HttpRecipeApi::new(config.api_base_url, Some(Duration::from_secs(config.timeout)));
    Recipe::fetch(&api, id).await
}
