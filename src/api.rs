use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::error::AppError;

/// A single entry in a search result list.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "publisher")]
    pub author: String,
    #[serde(rename = "image_url")]
    pub img: String,
}

/// Raw recipe payload as served by the API, before ingredient parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeData {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "publisher")]
    pub author: String,
    #[serde(rename = "image_url")]
    pub img: String,
    #[serde(rename = "source_url")]
    pub url: String,
    pub servings: Option<u32>,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    recipes: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct RecipeEnvelope {
    recipe: RecipeData,
}

/// The external recipe-data service, as seen by the models.
///
/// Both operations are read-only; the service shape is an external contract
/// so implementations only translate transport and payload failures into
/// [`AppError`].
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search for recipes matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, AppError>;

    /// Fetch a single recipe by id.
    async fn recipe(&self, id: &str) -> Result<RecipeData, AppError>;
}

/// Production [`RecipeApi`] over HTTP.
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("forkful/0.1")
            .build()
            .expect("Failed to create HTTP client");

        HttpRecipeApi {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, AppError> {
        let response = self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)
            .map_err(|e| AppError::ParseError(format!("search response: {e}")))?;
        debug!("search {:?} returned {} hits", query, envelope.recipes.len());

        Ok(envelope.recipes)
    }

    async fn recipe(&self, id: &str) -> Result<RecipeData, AppError> {
        let response = self
            .client
            .get(format!("{}/api/recipe/{}", self.base_url, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(id.to_string()));
        }
        let response = response.error_for_status()?;

        let body = response.text().await?;
        let envelope: RecipeEnvelope = serde_json::from_str(&body)
            .map_err(|e| AppError::ParseError(format!("recipe response: {e}")))?;

        Ok(envelope.recipe)
    }
}
