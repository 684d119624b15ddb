use crate::api::{RecipeApi, SearchHit};
use crate::error::AppError;

/// One search: the query and its full result list.
///
/// Replaced wholesale on every new search; pagination is a view-layer slice
/// over `result`, never model state.
#[derive(Debug)]
pub struct Search {
    pub query: String,
    pub result: Vec<SearchHit>,
}

impl Search {
    /// Run `query` against the recipe API.
    ///
    /// Transport failures and non-success responses propagate unmodified.
    pub async fn fetch(api: &dyn RecipeApi, query: &str) -> Result<Search, AppError> {
        let result = api.search(query).await?;
        Ok(Search {
            query: query.to_string(),
            result,
        })
    }
}
