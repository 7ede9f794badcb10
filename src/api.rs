//! Client for the forkify recipe API.
//!
//! Two read-only endpoints are consumed: `search?q=` and `get?rId=`.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::model::RecipeSummary;

/// Full recipe payload as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub ingredients: Vec<String>,
    pub servings: Option<u32>,
}

/// Anything that can answer recipe searches and detail lookups
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    async fn get(&self, id: &str) -> Result<RecipeData>;
}

#[derive(Deserialize)]
struct SearchResponse {
    recipes: Vec<WireSummary>,
}

#[derive(Deserialize)]
struct WireSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Deserialize)]
struct GetResponse {
    recipe: WireRecipe,
}

#[derive(Deserialize)]
struct WireRecipe {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    ingredients: Vec<String>,
    #[serde(default)]
    servings: Option<u32>,
}

impl From<WireSummary> for RecipeSummary {
    fn from(wire: WireSummary) -> Self {
        RecipeSummary {
            id: wire.recipe_id,
            title: wire.title,
            author: wire.publisher,
            img: wire.image_url,
        }
    }
}

impl From<WireRecipe> for RecipeData {
    fn from(wire: WireRecipe) -> Self {
        RecipeData {
            id: wire.recipe_id,
            title: wire.title,
            author: wire.publisher,
            img: wire.image_url,
            url: wire.source_url,
            ingredients: wire.ingredients,
            servings: wire.servings.filter(|s| *s > 0),
        }
    }
}

pub struct ForkifyClient {
    client: Client,
    base_url: String,
}

impl ForkifyClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::build(config.api_base_url.clone(), config.timeout())
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), Duration::from_secs(30))
    }

    fn build(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; ForkifyCli/0.3)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status { status, url });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait]
impl RecipeSource for ForkifyClient {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let body = self.fetch("search", &[("q", query)]).await?;
        let response: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("search response: {e}")))?;

        Ok(response.recipes.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: &str) -> Result<RecipeData> {
        let body = self.fetch("get", &[("rId", id)]).await?;
        let response: GetResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("recipe response: {e}")))?;

        Ok(response.recipe.into())
    }
}
