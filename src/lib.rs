pub mod action;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod storage;
pub mod ui;
pub mod view;

pub use action::Action;
pub use api::{ForkifyClient, RecipeData, RecipeSource};
pub use config::AppConfig;
pub use controller::{App, AppState, RecipePhase, SearchPhase};
pub use error::{AppError, ErrorKind, Result};
pub use model::{
    IngredientLine, LikedRecipe, Likes, Recipe, RecipeSummary, Search, ServingsChange,
    ShoppingList, ShoppingListItem,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use ui::{Region, Terminal, Ui};

/// Searches the configured recipe API in one call.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let results = forkify::search_recipes("pizza").await?;
/// println!("{} recipes", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<RecipeSummary>> {
    let config = AppConfig::load()?;
    let client = ForkifyClient::new(&config)?;
    let mut search = Search::new(query);
    search.get_results(&client).await?;
    Ok(search.results)
}

/// Fetches a recipe by id with parsed ingredients, time and servings.
pub async fn fetch_recipe(id: &str) -> Result<Recipe> {
    let config = AppConfig::load()?;
    let client = ForkifyClient::new(&config)?;
    Recipe::fetch(id, &client).await
}
