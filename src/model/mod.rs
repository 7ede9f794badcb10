mod ingredient;
mod likes;
mod list;
mod recipe;
mod search;

pub use ingredient::{parse_ingredients, parse_line, IngredientLine};
pub use likes::{LikedRecipe, Likes, LIKES_KEY};
pub use list::{ShoppingList, ShoppingListItem};
pub use recipe::{Recipe, ServingsChange, DEFAULT_SERVINGS};
pub use search::{RecipeSummary, Search};
