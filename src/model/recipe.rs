use log::{debug, info};

use crate::api::{RecipeData, RecipeSource};
use crate::error::Result;
use crate::model::ingredient::{parse_ingredients, IngredientLine};

/// Servings assumed when the API does not provide any
pub const DEFAULT_SERVINGS: u32 = 4;

/// Minutes of preparation estimated per group of three ingredients
const MINUTES_PER_PERIOD: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Increase,
    Decrease,
}

/// A recipe opened for viewing, with parsed and scalable ingredients
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub servings: u32,
    /// Estimated preparation time in minutes
    pub time: u32,
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Fetches the recipe with `id` and derives its ingredients, time and servings.
    pub async fn fetch(id: &str, source: &dyn RecipeSource) -> Result<Self> {
        let data = source.get(id).await?;
        debug!("Fetched recipe {} with {} ingredient lines", data.id, data.ingredients.len());
        Ok(Self::from_data(data))
    }

    pub fn from_data(data: RecipeData) -> Self {
        let mut recipe = Recipe {
            id: data.id,
            title: data.title,
            author: data.author,
            img: data.img,
            url: data.url,
            servings: DEFAULT_SERVINGS,
            time: 0,
            ingredients: parse_ingredients(&data.ingredients),
        };
        recipe.calc_time();
        recipe.calc_servings(data.servings);
        recipe
    }

    pub fn calc_time(&mut self) {
        let periods = self.ingredients.len().div_ceil(3) as u32;
        self.time = periods * MINUTES_PER_PERIOD;
    }

    pub fn calc_servings(&mut self, from_api: Option<u32>) {
        self.servings = from_api.filter(|s| *s > 0).unwrap_or(DEFAULT_SERVINGS);
    }

    /// Scales every ingredient by `new / old` servings.
    ///
    /// Callers must not decrease below one serving; ingredients without a
    /// count are scaled as if they had a count of one.
    pub fn update_servings(&mut self, change: ServingsChange) {
        let old = self.servings;
        let new = match change {
            ServingsChange::Increase => old.saturating_add(1),
            ServingsChange::Decrease => old.saturating_sub(1),
        };
        if old == 0 || new == old {
            self.servings = new;
            return;
        }

        let factor = f64::from(new) / f64::from(old);
        for ing in &mut self.ingredients {
            ing.count = Some(ing.count.unwrap_or(1.0) * factor);
        }
        self.servings = new;
        info!("Recipe {} scaled from {} to {} servings", self.id, old, new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(ingredients: &[&str], servings: Option<u32>) -> RecipeData {
        RecipeData {
            id: "47746".to_string(),
            title: "Best Pizza Dough Ever".to_string(),
            author: "101 Cookbooks".to_string(),
            img: "http://img/2.jpg".to_string(),
            url: "http://www.101cookbooks.com".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            servings,
        }
    }

    fn counts(recipe: &Recipe) -> Vec<f64> {
        recipe
            .ingredients
            .iter()
            .map(|i| i.count.unwrap_or(1.0))
            .collect()
    }

    #[test]
    fn test_time_and_servings() {
        let recipe = Recipe::from_data(data(&["1 egg", "2 cups flour", "salt", "1 tsp yeast"], None));
        assert_eq!(recipe.time, 30);
        assert_eq!(recipe.servings, 4);

        let recipe = Recipe::from_data(data(&["1 egg", "2 eggs", "3 eggs"], Some(6)));
        assert_eq!(recipe.time, 15);
        assert_eq!(recipe.servings, 6);

        let recipe = Recipe::from_data(data(&[], Some(0)));
        assert_eq!(recipe.time, 0);
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
    }

    #[test]
    fn test_doubling_servings_doubles_counts() {
        let mut recipe = Recipe::from_data(data(&["2 tbsp olive oil", "1/2 cup milk", "3 eggs"], Some(2)));
        let before = counts(&recipe);

        recipe.update_servings(ServingsChange::Increase);
        assert_eq!(recipe.servings, 3);
        recipe.update_servings(ServingsChange::Increase);
        assert_eq!(recipe.servings, 4);

        for (b, a) in before.iter().zip(counts(&recipe)) {
            assert!((a - b * 2.0).abs() < 1e-9, "{a} != 2 * {b}");
        }
    }

    #[test]
    fn test_halving_then_doubling_restores_counts() {
        let mut recipe = Recipe::from_data(data(&["4 1/2 cups flour", "1 tsp salt", "3 eggs"], None));
        let before = counts(&recipe);

        recipe.update_servings(ServingsChange::Decrease);
        recipe.update_servings(ServingsChange::Decrease);
        assert_eq!(recipe.servings, 2);
        recipe.update_servings(ServingsChange::Increase);
        recipe.update_servings(ServingsChange::Increase);
        assert_eq!(recipe.servings, 4);

        for (b, a) in before.iter().zip(counts(&recipe)) {
            assert!((a - b).abs() < 1e-9, "{a} != {b}");
        }
    }

    #[test]
    fn test_missing_count_scales_from_one() {
        let mut recipe = Recipe::from_data(data(&["salt to taste"], Some(1)));
        assert_eq!(recipe.ingredients[0].count, None);

        recipe.update_servings(ServingsChange::Increase);
        assert_eq!(recipe.ingredients[0].count, Some(2.0));
    }
}
