use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

/// Session-scoped shopping list; duplicate ingredients are never merged
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> ShoppingListItem {
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        debug!("Adding list item {} ({})", item.id, item.ingredient);
        self.items.push(item.clone());
        item
    }

    pub fn delete_item(&mut self, id: &str) -> Result<ShoppingListItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn update_count(&mut self, id: &str, new_count: f64) -> Result<()> {
        if !new_count.is_finite() || new_count <= 0.0 {
            return Err(AppError::InvalidAction(format!(
                "count must be positive, got {new_count}"
            )));
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        item.count = new_count;
        Ok(())
    }

    /// Drops every item. Rendered rows must be removed by the caller.
    pub fn delete_list(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
