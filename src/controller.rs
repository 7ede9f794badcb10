//! Application state and the controller that applies user actions to it.
//!
//! Every action runs to completion before the next one is dispatched, since
//! `dispatch` holds `&mut App` across its network await. A recipe or search
//! response can therefore never land on top of a newer one.

use log::{debug, error, info, warn};
use std::ops::ControlFlow;
use std::sync::Arc;

use crate::action::Action;
use crate::api::RecipeSource;
use crate::error::AppError;
use crate::model::{Likes, Recipe, Search, ServingsChange, ShoppingList};
use crate::storage::Storage;
use crate::ui::{Region, Ui};
use crate::view;

/// Unit used for items typed in by hand
pub const MANUAL_ITEM_UNIT: &str = "TBC";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading(String),
    Loaded(Search),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecipePhase {
    #[default]
    Idle,
    Loading(String),
    Loaded(Recipe),
    Failed { id: String, message: String },
}

/// Everything the user has done during this session
pub struct AppState {
    pub search: SearchPhase,
    /// 1-based page of the current search results
    pub page: usize,
    pub recipe: RecipePhase,
    /// Created on first use
    pub list: Option<ShoppingList>,
    pub likes: Likes,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            search: SearchPhase::Idle,
            page: 1,
            recipe: RecipePhase::Idle,
            list: None,
            likes: Likes::new(storage),
        }
    }

    pub fn loaded_search(&self) -> Option<&Search> {
        match &self.search {
            SearchPhase::Loaded(search) => Some(search),
            _ => None,
        }
    }

    pub fn loaded_recipe(&self) -> Option<&Recipe> {
        match &self.recipe {
            RecipePhase::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }

    fn loaded_recipe_mut(&mut self) -> Option<&mut Recipe> {
        match &mut self.recipe {
            RecipePhase::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }
}

pub struct App {
    state: AppState,
    source: Box<dyn RecipeSource>,
    per_page: usize,
}

impl App {
    pub fn new(source: Box<dyn RecipeSource>, storage: Arc<dyn Storage>, per_page: usize) -> Self {
        Self {
            state: AppState::new(storage),
            source,
            per_page: per_page.max(1),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Restores liked recipes and shows them.
    pub fn start(&mut self, ui: &mut dyn Ui) {
        self.state.likes.read_storage();
        info!("Starting with {} liked recipes", self.state.likes.num_likes());

        ui.render(Region::LikesMenu, &view::likes::likes_menu(self.state.likes.num_likes()));
        for like in self.state.likes.likes() {
            ui.append(Region::Likes, &view::likes::render_like(like));
        }
    }

    pub async fn dispatch(&mut self, action: Action, ui: &mut dyn Ui) -> ControlFlow<()> {
        debug!("Dispatching {:?}", action);
        match action {
            Action::Search(query) => self.control_search(&query, ui).await,
            Action::Page(page) => self.control_page(page, ui),
            Action::Open(id) => self.control_recipe(&id, ui).await,
            Action::Servings(change) => self.control_servings(change, ui),
            Action::AddToList => self.control_list(ui),
            Action::ToggleLike => self.control_like(ui),
            Action::DeleteItem(id) => self.control_delete_item(&id, ui),
            Action::UpdateCount(id, count) => self.control_update_count(&id, count, ui),
            Action::EmptyList => self.control_empty_list(ui),
            Action::AddManualItem => self.control_manual_item(ui),
            Action::ShowList => {
                let items = self.state.list.as_ref().map(|l| l.items()).unwrap_or_default();
                ui.render(Region::Shopping, &view::list::render_list(items));
            }
            Action::ShowLikes => {
                ui.render(Region::LikesMenu, &view::likes::likes_menu(self.state.likes.num_likes()));
                ui.render(Region::Likes, &view::likes::render_likes(self.state.likes.likes()));
            }
            Action::Help => ui.render(Region::Help, view::base::HELP),
            Action::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    async fn control_search(&mut self, query: &str, ui: &mut dyn Ui) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.state.search = SearchPhase::Loading(query.to_string());
        self.state.page = 1;
        ui.clear(Region::Results);
        ui.clear(Region::Pages);
        ui.render_loader(Region::Results);

        let mut search = Search::new(query);
        let result = search.get_results(self.source.as_ref()).await;
        ui.clear_loader();

        match result {
            Ok(()) => {
                self.state.search = SearchPhase::Loaded(search);
                self.render_results(ui);
            }
            Err(e) => {
                error!("Search for '{}' failed: {}", query, e);
                ui.alert(view::base::SEARCH_FAILED);
                self.state.search = SearchPhase::Failed(e.to_string());
            }
        }
    }

    fn control_page(&mut self, page: usize, ui: &mut dyn Ui) {
        let Some(search) = self.state.loaded_search() else {
            ui.alert(view::base::NO_SEARCH);
            return;
        };
        let num_pages = search.num_pages(self.per_page);
        if page == 0 || page > num_pages {
            debug!("Ignoring page {} of {}", page, num_pages);
            return;
        }

        self.state.page = page;
        ui.clear(Region::Results);
        self.render_results(ui);
    }

    fn render_results(&self, ui: &mut dyn Ui) {
        let Some(search) = self.state.loaded_search() else {
            return;
        };
        let selected = match &self.state.recipe {
            RecipePhase::Loading(id) | RecipePhase::Failed { id, .. } => Some(id.as_str()),
            RecipePhase::Loaded(recipe) => Some(recipe.id.as_str()),
            RecipePhase::Idle => None,
        };

        let page = search.page(self.state.page, self.per_page);
        ui.render(Region::Results, &view::search::render_results(page, selected));
        ui.render(
            Region::Pages,
            &view::search::render_buttons(self.state.page, search.num_pages(self.per_page)),
        );
    }

    async fn control_recipe(&mut self, id: &str, ui: &mut dyn Ui) {
        let id = id.trim();
        if id.is_empty() {
            return;
        }

        ui.clear(Region::Recipe);
        ui.render_loader(Region::Recipe);
        self.state.recipe = RecipePhase::Loading(id.to_string());

        // highlight the selection among the results
        self.render_results(ui);

        let result = Recipe::fetch(id, self.source.as_ref()).await;
        ui.clear_loader();

        match result {
            Ok(recipe) => {
                info!("Opened recipe {} ({})", recipe.id, recipe.title);
                let liked = self.state.likes.is_liked(&recipe.id);
                ui.render(Region::Recipe, &view::recipe::render_recipe(&recipe, liked));
                self.state.recipe = RecipePhase::Loaded(recipe);
            }
            Err(e) => {
                error!("Loading recipe {} failed: {}", id, e);
                ui.alert(view::base::RECIPE_FAILED);
                self.state.recipe = RecipePhase::Failed {
                    id: id.to_string(),
                    message: e.to_string(),
                };
            }
        }
    }

    fn control_servings(&mut self, change: ServingsChange, ui: &mut dyn Ui) {
        let liked = match self.state.loaded_recipe() {
            Some(recipe) => self.state.likes.is_liked(&recipe.id),
            None => {
                ui.alert(view::base::NO_RECIPE);
                return;
            }
        };
        let Some(recipe) = self.state.loaded_recipe_mut() else {
            return;
        };

        if change == ServingsChange::Decrease && recipe.servings <= 1 {
            debug!("Recipe {} is already at one serving", recipe.id);
            return;
        }
        recipe.update_servings(change);
        ui.render(Region::Recipe, &view::recipe::render_recipe(recipe, liked));
    }

    fn control_list(&mut self, ui: &mut dyn Ui) {
        let RecipePhase::Loaded(recipe) = &self.state.recipe else {
            ui.alert(view::base::NO_RECIPE);
            return;
        };

        let list = self.state.list.get_or_insert_with(ShoppingList::new);
        for ing in &recipe.ingredients {
            let item = list.add_item(ing.count.unwrap_or(1.0), ing.unit.clone(), ing.ingredient.clone());
            ui.append(Region::Shopping, &view::list::render_item(&item));
        }
        info!("Added {} ingredients of {} to the shopping list", recipe.ingredients.len(), recipe.id);

        ui.render(Region::ShoppingButtons, &view::list::render_buttons());
    }

    fn control_like(&mut self, ui: &mut dyn Ui) {
        let RecipePhase::Loaded(recipe) = &self.state.recipe else {
            ui.alert(view::base::NO_RECIPE);
            return;
        };
        let likes = &mut self.state.likes;

        if !likes.is_liked(&recipe.id) {
            match likes.add_like(&recipe.id, &recipe.title, &recipe.author, &recipe.img) {
                Ok(like) => {
                    ui.render(Region::LikeButton, &view::likes::like_button(true));
                    ui.append(Region::Likes, &view::likes::render_like(&like));
                }
                Err(e) => {
                    error!("Failed to persist like of {}: {}", recipe.id, e);
                    ui.alert(view::base::SAVE_FAILED);
                }
            }
        } else {
            match likes.delete_like(&recipe.id) {
                Ok(()) => {
                    ui.render(Region::LikeButton, &view::likes::like_button(false));
                    ui.remove(Region::Likes, &recipe.id);
                }
                Err(e) => {
                    error!("Failed to persist unlike of {}: {}", recipe.id, e);
                    ui.alert(view::base::SAVE_FAILED);
                }
            }
        }

        ui.render(Region::LikesMenu, &view::likes::likes_menu(likes.num_likes()));
    }

    fn control_delete_item(&mut self, id: &str, ui: &mut dyn Ui) {
        let Some(list) = self.state.list.as_mut() else {
            ui.alert(&AppError::NotFound(id.to_string()).to_string());
            return;
        };
        match list.delete_item(id) {
            Ok(item) => {
                debug!("Deleted list item {} ({})", item.id, item.ingredient);
                ui.remove(Region::Shopping, id);
            }
            Err(e) => {
                warn!("{}", e);
                ui.alert(&e.to_string());
            }
        }
    }

    fn control_update_count(&mut self, id: &str, count: f64, ui: &mut dyn Ui) {
        if !count.is_finite() || count <= 0.0 {
            debug!("Ignoring count {} for {}", count, id);
            return;
        }
        let Some(list) = self.state.list.as_mut() else {
            ui.alert(&AppError::NotFound(id.to_string()).to_string());
            return;
        };
        match list.update_count(id, count) {
            Ok(()) => ui.render(Region::Shopping, &view::list::render_list(list.items())),
            Err(e) => {
                warn!("{}", e);
                ui.alert(&e.to_string());
            }
        }
    }

    fn control_empty_list(&mut self, ui: &mut dyn Ui) {
        let Some(list) = self.state.list.as_mut() else {
            return;
        };
        for item in list.items() {
            ui.remove(Region::Shopping, &item.id);
        }
        list.delete_list();
    }

    fn control_manual_item(&mut self, ui: &mut dyn Ui) {
        let Some(name) = ui
            .prompt("Ingredient name?")
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty())
        else {
            return;
        };
        let count = ui
            .prompt("How much?")
            .and_then(|c| c.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite() && *c > 0.0);
        let Some(count) = count else {
            ui.alert(view::base::INVALID_QUANTITY);
            return;
        };
        debug!("Manual list item: {} {}", count, name);

        let list = self.state.list.get_or_insert_with(ShoppingList::new);
        let item = list.add_item(count, MANUAL_ITEM_UNIT, name);
        ui.append(Region::Shopping, &view::list::render_item(&item));
        ui.render(Region::ShoppingButtons, &view::list::render_buttons());
    }
}
