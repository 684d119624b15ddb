use log::{debug, warn};

use crate::api::RecipeApi;
use crate::models::{Likes, Recipe, Search, ServingsChange, ShoppingList};
use crate::storage::KeyValueStore;
use crate::view::{Target, View};

/// Message shown for every failed fetch; kinds are not distinguished.
const GENERIC_ALERT: &str = "Something went wrong :(";

/// Browser-style UI events the controller dispatches on.
#[derive(Debug, Clone)]
pub enum Event {
    /// Search form submitted with a query
    SearchSubmit(String),
    /// Pagination button for a result page (1-based)
    PageClick(usize),
    /// Location-hash change selecting a recipe by id
    RecipeSelect(String),
    /// Add all ingredients of the current recipe to the shopping list
    AddToList,
    /// Delete a shopping-list item by its rendered id
    ShoppingDelete(String),
    /// Edit the count of a shopping-list item
    ShoppingUpdateCount(String, f64),
    /// Toggle the like status of the current recipe
    LikeToggle,
    /// Servings +/- button
    ServingsClick(ServingsChange),
}

/// The single shared application state, owned by the controller.
///
/// At most one active search, recipe and shopping list; exactly one likes
/// collection, initialized at startup and kept across navigation.
pub struct AppState {
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: Option<ShoppingList>,
    pub likes: Likes,
}

/// Wires events to model mutations and view renders.
///
/// Each handler runs validate → mutate (awaiting any fetch) → render, so
/// within one invocation the mutation happens-before its render. Ordering
/// across handlers is not guaranteed: a second `RecipeSelect` issued while
/// an earlier fetch is in flight simply overwrites state when it resolves,
/// and there is no cancellation or fetch-level timeout.
pub struct App {
    pub state: AppState,
    api: Box<dyn RecipeApi>,
    view: Box<dyn View>,
    page_size: usize,
}

impl App {
    /// Construct the app and restore persisted likes.
    pub fn new(
        api: Box<dyn RecipeApi>,
        view: Box<dyn View>,
        store: Box<dyn KeyValueStore>,
        page_size: usize,
    ) -> Self {
        let mut likes = Likes::new(store);
        likes.read_storage();

        let mut app = App {
            state: AppState {
                search: None,
                recipe: None,
                list: None,
                likes,
            },
            api,
            view,
            page_size,
        };

        app.view.toggle_like_menu(app.state.likes.num_likes());
        for like in app.state.likes.likes().to_vec() {
            app.view.render_like(&like);
        }
        app
    }

    /// Dispatch one UI event.
    pub async fn handle(&mut self, event: Event) {
        debug!("event: {event:?}");
        match event {
            Event::SearchSubmit(query) => self.control_search(&query).await,
            Event::PageClick(page) => self.control_page(page),
            Event::RecipeSelect(id) => self.control_recipe(&id).await,
            Event::AddToList => self.control_list(),
            Event::ShoppingDelete(id) => self.control_shopping_delete(&id),
            Event::ShoppingUpdateCount(id, count) => self.control_shopping_update(&id, count),
            Event::LikeToggle => self.control_like(),
            Event::ServingsClick(change) => self.control_servings(change),
        }
    }

    async fn control_search(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        self.view.clear_results();
        self.view.render_loader(Target::SearchResults);

        match Search::fetch(self.api.as_ref(), query).await {
            Ok(search) => {
                let search = self.state.search.insert(search);
                self.view.clear_loader();
                self.view.render_results(&search.result, 1, self.page_size);
            }
            Err(e) => {
                warn!("search failed: {e}");
                self.view.clear_loader();
                self.view.alert(GENERIC_ALERT);
            }
        }
    }

    fn control_page(&mut self, page: usize) {
        if let Some(search) = &self.state.search {
            self.view.clear_results();
            self.view.render_results(&search.result, page, self.page_size);
        }
    }

    async fn control_recipe(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }

        self.view.clear_recipe();
        self.view.render_loader(Target::Recipe);
        if self.state.search.is_some() {
            self.view.highlight_selected(id);
        }

        match Recipe::fetch(self.api.as_ref(), id).await {
            Ok(recipe) => {
                let recipe = self.state.recipe.insert(recipe);
                self.view.clear_loader();
                let is_liked = self.state.likes.is_liked(id);
                self.view.render_recipe(recipe, is_liked);
            }
            Err(e) => {
                warn!("recipe fetch failed: {e}");
                self.view.clear_loader();
                self.view.alert(GENERIC_ALERT);
            }
        }
    }

    fn control_list(&mut self) {
        let Some(recipe) = &self.state.recipe else {
            return;
        };
        let ingredients = recipe.ingredients.clone();

        let list = self.state.list.get_or_insert_with(ShoppingList::new);
        for ing in ingredients {
            let item = list.add_item(ing.count, ing.unit, ing.ingredient).clone();
            self.view.render_list_item(&item);
        }
    }

    fn control_shopping_delete(&mut self, id: &str) {
        if let Some(list) = &mut self.state.list {
            list.delete_item(id);
            self.view.delete_list_item(id);
        }
    }

    fn control_shopping_update(&mut self, id: &str, count: f64) {
        if let Some(list) = &mut self.state.list {
            list.update_count(id, count);
        }
    }

    fn control_like(&mut self) {
        let Some(recipe) = &self.state.recipe else {
            return;
        };
        let id = recipe.id.clone();

        if !self.state.likes.is_liked(&id) {
            let like = self
                .state
                .likes
                .add_like(&id, &recipe.title, &recipe.author, &recipe.img)
                .clone();
            self.view.toggle_like_button(true);
            self.view.render_like(&like);
        } else {
            self.state.likes.delete_like(&id);
            self.view.toggle_like_button(false);
            self.view.delete_like(&id);
        }

        self.view.toggle_like_menu(self.state.likes.num_likes());
    }

    fn control_servings(&mut self, change: ServingsChange) {
        let Some(recipe) = &mut self.state.recipe else {
            return;
        };
        // Decrease only makes sense above the floor of one serving
        if change == ServingsChange::Dec && recipe.servings <= 1 {
            return;
        }

        recipe.update_servings(change);
        self.view.update_servings_display(recipe);
    }
}
