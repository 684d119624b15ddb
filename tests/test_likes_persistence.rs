use forkful::models::{Like, ShoppingListItem};
use forkful::storage::{FileStore, KeyValueStore};
use forkful::view::Target;
use forkful::{App, Event, Likes, Recipe, RecipeApi, RecipeData, SearchHit, View};

use async_trait::async_trait;
use forkful::AppError;

/// Renderer that drops everything; these tests only care about state.
struct NullView;

impl View for NullView {
    fn render_results(&mut self, _hits: &[SearchHit], _page: usize, _page_size: usize) {}
    fn highlight_selected(&mut self, _id: &str) {}
    fn clear_results(&mut self) {}
    fn render_recipe(&mut self, _recipe: &Recipe, _is_liked: bool) {}
    fn clear_recipe(&mut self) {}
    fn update_servings_display(&mut self, _recipe: &Recipe) {}
    fn render_loader(&mut self, _target: Target) {}
    fn clear_loader(&mut self) {}
    fn render_list_item(&mut self, _item: &ShoppingListItem) {}
    fn delete_list_item(&mut self, _id: &str) {}
    fn render_like(&mut self, _like: &Like) {}
    fn delete_like(&mut self, _id: &str) {}
    fn toggle_like_button(&mut self, _liked: bool) {}
    fn toggle_like_menu(&mut self, _num_likes: usize) {}
    fn alert(&mut self, _message: &str) {}
}

struct StaticApi;

#[async_trait]
impl RecipeApi for StaticApi {
    async fn search(&self, _query: &str) -> Result<Vec<SearchHit>, AppError> {
        Ok(Vec::new())
    }

    async fn recipe(&self, id: &str) -> Result<RecipeData, AppError> {
        Ok(RecipeData {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            author: "Tester".to_string(),
            img: String::new(),
            url: String::new(),
            servings: Some(2),
            ingredients: vec!["1 cup water".to_string()],
        })
    }
}

fn open_store(dir: &std::path::Path) -> Box<dyn KeyValueStore> {
    Box::new(FileStore::open(dir).unwrap())
}

#[tokio::test]
async fn test_likes_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut app = App::new(
            Box::new(StaticApi),
            Box::new(NullView),
            open_store(dir.path()),
            10,
        );
        app.handle(Event::RecipeSelect("1".to_string())).await;
        app.handle(Event::LikeToggle).await;
        app.handle(Event::RecipeSelect("2".to_string())).await;
        app.handle(Event::LikeToggle).await;
        assert_eq!(app.state.likes.num_likes(), 2);
    }

    // Simulated restart: a fresh app over the same directory
    let app = App::new(
        Box::new(StaticApi),
        Box::new(NullView),
        open_store(dir.path()),
        10,
    );
    assert_eq!(app.state.likes.num_likes(), 2);
    assert!(app.state.likes.is_liked("1"));
    assert!(app.state.likes.is_liked("2"));
}

#[tokio::test]
async fn test_unlike_is_persisted_too() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut app = App::new(
            Box::new(StaticApi),
            Box::new(NullView),
            open_store(dir.path()),
            10,
        );
        app.handle(Event::RecipeSelect("1".to_string())).await;
        app.handle(Event::LikeToggle).await;
        app.handle(Event::LikeToggle).await;
    }

    let app = App::new(
        Box::new(StaticApi),
        Box::new(NullView),
        open_store(dir.path()),
        10,
    );
    assert_eq!(app.state.likes.num_likes(), 0);
    assert!(!app.state.likes.is_liked("1"));
}

#[test]
fn test_corrupt_storage_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.write(forkful::models::LIKES_KEY, b"{ not json").unwrap();

    let mut likes = Likes::new(Box::new(store));
    likes.read_storage();
    assert_eq!(likes.num_likes(), 0);
}
