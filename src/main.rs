use std::env;
use std::time::Duration;

use forkful::{App, AppConfig, Event, FileStore, HttpRecipeApi, KeyValueStore, MemoryStore, ServingsChange, TermView};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let query = args
        .get(1)
        .ok_or("Please provide a search query as an argument")?;

    let config = AppConfig::load().unwrap_or_default();
    let api = HttpRecipeApi::new(
        config.api_base_url.clone(),
        Some(Duration::from_secs(config.timeout)),
    );
    let store: Box<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Box::new(FileStore::open(dir)?),
        None => Box::new(MemoryStore::new()),
    };

    let mut app = App::new(
        Box::new(api),
        Box::new(TermView::default()),
        store,
        config.page_size,
    );

    app.handle(Event::SearchSubmit(query.clone())).await;

    // Open the first hit, scale it up once and bookmark it
    let first = app
        .state
        .search
        .as_ref()
        .and_then(|s| s.result.first())
        .map(|hit| hit.id.clone());
    if let Some(id) = first {
        app.handle(Event::RecipeSelect(id)).await;
        app.handle(Event::ServingsClick(ServingsChange::Inc)).await;
        app.handle(Event::AddToList).await;
        app.handle(Event::LikeToggle).await;
    }

    Ok(())
}
