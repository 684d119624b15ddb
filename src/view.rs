use crate::api::SearchHit;
use crate::models::{Like, Recipe, ShoppingListItem};

/// UI regions a loader can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    SearchResults,
    Recipe,
}

/// The rendering collaborator.
///
/// The controller calls these after each model mutation with a snapshot of
/// the data to show; implementations own all presentation concerns.
pub trait View: Send {
    fn render_results(&mut self, hits: &[SearchHit], page: usize, page_size: usize);
    fn highlight_selected(&mut self, id: &str);
    fn clear_results(&mut self);

    fn render_recipe(&mut self, recipe: &Recipe, is_liked: bool);
    fn clear_recipe(&mut self);
    fn update_servings_display(&mut self, recipe: &Recipe);

    fn render_loader(&mut self, target: Target);
    fn clear_loader(&mut self);

    fn render_list_item(&mut self, item: &ShoppingListItem);
    fn delete_list_item(&mut self, id: &str);

    fn render_like(&mut self, like: &Like);
    fn delete_like(&mut self, id: &str);
    fn toggle_like_button(&mut self, liked: bool);
    fn toggle_like_menu(&mut self, num_likes: usize);

    /// Generic blocking "something went wrong" surface; no retry, no
    /// distinction between failure kinds.
    fn alert(&mut self, message: &str);
}

/// Slice one display page out of a full result list.
///
/// Page indexes start at 1. Out-of-range pages yield an empty slice; the
/// page index is a display parameter, never model state.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Total number of pages needed for `len` items.
pub fn num_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Terminal renderer used by the demo binary.
#[derive(Default)]
pub struct TermView;

impl View for TermView {
    fn render_results(&mut self, hits: &[SearchHit], page: usize, page_size: usize) {
        let total = num_pages(hits.len(), page_size);
        println!("-- results (page {page}/{total}) --");
        for hit in paginate(hits, page, page_size) {
            println!("  [{}] {} — {}", hit.id, hit.title, hit.author);
        }
    }

    fn highlight_selected(&mut self, id: &str) {
        println!("* selected {id}");
    }

    fn clear_results(&mut self) {}

    fn render_recipe(&mut self, recipe: &Recipe, is_liked: bool) {
        let heart = if is_liked { "♥" } else { " " };
        println!("== {} {heart} ==", recipe.title);
        println!(
            "by {} | ~{} min | serves {}",
            recipe.author, recipe.cook_time, recipe.servings
        );
        for ing in &recipe.ingredients {
            match ing.count {
                Some(count) => println!("  {:.2} {} {}", count, ing.unit, ing.ingredient),
                None => println!("  {}", ing.ingredient),
            }
        }
    }

    fn clear_recipe(&mut self) {}

    fn update_servings_display(&mut self, recipe: &Recipe) {
        println!("serves {}", recipe.servings);
        for ing in &recipe.ingredients {
            if let Some(count) = ing.count {
                println!("  {:.2} {} {}", count, ing.unit, ing.ingredient);
            }
        }
    }

    fn render_loader(&mut self, _target: Target) {
        println!("loading...");
    }

    fn clear_loader(&mut self) {}

    fn render_list_item(&mut self, item: &ShoppingListItem) {
        match item.count {
            Some(count) => println!("+ {:.2} {} {} ({})", count, item.unit, item.ingredient, item.id),
            None => println!("+ {} ({})", item.ingredient, item.id),
        }
    }

    fn delete_list_item(&mut self, id: &str) {
        println!("- removed {id}");
    }

    fn render_like(&mut self, like: &Like) {
        println!("♥ {} — {}", like.title, like.author);
    }

    fn delete_like(&mut self, id: &str) {
        println!("unliked {id}");
    }

    fn toggle_like_button(&mut self, liked: bool) {
        println!("like button: {}", if liked { "on" } else { "off" });
    }

    fn toggle_like_menu(&mut self, num_likes: usize) {
        println!("likes menu: {num_likes}");
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_slices_fixed_pages() {
        let items: Vec<u32> = (0..25).collect();

        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_num_pages() {
        assert_eq!(num_pages(25, 10), 3);
        assert_eq!(num_pages(30, 10), 3);
        assert_eq!(num_pages(0, 10), 0);
    }
}
