mod likes;
mod list;
mod recipe;
mod search;

pub use likes::{Like, Likes, LIKES_KEY};
pub use list::{ShoppingList, ShoppingListItem};
pub use recipe::{Ingredient, Recipe, ServingsChange};
pub use search::Search;
