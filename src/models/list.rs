/// One shopping-list entry, decoupled from its source recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Ordered shopping list; insertion order is display order.
///
/// Delete and update trust the caller's ids (the UI only replays ids it
/// rendered itself), so a miss is a silent no-op rather than an error.
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        ShoppingList::default()
    }

    /// Append a new item with a freshly generated unique id.
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> &ShoppingListItem {
        self.next_id += 1;
        let item = ShoppingListItem {
            id: format!("item-{}", self.next_id),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        let position = self.items.len();
        self.items.push(item);
        &self.items[position]
    }

    /// Remove the item with `id`; no-op when absent.
    pub fn delete_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Set the count of the item with `id`; no-op when absent.
    pub fn update_count(&mut self, id: &str, new_count: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = Some(new_count);
        }
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }
}
