use log::warn;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Storage key under which the whole likes collection is persisted.
pub const LIKES_KEY: &str = "likes";

/// A bookmarked recipe: the recipe id plus the fields needed to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// The liked-recipes set, keyed by recipe id and mirrored wholesale to the
/// persistent store on every mutation.
///
/// Storage failures are never fatal: an unreadable or corrupt store reads
/// as "no likes yet", and a failed write leaves the in-memory state as the
/// source of truth for the rest of the session.
pub struct Likes {
    likes: Vec<Like>,
    store: Box<dyn KeyValueStore>,
}

impl Likes {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Likes {
            likes: Vec::new(),
            store,
        }
    }

    /// Insert a like if absent (idempotent on id) and persist.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> &Like {
        let id = id.into();
        let position = match self.likes.iter().position(|like| like.id == id) {
            Some(existing) => existing,
            None => {
                self.likes.push(Like {
                    id,
                    title: title.into(),
                    author: author.into(),
                    img: img.into(),
                });
                self.persist();
                self.likes.len() - 1
            }
        };
        &self.likes[position]
    }

    /// Remove a like if present and persist.
    pub fn delete_like(&mut self, id: &str) {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() != before {
            self.persist();
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    /// Replace in-memory state from the store; absent or corrupt data
    /// yields an empty collection.
    pub fn read_storage(&mut self) {
        self.likes = match self.store.read(LIKES_KEY) {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(likes) => likes,
                Err(e) => {
                    warn!("ignoring corrupt likes storage: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
    }

    fn persist(&self) {
        match serde_json::to_vec(&self.likes) {
            Ok(bytes) => {
                if let Err(e) = self.store.write(LIKES_KEY, &bytes) {
                    warn!("failed to persist likes: {e}");
                }
            }
            Err(e) => warn!("failed to serialize likes: {e}"),
        }
    }
}
