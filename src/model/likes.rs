use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::storage::Storage;

/// Storage key holding the JSON array of liked recipes
pub const LIKES_KEY: &str = "likes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Liked recipes, written through to storage on every change
pub struct Likes {
    likes: Vec<LikedRecipe>,
    storage: Arc<dyn Storage>,
}

impl Likes {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            likes: Vec::new(),
            storage,
        }
    }

    /// Adds a like and persists the whole set. Liking an already liked
    /// recipe returns the existing record.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Result<LikedRecipe> {
        let id = id.into();
        if let Some(existing) = self.likes.iter().find(|l| l.id == id) {
            return Ok(existing.clone());
        }

        let like = LikedRecipe {
            id,
            title: title.into(),
            author: author.into(),
            img: img.into(),
        };
        let mut updated = self.likes.clone();
        updated.push(like.clone());
        self.persist_data(&updated)?;
        self.likes = updated;
        Ok(like)
    }

    pub fn delete_like(&mut self, id: &str) -> Result<()> {
        if !self.is_liked(id) {
            return Ok(());
        }
        let updated: Vec<LikedRecipe> = self.likes.iter().filter(|l| l.id != id).cloned().collect();
        self.persist_data(&updated)?;
        self.likes = updated;
        Ok(())
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|l| l.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Replaces the in-memory set with what storage holds. Missing or
    /// corrupt data yields an empty set.
    pub fn read_storage(&mut self) {
        self.likes = match self.storage.get(LIKES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<LikedRecipe>>(&raw) {
                Ok(likes) => dedup_by_id(likes),
                Err(e) => {
                    warn!("Ignoring corrupt liked recipes: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!("Restored {} liked recipes", self.likes.len());
    }

    /// Writes `likes` to storage; the in-memory set is only replaced once this succeeds
    fn persist_data(&self, likes: &[LikedRecipe]) -> Result<()> {
        let json = serde_json::to_string(likes)?;
        self.storage.set(LIKES_KEY, &json)
    }
}

fn dedup_by_id(likes: Vec<LikedRecipe>) -> Vec<LikedRecipe> {
    let mut unique: Vec<LikedRecipe> = Vec::with_capacity(likes.len());
    for like in likes {
        if !unique.iter().any(|l| l.id == like.id) {
            unique.push(like);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn stored(storage: &dyn Storage) -> Vec<LikedRecipe> {
        serde_json::from_str(&storage.get(LIKES_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_add_and_delete_like() {
        let storage = Arc::new(MemoryStorage::new());
        let mut likes = Likes::new(storage.clone());

        let like = likes.add_like("1", "Pizza Dip", "Closet Cooking", "img").unwrap();
        assert_eq!(like.title, "Pizza Dip");
        assert!(likes.is_liked("1"));
        assert_eq!(likes.num_likes(), 1);
        assert_eq!(stored(storage.as_ref()).len(), 1);

        likes.delete_like("1").unwrap();
        assert!(!likes.is_liked("1"));
        assert_eq!(likes.num_likes(), 0);
        assert!(stored(storage.as_ref()).is_empty());
    }

    #[test]
    fn test_num_likes_matches_persisted_length() {
        let storage = Arc::new(MemoryStorage::new());
        let mut likes = Likes::new(storage.clone());

        likes.add_like("1", "a", "x", "").unwrap();
        likes.add_like("2", "b", "x", "").unwrap();
        likes.add_like("2", "b", "x", "").unwrap();
        likes.add_like("3", "c", "x", "").unwrap();
        likes.delete_like("1").unwrap();
        likes.delete_like("missing").unwrap();

        assert_eq!(likes.num_likes(), 2);
        assert_eq!(stored(storage.as_ref()).len(), likes.num_likes());
    }

    #[test]
    fn test_read_storage_restores_likes() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut likes = Likes::new(storage.clone());
            likes.add_like("1", "a", "x", "").unwrap();
            likes.add_like("2", "b", "y", "").unwrap();
        }

        let mut restored = Likes::new(storage);
        restored.read_storage();
        assert_eq!(restored.num_likes(), 2);
        assert_eq!(restored.likes()[1].author, "y");
    }

    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl Storage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_leaves_likes_unchanged() {
        let inner = MemoryStorage::new();
        inner
            .set(LIKES_KEY, r#"[{"id":"1","title":"a","author":"x","img":""}]"#)
            .unwrap();
        let storage = Arc::new(ReadOnlyStorage { inner });
        let mut likes = Likes::new(storage.clone());
        likes.read_storage();

        assert!(likes.add_like("2", "b", "y", "").is_err());
        assert!(!likes.is_liked("2"));
        assert_eq!(likes.num_likes(), 1);

        assert!(likes.delete_like("1").is_err());
        assert!(likes.is_liked("1"));
        assert_eq!(likes.num_likes(), stored(storage.as_ref()).len());
    }

    #[test]
    fn test_corrupt_storage_is_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(LIKES_KEY, "{not json").unwrap();

        let mut likes = Likes::new(storage);
        likes.read_storage();
        assert_eq!(likes.num_likes(), 0);
    }
}
