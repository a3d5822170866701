//! In-memory repositories - used when no database is configured, and in tests.
//!
//! All repositories share one [`InMemoryStore`], so cross-table rules (unique
//! usernames and slugs, foreign keys, cascading deletes) hold the same way
//! they do in PostgreSQL. Data is lost on process restart.

mod categories;
mod comments;
mod posts;
mod users;


use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use blogicum_core::Repositories;
use blogicum_core::domain::{Category, Comment, Post, User};

pub use categories::InMemoryCategoryRepository;
pub use comments::InMemoryCommentRepository;
pub use posts::InMemoryPostRepository;
pub use users::InMemoryUserRepository;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    categories: HashMap<Uuid, Category>,
    posts: HashMap<Uuid, Post>,
    // Kept in insertion order.
    comments: Vec<Comment>,
}

impl Tables {
    fn remove_post(&mut self, id: Uuid) -> Option<Post> {
        let post = self.posts.remove(&id)?;
        self.comments.retain(|c| c.post_id != id);
        Some(post)
    }
}

/// Shared tables behind the in-memory repositories.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// One repository of each kind, all backed by this store.
    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            users: Arc::new(InMemoryUserRepository::new(self.clone())),
            categories: Arc::new(InMemoryCategoryRepository::new(self.clone())),
            posts: Arc::new(InMemoryPostRepository::new(self.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(self.clone())),
        }
    }
}
