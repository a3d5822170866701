//! Blog services - the request-level operations behind every route.
//!
//! Each operation picks a post filter or loads a record, applies the
//! visibility rule or the ownership guard, and talks to the repositories.

mod comments;
mod listing;
mod posts;
mod profiles;

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Category, Post, PostCard};
use crate::error::DomainError;
use crate::ports::{
    BaseRepository, CategoryRepository, CommentRepository, PostRepository, UserRepository,
};

/// The repositories the blog services run against.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

/// Listing, detail, authoring and commenting operations.
#[derive(Clone)]
pub struct BlogService {
    repos: Repositories,
}

impl BlogService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repos
    }

    async fn find_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repos
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", id))
    }

    async fn category_of(&self, post: &Post) -> Result<Option<Category>, DomainError> {
        match post.category_id {
            Some(id) => Ok(self.repos.categories.find_by_id(id).await?),
            None => Ok(None),
        }
    }

    /// Attach author names, categories and comment counts to a batch of posts.
    async fn cards(&self, posts: Vec<Post>) -> Result<Vec<PostCard>, DomainError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let author_ids = dedup(posts.iter().map(|p| p.author_id));
        let category_ids = dedup(posts.iter().filter_map(|p| p.category_id));

        let authors: HashMap<_, _> = self
            .repos
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let categories: HashMap<_, _> = self
            .repos
            .categories
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let counts: HashMap<_, _> = self
            .repos
            .comments
            .count_for_posts(&post_ids)
            .await?
            .into_iter()
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id);
                let category = post.category_id.and_then(|id| categories.get(&id).cloned());
                let count = counts.get(&post.id).copied().unwrap_or(0);
                PostCard::new(post, author, category, count)
            })
            .collect())
    }
}

fn dedup(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
