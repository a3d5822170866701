//! Read models assembled by the blog services for listings and detail pages.

use serde::Serialize;

use super::{Category, Comment, Post, User};

/// A post together with what listings show next to it.
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub post: Post,
    pub author_username: String,
    pub category: Option<Category>,
    pub comment_count: u64,
}

/// A comment with its author's username.
#[derive(Debug, Clone, Serialize)]
pub struct CommentEntry {
    pub comment: Comment,
    pub author_username: String,
}

/// Everything the post detail page renders: the post and its comments in
/// creation order.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub card: PostCard,
    pub comments: Vec<CommentEntry>,
}

impl PostCard {
    pub fn new(
        post: Post,
        author: Option<&User>,
        category: Option<Category>,
        comment_count: u64,
    ) -> Self {
        Self {
            post,
            author_username: author.map(|u| u.username.clone()).unwrap_or_default(),
            category,
            comment_count,
        }
    }
}
