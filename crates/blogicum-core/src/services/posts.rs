use chrono::Utc;
use uuid::Uuid;

use super::BlogService;
use crate::domain::{Category, CommentEntry, Post, PostDetail, PostDraft};
use crate::error::DomainError;
use crate::guard::{self, Mutation};
use crate::ports::{BaseRepository, CategoryRepository, CommentRepository, UserRepository};
use crate::visibility;

impl BlogService {
    /// Post detail with comments. Posts the viewer may not see are reported
    /// as not found, same as missing ones.
    pub async fn post_detail(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<PostDetail, DomainError> {
        let post = self.visible_post(id, viewer).await?;

        let comments = self.repos.comments.list_for_post(post.id).await?;
        let mut commenter_ids: Vec<Uuid> = comments.iter().map(|c| c.author_id).collect();
        commenter_ids.sort_unstable();
        commenter_ids.dedup();
        let commenters = self.repos.users.find_by_ids(&commenter_ids).await?;

        let comments = comments
            .into_iter()
            .map(|comment| {
                let author_username = commenters
                    .iter()
                    .find(|u| u.id == comment.author_id)
                    .map(|u| u.username.clone())
                    .unwrap_or_default();
                CommentEntry {
                    comment,
                    author_username,
                }
            })
            .collect();

        let card = self
            .cards(vec![post])
            .await?
            .pop()
            .ok_or_else(|| DomainError::not_found("post", id))?;

        Ok(PostDetail { card, comments })
    }

    /// Load a post if `viewer` may see it.
    pub(super) async fn visible_post(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<Post, DomainError> {
        let post = self.find_post(id).await?;
        let category = self.category_of(&post).await?;
        if !visibility::can_view(&post, category.as_ref(), viewer, Utc::now()) {
            return Err(DomainError::not_found("post", id));
        }
        Ok(post)
    }

    /// Categories offered by the post form.
    pub async fn post_form_categories(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.repos.categories.list_published().await?)
    }

    pub async fn create_post(&self, author: Uuid, draft: PostDraft) -> Result<Post, DomainError> {
        self.check_draft(&draft).await?;

        let post = self.repos.posts.create(Post::new(author, draft)).await?;
        tracing::info!(post_id = %post.id, author = %author, "Post created");
        Ok(post)
    }

    /// The post as the edit form's initial data, for its author only.
    pub async fn post_for_edit(
        &self,
        id: Uuid,
        requester: Uuid,
    ) -> Result<Mutation<Post>, DomainError> {
        let post = self.find_post(id).await?;
        Ok(guard::authorize(post, requester))
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        requester: Uuid,
        draft: PostDraft,
    ) -> Result<Mutation<Post>, DomainError> {
        let mut post = match guard::authorize(self.find_post(id).await?, requester) {
            Mutation::Applied(post) => post,
            Mutation::Redirect { post_id } => return Ok(Mutation::Redirect { post_id }),
        };

        self.check_draft(&draft).await?;
        post.apply(draft);
        let post = self.repos.posts.update(post).await?;
        tracing::info!(post_id = %post.id, "Post updated");
        Ok(Mutation::Applied(post))
    }

    /// Delete a post and, with it, its comments.
    pub async fn delete_post(
        &self,
        id: Uuid,
        requester: Uuid,
    ) -> Result<Mutation<Post>, DomainError> {
        let post = match guard::authorize(self.find_post(id).await?, requester) {
            Mutation::Applied(post) => post,
            redirect => return Ok(redirect),
        };

        self.repos.posts.delete(post.id).await?;
        tracing::info!(post_id = %post.id, "Post deleted");
        Ok(Mutation::Applied(post))
    }

    async fn check_draft(&self, draft: &PostDraft) -> Result<(), DomainError> {
        draft.validate()?;
        if let Some(category_id) = draft.category_id {
            if self.repos.categories.find_by_id(category_id).await?.is_none() {
                return Err(DomainError::Validation(format!(
                    "Unknown category {category_id}"
                )));
            }
        }
        Ok(())
    }
}
