use uuid::Uuid;

use super::BlogService;
use crate::domain::Comment;
use crate::error::DomainError;
use crate::guard::{self, Mutation};
use crate::ports::BaseRepository;

impl BlogService {
    /// Attach a comment by `author` to a post they can see.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        author: Uuid,
        text: String,
    ) -> Result<Comment, DomainError> {
        let post = self.visible_post(post_id, Some(author)).await?;
        Comment::validate_text(&text)?;

        let comment = self
            .repos
            .comments
            .create(Comment::new(post.id, author, text))
            .await?;
        tracing::info!(comment_id = %comment.id, post_id = %post.id, "Comment added");
        Ok(comment)
    }

    pub async fn comment_for_edit(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        requester: Uuid,
    ) -> Result<Mutation<Comment>, DomainError> {
        let comment = self.find_comment(post_id, comment_id).await?;
        Ok(guard::authorize(comment, requester))
    }

    pub async fn update_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        requester: Uuid,
        text: String,
    ) -> Result<Mutation<Comment>, DomainError> {
        let comment = self.find_comment(post_id, comment_id).await?;
        let mut comment = match guard::authorize(comment, requester) {
            Mutation::Applied(comment) => comment,
            redirect => return Ok(redirect),
        };

        Comment::validate_text(&text)?;
        comment.text = text;
        Ok(Mutation::Applied(self.repos.comments.update(comment).await?))
    }

    pub async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        requester: Uuid,
    ) -> Result<Mutation<Comment>, DomainError> {
        let comment = self.find_comment(post_id, comment_id).await?;
        let comment = match guard::authorize(comment, requester) {
            Mutation::Applied(comment) => comment,
            redirect => return Ok(redirect),
        };

        self.repos.comments.delete(comment.id).await?;
        tracing::info!(comment_id = %comment.id, "Comment deleted");
        Ok(Mutation::Applied(comment))
    }

    /// A comment addressed under a post it does not belong to is not found.
    async fn find_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<Comment, DomainError> {
        self.repos
            .comments
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.post_id == post_id)
            .ok_or_else(|| DomainError::not_found("comment", comment_id))
    }
}
