use chrono::Utc;
use uuid::Uuid;

use super::BlogService;
use crate::domain::{Category, PostCard, User};
use crate::error::DomainError;
use crate::pagination::{Page, PageRequest};
use crate::ports::{CategoryRepository, PostRepository, UserRepository};
use crate::visibility::PostFilter;

impl BlogService {
    /// Front page: public posts, plus the viewer's own.
    pub async fn index(
        &self,
        viewer: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Page<PostCard>, DomainError> {
        self.list(PostFilter::for_viewer(Utc::now(), viewer), page)
            .await
    }

    /// Posts of a published category. Unknown or unpublished slugs are not
    /// found.
    pub async fn category_posts(
        &self,
        slug: &str,
        viewer: Option<Uuid>,
        page: PageRequest,
    ) -> Result<(Category, Page<PostCard>), DomainError> {
        let category = self
            .repos
            .categories
            .find_by_slug(slug)
            .await?
            .filter(|c| c.is_published)
            .ok_or_else(|| DomainError::not_found("category", slug))?;

        let filter = PostFilter::for_viewer(Utc::now(), viewer).in_category(category.id);
        let posts = self.list(filter, page).await?;
        Ok((category, posts))
    }

    /// A user's posts. The owner sees all of them, everyone else only the
    /// public ones.
    pub async fn profile_posts(
        &self,
        username: &str,
        viewer: Option<Uuid>,
        page: PageRequest,
    ) -> Result<(User, Page<PostCard>), DomainError> {
        let owner = self
            .repos
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found("user", username))?;

        let now = Utc::now();
        let filter = if viewer == Some(owner.id) {
            PostFilter::unfiltered(now)
        } else {
            PostFilter::public(now)
        }
        .by_author(owner.id);

        let posts = self.list(filter, page).await?;
        Ok((owner, posts))
    }

    async fn list(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<Page<PostCard>, DomainError> {
        tracing::debug!(?filter, page = page.number, "Listing posts");

        let page = self.repos.posts.list(&filter, page).await?.ensure_in_range()?;
        let request = PageRequest {
            number: page.number,
            size: page.size,
        };
        let total = page.total_items;
        let cards = self.cards(page.items).await?;
        Ok(Page::new(cards, request, total))
    }
}
