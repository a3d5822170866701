//! Visibility rules for posts.
//!
//! A post is public when it is published, its publish time has passed and it
//! sits in a published category. Authors always see their own posts.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Category, Post};

/// Which posts a listing may include, beyond its author/category scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Public posts only.
    Public,
    /// Public posts, plus every post authored by this user.
    PublicOrAuthoredBy(Uuid),
    /// No visibility filtering (the owner's own profile).
    Unfiltered,
}

/// Post query: scope, visibility and the instant publish dates are judged
/// against. Repositories evaluate it in SQL or in memory; `matches` is the
/// reference predicate.
#[derive(Debug, Clone)]
pub struct PostFilter {
    pub now: DateTime<Utc>,
    pub author: Option<Uuid>,
    pub category: Option<Uuid>,
    pub visibility: Visibility,
}

impl PostFilter {
    /// Public posts as of `now`.
    pub fn public(now: DateTime<Utc>) -> Self {
        Self {
            now,
            author: None,
            category: None,
            visibility: Visibility::Public,
        }
    }

    /// Public posts, plus the viewer's own when a viewer is present.
    pub fn for_viewer(now: DateTime<Utc>, viewer: Option<Uuid>) -> Self {
        let visibility = match viewer {
            Some(id) => Visibility::PublicOrAuthoredBy(id),
            None => Visibility::Public,
        };
        Self {
            visibility,
            ..Self::public(now)
        }
    }

    pub fn unfiltered(now: DateTime<Utc>) -> Self {
        Self {
            visibility: Visibility::Unfiltered,
            ..Self::public(now)
        }
    }

    pub fn by_author(mut self, author: Uuid) -> Self {
        self.author = Some(author);
        self
    }

    pub fn in_category(mut self, category: Uuid) -> Self {
        self.category = Some(category);
        self
    }

    /// `category` must be the post's category record, if it has one.
    pub fn matches(&self, post: &Post, category: Option<&Category>) -> bool {
        if self.author.is_some_and(|a| a != post.author_id) {
            return false;
        }
        if self.category.is_some() && self.category != post.category_id {
            return false;
        }
        match self.visibility {
            Visibility::Unfiltered => true,
            Visibility::Public => is_public(post, category, self.now),
            Visibility::PublicOrAuthoredBy(id) => {
                post.author_id == id || is_public(post, category, self.now)
            }
        }
    }
}

/// The visibility conjunction.
pub fn is_public(post: &Post, category: Option<&Category>, now: DateTime<Utc>) -> bool {
    post.is_published && post.pub_date <= now && category.is_some_and(|c| c.is_published)
}

/// Detail-page access: the author always, anyone else only for public posts.
pub fn can_view(
    post: &Post,
    category: Option<&Category>,
    viewer: Option<Uuid>,
    now: DateTime<Utc>,
) -> bool {
    viewer == Some(post.author_id) || is_public(post, category, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use chrono::TimeDelta;

    struct Fixture {
        now: DateTime<Utc>,
        author: Uuid,
        category: Category,
        post: Post,
    }

    fn fixture() -> Fixture {
        let now = Utc::now();
        let author = Uuid::new_v4();
        let category = Category::new("Travel".into(), "travel".into(), String::new());
        let post = Post::new(
            author,
            PostDraft {
                title: "Caucasus".into(),
                text: "Mountains".into(),
                pub_date: Some(now - TimeDelta::hours(1)),
                category_id: Some(category.id),
                is_published: true,
            },
        );
        Fixture {
            now,
            author,
            category,
            post,
        }
    }

    #[test]
    fn test_published_post_in_published_category_is_public() {
        let f = fixture();
        assert!(is_public(&f.post, Some(&f.category), f.now));
    }

    #[test]
    fn test_unpublished_post_is_hidden() {
        let mut f = fixture();
        f.post.is_published = false;
        assert!(!is_public(&f.post, Some(&f.category), f.now));
        assert!(!can_view(&f.post, Some(&f.category), Some(Uuid::new_v4()), f.now));
        assert!(can_view(&f.post, Some(&f.category), Some(f.author), f.now));
    }

    #[test]
    fn test_unpublished_category_hides_post() {
        let mut f = fixture();
        f.category.is_published = false;
        assert!(!is_public(&f.post, Some(&f.category), f.now));
    }

    #[test]
    fn test_post_without_category_is_hidden() {
        let f = fixture();
        assert!(!is_public(&f.post, None, f.now));
    }

    #[test]
    fn test_future_post_becomes_public_when_time_passes() {
        let mut f = fixture();
        f.post.pub_date = f.now + TimeDelta::minutes(5);
        assert!(!is_public(&f.post, Some(&f.category), f.now));
        assert!(is_public(
            &f.post,
            Some(&f.category),
            f.now + TimeDelta::minutes(5)
        ));
    }

    #[test]
    fn test_filter_scope() {
        let f = fixture();
        let filter = PostFilter::public(f.now).by_author(f.author);
        assert!(filter.matches(&f.post, Some(&f.category)));

        let other_author = PostFilter::public(f.now).by_author(Uuid::new_v4());
        assert!(!other_author.matches(&f.post, Some(&f.category)));

        let other_category = PostFilter::public(f.now).in_category(Uuid::new_v4());
        assert!(!other_category.matches(&f.post, Some(&f.category)));
    }

    #[test]
    fn test_viewer_sees_own_hidden_posts() {
        let mut f = fixture();
        f.post.is_published = false;

        let own = PostFilter::for_viewer(f.now, Some(f.author));
        assert!(own.matches(&f.post, Some(&f.category)));

        let stranger = PostFilter::for_viewer(f.now, Some(Uuid::new_v4()));
        assert!(!stranger.matches(&f.post, Some(&f.category)));

        let anonymous = PostFilter::for_viewer(f.now, None);
        assert!(!anonymous.matches(&f.post, Some(&f.category)));

        assert!(PostFilter::unfiltered(f.now).matches(&f.post, None));
    }
}
