//! Ownership guard for update and delete routes.
//!
//! A requester who is not the author does not get an error: the mutation is
//! skipped and the caller is sent back to the post detail page.

use uuid::Uuid;

/// Records that have an author and hang off a post.
pub trait Authored {
    fn author_id(&self) -> Uuid;

    /// The post whose detail page a denied requester is sent back to.
    fn post_id(&self) -> Uuid;
}

/// Outcome of a guarded mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T> {
    /// The requester owns the record; carries the affected record.
    Applied(T),
    /// The requester does not own the record; nothing was changed.
    Redirect { post_id: Uuid },
}

impl<T> Mutation<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied(_))
    }
}

/// Let `requester` through only if they authored `record`.
pub fn authorize<T: Authored>(record: T, requester: Uuid) -> Mutation<T> {
    if record.author_id() == requester {
        Mutation::Applied(record)
    } else {
        tracing::debug!(
            author = %record.author_id(),
            requester = %requester,
            "Ownership check failed, redirecting to post detail"
        );
        Mutation::Redirect {
            post_id: record.post_id(),
        }
    }
}
