//! Domain entities - the core business objects.

mod category;
mod comment;
mod post;
mod user;
mod views;

pub use category::Category;
pub use comment::Comment;
pub use post::{Post, PostDraft};
pub use user::{ProfileChanges, User, validate_email, validate_username};
pub use views::{CommentEntry, PostCard, PostDetail};
