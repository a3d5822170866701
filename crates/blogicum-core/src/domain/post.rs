use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::guard::Authored;

/// Longest accepted post title.
pub const TITLE_MAX_LEN: usize = 256;

/// Post entity - an authored, categorized, timestamped blog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from a validated draft.
    pub fn new(author_id: Uuid, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            category_id: draft.category_id,
            title: draft.title,
            text: draft.text,
            pub_date: draft.pub_date.unwrap_or(now),
            is_published: draft.is_published,
            created_at: now,
        }
    }

    /// Overwrite the editable fields. A draft without a publish date keeps
    /// the current one.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.text = draft.text;
        self.category_id = draft.category_id;
        self.is_published = draft.is_published;
        if let Some(pub_date) = draft.pub_date {
            self.pub_date = pub_date;
        }
    }
}

impl Authored for Post {
    fn author_id(&self) -> Uuid {
        self.author_id
    }

    fn post_id(&self) -> Uuid {
        self.id
    }
}

/// Post form input for create and update.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub text: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub category_id: Option<Uuid>,
    pub is_published: bool,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("Title must not be empty".to_string());
        } else if self.title.chars().count() > TITLE_MAX_LEN {
            errors.push(format!("Title must be at most {TITLE_MAX_LEN} characters"));
        }
        if self.text.trim().is_empty() {
            errors.push("Text must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Borodino".into(),
            text: "Day one".into(),
            pub_date: None,
            category_id: None,
            is_published: true,
        }
    }

    #[test]
    fn test_new_defaults_pub_date_to_now() {
        let before = Utc::now();
        let post = Post::new(Uuid::new_v4(), draft());
        assert!(post.pub_date >= before);
        assert!(post.is_published);
    }

    #[test]
    fn test_apply_keeps_pub_date_when_absent() {
        let scheduled = Utc::now() + TimeDelta::days(3);
        let mut post = Post::new(
            Uuid::new_v4(),
            PostDraft {
                pub_date: Some(scheduled),
                ..draft()
            },
        );

        post.apply(PostDraft {
            title: "Austerlitz".into(),
            ..draft()
        });

        assert_eq!(post.title, "Austerlitz");
        assert_eq!(post.pub_date, scheduled);
    }

    #[test]
    fn test_validate_collects_errors() {
        let err = PostDraft {
            title: " ".into(),
            text: String::new(),
            ..draft()
        }
        .validate()
        .unwrap_err();

        let DomainError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Title"));
        assert!(msg.contains("Text"));
    }

    #[test]
    fn test_validate_title_length() {
        let long = PostDraft {
            title: "x".repeat(TITLE_MAX_LEN + 1),
            ..draft()
        };
        assert!(long.validate().is_err());
        assert!(draft().validate().is_ok());
    }
}
