use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Longest username accepted at registration or profile edit.
pub const USERNAME_MAX_LEN: usize = 150;

/// User entity - a registered author and commenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            display_name: String::new(),
            bio: String::new(),
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable profile fields.
    pub fn apply(&mut self, changes: ProfileChanges) {
        self.username = changes.username;
        self.email = changes.email;
        self.display_name = changes.display_name;
        self.bio = changes.bio;
        self.avatar_url = changes.avatar_url.filter(|url| !url.trim().is_empty());
        self.updated_at = Utc::now();
    }
}

/// Editable profile fields submitted from the profile form.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: Option<String>,
}

impl ProfileChanges {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }
}

/// Usernames are 1..=150 characters of letters, digits and `@.+-_`.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Username must be between 1 and {USERNAME_MAX_LEN} characters"
        )));
    }
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(DomainError::Validation(
            "Username may contain only letters, digits and @/./+/-/_".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::Validation("Invalid email address".to_string()));
    }
    Ok(())
}
