use uuid::Uuid;

use super::BlogService;
use crate::domain::{ProfileChanges, User};
use crate::error::DomainError;
use crate::ports::{BaseRepository, UserRepository};

impl BlogService {
    pub async fn profile(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.repos
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))
    }

    /// Apply profile form changes, keeping usernames and emails unique.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, DomainError> {
        changes.validate()?;
        let mut user = self.profile(user_id).await?;

        if let Some(other) = self.repos.users.find_by_username(&changes.username).await? {
            if other.id != user.id {
                return Err(DomainError::Duplicate("Username already taken".to_string()));
            }
        }
        if let Some(other) = self.repos.users.find_by_email(&changes.email).await? {
            if other.id != user.id {
                return Err(DomainError::Duplicate(
                    "Email already registered".to_string(),
                ));
            }
        }

        user.apply(changes);
        Ok(self.repos.users.update(user).await?)
    }
}
