use crate::application::ports::UserRepository;
use crate::domain::entities::{AuthUser, ProfileChanges, ProfileDraft, UserKind, UserProfile};
use crate::shared::error::AppError;
use crate::shared::validation::require_non_empty;
use std::sync::Arc;

/// The signed-in user's own app profile, resolved through the
/// auth-user link table.
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn current_profile(
        &self,
        auth_user_id: &str,
    ) -> Result<Option<UserProfile>, AppError> {
        self.users.find_by_auth_user(auth_user_id).await
    }

    /// Returns the linked profile, creating profile + link row on first
    /// sign-in.
    pub async fn ensure_profile(
        &self,
        auth_user: &AuthUser,
        name: &str,
    ) -> Result<UserProfile, AppError> {
        if let Some(profile) = self.users.find_by_auth_user(&auth_user.id).await? {
            return Ok(profile);
        }
        require_non_empty("nome", name).map_err(AppError::ValidationError)?;
        let email = auth_user
            .email
            .clone()
            .ok_or_else(|| AppError::InvalidInput("auth user has no e-mail".to_string()))?;
        let profile = self
            .users
            .create_profile(ProfileDraft {
                name: name.trim().to_string(),
                email: Some(email),
                kind: auth_user.kind.unwrap_or(UserKind::Client),
            })
            .await?;
        self.users.link_auth_user(&profile.id, &auth_user.id).await?;
        Ok(profile)
    }

    pub async fn update(&self, id: &str, changes: ProfileChanges) -> Result<(), AppError> {
        self.users.update_profile(id, changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub Repo {}

        #[async_trait]
        impl UserRepository for Repo {
            async fn list_clients(&self) -> Result<Vec<UserProfile>, AppError>;
            async fn get(&self, id: &str) -> Result<Option<UserProfile>, AppError>;
            async fn find_by_auth_user(
                &self,
                auth_user_id: &str,
            ) -> Result<Option<UserProfile>, AppError>;
            async fn create_profile(&self, draft: ProfileDraft) -> Result<UserProfile, AppError>;
            async fn link_auth_user(
                &self,
                usuario_id: &str,
                auth_user_id: &str,
            ) -> Result<(), AppError>;
            async fn update_profile(
                &self,
                id: &str,
                changes: ProfileChanges,
            ) -> Result<(), AppError>;
        }
    }

    fn profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: "Ana".to_string(),
            email: Some("ana@example.com".to_string()),
            phone: None,
            avatar: None,
            active: true,
            kind: UserKind::Designer,
            created_at: "2026-01-10T12:00:00Z".parse().unwrap(),
        }
    }

    fn auth_user() -> AuthUser {
        AuthUser {
            id: "auth-1".to_string(),
            email: Some("ana@example.com".to_string()),
            kind: Some(UserKind::Designer),
        }
    }

    #[tokio::test]
    async fn ensure_profile_returns_existing_without_creating() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_auth_user()
            .with(eq("auth-1"))
            .times(1)
            .returning(|_| Ok(Some(profile("u1"))));

        let service = ProfileService::new(Arc::new(repo));
        let got = service.ensure_profile(&auth_user(), "Ana").await.unwrap();
        assert_eq!(got.id, "u1");
    }

    #[tokio::test]
    async fn ensure_profile_creates_and_links_on_first_sign_in() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_auth_user().returning(|_| Ok(None));
        repo.expect_create_profile()
            .withf(|draft| draft.name == "Ana" && draft.kind == UserKind::Designer)
            .times(1)
            .returning(|_| Ok(profile("u1")));
        repo.expect_link_auth_user()
            .with(eq("u1"), eq("auth-1"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProfileService::new(Arc::new(repo));
        let got = service.ensure_profile(&auth_user(), "  Ana  ").await.unwrap();
        assert_eq!(got.id, "u1");
    }
}
