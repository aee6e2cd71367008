use crate::{
    application::{filter_clients, ClientFilter, ClientService, ProfileService},
    domain::entities::AuthUser,
    presentation::dto::{
        user_dto::{ClientStatsResponse, UpdateProfileRequest, UserResponse},
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct ClientHandler {
    client_service: Arc<ClientService>,
    profile_service: Arc<ProfileService>,
}

impl ClientHandler {
    pub fn new(client_service: Arc<ClientService>, profile_service: Arc<ProfileService>) -> Self {
        Self {
            client_service,
            profile_service,
        }
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        self.client_service.refresh().await
    }

    pub async fn list(&self, filter: &ClientFilter) -> Vec<UserResponse> {
        let view = self.client_service.view().await;
        filter_clients(&view.items, filter)
            .iter()
            .map(UserResponse::from)
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<UserResponse, AppError> {
        let client = self.client_service.get(id).await?;
        Ok(UserResponse::from(&client))
    }

    pub async fn update(&self, id: &str, request: UpdateProfileRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.client_service.update(id, request.into_changes()).await
    }

    pub async fn stats(&self) -> ClientStatsResponse {
        ClientStatsResponse::from(self.client_service.stats().await)
    }

    pub async fn current_profile(
        &self,
        auth_user_id: &str,
    ) -> Result<Option<UserResponse>, AppError> {
        let profile = self.profile_service.current_profile(auth_user_id).await?;
        Ok(profile.as_ref().map(UserResponse::from))
    }

    pub async fn ensure_profile(
        &self,
        auth_user: &AuthUser,
        name: &str,
    ) -> Result<UserResponse, AppError> {
        let profile = self.profile_service.ensure_profile(auth_user, name).await?;
        Ok(UserResponse::from(&profile))
    }

    pub async fn update_profile(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.profile_service.update(id, request.into_changes()).await
    }
}
