use crate::{
    application::{sort_links, LinkSort, SharedLinkService},
    domain::entities::LinkFlag,
    presentation::dto::{
        link_dto::{CreateLinkRequest, LinkResponse, SetLinkExpiryRequest},
        Validate,
    },
    shared::error::AppError,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

pub struct LinkHandler {
    link_service: Arc<SharedLinkService>,
}

impl LinkHandler {
    pub fn new(link_service: Arc<SharedLinkService>) -> Self {
        Self { link_service }
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        self.link_service.refresh().await
    }

    pub async fn list(&self, sort: LinkSort) -> Vec<LinkResponse> {
        let now = Utc::now();
        let view = self.link_service.view().await;
        let mut links = view.items;
        sort_links(&mut links, sort);
        links
            .iter()
            .map(|link| {
                LinkResponse::from_link(link, self.link_service.public_url(&link.token), now)
            })
            .collect()
    }

    pub async fn create(&self, request: CreateLinkRequest) -> Result<LinkResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let draft = request
            .into_draft()
            .ok_or_else(|| AppError::InvalidInput("unknown link tipo".to_string()))?;

        let link = self.link_service.create(draft).await?;
        let url = self.link_service.public_url(&link.token);
        Ok(LinkResponse::from_link(&link, url, Utc::now()))
    }

    pub async fn toggle_flag(&self, id: &str, flag: LinkFlag, value: bool) -> Result<(), AppError> {
        self.link_service
            .toggle_flag(id, flag, value, |error| {
                warn!("link flag change reverted: {error}");
            })
            .await
    }

    pub async fn set_expiry(&self, request: SetLinkExpiryRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.link_service
            .set_expiry(&request.link_id, request.expira_em, |error| {
                warn!("link expiry change reverted: {error}");
            })
            .await
    }

    pub async fn revoke(&self, id: &str) -> Result<(), AppError> {
        self.link_service
            .revoke(id, |error| {
                warn!("link revoke reverted: {error}");
            })
            .await
    }
}
