use crate::application::ports::SharedLinkRepository;
use crate::application::shared::{optimistic_mutate, CollectionStore, ViewState};
use crate::domain::entities::{LinkFlag, SharedLink, SharedLinkDraft};
use crate::domain::value_objects::ShareToken;
use crate::shared::config::LinkConfig;
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSort {
    Newest,
    /// Expiry ascending; links that never expire go last.
    Expiry,
}

pub struct SharedLinkService {
    repository: Arc<dyn SharedLinkRepository>,
    store: Arc<CollectionStore<SharedLink>>,
    config: LinkConfig,
}

impl SharedLinkService {
    pub fn new(repository: Arc<dyn SharedLinkRepository>, config: LinkConfig) -> Self {
        Self {
            repository,
            store: Arc::new(CollectionStore::new()),
            config,
        }
    }

    pub async fn view(&self) -> ViewState<SharedLink> {
        self.store.snapshot().await
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let gen = self.store.begin_fetch().await;
        match self.repository.list().await {
            Ok(links) => {
                self.store.apply_refresh(gen, links).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    /// Creates a link with a fresh client-side token and prepends it.
    pub async fn create(&self, draft: SharedLinkDraft) -> Result<SharedLink, AppError> {
        if draft.target_id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "link target is required".to_string(),
            ));
        }
        let token = ShareToken::generate();
        let link = self.repository.create(token.as_str(), draft).await?;
        let created = link.clone();
        self.store.mutate(|items| items.insert(0, created)).await;
        Ok(link)
    }

    /// Flips one capability locally, then confirms remotely.
    pub async fn toggle_flag(
        &self,
        id: &str,
        flag: LinkFlag,
        value: bool,
        on_failure: impl FnOnce(&AppError),
    ) -> Result<(), AppError> {
        let target = id.to_string();
        optimistic_mutate(
            &self.store,
            move |items| {
                if let Some(link) = items.iter_mut().find(|l| l.id == target) {
                    match flag {
                        LinkFlag::ReadOnly => link.read_only = value,
                        LinkFlag::CanComment => link.can_comment = value,
                        LinkFlag::CanDownload => link.can_download = value,
                    }
                }
            },
            self.repository.set_flag(id, flag.column(), value),
            on_failure,
        )
        .await
    }

    pub async fn set_expiry(
        &self,
        id: &str,
        expires_at: Option<DateTime<Utc>>,
        on_failure: impl FnOnce(&AppError),
    ) -> Result<(), AppError> {
        let target = id.to_string();
        optimistic_mutate(
            &self.store,
            move |items| {
                if let Some(link) = items.iter_mut().find(|l| l.id == target) {
                    link.expires_at = expires_at;
                }
            },
            self.repository.set_expiry(id, expires_at),
            on_failure,
        )
        .await
    }

    pub async fn revoke(
        &self,
        id: &str,
        on_failure: impl FnOnce(&AppError),
    ) -> Result<(), AppError> {
        let target = id.to_string();
        optimistic_mutate(
            &self.store,
            move |items| items.retain(|l| l.id != target),
            self.repository.delete(id),
            on_failure,
        )
        .await
    }

    /// Public URL a recipient opens in the browser.
    pub fn public_url(&self, token: &str) -> String {
        format!(
            "{}{}{}",
            self.config.public_base_url, self.config.link_path, token
        )
    }
}

pub fn sort_links(links: &mut [SharedLink], sort: LinkSort) {
    links.sort_by(|a, b| {
        let ordering = match sort {
            LinkSort::Newest => b.created_at.cmp(&a.created_at),
            LinkSort::Expiry => match (a.expires_at, b.expires_at) {
                (Some(ea), Some(eb)) => ea.cmp(&eb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::SHARE_TOKEN_LEN;
    use crate::domain::entities::LinkKind;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub Repo {}

        #[async_trait]
        impl SharedLinkRepository for Repo {
            async fn list(&self) -> Result<Vec<SharedLink>, AppError>;
            async fn create(
                &self,
                token: &str,
                draft: SharedLinkDraft,
            ) -> Result<SharedLink, AppError>;
            async fn set_flag(&self, id: &str, column: &str, value: bool) -> Result<(), AppError>;
            async fn set_expiry(
                &self,
                id: &str,
                expires_at: Option<DateTime<Utc>>,
            ) -> Result<(), AppError>;
            async fn delete(&self, id: &str) -> Result<(), AppError>;
        }
    }

    fn link(id: &str, expires_at: Option<&str>) -> SharedLink {
        SharedLink {
            id: id.to_string(),
            token: format!("token-{id}"),
            kind: LinkKind::Art,
            art_id: Some("a1".to_string()),
            project_id: None,
            expires_at: expires_at.map(|d| d.parse().unwrap()),
            read_only: true,
            can_comment: false,
            can_download: false,
            created_at: "2026-01-10T12:00:00Z".parse().unwrap(),
        }
    }

    fn config() -> LinkConfig {
        LinkConfig::default()
    }

    #[tokio::test]
    async fn create_generates_a_24_char_token() {
        let mut repo = MockRepo::new();
        repo.expect_create()
            .withf(|token, _| token.len() == SHARE_TOKEN_LEN)
            .times(1)
            .returning(|token, draft| {
                let mut l = link("l1", None);
                l.token = token.to_string();
                l.kind = draft.kind;
                Ok(l)
            });

        let service = SharedLinkService::new(Arc::new(repo), config());
        let draft = SharedLinkDraft {
            kind: LinkKind::Art,
            target_id: "a1".to_string(),
            expires_at: None,
            read_only: true,
            can_comment: false,
            can_download: false,
        };
        let created = service.create(draft).await.unwrap();
        assert_eq!(created.token.len(), SHARE_TOKEN_LEN);
        assert_eq!(service.view().await.items.len(), 1);
    }

    #[tokio::test]
    async fn toggle_flag_reverts_on_failure() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Ok(vec![link("l1", None)]));
        repo.expect_set_flag()
            .with(eq("l1"), eq("can_comment"), eq(true))
            .times(1)
            .returning(|_, _, _| Err(AppError::Network("offline".to_string())));

        let service = SharedLinkService::new(Arc::new(repo), config());
        service.refresh().await.unwrap();

        let mut notified = false;
        let result = service
            .toggle_flag("l1", LinkFlag::CanComment, true, |_| notified = true)
            .await;
        assert!(result.is_err());
        assert!(notified);
        assert!(!service.view().await.items[0].can_comment);
    }

    #[test]
    fn expiry_sort_puts_never_expiring_last() {
        let mut links = vec![
            link("l1", None),
            link("l2", Some("2026-03-01T00:00:00Z")),
            link("l3", Some("2026-02-01T00:00:00Z")),
        ];
        sort_links(&mut links, LinkSort::Expiry);
        let ids: Vec<&str> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l3", "l2", "l1"]);
    }

    #[test]
    fn public_url_composes_base_path_token() {
        let service = SharedLinkService::new(Arc::new(MockRepo::new()), config());
        assert_eq!(
            service.public_url("abc123"),
            "https://viu-frontend.vercel.app/link/abc123"
        );
    }
}
