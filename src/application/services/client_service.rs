use crate::application::ports::UserRepository;
use crate::application::shared::{CollectionStore, ViewState};
use crate::domain::entities::{ProfileChanges, UserProfile};
use crate::shared::error::AppError;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub active: Option<bool>,
    pub query: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Designer-facing view over the CLIENTE profiles.
pub struct ClientService {
    repository: Arc<dyn UserRepository>,
    store: Arc<CollectionStore<UserProfile>>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            store: Arc::new(CollectionStore::new()),
        }
    }

    pub async fn view(&self) -> ViewState<UserProfile> {
        self.store.snapshot().await
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let gen = self.store.begin_fetch().await;
        match self.repository.list_clients().await {
            Ok(clients) => {
                self.store.apply_refresh(gen, clients).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<UserProfile, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {id} not found")))
    }

    pub async fn update(&self, id: &str, changes: ProfileChanges) -> Result<(), AppError> {
        self.repository.update_profile(id, changes).await?;
        self.refresh().await
    }

    pub async fn stats(&self) -> ClientStats {
        client_stats(&self.store.items().await)
    }
}

pub fn client_stats(clients: &[UserProfile]) -> ClientStats {
    let active = clients.iter().filter(|c| c.active).count();
    ClientStats {
        total: clients.len(),
        active,
        inactive: clients.len() - active,
    }
}

/// Search runs over nome, email and telefone.
pub fn filter_clients(clients: &[UserProfile], filter: &ClientFilter) -> Vec<UserProfile> {
    let query = filter.query.trim().to_lowercase();
    clients
        .iter()
        .filter(|c| filter.active.map_or(true, |active| c.active == active))
        .filter(|c| {
            if query.is_empty() {
                return true;
            }
            c.name.to_lowercase().contains(&query)
                || c.email
                    .as_deref()
                    .map_or(false, |e| e.to_lowercase().contains(&query))
                || c.phone
                    .as_deref()
                    .map_or(false, |p| p.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProfileDraft, UserKind};
    use async_trait::async_trait;
    use mockall::mock;

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

    fn client(id: &str, name: &str, phone: Option<&str>, active: bool) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: name.to_string(),
            email: Some(format!("{id}@example.com")),
            phone: phone.map(str::to_string),
            avatar: None,
            active,
            kind: UserKind::Client,
            created_at: "2026-01-10T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn search_covers_phone_numbers() {
        let clients = vec![
            client("c1", "Loja Azul", Some("+55 11 98888-0001"), true),
            client("c2", "Café Verde", None, true),
        ];
        let filter = ClientFilter {
            active: None,
            query: "98888".to_string(),
        };
        let hits = filter_clients(&clients, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c1");
    }

    #[test]
    fn active_filter_and_stats_agree() {
        let clients = vec![
            client("c1", "Loja Azul", None, true),
            client("c2", "Café Verde", None, false),
            client("c3", "Bar Preto", None, true),
        ];
        let stats = client_stats(&clients);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);

        let filter = ClientFilter {
            active: Some(false),
            query: String::new(),
        };
        assert_eq!(filter_clients(&clients, &filter).len(), 1);
    }

    #[tokio::test]
    async fn refresh_populates_the_store() {
        let mut repo = MockRepo::new();
        repo.expect_list_clients()
            .times(1)
            .returning(|| Ok(vec![client("c1", "Loja Azul", None, true)]));
        let service = ClientService::new(Arc::new(repo));
        service.refresh().await.unwrap();
        assert_eq!(service.view().await.items.len(), 1);
    }
}
