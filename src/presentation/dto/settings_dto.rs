use crate::application::Counters;
use crate::domain::entities::Preferences;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub analytics_enabled: bool,
    pub language: String,
}

impl From<&Preferences> for PreferencesResponse {
    fn from(preferences: &Preferences) -> Self {
        Self {
            push_enabled: preferences.push_enabled,
            email_enabled: preferences.email_enabled,
            analytics_enabled: preferences.analytics_enabled,
            language: preferences.language.clone(),
        }
    }
}

/// Badge counters for the dashboard tab bar.
#[derive(Debug, Clone, Serialize)]
pub struct CountersResponse {
    pub tarefas_pendentes: u64,
    pub feedbacks_recentes: u64,
    pub notificacoes_nao_lidas: u64,
    pub projetos_com_prazo: u64,
}

impl From<Counters> for CountersResponse {
    fn from(counters: Counters) -> Self {
        Self {
            tarefas_pendentes: counters.pending_tasks,
            feedbacks_recentes: counters.recent_feedbacks,
            notificacoes_nao_lidas: counters.unread_notifications,
            projetos_com_prazo: counters.due_projects,
        }
    }
}
