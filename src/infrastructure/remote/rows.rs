//! Wire rows as PostgREST returns them, with the Portuguese column names of
//! the remote schema. Every row is validated here and mapped into a domain
//! entity; unknown enum values are rejected instead of being smuggled
//! through as strings.

use crate::domain::entities::{
    Art, ArtFile, ArtFileKind, Feedback, FeedbackKind, FeedbackReply, FeedbackStatus, LinkKind,
    Notification, Project, ProjectStatus, SharedLink, Task, TaskPriority, TaskProjectRef,
    TaskStatus, TaskUserRef, UserKind, UserProfile,
};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

fn parse_enum<T>(value: &str, parse: fn(&str) -> Option<T>, what: &str) -> Result<T, AppError> {
    parse(value)
        .ok_or_else(|| AppError::DeserializationError(format!("unknown {what}: {value:?}")))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjetoRow {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
    pub status: String,
    pub prazo: Option<DateTime<Utc>>,
    pub orcamento: Option<f64>,
    pub cliente_id: Option<String>,
    pub designer_id: Option<String>,
    pub criado_em: DateTime<Utc>,
}

impl ProjetoRow {
    pub fn into_domain(self) -> Result<Project, AppError> {
        Ok(Project {
            id: self.id,
            name: self.nome,
            description: self.descricao,
            status: parse_enum(&self.status, ProjectStatus::parse, "project status")?,
            deadline: self.prazo,
            budget: self.orcamento,
            client_id: self.cliente_id,
            designer_id: self.designer_id,
            created_at: self.criado_em,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArteRow {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
    pub arquivo: Option<String>,
    pub tipo: String,
    pub versao_atual: Option<i32>,
    pub status_atual: Option<String>,
    pub projeto_id: String,
    pub criado_em: DateTime<Utc>,
}

impl ArteRow {
    pub fn into_domain(self) -> Result<Art, AppError> {
        Ok(Art {
            id: self.id,
            name: self.nome,
            description: self.descricao,
            file: self.arquivo,
            kind: self.tipo,
            current_version: self.versao_atual,
            current_status: self.status_atual,
            project_id: self.projeto_id,
            created_at: self.criado_em,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArteArquivoRow {
    pub arquivo: String,
    pub versao: i32,
    pub kind: String,
}

impl ArteArquivoRow {
    pub fn into_domain(self) -> Result<ArtFile, AppError> {
        Ok(ArtFile {
            file: self.arquivo,
            version: self.versao,
            kind: parse_enum(&self.kind, ArtFileKind::parse, "art file kind")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRow {
    pub id: String,
    pub conteudo: String,
    pub tipo: String,
    pub arquivo: Option<String>,
    pub posicao_x: Option<f64>,
    pub posicao_y: Option<f64>,
    pub arte_id: String,
    pub autor_id: Option<String>,
    pub status: String,
    pub criado_em: DateTime<Utc>,
}

impl FeedbackRow {
    pub fn into_domain(self) -> Result<Feedback, AppError> {
        Ok(Feedback {
            id: self.id,
            content: self.conteudo,
            kind: parse_enum(&self.tipo, FeedbackKind::parse, "feedback kind")?,
            file: self.arquivo,
            position_x: self.posicao_x,
            position_y: self.posicao_y,
            art_id: self.arte_id,
            author_id: self.autor_id,
            status: parse_enum(&self.status, FeedbackStatus::parse, "feedback status")?,
            created_at: self.criado_em,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRespostaRow {
    pub id: String,
    pub conteudo: String,
    pub tipo: String,
    pub arquivo: Option<String>,
    pub autor_id: Option<String>,
    pub feedback_id: String,
    pub criado_em: DateTime<Utc>,
}

impl FeedbackRespostaRow {
    pub fn into_domain(self) -> Result<FeedbackReply, AppError> {
        Ok(FeedbackReply {
            id: self.id,
            content: self.conteudo,
            kind: parse_enum(&self.tipo, FeedbackKind::parse, "feedback kind")?,
            file: self.arquivo,
            author_id: self.autor_id,
            feedback_id: self.feedback_id,
            created_at: self.criado_em,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TarefaClienteEmbed {
    pub nome: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TarefaProjetoEmbed {
    pub nome: String,
    pub cliente: Option<TarefaClienteEmbed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TarefaResponsavelEmbed {
    pub id: String,
    pub nome: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TarefaRow {
    pub id: String,
    pub titulo: String,
    pub descricao: Option<String>,
    pub status: String,
    pub prioridade: String,
    pub prazo: Option<DateTime<Utc>>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub projeto: Option<TarefaProjetoEmbed>,
    pub responsavel: Option<TarefaResponsavelEmbed>,
}

impl TarefaRow {
    pub fn into_domain(self) -> Result<Task, AppError> {
        let responsible = self.responsavel.ok_or_else(|| {
            AppError::DeserializationError("task row without responsavel embed".to_string())
        })?;
        Ok(Task {
            id: self.id,
            title: self.titulo,
            description: self.descricao,
            status: parse_enum(&self.status, TaskStatus::parse, "task status")?,
            priority: parse_enum(&self.prioridade, TaskPriority::parse, "task priority")?,
            deadline: self.prazo,
            created_at: self.criado_em,
            updated_at: self.atualizado_em,
            project: self.projeto.map(|p| TaskProjectRef {
                name: p.nome,
                client_name: p.cliente.and_then(|c| c.nome),
            }),
            responsible: TaskUserRef {
                id: responsible.id,
                name: responsible.nome,
            },
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioRow {
    pub id: String,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub ativo: bool,
    pub tipo: String,
    pub criado_em: DateTime<Utc>,
}

impl UsuarioRow {
    pub fn into_domain(self) -> Result<UserProfile, AppError> {
        Ok(UserProfile {
            id: self.id,
            name: self.nome,
            email: self.email,
            phone: self.telefone,
            avatar: self.avatar,
            active: self.ativo,
            kind: parse_enum(&self.tipo, UserKind::parse, "user kind")?,
            created_at: self.criado_em,
        })
    }
}

/// `usuario_auth` join row.
#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioAuthRow {
    pub usuario_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkRow {
    pub id: String,
    pub token: String,
    pub tipo: String,
    pub arte_id: Option<String>,
    pub projeto_id: Option<String>,
    pub expira_em: Option<DateTime<Utc>>,
    #[serde(default)]
    pub somente_leitura: bool,
    #[serde(default)]
    pub can_comment: bool,
    #[serde(default)]
    pub can_download: bool,
    pub criado_em: DateTime<Utc>,
}

impl LinkRow {
    pub fn into_domain(self) -> Result<SharedLink, AppError> {
        Ok(SharedLink {
            id: self.id,
            token: self.token,
            kind: parse_enum(&self.tipo, LinkKind::parse, "link kind")?,
            art_id: self.arte_id,
            project_id: self.projeto_id,
            expires_at: self.expira_em,
            read_only: self.somente_leitura,
            can_comment: self.can_comment,
            can_download: self.can_download,
            created_at: self.criado_em,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificacaoRow {
    pub id: String,
    pub titulo: Option<String>,
    pub mensagem: Option<String>,
    pub criado_em: DateTime<Utc>,
    #[serde(default)]
    pub lida: bool,
    pub tipo: Option<String>,
    pub link: Option<String>,
}

impl NotificacaoRow {
    pub fn into_domain(self) -> Notification {
        Notification {
            id: self.id,
            title: self.titulo,
            message: self.mensagem,
            created_at: self.criado_em,
            read: self.lida,
            kind: self.tipo,
            link: self.link,
        }
    }
}
