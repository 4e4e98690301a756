// ==========================================
// LicitMind - Erros da camada de API
// ==========================================
// Responsabilidade: converter erros de engine e de persistência
// em erros com mensagem explícita para o chamador
// Regra: toda mensagem carrega o motivo (explicabilidade)
// ==========================================

use crate::engine::EngineError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Erros da camada de API
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Regras de negócio =====
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    #[error("conjunto de cotações vazio: {0}")]
    EmptySet(String),

    #[error("recurso não encontrado: {0}")]
    NotFound(String),

    // ===== Acesso a dados =====
    #[error("erro de banco de dados: {0}")]
    DatabaseError(String),

    // ===== Genéricos =====
    #[error("erro interno: {0}")]
    InternalError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(message) => ApiError::InvalidInput(message),
            EngineError::EmptySet => {
                ApiError::EmptySet("nenhuma cotação cadastrada no processo".to_string())
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} id={}", entity, id))
            }
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("campo {}: {}", field, message))
            }
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

/// Alias de resultado da camada de API
pub type ApiResult<T> = Result<T, ApiError>;
