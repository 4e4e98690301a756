// ==========================================
// LicitMind - Erros da camada de engine
// ==========================================
// Taxonomia mínima: os engines são aritmética pura.
// Nenhum dos erros é passível de retry — a mesma
// entrada inválida nunca passa a ser válida.
// ==========================================

use thiserror::Error;

/// Erros dos engines de risco e ranking
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Entrada fora do domínio válido (valor de contrato não positivo,
    /// dias/percentuais negativos)
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    /// Conjunto de cotações sem nenhum candidato
    #[error("conjunto de cotações vazio")]
    EmptySet,
}

/// Alias de resultado da camada de engine
pub type EngineResult<T> = Result<T, EngineError>;
