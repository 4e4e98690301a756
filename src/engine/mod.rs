// ==========================================
// LicitMind - Camada de engines
// ==========================================
// Três calculadoras puras, sem estado mutável compartilhado,
// sem I/O e com relógio injetado por parâmetro.
// Regra: todo resultado carrega um reason explicável.
// ==========================================

pub mod deadline_risk;
pub mod error;
pub mod penalty;
pub mod ranking;

// Reexporta os engines centrais
pub use deadline_risk::DeadlineRiskEngine;
pub use error::{EngineError, EngineResult};
pub use penalty::PenaltyEngine;
pub use ranking::QuotationRankingEngine;
