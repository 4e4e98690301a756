// ==========================================
// LicitMind - Camada de domínio
// ==========================================
// Entidades e tipos explícitos e exaustivamente tipados;
// linhas malformadas são rejeitadas na borda de persistência,
// nunca dentro dos engines
// ==========================================

pub mod alert;
pub mod contract;
pub mod quotation;
pub mod types;

// Reexporta as entidades centrais
pub use alert::{DeadlineItem, RiskAlert};
pub use contract::{Contract, PenaltyInput, PenaltyResult};
pub use quotation::{QuotationCandidate, RankedQuotation};
pub use types::{DeadlineKind, Tier};
