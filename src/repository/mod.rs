// ==========================================
// LicitMind - Camada de persistência
// ==========================================
// Regra: repositório não contém lógica de negócio
// Restrição: toda consulta é parametrizada e filtrada
// pelo escopo da organização
// ==========================================

pub mod contract_repo;
pub mod deadline_repo;
pub mod error;
pub mod quotation_repo;

// Reexporta os repositórios centrais
pub use contract_repo::ContractRepository;
pub use deadline_repo::DeadlineRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use quotation_repo::QuotationRepository;
