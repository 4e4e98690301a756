// ==========================================
// LicitMind - Camada de API
// ==========================================
// Responsabilidade: fachadas finas sobre repositórios + engines,
// consumidas pela camada de apresentação
// ==========================================

pub mod alert_api;
pub mod contract_api;
pub mod error;
pub mod quotation_api;

// Reexporta os tipos centrais
pub use alert_api::AlertApi;
pub use contract_api::ContractApi;
pub use error::{ApiError, ApiResult};
pub use quotation_api::QuotationApi;
