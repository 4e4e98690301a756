// ==========================================
// LicitMind - Camada de configuração
// ==========================================
// Constantes de negócio em um único lugar (RiskProfile),
// com sobrescrita via tabela config_kv
// ==========================================

pub mod config_manager;
pub mod risk_profile;

pub use config_manager::ConfigManager;
pub use risk_profile::RiskProfile;
