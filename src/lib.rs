// ==========================================
// LicitMind - Biblioteca central
// ==========================================
// Núcleo de risco e ranking para gestão de licitações públicas
// Pilha: Rust + SQLite
// Posicionamento: apoio à decisão (controle final é humano)
// ==========================================

// Inicializa o sistema de internacionalização
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de persistência - acesso a dados
pub mod repository;

// Camada de engines - regras de negócio
pub mod engine;

// Camada de importação - dados externos
pub mod importer;

// Camada de configuração
pub mod config;

// Infraestrutura de banco (conexão/PRAGMA unificados)
pub mod db;

// Sistema de logs
pub mod logging;

// Internacionalização
pub mod i18n;

// Camada de API - fachadas de negócio
pub mod api;

// ==========================================
// Reexportação dos tipos centrais
// ==========================================

// Tipos de domínio
pub use domain::types::{DeadlineKind, Tier};

// Entidades de domínio
pub use domain::{
    Contract, DeadlineItem, PenaltyInput, PenaltyResult, QuotationCandidate, RankedQuotation,
    RiskAlert,
};

// Engines
pub use engine::{
    DeadlineRiskEngine, EngineError, EngineResult, PenaltyEngine, QuotationRankingEngine,
};

// Configuração
pub use config::{ConfigManager, RiskProfile};

// API
pub use api::{AlertApi, ApiError, ApiResult, ContractApi, QuotationApi};

// ==========================================
// Constantes do sistema
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "LicitMind - Gestão de Licitações";

// Versão do schema do banco
pub const DB_VERSION: &str = "v0.1";
