// ==========================================
// LicitMind - Camada de importação
// ==========================================
// Dados externos entram validados; nada malformado
// passa da borda
// ==========================================

pub mod quotation_importer;

pub use quotation_importer::{ImportRejection, ImportSummary, QuotationImporter};
