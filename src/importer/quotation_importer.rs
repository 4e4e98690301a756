// ==========================================
// LicitMind - Importador de cotações (CSV)
// ==========================================
// Responsabilidade: ler cotações de um CSV, validar campo a campo
// na borda e inserir as linhas válidas no processo indicado
// Formato: quotation_id,supplier_label,total_value,delivery_days,warranty_months
// ==========================================
// Regra: linha malformada é rejeitada aqui com número de linha;
// os engines nunca veem dado inválido
// ==========================================

use crate::domain::quotation::QuotationCandidate;
use crate::repository::QuotationRepository;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// Registro bruto do CSV
// ==========================================
#[derive(Debug, Deserialize)]
struct QuotationCsvRecord {
    quotation_id: String,
    supplier_label: String,
    total_value: f64,
    delivery_days: i64,
    warranty_months: Option<i64>,
}

/// Rejeição de uma linha do CSV
#[derive(Debug, Clone)]
pub struct ImportRejection {
    pub line: u64,       // linha do arquivo (1-based, cabeçalho = 1)
    pub message: String, // motivo da rejeição
}

/// Resumo da importação
#[derive(Debug)]
pub struct ImportSummary {
    pub imported: usize,
    pub rejected: Vec<ImportRejection>,
}

// ==========================================
// QuotationImporter - Importador de cotações
// ==========================================
pub struct QuotationImporter<'a> {
    repo: &'a QuotationRepository,
}

impl<'a> QuotationImporter<'a> {
    /// Cria o importador sobre um repositório de cotações
    pub fn new(repo: &'a QuotationRepository) -> Self {
        Self { repo }
    }

    /// Importa as cotações do arquivo para o processo
    ///
    /// Linhas válidas são inseridas na ordem do arquivo (a ordem
    /// define o desempate do ranking); linhas inválidas entram no
    /// resumo com número de linha e motivo, sem abortar o restante.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn import_file(
        &self,
        organization_id: &str,
        process_id: &str,
        path: impl AsRef<Path>,
    ) -> anyhow::Result<ImportSummary> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut summary = ImportSummary {
            imported: 0,
            rejected: Vec::new(),
        };

        for (index, result) in reader.deserialize::<QuotationCsvRecord>().enumerate() {
            // +2: uma pela base zero, outra pelo cabeçalho
            let line = index as u64 + 2;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    summary.rejected.push(ImportRejection {
                        line,
                        message: format!("linha malformada: {}", e),
                    });
                    continue;
                }
            };

            if let Err(message) = validate_record(&record) {
                summary.rejected.push(ImportRejection { line, message });
                continue;
            }

            let candidate = QuotationCandidate {
                quotation_id: record.quotation_id,
                supplier_label: record.supplier_label,
                total_value: record.total_value,
                delivery_days: record.delivery_days,
                warranty_months: record.warranty_months,
            };

            match self.repo.insert(organization_id, process_id, &candidate) {
                Ok(()) => summary.imported += 1,
                Err(e) => summary.rejected.push(ImportRejection {
                    line,
                    message: format!("falha ao inserir: {}", e),
                }),
            }
        }

        if summary.rejected.is_empty() {
            info!(imported = summary.imported, "importação concluída sem rejeições");
        } else {
            warn!(
                imported = summary.imported,
                rejected = summary.rejected.len(),
                "importação concluída com rejeições"
            );
        }

        Ok(summary)
    }
}

/// Valida um registro na borda de importação
fn validate_record(record: &QuotationCsvRecord) -> Result<(), String> {
    if record.quotation_id.trim().is_empty() {
        return Err("quotation_id vazio".to_string());
    }
    if record.supplier_label.trim().is_empty() {
        return Err("supplier_label vazio".to_string());
    }
    if !record.total_value.is_finite() || record.total_value < 0.0 {
        return Err(format!("total_value inválido: {}", record.total_value));
    }
    if record.delivery_days < 0 {
        return Err(format!("delivery_days negativo: {}", record.delivery_days));
    }
    if let Some(months) = record.warranty_months {
        if months < 0 {
            return Err(format!("warranty_months negativo: {}", months));
        }
    }
    Ok(())
}
