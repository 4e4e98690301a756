// ==========================================
// LicitMind - Modelo de alertas de prazo
// ==========================================
// DeadlineItem: entidade datada vinda da persistência
// RiskAlert: saída do DeadlineRiskEngine
// ==========================================

use crate::domain::types::{DeadlineKind, Tier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DeadlineItem - Entidade datada
// ==========================================
// Linha já filtrada pelo escopo da organização;
// o engine confia que a autorização foi feita antes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineItem {
    pub entity_id: String,         // ID da entidade de origem
    pub organization_id: String,   // Organização dona do dado
    pub kind: DeadlineKind,        // Origem do prazo
    pub label: String,             // Rótulo exibível (número do edital, nome do documento...)
    pub reference_date: NaiveDate, // Data do prazo/vencimento
}

// ==========================================
// RiskAlert - Alerta de risco de prazo
// ==========================================
// Recriado a cada avaliação, nunca persistido nem mutado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAlert {
    pub entity_id: String,         // Entidade de origem
    pub label: String,             // Rótulo exibível
    pub kind: DeadlineKind,        // Origem do prazo
    pub reference_date: NaiveDate, // Data do prazo/vencimento

    // ===== Valores derivados =====
    pub days_offset: i64, // negativo = vencido, 0 = hoje, positivo = dias restantes
    pub severity: Tier,   // derivado de days_offset pelos limiares do RiskProfile

    // ===== Explicabilidade =====
    pub reason: String, // JSON com regra aplicada e limiares
}
