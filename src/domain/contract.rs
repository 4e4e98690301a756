// ==========================================
// LicitMind - Modelo de contratos e multas
// ==========================================
// Contract: linha do contrato administrativo
// PenaltyInput / PenaltyResult: simulação de multa contratual
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Contract - Contrato administrativo
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: String,        // ID do contrato
    pub organization_id: String,    // Organização dona do dado
    pub supplier_label: String,     // Fornecedor contratado
    pub total_value: f64,           // Valor total do contrato (R$)
    pub daily_penalty_pct: f64,     // Percentual de multa por dia de atraso (pontos percentuais)
    pub fixed_penalty: f64,         // Multa fixa prevista em cláusula (R$)
    pub end_date: Option<NaiveDate>, // Fim de vigência (alimenta o alerta de prazo)
}

// ==========================================
// PenaltyInput - Entrada da simulação de multa
// ==========================================
// Valores validados pelo PenaltyEngine:
// total_value > 0, demais campos >= 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyInput {
    pub contract_total_value: f64, // Valor total do contrato (R$)
    pub daily_penalty_pct: f64,    // Percentual de multa por dia (pontos percentuais)
    pub fixed_penalty: f64,        // Multa fixa (R$)
    pub days_overdue: i64,         // Dias de atraso decorridos
}

impl PenaltyInput {
    /// Monta a entrada a partir da linha do contrato
    pub fn from_contract(contract: &Contract, days_overdue: i64) -> Self {
        Self {
            contract_total_value: contract.total_value,
            daily_penalty_pct: contract.daily_penalty_pct,
            fixed_penalty: contract.fixed_penalty,
            days_overdue,
        }
    }
}

// ==========================================
// PenaltyResult - Resultado da simulação
// ==========================================
// Invariante: total_penalty = percentage_penalty + fixed_penalty, exatamente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyResult {
    pub percentage_penalty: f64,        // Parcela percentual acumulada (linear por dia)
    pub fixed_penalty: f64,             // Parcela fixa
    pub total_penalty: f64,             // Soma das duas parcelas
    pub percent_of_contract_value: f64, // Total como % do valor do contrato (precisão plena)
    pub remaining_net_value: f64,       // Valor líquido restante (pode ser negativo)
    pub high_impact_warning: bool,      // total > limiar de alto impacto * valor do contrato

    // ===== Explicabilidade =====
    pub reason: String, // JSON com parcelas e limiar aplicado
}

impl PenaltyResult {
    /// Percentual do valor do contrato arredondado para exibição (2 casas)
    ///
    /// O cálculo interno mantém precisão plena; o arredondamento
    /// existe apenas na borda de apresentação
    pub fn percent_display(&self) -> f64 {
        (self.percent_of_contract_value * 100.0).round() / 100.0
    }
}
