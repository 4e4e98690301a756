// ==========================================
// LicitMind - Modelo de cotações
// ==========================================
// QuotationCandidate: cotação concorrente para uma mesma necessidade
// RankedQuotation: saída do QuotationRankingEngine
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// QuotationCandidate - Cotação concorrente
// ==========================================
// delivery_days = 0 significa "prazo de entrega não informado";
// o candidato não participa do mínimo de entrega
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationCandidate {
    pub quotation_id: String,          // ID da cotação
    pub supplier_label: String,        // Fornecedor proponente
    pub total_value: f64,              // Valor total proposto (R$)
    pub delivery_days: i64,            // Prazo de entrega em dias
    pub warranty_months: Option<i64>,  // Garantia em meses (ausente = sem garantia)
}

// ==========================================
// RankedQuotation - Cotação pontuada e ordenada
// ==========================================
// Pontuações são relativas aos mínimos do conjunto avaliado;
// mudar a composição do conjunto muda todas as pontuações
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedQuotation {
    pub candidate: QuotationCandidate,

    // ===== Pontuação composta =====
    pub score: u32, // inteiro em [0, 100]
    pub rank: u32,  // posição 1-based após a ordenação estável

    // ===== Destaques independentes do rank =====
    pub is_best_price: bool,       // total_value == mínimo do conjunto
    pub is_fastest_delivery: bool, // delivery_days == mínimo positivo do conjunto

    // ===== Explicabilidade =====
    pub reason: String, // JSON com as três parcelas e os mínimos usados
}
