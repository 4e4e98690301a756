// ==========================================
// LicitMind - Engine de ranking de cotações
// ==========================================
// Responsabilidade: pontuar e ordenar cotações concorrentes
// de uma mesma necessidade de compra
// Entrada: conjunto não vazio de QuotationCandidate
// Saída: RankedQuotation ordenado (rank 1 = vencedor indicado)
// ==========================================
// Regra: o engine não muta registro algum; a seleção do
// vencedor é efeito colateral do chamador
// ==========================================

use crate::config::RiskProfile;
use crate::domain::quotation::{QuotationCandidate, RankedQuotation};
use crate::engine::error::{EngineError, EngineResult};
use serde_json::json;
use tracing::instrument;

// ==========================================
// QuotationRankingEngine - Engine de ranking
// ==========================================
pub struct QuotationRankingEngine {
    profile: RiskProfile,
}

impl QuotationRankingEngine {
    /// Cria o engine com os pesos padrão (50/30/20)
    pub fn new() -> Self {
        Self {
            profile: RiskProfile::default(),
        }
    }

    /// Cria o engine com um perfil de risco específico
    pub fn with_profile(profile: RiskProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // Método central
    // ==========================================

    /// Pontua e ordena o conjunto de cotações
    ///
    /// As pontuações são relativas aos mínimos DO CONJUNTO
    /// (menor valor total e menor prazo de entrega positivo);
    /// mudar a composição do conjunto muda todas as pontuações.
    ///
    /// Ordenação: score decrescente, estável (empates preservam a
    /// ordem de entrada), rank 1-based. Chamadas repetidas com a
    /// mesma entrada produzem exatamente o mesmo resultado.
    ///
    /// Falha com EmptySet quando não há candidatos.
    #[instrument(skip(self, set), fields(count = set.len()))]
    pub fn rank(&self, set: &[QuotationCandidate]) -> EngineResult<Vec<RankedQuotation>> {
        if set.is_empty() {
            return Err(EngineError::EmptySet);
        }

        let min_value = set
            .iter()
            .map(|c| c.total_value)
            .fold(f64::INFINITY, f64::min);

        // Mínimo apenas entre prazos positivos; prazo 0 = não informado
        let min_delivery = set
            .iter()
            .map(|c| c.delivery_days)
            .filter(|d| *d > 0)
            .min();

        let mut ranked: Vec<RankedQuotation> = set
            .iter()
            .map(|candidate| self.score_candidate(candidate, min_value, min_delivery))
            .collect();

        // sort_by é estável: empates mantêm a ordem de entrada
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        for (position, item) in ranked.iter_mut().enumerate() {
            item.rank = position as u32 + 1;
        }

        Ok(ranked)
    }

    // ==========================================
    // Pontuação por candidato
    // ==========================================

    /// Calcula a pontuação composta de um candidato
    ///
    /// Três parcelas independentes, cada uma limitada a [0, peso]:
    /// - preço (máx 50): igual ao mínimo → 50;
    ///   senão 50 - ((valor - mín) / mín) * 100
    /// - entrega (máx 30): igual ao mínimo → 30;
    ///   senão 30 - ((dias - mín) / mín) * 100;
    ///   sem mínimo positivo no conjunto → 0 para todos
    /// - garantia (máx 20): min(20, meses * 2); ausente → 0
    ///
    /// score = round(soma), inteiro em [0, 100]
    fn score_candidate(
        &self,
        candidate: &QuotationCandidate,
        min_value: f64,
        min_delivery: Option<i64>,
    ) -> RankedQuotation {
        let price_component = self.price_component(candidate.total_value, min_value);
        let delivery_component = self.delivery_component(candidate.delivery_days, min_delivery);
        let warranty_component = self.warranty_component(candidate.warranty_months);

        let score = (price_component + delivery_component + warranty_component).round() as u32;

        let is_best_price = candidate.total_value == min_value;
        let is_fastest_delivery = min_delivery == Some(candidate.delivery_days);

        let reason = json!({
            "price_component": price_component,
            "delivery_component": delivery_component,
            "warranty_component": warranty_component,
            "min_value": min_value,
            "min_delivery_days": min_delivery,
        });

        RankedQuotation {
            candidate: candidate.clone(),
            score,
            rank: 0, // atribuído após a ordenação
            is_best_price,
            is_fastest_delivery,
            reason: reason.to_string(),
        }
    }

    /// Parcela de preço, limitada a [0, price_weight]
    fn price_component(&self, total_value: f64, min_value: f64) -> f64 {
        let max = self.profile.price_weight;
        if total_value == min_value {
            return max;
        }
        if min_value <= 0.0 {
            // Mínimo zero com valor maior: desconto proporcional indefinido
            return 0.0;
        }
        let component = max - ((total_value - min_value) / min_value) * 100.0;
        component.clamp(0.0, max)
    }

    /// Parcela de prazo de entrega, limitada a [0, delivery_weight]
    fn delivery_component(&self, delivery_days: i64, min_delivery: Option<i64>) -> f64 {
        let max = self.profile.delivery_weight;
        let min = match min_delivery {
            Some(min) => min,
            // Nenhum candidato informou prazo positivo: parcela zerada
            // para todos (guarda explícita contra divisão por zero)
            None => return 0.0,
        };

        if delivery_days == min {
            return max;
        }
        let component = max - ((delivery_days - min) as f64 / min as f64) * 100.0;
        component.clamp(0.0, max)
    }

    /// Parcela de garantia, limitada a [0, warranty_weight]
    fn warranty_component(&self, warranty_months: Option<i64>) -> f64 {
        let max = self.profile.warranty_weight;
        match warranty_months {
            Some(months) if months > 0 => {
                (months as f64 * self.profile.warranty_points_per_month).min(max)
            }
            _ => 0.0,
        }
    }
}

impl Default for QuotationRankingEngine {
    fn default() -> Self {
        Self::new()
    }
}
