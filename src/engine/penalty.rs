// ==========================================
// LicitMind - Engine de multa contratual
// ==========================================
// Responsabilidade: simular a multa por atraso de um contrato
// Entrada: PenaltyInput (valor total, % por dia, multa fixa, dias)
// Saída: PenaltyResult
// ==========================================
// Regra: acúmulo linear por dia, sem juros sobre juros
// ==========================================

use crate::config::RiskProfile;
use crate::domain::contract::{PenaltyInput, PenaltyResult};
use crate::engine::error::{EngineError, EngineResult};
use serde_json::json;
use tracing::instrument;

// ==========================================
// PenaltyEngine - Engine de multa contratual
// ==========================================
pub struct PenaltyEngine {
    profile: RiskProfile,
}

impl PenaltyEngine {
    /// Cria o engine com o limiar de alto impacto padrão
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

    /// Calcula a multa contratual
    ///
    /// Fórmulas:
    /// - percentage_penalty = total_value * (daily_penalty_pct / 100) * days_overdue
    ///   (linear: cada dia de atraso soma um incremento constante)
    /// - total_penalty = percentage_penalty + fixed_penalty
    /// - percent_of_contract_value = total / total_value * 100 (precisão plena)
    /// - remaining_net_value = total_value - total (pode ficar negativo;
    ///   multa maior que o contrato é um sinal válido, não se esconde)
    /// - high_impact_warning: total > limiar * total_value (estritamente maior;
    ///   exatamente no limiar não dispara)
    ///
    /// Falha com InvalidInput quando total_value <= 0, days_overdue < 0
    /// ou qualquer campo de multa negativo.
    #[instrument(skip(self, input))]
    pub fn calculate(&self, input: &PenaltyInput) -> EngineResult<PenaltyResult> {
        self.validate(input)?;

        let percentage_penalty = input.contract_total_value
            * (input.daily_penalty_pct / 100.0)
            * input.days_overdue as f64;
        let total_penalty = percentage_penalty + input.fixed_penalty;

        let percent_of_contract_value = total_penalty / input.contract_total_value * 100.0;
        let remaining_net_value = input.contract_total_value - total_penalty;

        let threshold_value = input.contract_total_value * self.profile.high_impact_threshold;
        let high_impact_warning = total_penalty > threshold_value;

        let reason = json!({
            "percentage_penalty": percentage_penalty,
            "fixed_penalty": input.fixed_penalty,
            "days_overdue": input.days_overdue,
            "daily_penalty_pct": input.daily_penalty_pct,
            "high_impact_threshold": self.profile.high_impact_threshold,
            "high_impact": high_impact_warning,
        });

        Ok(PenaltyResult {
            percentage_penalty,
            fixed_penalty: input.fixed_penalty,
            total_penalty,
            percent_of_contract_value,
            remaining_net_value,
            high_impact_warning,
            reason: reason.to_string(),
        })
    }

    // ==========================================
    // Validação de entrada
    // ==========================================

    /// Rejeita entradas fora do domínio
    fn validate(&self, input: &PenaltyInput) -> EngineResult<()> {
        if input.contract_total_value <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "contract_total_value deve ser positivo (recebido {})",
                input.contract_total_value
            )));
        }
        if input.days_overdue < 0 {
            return Err(EngineError::InvalidInput(format!(
                "days_overdue não pode ser negativo (recebido {})",
                input.days_overdue
            )));
        }
        if input.daily_penalty_pct < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "daily_penalty_pct não pode ser negativo (recebido {})",
                input.daily_penalty_pct
            )));
        }
        if input.fixed_penalty < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "fixed_penalty não pode ser negativo (recebido {})",
                input.fixed_penalty
            )));
        }
        Ok(())
    }
}

impl Default for PenaltyEngine {
    fn default() -> Self {
        Self::new()
    }
}
