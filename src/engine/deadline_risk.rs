// ==========================================
// LicitMind - Engine de risco de prazo
// ==========================================
// Responsabilidade: calcular dias restantes/vencidos de qualquer
// entidade datada e classificar em severidade
// Entrada: DeadlineItem + data de referência injetada (hoje)
// Saída: RiskAlert (nunca persistido)
// ==========================================
// Regra: o relógio é sempre parâmetro; o engine nunca
// lê a hora do sistema
// ==========================================

use crate::config::RiskProfile;
use crate::domain::alert::{DeadlineItem, RiskAlert};
use crate::domain::types::Tier;
use chrono::NaiveDate;
use serde_json::json;
use tracing::instrument;

// ==========================================
// DeadlineRiskEngine - Engine de risco de prazo
// ==========================================
pub struct DeadlineRiskEngine {
    profile: RiskProfile,
}

impl DeadlineRiskEngine {
    /// Cria o engine com os limiares padrão
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
    // Métodos centrais
    // ==========================================

    /// Avalia um único prazo
    ///
    /// days_offset = reference_date - today em dias de calendário
    /// (datas truncadas à meia-noite; nunca dias fracionários).
    /// Negativo = vencido, 0 = hoje, positivo = dias restantes.
    ///
    /// Não há condição de erro: qualquer data, inclusive passada ou
    /// implausível, produz um alerta — um prazo estranho deve aparecer
    /// no painel, não sumir em silêncio.
    pub fn evaluate(&self, item: &DeadlineItem, today: NaiveDate) -> RiskAlert {
        let days_offset = (item.reference_date - today).num_days();
        let (severity, reason) = self.classify(days_offset);

        RiskAlert {
            entity_id: item.entity_id.clone(),
            label: item.label.clone(),
            kind: item.kind,
            reference_date: item.reference_date,
            days_offset,
            severity,
            reason,
        }
    }

    /// Avalia um lote de prazos
    ///
    /// Retorna os alertas ordenados por days_offset crescente
    /// (mais urgente primeiro); empates preservam a ordem de entrada
    /// (ordenação estável). Essa ordem é o contrato consumido pela
    /// camada de apresentação.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub fn evaluate_many(&self, items: &[DeadlineItem], today: NaiveDate) -> Vec<RiskAlert> {
        let mut alerts: Vec<RiskAlert> = items
            .iter()
            .map(|item| self.evaluate(item, today))
            .collect();

        // sort_by_key é estável
        alerts.sort_by_key(|alert| alert.days_offset);
        alerts
    }

    // ==========================================
    // Classificação de severidade
    // ==========================================

    /// Atribui a severidade a partir de days_offset
    ///
    /// Regras em ordem fixa de prioridade (primeira que casar vence):
    /// 1) days_offset < 0              → Expired
    /// 2) days_offset <= critical_days → Critical
    /// 3) days_offset <= warning_days  → Warning
    /// 4) caso contrário               → Ok
    ///
    /// Retorna: (Tier, reason_json)
    fn classify(&self, days_offset: i64) -> (Tier, String) {
        if days_offset < 0 {
            let reason = json!({
                "tier": "EXPIRED",
                "rule": "OVERDUE",
                "days_offset": days_offset,
                "days_overdue": -days_offset,
            });
            return (Tier::Expired, reason.to_string());
        }

        if days_offset <= self.profile.critical_days {
            let reason = json!({
                "tier": "CRITICAL",
                "rule": "WITHIN_CRITICAL_WINDOW",
                "days_offset": days_offset,
                "critical_days": self.profile.critical_days,
            });
            return (Tier::Critical, reason.to_string());
        }

        if days_offset <= self.profile.warning_days {
            let reason = json!({
                "tier": "WARNING",
                "rule": "WITHIN_WARNING_WINDOW",
                "days_offset": days_offset,
                "warning_days": self.profile.warning_days,
            });
            return (Tier::Warning, reason.to_string());
        }

        let reason = json!({
            "tier": "OK",
            "rule": "BEYOND_WARNING_WINDOW",
            "days_offset": days_offset,
            "warning_days": self.profile.warning_days,
        });
        (Tier::Ok, reason.to_string())
    }
}

impl Default for DeadlineRiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
