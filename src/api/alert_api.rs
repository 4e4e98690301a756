// ==========================================
// LicitMind - API de alertas de prazo
// ==========================================
// Responsabilidade: montar o painel "o que precisa de atenção"
// Entrada: organização + data de referência injetada
// Saída: RiskAlert[] mais urgente primeiro
// ==========================================

use crate::api::error::ApiResult;
use crate::config::RiskProfile;
use crate::domain::alert::RiskAlert;
use crate::domain::types::Tier;
use crate::engine::DeadlineRiskEngine;
use crate::repository::DeadlineRepository;
use chrono::NaiveDate;
use tracing::{info, instrument};

// ==========================================
// AlertApi - API de alertas
// ==========================================
pub struct AlertApi {
    repo: DeadlineRepository,
    engine: DeadlineRiskEngine,
}

impl AlertApi {
    /// Cria a API sobre um repositório de prazos, com limiares do perfil
    pub fn new(repo: DeadlineRepository, profile: RiskProfile) -> Self {
        Self {
            repo,
            engine: DeadlineRiskEngine::with_profile(profile),
        }
    }

    /// Painel de prazos da organização
    ///
    /// Reúne editais, documentos, credenciais e fins de vigência de
    /// contrato, avalia tudo com a mesma data de referência e devolve
    /// os alertas em ordem de urgência. Cada chamada é independente e
    /// idempotente; o chamador pode repetir no intervalo de
    /// atualização que quiser.
    #[instrument(skip(self))]
    pub fn deadline_dashboard(
        &self,
        organization_id: &str,
        today: NaiveDate,
    ) -> ApiResult<Vec<RiskAlert>> {
        let items = self.repo.list_by_organization(organization_id)?;
        let alerts = self.engine.evaluate_many(&items, today);

        let expired = alerts.iter().filter(|a| a.severity == Tier::Expired).count();
        let critical = alerts.iter().filter(|a| a.severity == Tier::Critical).count();
        info!(
            organization_id,
            total = alerts.len(),
            expired,
            critical,
            "painel de prazos montado"
        );

        Ok(alerts)
    }

    /// Somente os alertas que exigem ação (Expired e Critical)
    #[instrument(skip(self))]
    pub fn urgent_alerts(
        &self,
        organization_id: &str,
        today: NaiveDate,
    ) -> ApiResult<Vec<RiskAlert>> {
        let alerts = self.deadline_dashboard(organization_id, today)?;
        Ok(alerts
            .into_iter()
            .filter(|a| a.severity <= Tier::Critical)
            .collect())
    }
}
