// ==========================================
// LicitMind - API de contratos
// ==========================================
// Responsabilidade: simulação de multa por atraso sobre
// a linha do contrato
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::RiskProfile;
use crate::domain::contract::{Contract, PenaltyInput, PenaltyResult};
use crate::engine::PenaltyEngine;
use crate::repository::ContractRepository;
use tracing::{info, instrument, warn};

// ==========================================
// ContractApi - API de contratos
// ==========================================
pub struct ContractApi {
    repo: ContractRepository,
    engine: PenaltyEngine,
}

impl ContractApi {
    /// Cria a API sobre um repositório de contratos
    pub fn new(repo: ContractRepository, profile: RiskProfile) -> Self {
        Self {
            repo,
            engine: PenaltyEngine::with_profile(profile),
        }
    }

    /// Simula a multa de um contrato após N dias de atraso
    ///
    /// Carrega a linha do contrato, monta a entrada e delega o
    /// cálculo ao engine. O resultado não é persistido; é um valor
    /// de simulação para a tela do contrato.
    #[instrument(skip(self))]
    pub fn simulate_penalty(
        &self,
        organization_id: &str,
        contract_id: &str,
        days_overdue: i64,
    ) -> ApiResult<PenaltyResult> {
        if days_overdue < 0 {
            return Err(ApiError::InvalidInput(format!(
                "days_overdue não pode ser negativo (recebido {})",
                days_overdue
            )));
        }

        let contract = self.repo.find_by_id(organization_id, contract_id)?;
        let input = PenaltyInput::from_contract(&contract, days_overdue);
        let result = self.engine.calculate(&input)?;

        if result.high_impact_warning {
            warn!(
                contract_id,
                total_penalty = result.total_penalty,
                percent = result.percent_of_contract_value,
                "multa simulada de alto impacto"
            );
        } else {
            info!(
                contract_id,
                total_penalty = result.total_penalty,
                "multa simulada"
            );
        }

        Ok(result)
    }

    /// Lista os contratos da organização
    #[instrument(skip(self))]
    pub fn list_contracts(&self, organization_id: &str) -> ApiResult<Vec<Contract>> {
        Ok(self.repo.list_by_organization(organization_id)?)
    }
}
