// ==========================================
// LicitMind - API de cotações
// ==========================================
// Responsabilidade: ranking das cotações de um processo e
// registro da escolha do vencedor
// Regra: o engine só pontua; quem grava o vencedor é esta
// camada, a pedido explícito do usuário
// ==========================================

use crate::api::error::ApiResult;
use crate::config::RiskProfile;
use crate::domain::quotation::RankedQuotation;
use crate::engine::QuotationRankingEngine;
use crate::repository::QuotationRepository;
use tracing::{info, instrument};

// ==========================================
// QuotationApi - API de cotações
// ==========================================
pub struct QuotationApi {
    repo: QuotationRepository,
    engine: QuotationRankingEngine,
}

impl QuotationApi {
    /// Cria a API sobre um repositório de cotações
    pub fn new(repo: QuotationRepository, profile: RiskProfile) -> Self {
        Self {
            repo,
            engine: QuotationRankingEngine::with_profile(profile),
        }
    }

    /// Ranqueia as cotações do processo
    ///
    /// As cotações entram na ordem de inserção (ela decide empates)
    /// e saem pontuadas e ordenadas; rank 1 é o vencedor indicado.
    /// Processo sem cotações falha com EmptySet.
    #[instrument(skip(self))]
    pub fn rank_process(
        &self,
        organization_id: &str,
        process_id: &str,
    ) -> ApiResult<Vec<RankedQuotation>> {
        let candidates = self.repo.list_by_process(organization_id, process_id)?;
        let ranked = self.engine.rank(&candidates)?;

        info!(
            process_id,
            candidates = ranked.len(),
            winner = %ranked[0].candidate.quotation_id,
            "ranking de cotações calculado"
        );

        Ok(ranked)
    }

    /// Registra a cotação vencedora do processo
    ///
    /// Efeito colateral externo ao engine: normalmente chamado com o
    /// rank 1 do ranking, mas o usuário pode escolher qualquer
    /// cotação do processo. Falha com NotFound quando a cotação não
    /// pertence ao processo.
    #[instrument(skip(self))]
    pub fn select_winner(
        &self,
        organization_id: &str,
        process_id: &str,
        quotation_id: &str,
    ) -> ApiResult<()> {
        self.repo
            .mark_winner(organization_id, process_id, quotation_id)?;
        info!(process_id, quotation_id, "vencedor registrado");
        Ok(())
    }

    /// Lê o vencedor registrado do processo, se houver
    #[instrument(skip(self))]
    pub fn current_winner(
        &self,
        organization_id: &str,
        process_id: &str,
    ) -> ApiResult<Option<String>> {
        Ok(self.repo.find_winner(organization_id, process_id)?)
    }
}
