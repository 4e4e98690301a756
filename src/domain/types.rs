// ==========================================
// LicitMind - Tipos do domínio
// ==========================================
// Vocabulário compartilhado de severidade e
// classificação de prazos
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Severidade (Tier)
// ==========================================
// Ordem total: Expired < Critical < Warning < Ok
// (mais grave primeiro ao ordenar em ordem crescente)
// Os limiares numéricos vivem no RiskProfile,
// nunca espalhados pela camada de apresentação
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Expired,  // Vencido
    Critical, // Crítico (até 7 dias)
    Warning,  // Atenção (até 30 dias)
    Ok,       // Normal
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Expired => write!(f, "EXPIRED"),
            Tier::Critical => write!(f, "CRITICAL"),
            Tier::Warning => write!(f, "WARNING"),
            Tier::Ok => write!(f, "OK"),
        }
    }
}

impl Tier {
    /// Converte para a string armazenada no banco
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Tier::Expired => "EXPIRED",
            Tier::Critical => "CRITICAL",
            Tier::Warning => "WARNING",
            Tier::Ok => "OK",
        }
    }

    /// Interpreta a string vinda do banco
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "EXPIRED" => Tier::Expired,
            "CRITICAL" => Tier::Critical,
            "WARNING" => Tier::Warning,
            _ => Tier::Ok, // valor padrão
        }
    }
}

// ==========================================
// Tipo de prazo (Deadline Kind)
// ==========================================
// Identifica a origem da data de referência de um alerta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeadlineKind {
    DocumentExpiration,         // Vencimento de documento habilitatório
    PortalCredentialExpiration, // Vencimento de credencial de portal
    EditalSubmission,           // Prazo de entrega de proposta do edital
    ContractTerm,               // Fim de vigência de contrato
}

impl fmt::Display for DeadlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineKind::DocumentExpiration => write!(f, "DOCUMENT_EXPIRATION"),
            DeadlineKind::PortalCredentialExpiration => write!(f, "PORTAL_CREDENTIAL_EXPIRATION"),
            DeadlineKind::EditalSubmission => write!(f, "EDITAL_SUBMISSION"),
            DeadlineKind::ContractTerm => write!(f, "CONTRACT_TERM"),
        }
    }
}

impl DeadlineKind {
    /// Converte para a string armazenada no banco
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DeadlineKind::DocumentExpiration => "DOCUMENT_EXPIRATION",
            DeadlineKind::PortalCredentialExpiration => "PORTAL_CREDENTIAL_EXPIRATION",
            DeadlineKind::EditalSubmission => "EDITAL_SUBMISSION",
            DeadlineKind::ContractTerm => "CONTRACT_TERM",
        }
    }

    /// Interpreta a string vinda do banco
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DOCUMENT_EXPIRATION" => Some(DeadlineKind::DocumentExpiration),
            "PORTAL_CREDENTIAL_EXPIRATION" => Some(DeadlineKind::PortalCredentialExpiration),
            "EDITAL_SUBMISSION" => Some(DeadlineKind::EditalSubmission),
            "CONTRACT_TERM" => Some(DeadlineKind::ContractTerm),
            _ => None,
        }
    }
}

// ==========================================
// Testes unitários
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        // Expired é estritamente pior que todos os demais
        assert!(Tier::Expired < Tier::Critical);
        assert!(Tier::Critical < Tier::Warning);
        assert!(Tier::Warning < Tier::Ok);
    }

    #[test]
    fn test_tier_sort_most_severe_first() {
        let mut tiers = vec![Tier::Ok, Tier::Expired, Tier::Warning, Tier::Critical];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![Tier::Expired, Tier::Critical, Tier::Warning, Tier::Ok],
            "ordenação crescente deve colocar o mais grave primeiro"
        );
    }

    #[test]
    fn test_tier_db_roundtrip() {
        for tier in [Tier::Expired, Tier::Critical, Tier::Warning, Tier::Ok] {
            assert_eq!(Tier::from_str(tier.to_db_str()), tier);
        }
    }

    #[test]
    fn test_deadline_kind_db_roundtrip() {
        for kind in [
            DeadlineKind::DocumentExpiration,
            DeadlineKind::PortalCredentialExpiration,
            DeadlineKind::EditalSubmission,
            DeadlineKind::ContractTerm,
        ] {
            assert_eq!(DeadlineKind::from_str(kind.to_db_str()), Some(kind));
        }
        assert_eq!(DeadlineKind::from_str("QUALQUER_COISA"), None);
    }
}
