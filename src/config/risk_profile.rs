// ==========================================
// LicitMind - Perfil de risco
// ==========================================
// Constantes de negócio do núcleo de risco e ranking.
// Os valores padrão reproduzem as regras vigentes;
// não há evidência de outros valores "corretos",
// apenas o ponto único de configuração.
// ==========================================

use serde::{Deserialize, Serialize};

/// Perfil de risco (objeto de configuração)
///
/// Fonte: tabela config_kv (scope_id='global', chaves 'risk/*'),
/// com padrão embutido quando a chave não existe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    // ===== Limiares de severidade de prazo (dias) =====
    /// days_offset <= critical_days → Critical
    #[serde(default = "default_critical_days")]
    pub critical_days: i64,

    /// days_offset <= warning_days → Warning
    #[serde(default = "default_warning_days")]
    pub warning_days: i64,

    // ===== Multa contratual =====
    /// Fração do valor do contrato acima da qual a multa é de alto impacto
    /// (comparação estrita: exatamente o limiar não dispara o aviso)
    #[serde(default = "default_high_impact_threshold")]
    pub high_impact_threshold: f64,

    // ===== Pesos do ranking de cotações =====
    /// Pontuação máxima da parcela de preço
    #[serde(default = "default_price_weight")]
    pub price_weight: f64,

    /// Pontuação máxima da parcela de prazo de entrega
    #[serde(default = "default_delivery_weight")]
    pub delivery_weight: f64,

    /// Pontuação máxima da parcela de garantia
    #[serde(default = "default_warranty_weight")]
    pub warranty_weight: f64,

    /// Pontos por mês de garantia (limitado a warranty_weight)
    #[serde(default = "default_warranty_points_per_month")]
    pub warranty_points_per_month: f64,
}

fn default_critical_days() -> i64 {
    7
}

fn default_warning_days() -> i64 {
    30
}

fn default_high_impact_threshold() -> f64 {
    0.20
}

fn default_price_weight() -> f64 {
    50.0
}

fn default_delivery_weight() -> f64 {
    30.0
}

fn default_warranty_weight() -> f64 {
    20.0
}

fn default_warranty_points_per_month() -> f64 {
    2.0
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            critical_days: default_critical_days(),
            warning_days: default_warning_days(),
            high_impact_threshold: default_high_impact_threshold(),
            price_weight: default_price_weight(),
            delivery_weight: default_delivery_weight(),
            warranty_weight: default_warranty_weight(),
            warranty_points_per_month: default_warranty_points_per_month(),
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
    fn test_default_profile() {
        let profile = RiskProfile::default();
        assert_eq!(profile.critical_days, 7);
        assert_eq!(profile.warning_days, 30);
        assert_eq!(profile.high_impact_threshold, 0.20);
        assert_eq!(profile.price_weight, 50.0);
        assert_eq!(profile.delivery_weight, 30.0);
        assert_eq!(profile.warranty_weight, 20.0);
        assert_eq!(profile.warranty_points_per_month, 2.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // Sobrescreve apenas um campo; os demais vêm do padrão
        let profile: RiskProfile = serde_json::from_str(r#"{"critical_days": 10}"#).unwrap();
        assert_eq!(profile.critical_days, 10);
        assert_eq!(profile.warning_days, 30);
        assert_eq!(profile.price_weight, 50.0);
    }
}
