// ==========================================
// Teste de integração das fachadas de API
// ==========================================
// Objetivo: fluxo completo banco → repositório → engine → fachada
// Cobertura: painel de prazos, simulação de multa,
// ranking + seleção de vencedor, sobrescrita de configuração
// ==========================================

use chrono::{Duration, NaiveDate};
use licitmind::api::{AlertApi, ApiError, ContractApi, QuotationApi};
use licitmind::config::ConfigManager;
use licitmind::db::{bootstrap_schema, open_sqlite_connection};
use licitmind::domain::alert::DeadlineItem;
use licitmind::domain::contract::Contract;
use licitmind::domain::quotation::QuotationCandidate;
use licitmind::domain::types::{DeadlineKind, Tier};
use licitmind::repository::{ContractRepository, DeadlineRepository, QuotationRepository};
use licitmind::RiskProfile;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ==========================================
// Funções auxiliares
// ==========================================

fn setup_db() -> (TempDir, Arc<Mutex<rusqlite::Connection>>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("licitmind_test.db");
    let conn = open_sqlite_connection(path.to_str().unwrap()).unwrap();
    bootstrap_schema(&conn).unwrap();
    (dir, Arc::new(Mutex::new(conn)))
}

/// Data base: 2024-06-01
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn deadline(id: &str, kind: DeadlineKind, reference_date: NaiveDate) -> DeadlineItem {
    DeadlineItem {
        entity_id: id.to_string(),
        organization_id: "org-a".to_string(),
        kind,
        label: format!("Item {}", id),
        reference_date,
    }
}

// ==========================================
// AlertApi
// ==========================================

#[test]
fn test_deadline_dashboard_end_to_end() {
    let (_dir, conn) = setup_db();
    let repo = DeadlineRepository::from_connection(Arc::clone(&conn));

    repo.upsert(&deadline("DOC-1", DeadlineKind::DocumentExpiration, today() - Duration::days(2)))
        .unwrap();
    repo.upsert(&deadline("ED-1", DeadlineKind::EditalSubmission, today() + Duration::days(4)))
        .unwrap();
    repo.upsert(&deadline("CRED-1", DeadlineKind::PortalCredentialExpiration, today() + Duration::days(60)))
        .unwrap();

    // Contrato com fim de vigência entra no mesmo painel
    ContractRepository::from_connection(Arc::clone(&conn))
        .upsert(&Contract {
            contract_id: "CT-1".to_string(),
            organization_id: "org-a".to_string(),
            supplier_label: "Fornecedora Alfa LTDA".to_string(),
            total_value: 100_000.0,
            daily_penalty_pct: 0.5,
            fixed_penalty: 0.0,
            end_date: Some(today() + Duration::days(20)),
        })
        .unwrap();

    let api = AlertApi::new(
        DeadlineRepository::from_connection(conn),
        RiskProfile::default(),
    );
    let alerts = api.deadline_dashboard("org-a", today()).unwrap();

    assert_eq!(alerts.len(), 4);
    // Mais urgente primeiro
    assert_eq!(alerts[0].entity_id, "DOC-1");
    assert_eq!(alerts[0].severity, Tier::Expired);
    assert_eq!(alerts[1].entity_id, "ED-1");
    assert_eq!(alerts[1].severity, Tier::Critical);
    assert_eq!(alerts[2].entity_id, "CT-1");
    assert_eq!(alerts[2].kind, DeadlineKind::ContractTerm);
    assert_eq!(alerts[2].severity, Tier::Warning);
    assert_eq!(alerts[3].entity_id, "CRED-1");
    assert_eq!(alerts[3].severity, Tier::Ok);

    // Recorte de urgência: só Expired e Critical
    let urgent = api.urgent_alerts("org-a", today()).unwrap();
    assert_eq!(urgent.len(), 2);
}

#[test]
fn test_dashboard_uses_profile_from_config_kv() {
    // Sobrescrita de limiar via config_kv muda a classificação
    let (_dir, conn) = setup_db();

    let config = ConfigManager::from_connection(Arc::clone(&conn)).unwrap();
    config.set_global_config_value("risk/critical_days", "2").unwrap();
    let profile = config.load_risk_profile().unwrap();
    assert_eq!(profile.critical_days, 2);

    let repo = DeadlineRepository::from_connection(Arc::clone(&conn));
    repo.upsert(&deadline("ED-1", DeadlineKind::EditalSubmission, today() + Duration::days(4)))
        .unwrap();

    let api = AlertApi::new(DeadlineRepository::from_connection(conn), profile);
    let alerts = api.deadline_dashboard("org-a", today()).unwrap();

    // 4 dias com critical_days=2: cai para Warning
    assert_eq!(alerts[0].severity, Tier::Warning);
}

// ==========================================
// ContractApi
// ==========================================

#[test]
fn test_simulate_penalty_scenario() {
    let (_dir, conn) = setup_db();
    let repo = ContractRepository::from_connection(Arc::clone(&conn));

    repo.upsert(&Contract {
        contract_id: "CT-1".to_string(),
        organization_id: "org-a".to_string(),
        supplier_label: "Fornecedora Alfa LTDA".to_string(),
        total_value: 100_000.0,
        daily_penalty_pct: 0.5,
        fixed_penalty: 1_000.0,
        end_date: None,
    })
    .unwrap();

    let api = ContractApi::new(
        ContractRepository::from_connection(conn),
        RiskProfile::default(),
    );
    let result = api.simulate_penalty("org-a", "CT-1", 10).unwrap();

    assert_eq!(result.percentage_penalty, 5_000.0);
    assert_eq!(result.total_penalty, 6_000.0);
    assert_eq!(result.percent_of_contract_value, 6.0);
    assert_eq!(result.remaining_net_value, 94_000.0);
    assert!(!result.high_impact_warning);
}

#[test]
fn test_simulate_penalty_errors() {
    let (_dir, conn) = setup_db();
    let api = ContractApi::new(
        ContractRepository::from_connection(conn),
        RiskProfile::default(),
    );

    // Contrato inexistente
    let err = api.simulate_penalty("org-a", "CT-404", 5).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // Dias negativos rejeitados antes do engine
    let err = api.simulate_penalty("org-a", "CT-404", -1).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

// ==========================================
// QuotationApi
// ==========================================

fn quotation(id: &str, value: f64, days: i64, warranty: Option<i64>) -> QuotationCandidate {
    QuotationCandidate {
        quotation_id: id.to_string(),
        supplier_label: format!("Fornecedor {}", id),
        total_value: value,
        delivery_days: days,
        warranty_months: warranty,
    }
}

#[test]
fn test_rank_process_and_select_winner() {
    let (_dir, conn) = setup_db();
    let repo = QuotationRepository::from_connection(Arc::clone(&conn));

    // Cenário de referência: A/B/C
    repo.insert("org-a", "PROC-1", &quotation("A", 1_000.0, 5, Some(12))).unwrap();
    repo.insert("org-a", "PROC-1", &quotation("B", 1_200.0, 3, Some(0))).unwrap();
    repo.insert("org-a", "PROC-1", &quotation("C", 1_000.0, 10, Some(6))).unwrap();

    let api = QuotationApi::new(
        QuotationRepository::from_connection(Arc::clone(&conn)),
        RiskProfile::default(),
    );

    let ranked = api.rank_process("org-a", "PROC-1").unwrap();
    assert_eq!(ranked[0].candidate.quotation_id, "A");
    assert_eq!(ranked[0].score, 70);
    assert_eq!(ranked[1].candidate.quotation_id, "C");
    assert_eq!(ranked[1].score, 62);
    assert_eq!(ranked[2].candidate.quotation_id, "B");
    assert_eq!(ranked[2].score, 60);

    // O engine não grava nada; a escolha é um passo separado
    assert_eq!(api.current_winner("org-a", "PROC-1").unwrap(), None);

    api.select_winner("org-a", "PROC-1", &ranked[0].candidate.quotation_id)
        .unwrap();
    assert_eq!(
        api.current_winner("org-a", "PROC-1").unwrap(),
        Some("A".to_string())
    );
}

#[test]
fn test_rank_empty_process_fails_with_empty_set() {
    let (_dir, conn) = setup_db();
    let api = QuotationApi::new(
        QuotationRepository::from_connection(conn),
        RiskProfile::default(),
    );

    let err = api.rank_process("org-a", "PROC-VAZIO").unwrap_err();
    assert!(matches!(err, ApiError::EmptySet(_)));
}
