// ==========================================
// LicitMind - Entrada de linha de comando
// ==========================================
// Pilha: Rust + SQLite
// Uso: licitmind [caminho_do_banco] [organization_id]
// Imprime o painel de prazos da organização
// ==========================================

use anyhow::Context;
use chrono::Local;
use licitmind::api::AlertApi;
use licitmind::config::ConfigManager;
use licitmind::db::{bootstrap_schema, open_sqlite_connection};
use licitmind::repository::DeadlineRepository;
use std::sync::{Arc, Mutex};

/// Caminho padrão do banco (diretório de dados do usuário)
fn default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    base.join("licitmind")
        .join("licitmind.db")
        .to_string_lossy()
        .to_string()
}

fn main() -> anyhow::Result<()> {
    // Inicializa o sistema de logs
    licitmind::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", licitmind::APP_NAME);
    tracing::info!("Versão do sistema: {}", licitmind::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let db_path = args.next().unwrap_or_else(default_db_path);
    let organization_id = args.next().unwrap_or_else(|| "default".to_string());

    tracing::info!("Usando banco: {}", db_path);

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("não foi possível criar o diretório {}", parent.display()))?;
    }

    let conn = open_sqlite_connection(&db_path)
        .with_context(|| format!("não foi possível abrir o banco {}", db_path))?;
    bootstrap_schema(&conn).context("falha no bootstrap do schema")?;
    let conn = Arc::new(Mutex::new(conn));

    // Perfil de risco: padrão embutido + sobrescritas do config_kv
    let config = ConfigManager::from_connection(Arc::clone(&conn))
        .map_err(|e| anyhow::anyhow!("falha ao criar ConfigManager: {}", e))?;
    let profile = config
        .load_risk_profile()
        .map_err(|e| anyhow::anyhow!("falha ao carregar perfil de risco: {}", e))?;
    tracing::info!("Perfil de risco carregado: {:?}", profile);

    // O relógio é injetado aqui, na borda externa
    let today = Local::now().date_naive();

    let api = AlertApi::new(DeadlineRepository::from_connection(conn), profile);
    let alerts = api.deadline_dashboard(&organization_id, today)?;

    if alerts.is_empty() {
        println!("Nenhum prazo cadastrado para a organização '{}'.", organization_id);
        return Ok(());
    }

    println!("{}", licitmind::i18n::t("alert.dashboard_title"));
    for alert in &alerts {
        println!(
            "[{}] {} ({}) - {} - {} dia(s)",
            alert.severity, alert.label, alert.kind, alert.reference_date, alert.days_offset
        );
    }

    Ok(())
}
