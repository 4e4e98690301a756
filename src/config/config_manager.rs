// ==========================================
// LicitMind - Gerenciador de configuração
// ==========================================
// Responsabilidade: carga, consulta e sobrescrita de configuração
// Armazenamento: tabela config_kv (key-value + scope)
// ==========================================

use crate::config::risk_profile::RiskProfile;
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use serde_json::{json, Map, Value};
use std::error::Error;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Chaves de configuração do perfil de risco (prefixo 'risk/')
const RISK_PROFILE_KEYS: &[&str] = &[
    "critical_days",
    "warning_days",
    "high_impact_threshold",
    "price_weight",
    "delivery_weight",
    "warranty_weight",
    "warranty_points_per_month",
];

// ==========================================
// ConfigManager - Gerenciador de configuração
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Cria um novo ConfigManager
    ///
    /// # Parâmetros
    /// - db_path: caminho do arquivo do banco
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Cria a partir de uma conexão existente
    ///
    /// Reaplica os PRAGMAs unificados na conexão recebida (idempotente)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| format!("falha ao obter lock: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }
        Ok(Self { conn })
    }

    /// Lê um valor da tabela config_kv (scope_id='global')
    ///
    /// # Retorno
    /// - Some(String): valor configurado
    /// - None: chave inexistente
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Lê um valor do escopo global (método público para outros módulos)
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// Lê um valor com padrão quando a chave não existe
    pub fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Grava um valor no escopo global (upsert)
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value)
            VALUES ('global', ?1, ?2)
            ON CONFLICT(scope_id, key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    // ==========================================
    // Perfil de risco
    // ==========================================

    /// Carrega o RiskProfile a partir das chaves 'risk/{campo}'
    ///
    /// Chaves ausentes caem no padrão embutido; valores que não
    /// parseiam como número são ignorados com warning (nunca derrubam
    /// a carga do perfil)
    pub fn load_risk_profile(&self) -> Result<RiskProfile, Box<dyn Error>> {
        let mut overrides = Map::new();

        for field in RISK_PROFILE_KEYS {
            let key = format!("risk/{}", field);
            if let Some(raw) = self.get_config_value(&key)? {
                // Campos inteiros precisam chegar como inteiro JSON
                if let Ok(value) = raw.parse::<i64>() {
                    overrides.insert((*field).to_string(), json!(value));
                } else if let Ok(value) = raw.parse::<f64>() {
                    overrides.insert((*field).to_string(), json!(value));
                } else {
                    warn!(key = %key, value = %raw, "valor de configuração não numérico ignorado");
                }
            }
        }

        let profile: RiskProfile = serde_json::from_value(Value::Object(overrides))?;
        Ok(profile)
    }

    /// Snapshot de toda a configuração global (JSON)
    ///
    /// Usado em logs de diagnóstico na inicialização
    pub fn config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut snapshot = Map::new();
        for row in rows {
            let (key, value) = row?;
            snapshot.insert(key, json!(value));
        }

        Ok(Value::Object(snapshot).to_string())
    }
}

// ==========================================
// Testes unitários
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::bootstrap_schema;

    fn manager_in_memory() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        bootstrap_schema(&conn).unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let manager = manager_in_memory();
        assert!(manager.get_global_config_value("inexistente").unwrap().is_none());
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let manager = manager_in_memory();
        manager.set_global_config_value("risk/critical_days", "10").unwrap();
        assert_eq!(
            manager.get_global_config_value("risk/critical_days").unwrap(),
            Some("10".to_string())
        );

        // Upsert sobrescreve
        manager.set_global_config_value("risk/critical_days", "12").unwrap();
        assert_eq!(
            manager.get_config_or_default("risk/critical_days", "7").unwrap(),
            "12"
        );
    }

    #[test]
    fn test_load_risk_profile_defaults() {
        let manager = manager_in_memory();
        let profile = manager.load_risk_profile().unwrap();
        assert_eq!(profile, RiskProfile::default());
    }

    #[test]
    fn test_load_risk_profile_with_overrides() {
        let manager = manager_in_memory();
        manager.set_global_config_value("risk/critical_days", "5").unwrap();
        manager.set_global_config_value("risk/high_impact_threshold", "0.10").unwrap();

        let profile = manager.load_risk_profile().unwrap();
        assert_eq!(profile.critical_days, 5);
        assert_eq!(profile.high_impact_threshold, 0.10);
        // Campo não sobrescrito mantém o padrão
        assert_eq!(profile.warning_days, 30);
    }

    #[test]
    fn test_load_risk_profile_ignores_garbage() {
        let manager = manager_in_memory();
        manager.set_global_config_value("risk/critical_days", "abc").unwrap();

        let profile = manager.load_risk_profile().unwrap();
        assert_eq!(profile.critical_days, 7, "valor não numérico cai no padrão");
    }
}
