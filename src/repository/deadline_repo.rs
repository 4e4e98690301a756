// ==========================================
// LicitMind - Repositório de prazos datados
// ==========================================
// Regra: repositório não contém lógica de negócio;
// entrega linhas tipadas e já filtradas por organização
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::alert::DeadlineItem;
use crate::domain::types::DeadlineKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// DeadlineRepository - Repositório de prazos
// ==========================================
/// Reúne as entidades datadas das duas fontes:
/// - tabela deadline_item (editais, documentos, credenciais)
/// - tabela contract (fim de vigência → CONTRACT_TERM)
pub struct DeadlineRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DeadlineRepository {
    /// Cria um novo repositório
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Cria a partir de uma conexão existente
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Obtém a conexão
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insere ou substitui um prazo datado
    pub fn upsert(&self, item: &DeadlineItem) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO deadline_item (
                entity_id, organization_id, kind, label, reference_date
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                item.entity_id,
                item.organization_id,
                item.kind.to_db_str(),
                item.label,
                item.reference_date,
            ],
        )?;
        Ok(())
    }

    /// Lista todos os prazos da organização
    ///
    /// Inclui os fins de vigência de contrato da mesma organização.
    /// A ordem de retorno (data de referência, depois id) é estável e
    /// define o desempate do lote de avaliação.
    pub fn list_by_organization(&self, organization_id: &str) -> RepositoryResult<Vec<DeadlineItem>> {
        let conn = self.get_conn()?;

        let mut items = Vec::new();

        let mut stmt = conn.prepare(
            r#"
            SELECT entity_id, organization_id, kind, label, reference_date
            FROM deadline_item
            WHERE organization_id = ?1
            ORDER BY reference_date, entity_id
            "#,
        )?;
        let rows = stmt.query_map(params![organization_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, NaiveDate>(4)?,
            ))
        })?;

        for row in rows {
            let (entity_id, organization_id, kind_raw, label, reference_date) = row?;
            let kind = DeadlineKind::from_str(&kind_raw).ok_or_else(|| {
                RepositoryError::FieldValueError {
                    field: "kind".to_string(),
                    message: format!("tipo de prazo desconhecido '{}' (entity_id={})", kind_raw, entity_id),
                }
            })?;
            items.push(DeadlineItem {
                entity_id,
                organization_id,
                kind,
                label,
                reference_date,
            });
        }

        // Fim de vigência dos contratos da organização
        let mut stmt = conn.prepare(
            r#"
            SELECT contract_id, organization_id, supplier_label, end_date
            FROM contract
            WHERE organization_id = ?1 AND end_date IS NOT NULL
            ORDER BY end_date, contract_id
            "#,
        )?;
        let rows = stmt.query_map(params![organization_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, NaiveDate>(3)?,
            ))
        })?;

        for row in rows {
            let (contract_id, organization_id, supplier_label, end_date) = row?;
            items.push(DeadlineItem {
                entity_id: contract_id,
                organization_id,
                kind: DeadlineKind::ContractTerm,
                label: supplier_label,
                reference_date: end_date,
            });
        }

        Ok(items)
    }
}
