// ==========================================
// LicitMind - Repositório de contratos
// ==========================================
// Regra: repositório não contém lógica de negócio
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::contract::Contract;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// ContractRepository - Repositório de contratos
// ==========================================
pub struct ContractRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ContractRepository {
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

    /// Insere ou substitui um contrato
    pub fn upsert(&self, contract: &Contract) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO contract (
                contract_id, organization_id, supplier_label,
                total_value, daily_penalty_pct, fixed_penalty, end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                contract.contract_id,
                contract.organization_id,
                contract.supplier_label,
                contract.total_value,
                contract.daily_penalty_pct,
                contract.fixed_penalty,
                contract.end_date,
            ],
        )?;
        Ok(())
    }

    /// Busca um contrato da organização pelo id
    ///
    /// Retorna NotFound quando o contrato não existe no escopo
    pub fn find_by_id(&self, organization_id: &str, contract_id: &str) -> RepositoryResult<Contract> {
        let conn = self.get_conn()?;

        let contract = conn
            .query_row(
                r#"
                SELECT contract_id, organization_id, supplier_label,
                       total_value, daily_penalty_pct, fixed_penalty, end_date
                FROM contract
                WHERE organization_id = ?1 AND contract_id = ?2
                "#,
                params![organization_id, contract_id],
                |row| {
                    Ok(Contract {
                        contract_id: row.get(0)?,
                        organization_id: row.get(1)?,
                        supplier_label: row.get(2)?,
                        total_value: row.get(3)?,
                        daily_penalty_pct: row.get(4)?,
                        fixed_penalty: row.get(5)?,
                        end_date: row.get::<_, Option<NaiveDate>>(6)?,
                    })
                },
            )
            .optional()?;

        contract.ok_or_else(|| RepositoryError::NotFound {
            entity: "contract".to_string(),
            id: contract_id.to_string(),
        })
    }

    /// Lista os contratos da organização
    pub fn list_by_organization(&self, organization_id: &str) -> RepositoryResult<Vec<Contract>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT contract_id, organization_id, supplier_label,
                   total_value, daily_penalty_pct, fixed_penalty, end_date
            FROM contract
            WHERE organization_id = ?1
            ORDER BY contract_id
            "#,
        )?;
        let rows = stmt.query_map(params![organization_id], |row| {
            Ok(Contract {
                contract_id: row.get(0)?,
                organization_id: row.get(1)?,
                supplier_label: row.get(2)?,
                total_value: row.get(3)?,
                daily_penalty_pct: row.get(4)?,
                fixed_penalty: row.get(5)?,
                end_date: row.get::<_, Option<NaiveDate>>(6)?,
            })
        })?;

        let mut contracts = Vec::new();
        for row in rows {
            contracts.push(row?);
        }
        Ok(contracts)
    }
}
