// ==========================================
// LicitMind - Repositório de cotações
// ==========================================
// Regra: repositório não contém lógica de negócio;
// a ordem de inserção (seq_no) é preservada porque ela
// define o desempate do ranking
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::quotation::QuotationCandidate;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// QuotationRepository - Repositório de cotações
// ==========================================
pub struct QuotationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl QuotationRepository {
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

    /// Insere uma cotação no fim da fila do processo
    pub fn insert(
        &self,
        organization_id: &str,
        process_id: &str,
        candidate: &QuotationCandidate,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        // Próximo seq_no do processo
        let next_seq: i64 = conn.query_row(
            "SELECT COALESCE(MAX(seq_no), 0) + 1 FROM quotation
             WHERE organization_id = ?1 AND process_id = ?2",
            params![organization_id, process_id],
            |row| row.get(0),
        )?;

        conn.execute(
            r#"
            INSERT INTO quotation (
                quotation_id, organization_id, process_id, supplier_label,
                total_value, delivery_days, warranty_months, winner, seq_no
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8)
            "#,
            params![
                candidate.quotation_id,
                organization_id,
                process_id,
                candidate.supplier_label,
                candidate.total_value,
                candidate.delivery_days,
                candidate.warranty_months,
                next_seq,
            ],
        )?;
        Ok(())
    }

    /// Lista as cotações do processo na ordem de inserção
    pub fn list_by_process(
        &self,
        organization_id: &str,
        process_id: &str,
    ) -> RepositoryResult<Vec<QuotationCandidate>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT quotation_id, supplier_label, total_value, delivery_days, warranty_months
            FROM quotation
            WHERE organization_id = ?1 AND process_id = ?2
            ORDER BY seq_no
            "#,
        )?;
        let rows = stmt.query_map(params![organization_id, process_id], |row| {
            Ok(QuotationCandidate {
                quotation_id: row.get(0)?,
                supplier_label: row.get(1)?,
                total_value: row.get(2)?,
                delivery_days: row.get(3)?,
                warranty_months: row.get::<_, Option<i64>>(4)?,
            })
        })?;

        let mut candidates = Vec::new();
        for row in rows {
            let candidate = row?;
            if candidate.total_value < 0.0 {
                return Err(RepositoryError::FieldValueError {
                    field: "total_value".to_string(),
                    message: format!(
                        "valor negativo na cotação {} ({})",
                        candidate.quotation_id, candidate.total_value
                    ),
                });
            }
            if candidate.delivery_days < 0 {
                return Err(RepositoryError::FieldValueError {
                    field: "delivery_days".to_string(),
                    message: format!(
                        "prazo negativo na cotação {} ({})",
                        candidate.quotation_id, candidate.delivery_days
                    ),
                });
            }
            candidates.push(candidate);
        }
        Ok(candidates)
    }

    /// Marca a cotação vencedora do processo
    ///
    /// Zera o marcador das demais cotações do processo na mesma
    /// transação. Retorna NotFound quando a cotação não pertence
    /// ao processo informado.
    pub fn mark_winner(
        &self,
        organization_id: &str,
        process_id: &str,
        quotation_id: &str,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            "UPDATE quotation SET winner = 0
             WHERE organization_id = ?1 AND process_id = ?2",
            params![organization_id, process_id],
        )?;

        let updated = tx.execute(
            "UPDATE quotation SET winner = 1
             WHERE organization_id = ?1 AND process_id = ?2 AND quotation_id = ?3",
            params![organization_id, process_id, quotation_id],
        )?;

        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity: "quotation".to_string(),
                id: quotation_id.to_string(),
            });
        }

        tx.commit()?;
        Ok(())
    }

    /// Lê o id da cotação marcada como vencedora, se houver
    pub fn find_winner(
        &self,
        organization_id: &str,
        process_id: &str,
    ) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            "SELECT quotation_id FROM quotation
             WHERE organization_id = ?1 AND process_id = ?2 AND winner = 1",
        )?;
        let mut rows = stmt.query_map(params![organization_id, process_id], |row| {
            row.get::<_, String>(0)
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }
}
