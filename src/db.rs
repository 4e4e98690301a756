// ==========================================
// LicitMind - Infraestrutura SQLite
// ==========================================
// Objetivo:
// - Unificar os PRAGMAs de todas as conexões (foreign_keys,
//   busy_timeout), evitando comportamento divergente entre módulos
// - Concentrar o bootstrap do schema em um único lugar
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// busy_timeout padrão (milissegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Versão de schema esperada pelo código atual
///
/// Usada apenas para aviso em bancos antigos; não há migração automática
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Aplica os PRAGMAs unificados em uma conexão
///
/// foreign_keys e busy_timeout valem por conexão, então
/// precisam ser aplicados em toda abertura
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre uma conexão SQLite já configurada
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Cria as tabelas do núcleo quando ainda não existem
///
/// Tabelas:
/// - deadline_item: prazos datados (editais, documentos, credenciais, contratos)
/// - contract: contratos administrativos
/// - quotation: cotações por processo de compra
/// - config_kv: configuração key-value com escopo
/// - schema_version: controle de versão do schema
pub fn bootstrap_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS deadline_item (
            entity_id       TEXT NOT NULL,
            organization_id TEXT NOT NULL,
            kind            TEXT NOT NULL,
            label           TEXT NOT NULL,
            reference_date  TEXT NOT NULL,
            PRIMARY KEY (organization_id, entity_id, kind)
        );

        CREATE TABLE IF NOT EXISTS contract (
            contract_id       TEXT NOT NULL PRIMARY KEY,
            organization_id   TEXT NOT NULL,
            supplier_label    TEXT NOT NULL,
            total_value       REAL NOT NULL,
            daily_penalty_pct REAL NOT NULL DEFAULT 0,
            fixed_penalty     REAL NOT NULL DEFAULT 0,
            end_date          TEXT
        );

        CREATE TABLE IF NOT EXISTS quotation (
            quotation_id    TEXT NOT NULL PRIMARY KEY,
            organization_id TEXT NOT NULL,
            process_id      TEXT NOT NULL,
            supplier_label  TEXT NOT NULL,
            total_value     REAL NOT NULL,
            delivery_days   INTEGER NOT NULL DEFAULT 0,
            warranty_months INTEGER,
            winner          INTEGER NOT NULL DEFAULT 0,
            seq_no          INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_quotation_process
            ON quotation (organization_id, process_id, seq_no);

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL,
            key      TEXT NOT NULL,
            value    TEXT NOT NULL,
            PRIMARY KEY (scope_id, key)
        );

        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        );
        "#,
    )?;

    let existing: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    if existing.is_none() {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_SCHEMA_VERSION],
        )?;
    }

    Ok(())
}

/// Lê a versão do schema (None quando a tabela não existe)
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}
