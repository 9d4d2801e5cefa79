//! 스키마 마이그레이션.
//!
//! 버전 순서대로 나열된 SQL 스크립트를 적용한다. 각 단계는 자체 트랜잭션에서
//! 실행되고 `schema_version`에 기록되므로, 이미 적용된 단계는 건너뛴다.

use rusqlite::Connection;
use tracing::{debug, info};

/// (버전, 스크립트) 목록. 버전은 1부터 연속이어야 한다.
const MIGRATIONS: &[(u32, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        server_id TEXT NOT NULL,
        data TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_records_server_id ON records(server_id);",
)];

/// 현재 스키마 버전
pub const CURRENT_VERSION: u32 = MIGRATIONS.len() as u32;

/// 미적용 마이그레이션 실행
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let applied: u32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    if applied >= CURRENT_VERSION {
        debug!("스키마 최신 상태 (v{applied})");
        return Ok(());
    }

    for (version, script) in MIGRATIONS.iter().filter(|(v, _)| *v > applied) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(script)?;
        tx.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
        tx.commit()?;
        info!("스키마 마이그레이션 v{version} 적용");
    }

    Ok(())
}
