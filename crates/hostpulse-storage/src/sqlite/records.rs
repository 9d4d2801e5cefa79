//! 레코드 스토리지 (RecordStorage 포트 구현).
//!
//! 페이로드는 해석하지 않고 TEXT 그대로 저장/반환한다.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use hostpulse_core::error::CoreError;
use hostpulse_core::models::record::StoredRecord;
use hostpulse_core::ports::storage::RecordStorage;
use rusqlite::params;
use tracing::debug;

use super::SqliteRecordStorage;

fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::Storage(format!("created_at 파싱 실패 ({raw}): {e}")))
}

#[async_trait]
impl RecordStorage for SqliteRecordStorage {
    async fn store(&self, owner_id: &str, payload: &str) -> Result<StoredRecord, CoreError> {
        let created_at = Utc::now();
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO records (server_id, data, created_at) VALUES (?1, ?2, ?3)",
            params![
                owner_id,
                payload,
                created_at.to_rfc3339_opts(SecondsFormat::Micros, true)
            ],
        )
        .map_err(|e| CoreError::Storage(format!("레코드 저장 실패: {e}")))?;

        let id = conn.last_insert_rowid();
        debug!("레코드 저장: id={id}, server_id={owner_id}, {}바이트", payload.len());

        Ok(StoredRecord {
            id,
            server_id: owner_id.to_string(),
            data: payload.to_string(),
            created_at,
        })
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<StoredRecord>, CoreError> {
        let conn = self.lock()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, server_id, data, created_at FROM records
                 WHERE server_id = ?1 ORDER BY id ASC",
            )
            .map_err(|e| CoreError::Storage(format!("쿼리 준비 실패: {e}")))?;

        let rows = stmt
            .query_map(params![owner_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(|e| CoreError::Storage(format!("레코드 조회 실패: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            let (id, server_id, data, created_at) =
                row.map_err(|e| CoreError::Storage(format!("행 읽기 실패: {e}")))?;
            records.push(StoredRecord {
                id,
                server_id,
                data,
                created_at: parse_created_at(&created_at)?,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_returns_row() {
        let storage = SqliteRecordStorage::open_in_memory().unwrap();
        let record = storage.store("web-01", "hello").await.unwrap();

        assert!(record.id > 0);
        assert_eq!(record.server_id, "web-01");
        assert_eq!(record.data, "hello");
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let storage = SqliteRecordStorage::open_in_memory().unwrap();
        for i in 0..5 {
            storage.store("web-01", &format!("payload-{i}")).await.unwrap();
        }

        let records = storage.list_by_owner("web-01").await.unwrap();
        let data: Vec<&str> = records.iter().map(|r| r.data.as_str()).collect();
        assert_eq!(
            data,
            vec!["payload-0", "payload-1", "payload-2", "payload-3", "payload-4"]
        );
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let storage = SqliteRecordStorage::open_in_memory().unwrap();
        storage.store("web-01", "a").await.unwrap();
        storage.store("db-01", "b").await.unwrap();
        storage.store("web-01", "c").await.unwrap();

        let web = storage.list_by_owner("web-01").await.unwrap();
        assert_eq!(web.len(), 2);
        assert!(web.iter().all(|r| r.server_id == "web-01"));

        assert!(storage.list_by_owner("unknown").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn payload_is_byte_exact() {
        let storage = SqliteRecordStorage::open_in_memory().unwrap();
        let payload = "{ \"nested\": {\"k\": [1, 2.50, null]},\n  \"유니코드\": \"값\" }";
        let stored = storage.store("s", payload).await.unwrap();

        let listed = storage.list_by_owner("s").await.unwrap();
        assert_eq!(listed[0].data, payload);
        assert_eq!(listed[0].id, stored.id);
    }

    #[tokio::test]
    async fn created_at_round_trips() {
        let storage = SqliteRecordStorage::open_in_memory().unwrap();
        let stored = storage.store("s", "x").await.unwrap();
        let listed = storage.list_by_owner("s").await.unwrap();

        let diff = (listed[0].created_at - stored.created_at).num_microseconds().unwrap();
        assert!(diff.abs() <= 1);
    }

    #[test]
    fn rejects_malformed_timestamp() {
        assert!(parse_created_at("yesterday").is_err());
        assert!(parse_created_at("2026-01-01T00:00:00.000000Z").is_ok());
    }
}
