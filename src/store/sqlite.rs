use std::sync::{Arc, Mutex};

use anyhow::Context;
use rusqlite::{params, Connection};

use super::{BookingStore, StoreError, STORAGE_KEY};
use crate::models::Booking;

/// Version written into the stored value envelope.
const FORMAT_VERSION: u32 = 1;

/// SQLite-backed store. The whole booking collection lives as one JSON
/// value in a key/value table, under [`STORAGE_KEY`].
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open database")?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("failed to set database pragmas")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .context("failed to create storage table")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl BookingStore for SqliteStore {
    fn load(&self) -> Vec<Booking> {
        let conn = self.conn.lock().unwrap();
        let result = conn.query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![STORAGE_KEY],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(raw) => decode_bookings(&raw),
            Err(rusqlite::Error::QueryReturnedNoRows) => vec![],
            Err(e) => {
                tracing::warn!("failed to read booking storage, treating as empty: {e}");
                vec![]
            }
        }
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let value = serde_json::json!({
            "version": FORMAT_VERSION,
            "bookings": bookings,
        });
        let raw = serde_json::to_string(&value).map_err(|e| StoreError::Write(e.to_string()))?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
               value = excluded.value,
               updated_at = excluded.updated_at",
            params![STORAGE_KEY, raw],
        )
        .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(())
    }
}

fn decode_bookings(raw: &str) -> Vec<Booking> {
    let data: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("stored bookings are not valid JSON, treating as empty: {e}");
            return vec![];
        }
    };

    if data.is_array() {
        // Legacy format: a bare array of bookings
        serde_json::from_value(data).unwrap_or_default()
    } else {
        data.get("bookings")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, date: &str, time: &str) -> Booking {
        Booking {
            id: id.to_string(),
            name: "Alice".to_string(),
            phone: "+15551110000".to_string(),
            service: "Classic Haircut".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            created_at: 1717200000000,
        }
    }

    fn raw_insert(store: &SqliteStore, value: &str) {
        let conn = store.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![STORAGE_KEY, value],
        )
        .unwrap();
    }

    fn raw_value(store: &SqliteStore) -> String {
        let conn = store.conn.lock().unwrap();
        conn.query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![STORAGE_KEY],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_load_empty_when_nothing_stored() {
        let store = SqliteStore::open(":memory:").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = SqliteStore::open(":memory:").unwrap();
        let bookings = vec![
            booking("a", "2024-06-01", "09:00 AM"),
            booking("b", "2024-06-02", "09:00 AM"),
        ];

        store.save(&bookings).unwrap();
        assert_eq!(store.load(), bookings);
    }

    #[test]
    fn test_save_of_loaded_collection_is_idempotent() {
        let store = SqliteStore::open(":memory:").unwrap();
        let bookings = vec![booking("a", "2024-06-01", "09:00 AM")];
        store.save(&bookings).unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn test_malformed_value_treated_as_empty() {
        let store = SqliteStore::open(":memory:").unwrap();
        raw_insert(&store, "{not json");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_unexpected_object_shape_treated_as_empty() {
        let store = SqliteStore::open(":memory:").unwrap();
        raw_insert(&store, r#"{"something":"else"}"#);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_reads_legacy_bare_array_format() {
        let store = SqliteStore::open(":memory:").unwrap();
        raw_insert(
            &store,
            r#"[{"id":"x1","name":"Raj","phone":"+911234567890","service":"Classic Haircut","date":"2024-06-01","time":"09:00 AM","createdAt":1717200000000}]"#,
        );

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "x1");
        assert_eq!(loaded[0].time, "09:00 AM");
        assert_eq!(loaded[0].created_at, 1717200000000);
    }

    #[test]
    fn test_writes_versioned_envelope() {
        let store = SqliteStore::open(":memory:").unwrap();
        store.save(&[booking("a", "2024-06-01", "09:00 AM")]).unwrap();

        let raw = raw_value(&store);
        assert!(raw.contains("\"version\":1"));
        assert!(raw.contains("\"createdAt\""));
    }

    #[test]
    fn test_save_overwrites_whole_collection() {
        let store = SqliteStore::open(":memory:").unwrap();
        store
            .save(&[
                booking("a", "2024-06-01", "09:00 AM"),
                booking("b", "2024-06-01", "10:00 AM"),
            ])
            .unwrap();
        store.save(&[booking("a", "2024-06-01", "09:00 AM")]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a");
    }
}
