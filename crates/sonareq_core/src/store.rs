//! Preset Store
//!
//! The mixer keeps presets in a SQLite database, table `configs`. The store
//! is a plain keyed record store: it does not enforce `(name, vad)`
//! uniqueness, callers check before inserting.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use tracing::{debug, info};

use crate::channel::Channel;
use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::preset::PresetRecord;

/// Keyed access to stored presets
pub trait PresetStore {
    /// First preset named `name` on `channel`, if any
    fn get(&self, name: &str, channel: Channel) -> CoreResult<Option<PresetRecord>>;

    fn insert(&mut self, record: &PresetRecord) -> CoreResult<()>;

    /// Overwrite the stored row with the same id
    fn update(&mut self, record: &PresetRecord) -> CoreResult<()>;
}

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS configs (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        vad INTEGER NOT NULL,
        data TEXT NOT NULL,
        schema_version INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
";

/// [`PresetStore`] backed by the mixer's SQLite database
pub struct SqlitePresetStore {
    conn: Connection,
}

impl SqlitePresetStore {
    /// Open an existing preset database.
    ///
    /// Fails with [`CoreError::DatabaseNotFound`] instead of creating a new
    /// database file.
    pub fn open(config: &StoreConfig) -> CoreResult<Self> {
        config.validate()?;

        let conn = Connection::open_with_flags(
            &config.database_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("Opened preset database {:?}", config.database_path);

        Ok(Self { conn })
    }

    /// Private in-memory database with an empty `configs` table
    pub fn open_in_memory() -> CoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self { conn })
    }

    fn record_from_row(row: &Row<'_>) -> rusqlite::Result<PresetRecord> {
        Ok(PresetRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            vad: row.get(2)?,
            data: row.get(3)?,
            schema_version: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

impl PresetStore for SqlitePresetStore {
    fn get(&self, name: &str, channel: Channel) -> CoreResult<Option<PresetRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, name, vad, data, schema_version, created_at, updated_at
                 FROM configs WHERE name = ?1 AND vad = ?2 LIMIT 1",
                params![name, channel.vad()],
                Self::record_from_row,
            )
            .optional()?;

        debug!(
            "Lookup of preset {:?} on {}: {}",
            name,
            channel,
            if record.is_some() { "found" } else { "absent" }
        );
        Ok(record)
    }

    fn insert(&mut self, record: &PresetRecord) -> CoreResult<()> {
        self.conn.execute(
            "INSERT INTO configs (id, name, vad, data, schema_version, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.name,
                record.vad,
                record.data,
                record.schema_version,
                record.created_at,
                record.updated_at,
            ],
        )?;
        debug!("Inserted preset {}", record.id);
        Ok(())
    }

    fn update(&mut self, record: &PresetRecord) -> CoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE configs
             SET name = ?2, vad = ?3, data = ?4, schema_version = ?5, created_at = ?6, updated_at = ?7
             WHERE id = ?1",
            params![
                record.id,
                record.name,
                record.vad,
                record.data,
                record.schema_version,
                record.created_at,
                record.updated_at,
            ],
        )?;

        if changed == 0 {
            return Err(CoreError::PresetNotFound {
                name: record.name.clone(),
                channel: record.channel()?,
            });
        }
        debug!("Updated preset {}", record.id);
        Ok(())
    }
}
