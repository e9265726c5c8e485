//! SonarEQ Core - Preset Import
//!
//! This crate connects the filter import logic to the mixer's preset
//! database, including:
//! - Channel model (`vad` column values and display names)
//! - Preset records and their JSON documents
//! - SQLite-backed preset store
//! - Loading EqualizerAPO exports from disk
//! - Create/update transactions
//!
//! # Data Flow
//!
//! ```text
//! eq file ──load_filters──▶ [FilterSlot; ≤10]
//!                                 │
//!          store.get ──▶ document (or default) ──apply_filters──▶ store.insert/update
//! ```

mod channel;
mod config;
mod error;
mod import;
mod preset;
mod store;
mod transaction;

pub use channel::Channel;
pub use config::{default_database_path, StoreConfig};
pub use error::{CoreError, CoreResult};
pub use import::load_filters;
pub use preset::{timestamp_now, PresetRecord, SCHEMA_VERSION, TIMESTAMP_FORMAT};
pub use store::{PresetStore, SqlitePresetStore};
pub use transaction::{create_preset, import_preset, update_preset, ImportMode, ImportRequest};

// Re-export EQ types for convenience
pub use sonareq_eq::{FilterSlot, ParametricEq, SonarPreset};
