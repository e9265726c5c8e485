//! Preset Records
//!
//! One row of the mixer's `configs` table. The EQ lives inside `data` as a
//! JSON [`SonarPreset`] document.

use chrono::Local;
use serde_json::Value;
use sonareq_eq::{apply_filters_to_json, FilterSlot, SonarPreset};
use uuid::Uuid;

use crate::channel::Channel;
use crate::error::{CoreError, CoreResult};

/// Schema version written for presets created by this tool
pub const SCHEMA_VERSION: i64 = 4;

/// Timestamp layout used by the `created_at`/`updated_at` columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetRecord {
    pub id: String,
    pub name: String,
    pub vad: i64,
    /// JSON preset document
    pub data: String,
    pub schema_version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl PresetRecord {
    /// New record with a fresh id holding `document`
    pub fn new(name: &str, channel: Channel, document: &SonarPreset) -> CoreResult<Self> {
        let now = timestamp_now();
        let mut record = Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            vad: channel.vad(),
            data: String::new(),
            schema_version: SCHEMA_VERSION,
            created_at: now.clone(),
            updated_at: now,
        };
        record.set_document(document)?;
        Ok(record)
    }

    pub fn channel(&self) -> CoreResult<Channel> {
        Channel::from_vad(self.vad)
    }

    /// Decode the stored preset document
    pub fn document(&self) -> CoreResult<SonarPreset> {
        serde_json::from_str(&self.data).map_err(CoreError::CorruptStoredDocument)
    }

    /// Encode `document` into `data` as indented JSON
    pub fn set_document(&mut self, document: &SonarPreset) -> CoreResult<()> {
        self.data = serde_json::to_string_pretty(document).map_err(CoreError::EncodeDocument)?;
        Ok(())
    }

    /// Merge `filters` into the stored document's EQ.
    ///
    /// Works on the raw JSON so keys the document model does not cover are
    /// written back untouched. `data` is left as it was on error.
    pub fn apply_filters(&mut self, filters: &[FilterSlot]) -> CoreResult<()> {
        let mut document: Value =
            serde_json::from_str(&self.data).map_err(CoreError::CorruptStoredDocument)?;
        apply_filters_to_json(&mut document, filters).map_err(CoreError::CorruptStoredDocument)?;

        self.data = serde_json::to_string_pretty(&document).map_err(CoreError::EncodeDocument)?;
        Ok(())
    }

    /// Stamp both timestamps with the current time
    pub fn touch(&mut self) {
        let now = timestamp_now();
        self.created_at = now.clone();
        self.updated_at = now;
    }
}
