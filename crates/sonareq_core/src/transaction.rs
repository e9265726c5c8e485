//! Preset Import Transactions
//!
//! Create-or-update of a single preset. The merge happens in memory and the
//! store sees one read and at most one write per run. Nothing guards against
//! another process writing the same `(name, channel)` row between the two.

use sonareq_eq::{FilterSlot, SonarPreset};
use tracing::info;

use crate::channel::Channel;
use crate::error::{CoreError, CoreResult};
use crate::preset::PresetRecord;
use crate::store::PresetStore;

/// Whether an import creates a new preset or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Create,
    Update,
}

/// Target of an import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRequest {
    pub name: String,
    pub channel: Channel,
    pub mode: ImportMode,
}

/// Create or update the preset described by `request` with `filters`
pub fn import_preset<S: PresetStore>(
    store: &mut S,
    request: &ImportRequest,
    filters: &[FilterSlot],
) -> CoreResult<PresetRecord> {
    match request.mode {
        ImportMode::Create => create_preset(store, &request.name, request.channel, filters),
        ImportMode::Update => update_preset(store, &request.name, request.channel, filters),
    }
}

/// Insert a new preset built from the default document plus `filters`.
///
/// Fails if a preset with the same name already exists on `channel`.
pub fn create_preset<S: PresetStore>(
    store: &mut S,
    name: &str,
    channel: Channel,
    filters: &[FilterSlot],
) -> CoreResult<PresetRecord> {
    if store.get(name, channel)?.is_some() {
        return Err(CoreError::PresetAlreadyExists {
            name: name.to_string(),
            channel,
        });
    }

    let mut document = SonarPreset::default();
    document.apply_filters(filters);

    let record = PresetRecord::new(name, channel, &document)?;
    store.insert(&record)?;

    info!("Created preset {:?} on {} ({})", name, channel, record.id);
    Ok(record)
}

/// Merge `filters` into an existing preset's EQ.
///
/// Every other part of the stored document, including keys this tool does
/// not model, is written back unchanged. Both
/// timestamps are restamped, matching what the mixer's importer always did.
pub fn update_preset<S: PresetStore>(
    store: &mut S,
    name: &str,
    channel: Channel,
    filters: &[FilterSlot],
) -> CoreResult<PresetRecord> {
    let mut record = store
        .get(name, channel)?
        .ok_or_else(|| CoreError::PresetNotFound {
            name: name.to_string(),
            channel,
        })?;

    record.apply_filters(filters)?;
    record.touch();
    store.update(&record)?;

    info!("Updated preset {:?} on {} ({})", name, channel, record.id);
    Ok(record)
}
