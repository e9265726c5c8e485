//! EQ File Loading

use std::fs;
use std::path::Path;

use sonareq_eq::{parse_str, FilterSlot};
use tracing::info;

use crate::error::{CoreError, CoreResult};

/// Read and parse an EqualizerAPO parametric export
pub fn load_filters(path: &Path) -> CoreResult<Vec<FilterSlot>> {
    if !path.exists() {
        return Err(CoreError::InputNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| CoreError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let filters = parse_str(&text)?;
    info!("Read {} filter(s) from {:?}", filters.len(), path);
    Ok(filters)
}
