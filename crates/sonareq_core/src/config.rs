//! Preset Store Configuration
//!
//! # Database Location
//! - Windows: `%ProgramData%\SteelSeries\GG\apps\sonar\db\database.db`
//! - Linux: `~/.local/share/SteelSeries/GG/apps/sonar/db/database.db`
//! - macOS: `~/Library/Application Support/SteelSeries/GG/apps/sonar/db/database.db`
//!
//! Only the Windows location is used by the mixer itself; the others point
//! at the same layout under the platform data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Path segments below the common application data directory
const DATABASE_SEGMENTS: [&str; 6] = ["SteelSeries", "GG", "apps", "sonar", "db", "database.db"];

/// Where the preset database lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub database_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StoreConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
        }
    }

    /// Check that the database file exists.
    ///
    /// The store never creates the database; a missing file means the mixer
    /// is not installed or the path is wrong.
    pub fn validate(&self) -> CoreResult<()> {
        if self.database_path.is_file() {
            Ok(())
        } else {
            Err(CoreError::DatabaseNotFound(self.database_path.clone()))
        }
    }
}

/// Platform-specific location of the mixer's preset database
pub fn default_database_path() -> PathBuf {
    database_path_under(&common_app_data_dir())
}

fn database_path_under(base: &Path) -> PathBuf {
    DATABASE_SEGMENTS
        .iter()
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

#[cfg(target_os = "windows")]
fn common_app_data_dir() -> PathBuf {
    std::env::var_os("ProgramData")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
}

#[cfg(not(target_os = "windows"))]
fn common_app_data_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
