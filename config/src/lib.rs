//! Profile persistence for Helm.
//!
//! A profile is a JSON record of the five agent model/temperature choices
//! plus both parameter-schema sections. Saving always writes the nested
//! layout; loading also understands the older flat layout where the option
//! keys sat at the top level.

mod load;
mod record;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use helm_engine::SettingsState;
use thiserror::Error;
use tracing::debug;

pub use load::state_from_value;
pub use record::{AgentEntry, ConfigRecord, CurriculumEntry, LegacySection, ModernSection};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("malformed profile: expected a JSON object at the top level")]
    Malformed,
}

impl ConfigError {
    /// The file involved, when the failure was tied to one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Write { path, .. }
            | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Malformed => None,
        }
    }
}

/// Default profile location under the user config directory.
#[must_use]
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("helm").join("profile.json"))
}

/// Load a profile and resolve it into a fully reconciled state.
///
/// On any error the caller's current state is untouched; a state is only
/// produced once the whole file has resolved.
pub fn load_profile(path: &Path) -> Result<SettingsState, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let state = state_from_value(&value)?;
    debug!(path = %path.display(), "profile loaded");
    Ok(state)
}

/// Serialize the state into the nested record layout and write it atomically.
pub fn save_profile(path: &Path, state: &SettingsState) -> Result<(), ConfigError> {
    let record = ConfigRecord::from_state(state);
    let json = serde_json::to_string_pretty(&record).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    helm_utils::atomic_write(path, json.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "profile saved");
    Ok(())
}
