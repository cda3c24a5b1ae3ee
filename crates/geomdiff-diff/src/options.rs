//! Application options and engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Restriction on which part of a diff is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Only {
    /// Apply removals only: insertions are suppressed and role moves keep
    /// their original role.
    Deleted,
}

/// Options for applying a diff.
///
/// The default is full forward application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyOptions {
    pub only: Option<Only>,
}

impl ApplyOptions {
    /// Full forward application.
    pub const fn full() -> Self {
        Self { only: None }
    }

    /// The deleted-only projection.
    pub const fn deleted_only() -> Self {
        Self {
            only: Some(Only::Deleted),
        }
    }

    pub const fn is_deleted_only(&self) -> bool {
        matches!(self.only, Some(Only::Deleted))
    }
}

/// How pending relation members are paired into role moves.
///
/// Both strategies produce identical diffs; `Indexed` avoids the quadratic
/// scan on relations with long runs of changed members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberMatching {
    /// Linear first-match scan of the pending buffer.
    #[default]
    Scan,
    /// Lookup keyed by element type, element ref, and side.
    Indexed,
}

/// Configuration for diff construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub member_matching: MemberMatching,
}

/// File-level engine configuration.
///
/// ```toml
/// [diff]
/// member_matching = "indexed"
///
/// [apply]
/// only = "deleted"
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub diff: DiffConfig,
    pub apply: ApplyOptions,
}

impl EngineConfig {
    /// Parse a configuration from TOML text. Missing sections take their
    /// defaults.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        toml::from_str(s).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> DiffResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DiffError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
