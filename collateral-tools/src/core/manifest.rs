// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment manifests.
//!
//! A manifest is the current snapshot of what one deployment [`Phase`] has produced on one
//! network. It is read whole, mutated in memory and written back whole; it is never a log of
//! deltas. Entries are keyed by a human-chosen identifier such as `saEthPyUSD`, and re-recording
//! a key replaces the previous address.
//!
//! Writing to the same manifest from more than one process at a time is not coordinated here and
//! loses updates. Deployments against a given network and phase must be serialized externally.

use std::{
    collections::BTreeMap,
    fmt, fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::utils::create_dir_if_dne;

/// A stage of the deployment pipeline, each with its own manifest per network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Phase 1: the core protocol system, deployed by a separate pipeline.
    Core,
    /// Phase 2: assets and collateral plugins.
    AssetCollateral,
}

impl Phase {
    /// The phase whose manifest must exist before this phase may run.
    pub fn prerequisite(self) -> Option<Phase> {
        match self {
            Self::Core => None,
            Self::AssetCollateral => Some(Self::Core),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Core => 1,
            Self::AssetCollateral => 2,
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            Self::Core => "tmp-deployments.json",
            Self::AssetCollateral => "tmp-assets-collateral.json",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Core => write!(f, "phase 1 (core system)"),
            Self::AssetCollateral => write!(f, "phase 2 (assets and collateral)"),
        }
    }
}

/// One of the two address maps held by a [`DeploymentManifest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ManifestCategory {
    /// Collateral plugins.
    Collateral,
    /// Wrapper tokens deployed alongside a collateral plugin.
    Erc20s,
}

impl fmt::Display for ManifestCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Collateral => write!(f, "collateral"),
            Self::Erc20s => write!(f, "erc20s"),
        }
    }
}

/// Addresses deployed by a phase on a network.
///
/// Values are stored as given; callers are expected to hand over checksummed addresses of
/// contracts that have already passed their post-deployment health check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentManifest {
    #[serde(default)]
    pub collateral: BTreeMap<String, String>,
    #[serde(default)]
    pub erc20s: BTreeMap<String, String>,
}

impl DeploymentManifest {
    /// Sets `category[key] = address`, returning the address it replaced, if any.
    pub fn record(
        &mut self,
        category: ManifestCategory,
        key: impl Into<String>,
        address: impl Into<String>,
    ) -> Option<String> {
        self.entries_mut(category).insert(key.into(), address.into())
    }

    pub fn get(&self, category: ManifestCategory, key: &str) -> Option<&str> {
        self.entries(category).get(key).map(String::as_str)
    }

    pub fn entries(&self, category: ManifestCategory) -> &BTreeMap<String, String> {
        match category {
            ManifestCategory::Collateral => &self.collateral,
            ManifestCategory::Erc20s => &self.erc20s,
        }
    }

    fn entries_mut(&mut self, category: ManifestCategory) -> &mut BTreeMap<String, String> {
        match category {
            ManifestCategory::Collateral => &mut self.collateral,
            ManifestCategory::Erc20s => &mut self.erc20s,
        }
    }

    pub fn len(&self) -> usize {
        self.collateral.len() + self.erc20s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{} doesn't exist yet. Run {phase}", .path.display())]
    MissingPrerequisite { path: PathBuf, phase: Phase },

    #[error(
        "deployment manifest {} is corrupt and must be repaired by hand: {source}",
        .path.display()
    )]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read deployment manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write deployment manifest {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize deployment manifest: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Path of the manifest for `phase` on the chain with `chain_id`, inside `dir`.
pub fn resolve_manifest_path(dir: impl AsRef<Path>, chain_id: u64, phase: Phase) -> PathBuf {
    dir.as_ref()
        .join(format!("{chain_id}-{}", phase.file_suffix()))
}

/// Fails unless the manifest at `path`, produced by `phase`, exists.
///
/// Only existence is checked; the contents of a prerequisite manifest are never read.
pub fn require_phase_complete(path: impl AsRef<Path>, phase: Phase) -> Result<(), ManifestError> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(ManifestError::MissingPrerequisite {
            path: path.to_path_buf(),
            phase,
        })
    }
}

/// Loads the manifest at `path`, or an empty one if the file does not exist yet.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<DeploymentManifest, ManifestError> {
    let path = path.as_ref();
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(@grey, "no manifest at {}, starting empty", path.display());
            return Ok(DeploymentManifest::default());
        }
        Err(source) => {
            return Err(ManifestError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&contents).map_err(|source| ManifestError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `manifest` to `path` as pretty-printed JSON, replacing the file whole.
///
/// The contents go to a temporary file in the same directory which is then renamed over `path`,
/// so a crash mid-write leaves the previous manifest intact. An existing manifest keeps its
/// permissions; a new one is created world-readable.
pub fn persist(manifest: &DeploymentManifest, path: impl AsRef<Path>) -> Result<(), ManifestError> {
    let path = path.as_ref();
    let write_err = |source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let contents = serde_json::to_string_pretty(manifest).map_err(ManifestError::Serialize)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    create_dir_if_dne(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    if let Some(permissions) = manifest_permissions(path)? {
        fs::set_permissions(file.path(), permissions).map_err(write_err)?;
    }
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;

    debug!(@grey, "wrote {} entries to {}", manifest.len(), path.display());
    Ok(())
}

/// Permissions the manifest at `path` is written with: its current ones if it exists.
fn manifest_permissions(path: &Path) -> Result<Option<fs::Permissions>, ManifestError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(new_manifest_permissions()),
        Err(source) => Err(ManifestError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn new_manifest_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_manifest_permissions() -> Option<fs::Permissions> {
    None
}
