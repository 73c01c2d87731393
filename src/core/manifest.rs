//! Fleet manifests.
//!
//! A manifest describes many instances destined for one template: a
//! `[defaults]` table plus one `[[instance]]` entry per deployment
//! target. Defaults merge underneath each instance entry.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::profile::{InstanceProfile, PartialProfile};
use crate::error::{ManifestError, Result};

/// Parsed fleet manifest.
#[derive(Debug, Default, Deserialize)]
pub struct FleetManifest {
    #[serde(default)]
    pub defaults: PartialProfile,
    #[serde(default, rename = "instance")]
    pub instances: Vec<PartialProfile>,
}

impl FleetManifest {
    /// Load a manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Read`/`Parse` for file problems, or
    /// `ManifestError::Empty` when no `[[instance]]` entries exist.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading manifest");
        let contents = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Self = toml::from_str(&contents).map_err(ManifestError::Parse)?;

        if manifest.instances.is_empty() {
            return Err(ManifestError::Empty.into());
        }

        debug!(instances = manifest.instances.len(), "manifest loaded");
        Ok(manifest)
    }

    /// Build the complete profile for every instance, defaults merged in.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::DuplicateName` if two instances share a
    /// name, or any profile assembly/validation error.
    pub fn profiles(&self) -> Result<Vec<InstanceProfile>> {
        let mut seen = BTreeSet::new();
        let mut profiles = Vec::with_capacity(self.instances.len());

        for instance in &self.instances {
            let profile = self.defaults.clone().overlay(instance.clone()).build()?;
            if !seen.insert(profile.name.clone()) {
                return Err(ManifestError::DuplicateName { name: profile.name }.into());
            }
            profiles.push(profile);
        }

        Ok(profiles)
    }
}
