//! Instance profiles.
//!
//! An `InstanceProfile` holds the per-deployment parameters that
//! distinguish one rendered config from another. Profiles are assembled
//! from up to two layers — a TOML profile file and CLI flags/environment
//! variables — with the flags winning.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::validation;
use crate::error::{ProfileError, Result};

/// A complete, validated set of per-instance parameters.
#[derive(Debug, Clone)]
pub struct InstanceProfile {
    pub name: String,
    pub port: u32,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub table_prefix: String,
}

impl InstanceProfile {
    /// Uppercased alphanumeric form of the instance name, used as an
    /// optional token prefix (`shop_1` → `SHOP1`).
    pub fn token_prefix(&self) -> String {
        self.name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_uppercase()
    }
}

/// A partially-specified profile: one input layer.
///
/// Every field optional so layers can be overlaid before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialProfile {
    pub name: Option<String>,
    pub port: Option<u32>,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_host: Option<String>,
    pub table_prefix: Option<String>,
}

impl PartialProfile {
    /// Load a profile layer from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Read` if the file cannot be read,
    /// `ProfileError::Parse` if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading profile");
        let contents = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = toml::from_str(&contents).map_err(ProfileError::Parse)?;
        Ok(profile)
    }

    /// Overlay another layer on top of this one; `other`'s fields win.
    pub fn overlay(self, other: PartialProfile) -> Self {
        Self {
            name: other.name.or(self.name),
            port: other.port.or(self.port),
            db_name: other.db_name.or(self.db_name),
            db_user: other.db_user.or(self.db_user),
            db_password: other.db_password.or(self.db_password),
            db_host: other.db_host.or(self.db_host),
            table_prefix: other.table_prefix.or(self.table_prefix),
        }
    }

    /// Finish assembly: require every mandatory field, default the table
    /// prefix, and run domain validation.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::MissingField` for an absent field, or the
    /// relevant validation error (port range, empty host, weak password).
    pub fn build(self) -> Result<InstanceProfile> {
        let profile = InstanceProfile {
            name: self.name.ok_or(ProfileError::MissingField { field: "name" })?,
            port: self.port.ok_or(ProfileError::MissingField { field: "port" })?,
            db_name: self
                .db_name
                .ok_or(ProfileError::MissingField { field: "db_name" })?,
            db_user: self
                .db_user
                .ok_or(ProfileError::MissingField { field: "db_user" })?,
            db_password: self
                .db_password
                .ok_or(ProfileError::MissingField { field: "db_password" })?,
            db_host: self
                .db_host
                .ok_or(ProfileError::MissingField { field: "db_host" })?,
            table_prefix: self.table_prefix.unwrap_or_else(|| "wp_".to_string()),
        };

        validation::validate_profile(&profile)?;
        Ok(profile)
    }
}
