//! Authentication keys and salts.
//!
//! Each instance gets eight independent high-entropy strings used by the
//! host platform to sign session and auth tokens. Values come from the
//! operating system's CSPRNG; predictable secrets here are a security
//! defect, not a style choice. Sets are zeroized when dropped.

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{SECRET_CHARSET, SECRET_LEN, SECRET_MIN_LEN};
use crate::core::fswrite;
use crate::error::{Result, SecretsError};

/// The eight key/salt names, in the order the platform declares them.
pub const KEY_NAMES: [&str; 8] = [
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

/// One instance's authentication keys and salts.
///
/// Write-once: generated (or loaded from a pinned file) at provisioning
/// time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretKeySet {
    #[serde(rename = "AUTH_KEY")]
    pub auth_key: String,
    #[serde(rename = "SECURE_AUTH_KEY")]
    pub secure_auth_key: String,
    #[serde(rename = "LOGGED_IN_KEY")]
    pub logged_in_key: String,
    #[serde(rename = "NONCE_KEY")]
    pub nonce_key: String,
    #[serde(rename = "AUTH_SALT")]
    pub auth_salt: String,
    #[serde(rename = "SECURE_AUTH_SALT")]
    pub secure_auth_salt: String,
    #[serde(rename = "LOGGED_IN_SALT")]
    pub logged_in_salt: String,
    #[serde(rename = "NONCE_SALT")]
    pub nonce_salt: String,
}

/// On-disk secrets file: the key set plus provenance metadata.
#[derive(Serialize, Deserialize)]
struct SecretsFile {
    generated_at: String,
    keys: SecretKeySet,
}

impl SecretKeySet {
    /// Generate a fresh key set from the OS random source.
    pub fn generate() -> Self {
        Self {
            auth_key: random_secret(),
            secure_auth_key: random_secret(),
            logged_in_key: random_secret(),
            nonce_key: random_secret(),
            auth_salt: random_secret(),
            secure_auth_salt: random_secret(),
            logged_in_salt: random_secret(),
            nonce_salt: random_secret(),
        }
    }

    /// Key names paired with values, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("AUTH_KEY", self.auth_key.as_str()),
            ("SECURE_AUTH_KEY", self.secure_auth_key.as_str()),
            ("LOGGED_IN_KEY", self.logged_in_key.as_str()),
            ("NONCE_KEY", self.nonce_key.as_str()),
            ("AUTH_SALT", self.auth_salt.as_str()),
            ("SECURE_AUTH_SALT", self.secure_auth_salt.as_str()),
            ("LOGGED_IN_SALT", self.logged_in_salt.as_str()),
            ("NONCE_SALT", self.nonce_salt.as_str()),
        ]
    }

    /// Load a pinned key set from a TOML secrets file.
    ///
    /// # Errors
    ///
    /// Returns `SecretsError::Read`/`Parse` for file problems, or
    /// `ShortKey`/`ForbiddenChar` if a pinned value would weaken or break
    /// the rendered config.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading secrets");
        let contents = fs::read_to_string(path).map_err(|source| SecretsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SecretsFile = toml::from_str(&contents).map_err(SecretsError::Parse)?;

        file.keys.validate()?;
        Ok(file.keys)
    }

    /// Persist the key set to a TOML secrets file with 0600 permissions.
    ///
    /// # Errors
    ///
    /// Returns `SecretsError::Serialize` or the underlying I/O error.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving secrets");
        self.validate()?;
        let file = SecretsFile {
            generated_at: chrono::Utc::now().to_rfc3339(),
            keys: self.clone(),
        };
        let contents = toml::to_string_pretty(&file).map_err(SecretsError::Serialize)?;
        fswrite::write_atomic_private(path, &contents)?;
        Ok(())
    }

    /// Check every key meets the length floor and stays inside the
    /// quoting-safe character set.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if value.len() < SECRET_MIN_LEN {
                return Err(SecretsError::ShortKey {
                    name,
                    len: value.len(),
                    min: SECRET_MIN_LEN,
                }
                .into());
            }
            if let Some(ch) = value.chars().find(|c| !SECRET_CHARSET.contains(&(*c as u8)) || !c.is_ascii()) {
                return Err(SecretsError::ForbiddenChar { name, ch }.into());
            }
        }
        Ok(())
    }
}

/// One high-entropy string from the OS random source.
fn random_secret() -> String {
    let mut rng = OsRng;
    (0..SECRET_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..SECRET_CHARSET.len());
            SECRET_CHARSET[idx] as char
        })
        .collect()
}
