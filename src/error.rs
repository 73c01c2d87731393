//! Error types for stencil.
//!
//! Errors are grouped by subsystem and carry the offending token, field,
//! or path so the CLI can report exactly what failed. `Error::exit_code`
//! maps the tree onto the process exit contract: 2 for I/O failures,
//! 1 for everything else.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("refusing to overwrite {}", .path.display())]
    OutputExists { path: PathBuf },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// 2 means the filesystem failed us (unreadable input, unwritable
    /// destination); 1 means the inputs themselves were rejected.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => 2,
            Error::Template(TemplateError::Read { .. }) => 2,
            Error::Profile(ProfileError::Read { .. }) => 2,
            Error::Secrets(SecretsError::Read { .. }) => 2,
            Error::Manifest(ManifestError::Read { .. }) => 2,
            _ => 1,
        }
    }
}

/// Errors from template loading and placeholder substitution.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("cannot read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template references unknown placeholder: {token}")]
    MissingPlaceholder { token: String },

    #[error("placeholder survived substitution: {token}")]
    UnresolvedToken { token: String },
}

/// Errors from instance profile assembly and validation.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("cannot read profile {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("profile parse error: {0}")]
    Parse(toml::de::Error),

    #[error("missing profile field: {field}")]
    MissingField { field: &'static str },

    #[error("port out of range: {port} (expected 1-65535)")]
    PortOutOfRange { port: u32 },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("weak credential: {field} matches the documented default '{value}'")]
    WeakCredential { field: &'static str, value: String },

    #[error("invalid instance name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid table prefix '{prefix}': {reason}")]
    InvalidTablePrefix { prefix: String, reason: String },
}

/// Errors from secret key set generation, persistence, and reuse.
#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("cannot read secrets file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("secrets parse error: {0}")]
    Parse(toml::de::Error),

    #[error("secrets serialize error: {0}")]
    Serialize(toml::ser::Error),

    #[error("secrets file already exists: {} (use --force to overwrite)", .path.display())]
    Exists { path: PathBuf },

    #[error("secret {name} is too short: {len} chars (minimum {min})")]
    ShortKey {
        name: &'static str,
        len: usize,
        min: usize,
    },

    #[error("secret {name} contains forbidden character {ch:?}")]
    ForbiddenChar { name: &'static str, ch: char },

    #[error("secret value shared between instances '{first}' and '{second}'")]
    DuplicateAcrossInstances { first: String, second: String },
}

/// Errors from fleet manifest loading.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("cannot read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("manifest parse error: {0}")]
    Parse(toml::de::Error),

    #[error("manifest defines no instances")]
    Empty,

    #[error("duplicate instance name: {name}")]
    DuplicateName { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
