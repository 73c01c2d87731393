//! Input validation for instance profiles.
//!
//! Validates ports, hostnames, credentials, and identifier-like fields
//! before anything is rendered.

use crate::core::constants::WEAK_PASSWORDS;
use crate::core::profile::InstanceProfile;
use crate::error::{ProfileError, Result};

/// Validate a complete instance profile.
///
/// # Errors
///
/// Returns the first `ProfileError` encountered: invalid name, port out
/// of range, empty database fields, weak password, or bad table prefix.
pub fn validate_profile(profile: &InstanceProfile) -> Result<()> {
    validate_name(&profile.name)?;
    validate_port(profile.port)?;
    non_empty("db_name", &profile.db_name)?;
    non_empty("db_user", &profile.db_user)?;
    non_empty("db_host", &profile.db_host)?;
    validate_password(&profile.db_password)?;
    validate_table_prefix(&profile.table_prefix)?;
    Ok(())
}

/// Validate an instance name.
///
/// Names become file names and token prefixes, so only A-Z, a-z, 0-9,
/// underscore, and dash are allowed.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ProfileError::EmptyField { field: "name" }.into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            return Err(ProfileError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, underscore, and dash are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a TCP port.
pub fn validate_port(port: u32) -> Result<()> {
    if port == 0 || port > 65535 {
        return Err(ProfileError::PortOutOfRange { port }.into());
    }
    Ok(())
}

/// Validate a database password.
///
/// Rejects empty passwords and the defaults that vendor documentation
/// ships — those are placeholders, not credentials.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ProfileError::EmptyField {
            field: "db_password",
        }
        .into());
    }

    let lowered = password.to_ascii_lowercase();
    if WEAK_PASSWORDS.iter().any(|weak| *weak == lowered) {
        return Err(ProfileError::WeakCredential {
            field: "db_password",
            value: password.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate a database table prefix.
///
/// The prefix is spliced into SQL identifiers by the platform, so only
/// A-Z, a-z, 0-9, and underscore are allowed.
pub fn validate_table_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(ProfileError::InvalidTablePrefix {
            prefix: prefix.to_string(),
            reason: "must not be empty".to_string(),
        }
        .into());
    }

    for (i, ch) in prefix.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ProfileError::InvalidTablePrefix {
                prefix: prefix.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ProfileError::EmptyField { field }.into());
    }
    Ok(())
}
