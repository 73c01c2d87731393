//! Secrets commands (generate, show).

use std::path::Path;

use tracing::info;

use crate::cli::{confirm_overwrite, output};
use crate::core::secrets::{SecretKeySet, KEY_NAMES};
use crate::error::{Result, SecretsError};

/// Generate a fresh key set to a secrets file.
pub fn generate(out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force && !confirm_overwrite(out) {
        return Err(SecretsError::Exists {
            path: out.to_path_buf(),
        }
        .into());
    }

    let set = SecretKeySet::generate();
    set.save(out)?;

    info!(path = %out.display(), "secrets generated");
    output::success(&format!(
        "wrote {} ({} keys)",
        out.display(),
        KEY_NAMES.len()
    ));
    output::hint("keep secrets files out of version control");
    Ok(())
}

/// Show key names and lengths of a secrets file. Values never leave the
/// file.
pub fn show(file: &Path, json: bool) -> Result<()> {
    let set = SecretKeySet::load(file)?;

    if json {
        let keys: Vec<_> = set
            .entries()
            .iter()
            .map(|(name, value)| {
                serde_json::json!({
                    "name": name,
                    "length": value.len(),
                })
            })
            .collect();
        let result = serde_json::json!({
            "file": file.display().to_string(),
            "keys": keys,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::section(&format!("{} keys", set.entries().len()));
        for (name, value) in set.entries() {
            output::kv(name, format!("{} chars", value.len()));
        }
    }

    Ok(())
}
