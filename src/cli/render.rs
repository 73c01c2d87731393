//! Render command.
//!
//! Produces one instance's configuration from a template: assemble the
//! profile, resolve secrets (pinned or freshly generated), substitute,
//! and write atomically.

use std::path::Path;

use tracing::info;

use crate::cli::{confirm_overwrite, output, ProfileArgs};
use crate::core::fswrite;
use crate::core::secrets::SecretKeySet;
use crate::core::template::{Template, TokenMap};
use crate::error::{Error, Result, SecretsError};

/// Render an instance configuration.
pub fn execute(
    template_path: &Path,
    out: &Path,
    profile_args: &ProfileArgs,
    secrets_file: Option<&Path>,
    save_secrets: Option<&Path>,
    force: bool,
) -> Result<()> {
    let profile = profile_args.resolve()?;
    let template = Template::load(template_path)?;

    if template.tokens().is_empty() {
        output::warn("template contains no placeholder tokens");
    }

    let secrets = match secrets_file {
        Some(path) => SecretKeySet::load(path)?,
        None => SecretKeySet::generate(),
    };

    if out.exists() && !force && !confirm_overwrite(out) {
        return Err(Error::OutputExists {
            path: out.to_path_buf(),
        });
    }

    let map = TokenMap::build(&profile, &secrets);
    let rendered = template.render(&map)?;
    fswrite::write_atomic(out, &rendered)?;

    if let Some(path) = save_secrets {
        if path.exists() && !force && !confirm_overwrite(path) {
            return Err(SecretsError::Exists {
                path: path.to_path_buf(),
            }
            .into());
        }
        secrets.save(path)?;
        output::success(&format!("secrets saved to {}", path.display()));
        output::hint("keep secrets files out of version control");
    }

    info!(instance = %profile.name, out = %out.display(), "instance rendered");
    output::success(&format!(
        "rendered {} for instance {}",
        out.display(),
        profile.name
    ));

    Ok(())
}
