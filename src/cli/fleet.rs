//! Fleet command.
//!
//! Renders every instance in a manifest against one template. Each
//! instance gets its own secrets — pinned from `--secrets-dir` when a
//! file exists there, freshly generated otherwise — and no secret value
//! may repeat across instances.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::fswrite;
use crate::core::manifest::FleetManifest;
use crate::core::secrets::SecretKeySet;
use crate::core::template::{Template, TokenMap};
use crate::error::{Error, Result, SecretsError};

/// Render a whole fleet.
pub fn execute(
    manifest_path: &Path,
    template_path: &Path,
    out_dir: &Path,
    secrets_dir: Option<&Path>,
    force: bool,
) -> Result<()> {
    let manifest = FleetManifest::load(manifest_path)?;
    let profiles = manifest.profiles()?;
    let template = Template::load(template_path)?;

    fs::create_dir_all(out_dir)?;
    if let Some(dir) = secrets_dir {
        fs::create_dir_all(dir)?;
    }

    // Secret value -> instance that introduced it.
    let mut seen: HashMap<String, String> = HashMap::new();

    for profile in &profiles {
        let secrets = resolve_secrets(profile, secrets_dir)?;

        for (_, value) in secrets.entries() {
            if let Some(first) = seen.insert(value.to_string(), profile.name.clone()) {
                return Err(SecretsError::DuplicateAcrossInstances {
                    first,
                    second: profile.name.clone(),
                }
                .into());
            }
        }

        let out = out_dir.join(format!("{}.php", profile.name));
        if out.exists() && !force {
            return Err(Error::OutputExists { path: out });
        }

        let rendered = template.render(&TokenMap::build(profile, &secrets))?;
        fswrite::write_atomic(&out, &rendered)?;

        info!(instance = %profile.name, out = %out.display(), "instance rendered");
        output::success(&format!("rendered {}", out.display()));
    }

    output::dimmed(&format!("{} instances rendered", profiles.len()));
    Ok(())
}

/// Pin or provision secrets for one instance.
fn resolve_secrets(
    profile: &crate::core::profile::InstanceProfile,
    secrets_dir: Option<&Path>,
) -> Result<SecretKeySet> {
    match secrets_dir {
        Some(dir) => {
            let path = dir.join(format!("{}.secrets.toml", profile.name));
            if path.exists() {
                SecretKeySet::load(&path)
            } else {
                let set = SecretKeySet::generate();
                set.save(&path)?;
                Ok(set)
            }
        }
        None => Ok(SecretKeySet::generate()),
    }
}
