//! Init command - write starter files into the current directory.
//!
//! Produces a placeholder-ized WordPress template, an example instance
//! profile, and gitignore entries that keep persisted secrets out of
//! version control.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::constants::{GITIGNORE_ENTRIES, PROFILE_FILE, TEMPLATE_FILE};
use crate::core::fswrite;
use crate::core::template::STARTER_TEMPLATE;
use crate::error::{Error, Result};

const STARTER_PROFILE: &str = r#"# stencil instance profile
name = "shop_1"
port = 8081
db_name = "bitnami_wordpress"
db_user = "bn_wordpress"
# Set a unique password per instance, or pass --db-password /
# STENCIL_DB_PASSWORD at render time.
db_password = ""
db_host = "mariadb_shop1:3306"
table_prefix = "wp_"
"#;

/// Write the starter template and example profile.
pub fn execute(force: bool) -> Result<()> {
    for name in [TEMPLATE_FILE, PROFILE_FILE] {
        let path = Path::new(name);
        if path.exists() && !force {
            return Err(Error::OutputExists {
                path: path.to_path_buf(),
            });
        }
    }

    fswrite::write_atomic(Path::new(TEMPLATE_FILE), STARTER_TEMPLATE)?;
    output::success(&format!("wrote {}", TEMPLATE_FILE));

    fswrite::write_atomic(Path::new(PROFILE_FILE), STARTER_PROFILE)?;
    output::success(&format!("wrote {}", PROFILE_FILE));

    ensure_gitignore()?;

    info!("starter files written");
    output::hint(&format!(
        "edit {}, then: stencil render -t {} -o wp-config.php --profile {}",
        PROFILE_FILE, TEMPLATE_FILE, PROFILE_FILE
    ));
    Ok(())
}

/// Ensure `.gitignore` covers persisted secrets files.
fn ensure_gitignore() -> Result<()> {
    let gitignore = Path::new(".gitignore");

    let existing = if gitignore.exists() {
        fs::read_to_string(gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        fs::write(gitignore, updated)?;
    }

    Ok(())
}
