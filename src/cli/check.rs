//! Check command.
//!
//! Dry-run validation: assembles the profile, scans the template, and
//! verifies every token resolves — without writing anything.

use std::path::Path;

use crate::cli::{output, ProfileArgs};
use crate::core::secrets::SecretKeySet;
use crate::core::template::{Template, TokenMap};
use crate::error::{Result, TemplateError};

/// Validate a template/profile pair.
pub fn execute(template_path: &Path, profile_args: &ProfileArgs, json: bool) -> Result<()> {
    let profile = profile_args.resolve()?;
    let template = Template::load(template_path)?;
    let tokens = template.tokens();

    // Resolution needs concrete values; a throwaway key set stands in for
    // the one render would generate.
    let map = TokenMap::build(&profile, &SecretKeySet::generate());
    let unresolved: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| map.resolve(token).is_none())
        .collect();

    if json {
        let result = serde_json::json!({
            "instance": profile.name,
            "template": template_path.display().to_string(),
            "tokens": &tokens,
            "unresolved": &unresolved,
            "ok": unresolved.is_empty(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::section("Template");
        output::kv("file", template_path.display());
        output::kv("instance", &profile.name);
        output::kv("tokens", tokens.len());
        for token in &tokens {
            output::list_item(token);
        }
    }

    if let Some(token) = unresolved.first() {
        return Err(TemplateError::MissingPlaceholder {
            token: token.to_string(),
        }
        .into());
    }

    if !json {
        println!();
        output::success("template and profile are valid");
    }

    Ok(())
}
