//! Template loading and placeholder substitution.
//!
//! A placeholder token is a literal `[A-Z][A-Z0-9_]*` word ending in
//! `_PLACEHOLDER`. Tokens are scanned by hand rather than with a regex;
//! the grammar is small enough that a character walk is clearer than a
//! pattern dependency.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::constants::PLACEHOLDER_SUFFIX;
use crate::core::profile::InstanceProfile;
use crate::core::secrets::SecretKeySet;
use crate::error::{Result, TemplateError};

/// A configuration template with placeholder tokens.
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Load a template from disk.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Read` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading template");
        let text = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(text))
    }

    /// Placeholder tokens in order of first appearance, deduplicated.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = Vec::new();
        for (start, end) in token_spans(&self.text) {
            let token = &self.text[start..end];
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Substitute every placeholder token through `map`.
    ///
    /// Output is byte-identical to the template except for substituted
    /// tokens. After substitution the result is scanned again: a token
    /// pattern surviving into the output (e.g. smuggled in through a
    /// substitution value) is rejected rather than shipped.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::MissingPlaceholder` for a token the map
    /// cannot resolve, `TemplateError::UnresolvedToken` if the rendered
    /// output still contains a token pattern.
    pub fn render(&self, map: &TokenMap) -> Result<String> {
        let text = &self.text;
        let mut out = String::with_capacity(text.len() + 512);
        let mut pos = 0;

        for (start, end) in token_spans(text) {
            let token = &text[start..end];
            let value = map.resolve(token).ok_or_else(|| TemplateError::MissingPlaceholder {
                token: token.to_string(),
            })?;
            out.push_str(&text[pos..start]);
            out.push_str(value);
            pos = end;
        }
        out.push_str(&text[pos..]);

        if let Some((start, end)) = token_spans(&out).into_iter().next() {
            return Err(TemplateError::UnresolvedToken {
                token: out[start..end].to_string(),
            }
            .into());
        }

        debug!(bytes = out.len(), "template rendered");
        Ok(out)
    }
}

/// Byte spans of placeholder tokens, ascending and non-overlapping.
fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();

    for (idx, _) in text.match_indices(PLACEHOLDER_SUFFIX) {
        let end = idx + PLACEHOLDER_SUFFIX.len();
        // The suffix must terminate the word.
        if bytes.get(end).is_some_and(|&b| is_word_byte(b)) {
            continue;
        }
        // Walk back over the stem.
        let mut start = idx;
        while start > 0 && is_stem_byte(bytes[start - 1]) {
            start -= 1;
        }
        // The token must begin with an uppercase letter; skip leading
        // digits and underscores picked up by the walk.
        while start < idx && !bytes[start].is_ascii_uppercase() {
            start += 1;
        }
        if start == idx {
            continue;
        }
        // Stems from adjacent suffix matches cannot overlap: a suffix
        // followed by a word byte was skipped above.
        spans.push((start, end));
    }

    spans
}

fn is_stem_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Substitution values keyed by canonical token stem.
///
/// A token resolves by stripping `_PLACEHOLDER`, then optionally the
/// instance prefix (the uppercased alphanumeric instance name, so
/// `SHOP1_PORT_PLACEHOLDER` resolves to the `PORT` value for the
/// instance named `shop_1`).
pub struct TokenMap {
    values: BTreeMap<String, String>,
    prefix: String,
}

impl TokenMap {
    /// Build the full substitution set for one instance.
    pub fn build(profile: &InstanceProfile, secrets: &SecretKeySet) -> Self {
        let mut values = BTreeMap::new();
        values.insert("PORT".to_string(), profile.port.to_string());
        values.insert("DB_NAME".to_string(), profile.db_name.clone());
        values.insert("DB_USER".to_string(), profile.db_user.clone());
        values.insert("DB_PASSWORD".to_string(), profile.db_password.clone());
        values.insert("DB_HOST".to_string(), profile.db_host.clone());
        values.insert("TABLE_PREFIX".to_string(), profile.table_prefix.clone());
        for (name, value) in secrets.entries() {
            values.insert(name.to_string(), value.to_string());
        }

        Self {
            values,
            prefix: profile.token_prefix(),
        }
    }

    /// Resolve a full token (e.g. `SHOP1_PORT_PLACEHOLDER`) to its value.
    ///
    /// Canonical stems win over prefixed ones, so an instance named `db`
    /// cannot shadow `DB_NAME`.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        let stem = token.strip_suffix(PLACEHOLDER_SUFFIX)?;
        if let Some(value) = self.values.get(stem) {
            return Some(value.as_str());
        }
        if self.prefix.is_empty() {
            return None;
        }
        let rest = stem.strip_prefix(self.prefix.as_str())?.strip_prefix('_')?;
        self.values.get(rest).map(String::as_str)
    }
}

/// Starter template written by `stencil init`.
///
/// A WordPress base configuration with every deployment-specific value
/// replaced by a placeholder token.
pub const STARTER_TEMPLATE: &str = r#"<?php
/**
 * The base configuration for WordPress
 *
 * @package WordPress
 */

// ** Database settings ** //
/** The name of the database for WordPress */
define( 'DB_NAME', 'DB_NAME_PLACEHOLDER' );

/** Database username */
define( 'DB_USER', 'DB_USER_PLACEHOLDER' );

/** Database password */
define( 'DB_PASSWORD', 'DB_PASSWORD_PLACEHOLDER' );

/** Database hostname */
define( 'DB_HOST', 'DB_HOST_PLACEHOLDER' );

/** Database charset to use in creating database tables. */
define( 'DB_CHARSET', 'utf8' );

/** The database collate type. Don't change this if in doubt. */
define( 'DB_COLLATE', '' );

/**#@+
 * Authentication unique keys and salts.
 * Provisioned per instance; never share them between deployments.
 */
define( 'AUTH_KEY',         'AUTH_KEY_PLACEHOLDER' );
define( 'SECURE_AUTH_KEY',  'SECURE_AUTH_KEY_PLACEHOLDER' );
define( 'LOGGED_IN_KEY',    'LOGGED_IN_KEY_PLACEHOLDER' );
define( 'NONCE_KEY',        'NONCE_KEY_PLACEHOLDER' );
define( 'AUTH_SALT',        'AUTH_SALT_PLACEHOLDER' );
define( 'SECURE_AUTH_SALT', 'SECURE_AUTH_SALT_PLACEHOLDER' );
define( 'LOGGED_IN_SALT',   'LOGGED_IN_SALT_PLACEHOLDER' );
define( 'NONCE_SALT',       'NONCE_SALT_PLACEHOLDER' );
/**#@-*/

/**
 * WordPress database table prefix.
 */
$table_prefix = 'TABLE_PREFIX_PLACEHOLDER';

/**
 * For developers: WordPress debugging mode.
 */
define( 'WP_DEBUG', false );

// ** Site URLs ** //
define( 'WP_HOME', 'http://localhost:PORT_PLACEHOLDER' );
define( 'WP_SITEURL', 'http://localhost:PORT_PLACEHOLDER' );

// ** Filesystem Method ** //
// Force WordPress to use direct file I/O instead of attempting FTP/SSH
define( 'FS_METHOD', 'direct' );

/** Absolute path to the WordPress directory. */
if ( ! defined( 'ABSPATH' ) ) {
	define( 'ABSPATH', __DIR__ . '/' );
}

/** Sets up WordPress vars and included files. */
require_once ABSPATH . 'wp-settings.php';
"#;
