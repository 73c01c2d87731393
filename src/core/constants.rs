//! Constants used throughout stencil.
//!
//! Centralizes magic strings and configuration values.

/// Suffix that marks a placeholder token in templates.
pub const PLACEHOLDER_SUFFIX: &str = "_PLACEHOLDER";

/// Length of each generated secret key/salt.
pub const SECRET_LEN: usize = 64;

/// Minimum accepted key/salt length when loading a pinned secrets file.
pub const SECRET_MIN_LEN: usize = 64;

/// Characters eligible for generated secrets.
///
/// Printable ASCII minus `'`, `"`, and `\` — the characters that would
/// break out of a single-quoted PHP string in the rendered config.
pub const SECRET_CHARSET: &[u8] =
    b"!#$%&()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Passwords that ship in vendor documentation and must never reach a
/// rendered config.
pub const WEAK_PASSWORDS: &[&str] = &[
    "wordpress_db_password",
    "password",
    "changeme",
    "secret",
    "bitnami",
    "example",
];

/// Starter template file name written by `stencil init`.
pub const TEMPLATE_FILE: &str = "wp-config.php.tpl";

/// Example profile file name written by `stencil init`.
pub const PROFILE_FILE: &str = "instance.toml";

/// Gitignore entries to keep persisted secrets out of version control.
pub const GITIGNORE_ENTRIES: &[&str] = &["*.secrets.toml", "secrets/"];
