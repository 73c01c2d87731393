//! Command-line interface.

pub mod check;
pub mod completions;
pub mod fleet;
pub mod init;
pub mod output;
pub mod render;
pub mod secrets;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::profile::{InstanceProfile, PartialProfile};
use crate::error::Result;

/// Stencil - config templating and secret provisioning for fleets.
#[derive(Parser)]
#[command(
    name = "stencil",
    about = "Config templating and secret provisioning for multi-instance deployments",
    version,
    after_help = "One template. Many instances. No shared secrets."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a starter template and example profile
    Init {
        /// Overwrite existing starter files
        #[arg(short, long)]
        force: bool,
    },

    /// Render an instance configuration from a template
    Render {
        /// Template file with placeholder tokens
        #[arg(short, long)]
        template: PathBuf,

        /// Destination path for the rendered config
        #[arg(short, long)]
        out: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Reuse secrets from a TOML file instead of generating fresh ones
        #[arg(long, value_name = "FILE")]
        secrets_file: Option<PathBuf>,

        /// Persist the secrets used for this render (0600)
        #[arg(long, value_name = "FILE")]
        save_secrets: Option<PathBuf>,

        /// Overwrite existing files without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a template and profile without writing anything
    Check {
        /// Template file with placeholder tokens
        #[arg(short, long)]
        template: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render every instance in a fleet manifest
    Fleet {
        /// Manifest with [defaults] and [[instance]] entries
        #[arg(short, long)]
        manifest: PathBuf,

        /// Template file with placeholder tokens
        #[arg(short, long)]
        template: PathBuf,

        /// Directory for rendered configs (<name>.php)
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Pin per-instance secrets in this directory (<name>.secrets.toml)
        #[arg(long)]
        secrets_dir: Option<PathBuf>,

        /// Overwrite existing rendered configs
        #[arg(short, long)]
        force: bool,
    },

    /// Manage instance secret key sets
    Secrets {
        #[command(subcommand)]
        action: SecretsAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Secrets subcommands.
#[derive(Subcommand)]
pub enum SecretsAction {
    /// Generate a fresh key set to a secrets file (0600)
    Generate {
        /// Destination secrets file
        #[arg(short, long)]
        out: PathBuf,

        /// Overwrite an existing secrets file
        #[arg(short, long)]
        force: bool,
    },

    /// Show key names and lengths of a secrets file (never values)
    Show {
        /// Secrets file to inspect
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Per-instance parameters, as flags or environment variables.
///
/// Flags override fields from `--profile`; `STENCIL_DB_PASSWORD` keeps
/// the password out of shell history.
#[derive(clap::Args, Clone)]
pub struct ProfileArgs {
    /// Instance name (e.g. shop_1)
    #[arg(long, env = "STENCIL_NAME")]
    pub name: Option<String>,

    /// Public port for site URLs
    #[arg(long, env = "STENCIL_PORT")]
    pub port: Option<u32>,

    /// Database name
    #[arg(long, env = "STENCIL_DB_NAME")]
    pub db_name: Option<String>,

    /// Database user
    #[arg(long, env = "STENCIL_DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "STENCIL_DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database host (host:port)
    #[arg(long, env = "STENCIL_DB_HOST")]
    pub db_host: Option<String>,

    /// Database table prefix
    #[arg(long, env = "STENCIL_TABLE_PREFIX")]
    pub table_prefix: Option<String>,

    /// Read profile fields from a TOML file (flags override)
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
}

impl ProfileArgs {
    /// Assemble and validate the instance profile from all input layers.
    pub fn resolve(&self) -> Result<InstanceProfile> {
        let base = match &self.profile {
            Some(path) => PartialProfile::load(path)?,
            None => PartialProfile::default(),
        };
        base.overlay(self.to_partial()).build()
    }

    fn to_partial(&self) -> PartialProfile {
        PartialProfile {
            name: self.name.clone(),
            port: self.port,
            db_name: self.db_name.clone(),
            db_user: self.db_user.clone(),
            db_password: self.db_password.clone(),
            db_host: self.db_host.clone(),
            table_prefix: self.table_prefix.clone(),
        }
    }
}

/// Ask before overwriting `path`; only when a user is attached.
///
/// Non-interactive callers get `false`, which surfaces as the
/// refusing-to-overwrite error.
pub(crate) fn confirm_overwrite(path: &Path) -> bool {
    if !console::user_attended() {
        return false;
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        Init { force } => init::execute(force),
        Render {
            template,
            out,
            profile,
            secrets_file,
            save_secrets,
            force,
        } => render::execute(
            &template,
            &out,
            &profile,
            secrets_file.as_deref(),
            save_secrets.as_deref(),
            force,
        ),
        Check {
            template,
            profile,
            json,
        } => check::execute(&template, &profile, json),
        Fleet {
            manifest,
            template,
            out_dir,
            secrets_dir,
            force,
        } => fleet::execute(&manifest, &template, &out_dir, secrets_dir.as_deref(), force),
        Secrets { action } => match action {
            SecretsAction::Generate { out, force } => secrets::generate(&out, force),
            SecretsAction::Show { file, json } => secrets::show(&file, json),
        },
        Completions { shell } => completions::execute(shell),
    }
}
