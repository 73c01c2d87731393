//! Stencil - config templating and secret provisioning for fleets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stencil::cli::output;
use stencil::cli::{execute, Cli};
use stencil::error::{Error, ProfileError, SecretsError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("STENCIL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stencil=debug")
        } else {
            EnvFilter::new("stencil=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Profile(ProfileError::WeakCredential { .. }) => {
                Some("choose a password unique to this instance")
            }
            Error::Profile(ProfileError::MissingField { .. }) => {
                Some("supply the flag, a STENCIL_* env var, or a --profile file")
            }
            Error::OutputExists { .. } | Error::Secrets(SecretsError::Exists { .. }) => {
                Some("pass --force to overwrite")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
