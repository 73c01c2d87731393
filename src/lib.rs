//! Stencil - config templating and secret provisioning for fleets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write starter template + profile
//! │   ├── render        # Render one instance config
//! │   ├── check         # Dry-run template/profile validation
//! │   ├── fleet         # Render every instance in a manifest
//! │   ├── secrets       # Generate/inspect secret key sets
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── template      # Token scan + substitution
//!     ├── profile       # Instance profiles and layering
//!     ├── secrets       # Key/salt generation and pinning
//!     ├── manifest      # Fleet manifests
//!     ├── validation    # Port/credential/identifier checks
//!     └── fswrite       # Atomic file writes
//! ```
//!
//! # Features
//!
//! - Literal `*_PLACEHOLDER` token substitution, byte-exact elsewhere
//! - Eight CSPRNG-backed auth keys/salts per instance, never shared
//! - Profiles layered from TOML files, flags, and environment variables
//! - Fleet rendering with per-instance secret pinning
//! - Atomic output writes; partial configs are never left behind

pub mod cli;
pub mod core;
pub mod error;
