//! keyprops - Release signing config resolver for Android builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyprops::cli::output;
use keyprops::cli::{execute, Cli};
use keyprops::error::{ConfigError, Error, SigningError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEYPROPS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyprops=debug")
        } else {
            EnvFilter::new("keyprops=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.root) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Signing(SigningError::MissingField { .. }) => {
                Some("add the missing keys to key.properties")
            }
            Error::Signing(SigningError::InvalidPath { .. }) => {
                Some("set storeFile to the keystore path, relative to the project root")
            }
            Error::Signing(SigningError::KeystoreNotFound(_)) => {
                Some("check storeFile in key.properties")
            }
            Error::Config(ConfigError::Parse(_)) | Error::Config(ConfigError::InvalidValue { .. }) => {
                Some("fix keyprops.toml")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
