//! Stderr log subscriber.
//!
//! Stdout carries the turn submissions, so the `tracing` fmt layer is
//! pointed at stderr. Filtering uses `EnvFilter` directives, so both a bare
//! level (`debug`) and per-module settings (`bulwark::strategy=trace`) work.

use std::io;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable read when no `--log-level` flag is given.
pub const LOG_ENV: &str = "BULWARK_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the log filter. An explicit directive must parse; without one the
/// filter comes from `BULWARK_LOG`, falling back to `warn`.
pub fn filter(directive: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive),
        None => Ok(EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))),
    }
}

/// Installs the stderr subscriber. Fails if one is already set.
pub fn init(filter: EnvFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_ansi(false))
        .try_init()
}
