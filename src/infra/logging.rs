//! Tracing subscriber setup.
//!
//! `HUDDLE_LOG` takes an `EnvFilter` directive string, e.g.
//! `HUDDLE_LOG=huddle::core=debug`. Without it the level is `warn`, or
//! `debug` when `--verbose` is given. Logs go to stderr so stdout stays
//! clean for JSON output.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::AppContext;

static INIT: Once = Once::new();

/// Directive used when `HUDDLE_LOG` is unset or unparsable
pub fn default_directive(ctx: &AppContext) -> &'static str
{
    if ctx.verbose { "huddle=debug" } else { "huddle=warn" }
}

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(ctx: &AppContext)
{
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HUDDLE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directive(ctx)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
