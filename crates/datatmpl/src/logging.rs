//! Diagnostic logging.
//!
//! Logging is off unless `--verbose` is given. Then a subscriber writing to
//! stderr is in effect for the duration of the invocation; stdout carries
//! nothing but the rendered output.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str =
    "datatmpl=debug,datatmpl_input=debug,datatmpl_detect=debug,datatmpl_render=debug";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Builds the diagnostics subscriber, writing plain text lines to `writer`.
///
/// [`run`](crate::run) passes `std::io::stderr`.
pub fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .without_time(),
        )
        .with(filter())
}
