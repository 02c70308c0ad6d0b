//! Browser logging.
//!
//! Events go to the developer console through `tracing-web`. The level is
//! fixed when the app is compiled, from `STOREFRONT_LOG`.

use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Install the console subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub(crate) fn init() -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(max_level(option_env!("STOREFRONT_LOG")));

    tracing_subscriber::registry().with(fmt_layer).try_init()
}

/// Parse a level name, falling back to warnings for anything unrecognised.
fn max_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}
