//! Storefront CLI

use std::process;

use storefront_app::context::AppContext;
use tracing::debug;

use crate::{commands::Failure, config::Cli};

mod commands;
mod config;
mod notifier;
mod observability;
mod render;

#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(init_error) = observability::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let vendor = cli.vendor.to_config();

    debug!(base_url = %vendor.base_url, api_path = %vendor.api_path, "using vendor");

    let ctx = AppContext::from_config(vendor);

    match cli.command.run(&ctx).await {
        Ok(()) => {}
        Err(Failure::Notified) => process::exit(1),
        Err(Failure::Message(message)) => {
            #[expect(clippy::print_stderr, reason = "command failures are reported on stderr")]
            {
                eprintln!("{message}");
            }

            process::exit(1);
        }
    }
}
