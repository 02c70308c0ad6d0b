//! Subcommands

use std::{error::Error, io};

use clap::Subcommand;
use storefront_app::context::AppContext;
use tracing::debug;

mod cart;
mod checkout;
mod products;

pub(crate) use cart::{CartCommand, CartSubcommand};
pub(crate) use checkout::CheckoutArgs;
pub(crate) use products::ProductsCommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Browse the catalog
    Products(ProductsCommand),

    /// Inspect and change the cart
    Cart(CartCommand),

    /// Place an order for the current cart
    Checkout(CheckoutArgs),
}

/// Why a command stopped early.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Failure {
    /// The user already saw a notice for it.
    Notified,

    /// A message still to be printed.
    Message(String),
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

#[cfg(test)]
impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notified => f.write_str("notified"),
            Self::Message(message) => f.write_str(message),
        }
    }
}

impl Commands {
    pub(crate) async fn run(self, ctx: &AppContext) -> Result<(), Failure> {
        match self {
            Self::Products(command) => Ok(products::run(command, ctx).await?),
            Self::Cart(command) => cart::run(command, ctx).await,
            Self::Checkout(args) => checkout::run(args, ctx).await,
        }
    }
}

/// Log the full chain of an error whose notice has already been shown.
pub(crate) fn notified(error: &dyn Error) -> Failure {
    debug!("{}", describe(error));

    Failure::Notified
}

/// An error followed by each of its sources, joined with `: `.
pub(crate) fn describe(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

pub(crate) fn output_failed(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn describe_walks_the_source_chain() {
        assert_eq!(describe(&Outer(Inner)), "outer: inner");
    }
}
