//! CLI configuration

use clap::Parser;

use crate::{
    commands::Commands,
    config::{logging::LoggingConfig, vendor::VendorArgs},
};

pub(crate) mod logging;
pub(crate) mod vendor;

/// Storefront command-line client
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Vendor API settings.
    #[command(flatten)]
    pub vendor: VendorArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::commands::{CartCommand, CartSubcommand};

    use super::*;

    #[test]
    fn parses_cart_add_with_quantity() -> TestResult {
        let cli = Cli::try_parse_from([
            "storefront",
            "--api-path",
            "shop",
            "cart",
            "add",
            "p1",
            "--qty",
            "3",
        ])?;

        let Commands::Cart(CartCommand {
            command: CartSubcommand::Add(args),
        }) = cli.command
        else {
            return Err("expected cart add".into());
        };

        assert_eq!(args.product_id, "p1");
        assert_eq!(args.qty.get(), 3);
        assert_eq!(cli.vendor.api_path, "shop");

        Ok(())
    }

    #[test]
    fn cart_add_rejects_quantities_outside_choices() {
        for qty in ["0", "11", "-1"] {
            let result = Cli::try_parse_from([
                "storefront",
                "--api-path",
                "shop",
                "cart",
                "add",
                "p1",
                "--qty",
                qty,
            ]);

            assert!(result.is_err(), "quantity {qty} should be rejected");
        }
    }

    #[test]
    fn cart_update_accepts_zero() -> TestResult {
        let cli = Cli::try_parse_from([
            "storefront",
            "--api-path",
            "shop",
            "cart",
            "update",
            "c1",
            "0",
        ])?;

        let Commands::Cart(CartCommand {
            command: CartSubcommand::Update(args),
        }) = cli.command
        else {
            return Err("expected cart update".into());
        };

        assert_eq!(args.qty, 0);

        Ok(())
    }
}
