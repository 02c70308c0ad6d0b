use std::io;

use clap::{Args, Subcommand};
use storefront_app::{context::AppContext, domain::products::CatalogError};
use tracing::error;

use crate::{
    commands::{describe, output_failed},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product
    List,

    /// Show one product
    Show(ShowProductArgs),
}

#[derive(Debug, Args)]
struct ShowProductArgs {
    /// Product identifier
    id: String,

    /// Show the full description and content
    #[arg(long)]
    full: bool,
}

pub(crate) async fn run(command: ProductsCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List => list(ctx).await,
        ProductsSubcommand::Show(args) => show(args, ctx).await,
    }
}

async fn list(ctx: &AppContext) -> Result<(), String> {
    let products = ctx.products.list_products().await.map_err(|list_error| {
        error!("failed to list products: {}", describe(&list_error));

        "Could not load the products.".to_string()
    })?;

    render::write_products(&mut io::stdout().lock(), &products)
        .map_err(|io_error| output_failed(&io_error))
}

async fn show(args: ShowProductArgs, ctx: &AppContext) -> Result<(), String> {
    let product = match ctx.products.get_product(&args.id).await {
        Ok(product) => product,
        Err(CatalogError::NotFound) => return Err(format!("Product {} was not found.", args.id)),
        Err(fetch_error) => {
            error!("failed to fetch product {}: {}", args.id, describe(&fetch_error));

            return Err("Could not load the product.".to_string());
        }
    };

    render::write_product(&mut io::stdout().lock(), &product, args.full)
        .map_err(|io_error| output_failed(&io_error))
}
