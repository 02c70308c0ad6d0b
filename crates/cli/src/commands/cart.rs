use std::io;

use clap::{Args, Subcommand};
use storefront::quantity::{QUANTITY_CHOICES, Quantity};
use storefront_app::{
    context::AppContext,
    domain::carts::{CartAction, CartStore},
    notifications::Notifier,
};
use tracing::debug;

use crate::{
    commands::{Failure, describe, notified, output_failed},
    notifier::TerminalNotifier,
    render,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    pub command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CartSubcommand {
    /// Show the cart
    Show,

    /// Add a product
    Add(AddArgs),

    /// Change a line's quantity; 0 removes the line
    Update(UpdateArgs),

    /// Remove one line
    Remove(RemoveArgs),

    /// Remove every line
    Clear,
}

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Product identifier
    pub product_id: String,

    /// Units to add (1-10)
    #[arg(long, default_value_t = Quantity::ONE, value_parser = parse_choice)]
    pub qty: Quantity,
}

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Cart line identifier
    pub item_id: String,

    /// New quantity
    pub qty: u32,
}

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    /// Cart line identifier
    pub item_id: String,
}

fn parse_choice(value: &str) -> Result<Quantity, String> {
    let qty: Quantity = value.parse().map_err(|error| format!("{error}"))?;

    if QUANTITY_CHOICES.contains(&qty.get()) {
        Ok(qty)
    } else {
        Err(format!(
            "quantity must be between {} and {}",
            QUANTITY_CHOICES.start(),
            QUANTITY_CHOICES.end()
        ))
    }
}

pub(crate) async fn run(command: CartCommand, ctx: &AppContext) -> Result<(), Failure> {
    let store = apply(command.command, ctx, &TerminalNotifier).await?;

    if let Some(cart) = store.cart() {
        render::write_cart(&mut io::stdout().lock(), cart)
            .map_err(|io_error| output_failed(&io_error))?;
    }

    Ok(())
}

/// Run one subcommand against a fresh store. Only `update` and `remove` load
/// the cart first, since they need the line's product.
async fn apply(
    command: CartSubcommand,
    ctx: &AppContext,
    notifier: &dyn Notifier,
) -> Result<CartStore, Failure> {
    let mut store = CartStore::new();

    let action = match command {
        CartSubcommand::Show => CartAction::Load,
        CartSubcommand::Add(args) => CartAction::Add {
            title: product_title(ctx, &args.product_id).await,
            product_id: args.product_id,
            qty: args.qty,
        },
        CartSubcommand::Update(args) => {
            run_action(&mut store, ctx, notifier, CartAction::Load).await?;

            let (product_id, title) = line_details(&store, &args.item_id)?;

            CartAction::UpdateQuantity {
                item_id: args.item_id,
                product_id,
                title,
                qty: args.qty,
            }
        }
        CartSubcommand::Remove(args) => {
            run_action(&mut store, ctx, notifier, CartAction::Load).await?;

            let (_, title) = line_details(&store, &args.item_id)?;

            CartAction::Remove {
                item_id: args.item_id,
                title,
            }
        }
        CartSubcommand::Clear => CartAction::Clear,
    };

    run_action(&mut store, ctx, notifier, action).await?;

    Ok(store)
}

async fn run_action(
    store: &mut CartStore,
    ctx: &AppContext,
    notifier: &dyn Notifier,
    action: CartAction,
) -> Result<(), Failure> {
    store
        .run(ctx.carts.as_ref(), notifier, action)
        .await
        .map_err(|error| notified(&error))
}

/// Title for notices. A failed lookup falls back to the id and never blocks
/// the add itself.
async fn product_title(ctx: &AppContext, product_id: &str) -> String {
    match ctx.products.get_product(product_id).await {
        Ok(product) => product.title,
        Err(lookup_error) => {
            debug!(product_id, "title lookup failed: {}", describe(&lookup_error));

            product_id.to_string()
        }
    }
}

/// Product id and title for a line of the loaded cart.
fn line_details(store: &CartStore, item_id: &str) -> Result<(String, String), String> {
    store
        .cart()
        .and_then(|cart| cart.item(item_id))
        .map(|item| (item.product_ref().to_string(), item.product.title.clone()))
        .ok_or_else(|| format!("Cart item {item_id} was not found."))
}
