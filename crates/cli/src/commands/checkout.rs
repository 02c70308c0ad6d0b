use std::io::{self, Write};

use clap::Args;
use storefront::checkout::Field;
use storefront_app::{
    context::AppContext,
    domain::{
        carts::{CartAction, CartStore},
        orders::{Checkout, CheckoutError},
    },
};

use crate::{
    commands::{Failure, describe, notified},
    notifier::TerminalNotifier,
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Contact email
    #[arg(long)]
    email: String,

    /// Recipient name
    #[arg(long)]
    name: String,

    /// Recipient phone number
    #[arg(long)]
    tel: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Note to the seller
    #[arg(long, default_value = "")]
    message: String,
}

impl CheckoutArgs {
    fn into_checkout(self) -> Checkout {
        let mut checkout = Checkout::new();

        checkout.form.set(Field::Email, self.email);
        checkout.form.set(Field::Name, self.name);
        checkout.form.set(Field::Tel, self.tel);
        checkout.form.set(Field::Address, self.address);
        checkout.form.set(Field::Message, self.message);

        checkout
    }
}

pub(crate) async fn run(args: CheckoutArgs, ctx: &AppContext) -> Result<(), Failure> {
    let notifier = TerminalNotifier;
    let mut store = CartStore::new();

    store
        .run(ctx.carts.as_ref(), &notifier, CartAction::Load)
        .await
        .map_err(|error| notified(&error))?;

    let mut checkout = args.into_checkout();

    match checkout
        .submit(ctx.orders.as_ref(), ctx.carts.as_ref(), &mut store, &notifier)
        .await
    {
        Ok(_) => Ok(()),
        Err(CheckoutError::Validation(errors)) => {
            let mut err = io::stderr().lock();

            for issue in errors.iter() {
                _ = writeln!(err, "{}: {issue}", issue.field().label());
            }

            Err(Failure::Message("The order was not placed.".to_string()))
        }
        Err(CheckoutError::EmptyCart) => Err(Failure::Message(
            "Your cart is empty; add a product before checking out.".to_string(),
        )),
        Err(error @ CheckoutError::Submission(_)) => Err(notified(&error)),
        Err(error) => Err(Failure::Message(describe(&error))),
    }
}
