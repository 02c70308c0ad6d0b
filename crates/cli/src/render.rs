//! Render
//!
//! Tables and detail views for the terminal.

use std::io;

use storefront::{
    carts::Cart,
    money::format_price,
    products::Product,
    text::{ShowMore, section_fallback},
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::Columns,
    },
};

/// Write the product list as a table.
pub(crate) fn write_products(out: &mut impl io::Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "{}", section_fallback("No products"));
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Title", "Category", "Original price", "Price", "Unit", "Enabled"]);

    for product in products {
        builder.push_record([
            product.id.clone(),
            product.title.clone(),
            product.category.clone(),
            format_price(product.origin_price),
            format_price(product.price),
            product.unit.clone(),
            if product.is_enabled { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}")
}

/// Write one product's details, collapsing the description unless `full`.
pub(crate) fn write_product(
    out: &mut impl io::Write,
    product: &Product,
    full: bool,
) -> io::Result<()> {
    writeln!(out, "{}", product.title)?;
    writeln!(out, "Category: {}", product.category)?;

    if product.is_marked_down() {
        writeln!(
            out,
            "Price: {} (was {}) / {}",
            format_price(product.price),
            format_price(product.origin_price),
            product.unit
        )?;
    } else {
        writeln!(out, "Price: {} / {}", format_price(product.price), product.unit)?;
    }

    if !product.image_url.is_empty() {
        writeln!(out, "Image: {}", product.image_url)?;
    }

    let description = ShowMore::new(&product.description);

    if !product.description.is_empty() {
        writeln!(out)?;

        for line in description.lines(full) {
            writeln!(out, "{line}")?;
        }

        if description.is_collapsible() && !full {
            writeln!(out, "(pass --full to show more)")?;
        }
    }

    if full && !product.content.is_empty() {
        writeln!(out)?;

        for line in ShowMore::new(&product.content).lines(true) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}

/// Write the cart as a table followed by its totals.
pub(crate) fn write_cart(out: &mut impl io::Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "{}", section_fallback("Your cart is empty"));
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Product", "Quantity", "Total"]);

    for item in &cart.items {
        builder.push_record([
            item.id.clone(),
            item.product.title.clone(),
            format!("{} {}", item.qty, item.product.unit).trim_end().to_string(),
            format_price(item.total),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Total: {}", format_price(cart.total))?;

    if cart.final_total != cart.total {
        writeln!(out, "Discounted total: {}", format_price(cart.final_total))?;
    }

    Ok(())
}
