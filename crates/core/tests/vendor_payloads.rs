//! Vendor payload conformance tests

use serde_json::json;
use storefront::prelude::*;
use testresult::TestResult;

#[test]
fn added_line_renders_server_quantity_and_total() -> TestResult {
    let cart: Cart = serde_json::from_value(json!({
        "carts": [{ "id": "c1", "qty": 3, "product": { "id": "p1" } }],
        "total": 300
    }))?;

    let line = cart.item("c1").ok_or("missing line c1")?;

    assert_eq!(line.qty.to_string(), "3");
    assert_eq!(line.product_ref(), "p1");
    assert_eq!(format_price(cart.total), "$300");

    Ok(())
}

#[test]
fn fractional_vendor_totals_render_without_padding() -> TestResult {
    let cart: Cart = serde_json::from_value(json!({
        "carts": [{
            "id": "c1",
            "product_id": "p1",
            "qty": 1,
            "total": 1200,
            "final_total": 1079.5,
            "product": { "id": "p1", "title": "Leather Notebook" }
        }],
        "total": 1200,
        "final_total": 1079.5
    }))?;

    assert_eq!(format_price(cart.total), "$1200");
    assert_eq!(format_price(cart.final_total), "$1079.5");

    Ok(())
}

#[test]
fn catalog_listing_keeps_vendor_order() -> TestResult {
    let products: Vec<Product> = serde_json::from_value(json!([
        { "id": "p2", "title": "Brass Pen", "price": 450, "is_enabled": 1 },
        { "id": "p1", "title": "Leather Notebook", "price": 600, "is_enabled": 0 }
    ]))?;

    let ids: Vec<&str> = products.iter().map(|product| product.id.as_str()).collect();

    assert_eq!(ids, vec!["p2", "p1"]);
    assert!(products.first().is_some_and(|product| product.is_enabled));

    Ok(())
}

#[test]
fn checkout_phone_examples() {
    let mut form = CheckoutForm {
        email: "buyer@example.com".to_string(),
        name: "Lin".to_string(),
        tel: "123".to_string(),
        address: "Taipei City".to_string(),
        message: String::new(),
    };

    let errors = form.validate().err().unwrap_or_default();

    assert_eq!(errors.get(Field::Tel), Some(&ValidationIssue::TelMalformed));

    form.tel = "0212345678".to_string();
    assert!(form.validate().is_ok());

    form.tel = "0912345678".to_string();
    assert!(form.validate().is_ok());
}
