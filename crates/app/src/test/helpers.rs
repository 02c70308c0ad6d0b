//! Test Helpers

use std::cell::RefCell;

use rust_decimal::Decimal;
use storefront::{
    carts::{Cart, CartItem},
    products::Product,
};

use crate::notifications::{Notice, Notifier};

pub(crate) fn product(id: &str, title: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        category: "stationery".to_string(),
        price: Decimal::from(price),
        origin_price: Decimal::from(price),
        unit: "piece".to_string(),
        is_enabled: true,
        ..Product::default()
    }
}

/// A cart line whose product costs `total / qty`.
pub(crate) fn line(id: &str, product_id: &str, qty: u32, total: i64) -> CartItem {
    let unit_price = total / i64::from(qty.max(1));

    CartItem {
        id: id.to_string(),
        product_id: product_id.to_string(),
        qty,
        total: Decimal::from(total),
        final_total: Decimal::from(total),
        product: product(product_id, &format!("Product {product_id}"), unit_price),
    }
}

pub(crate) fn cart(items: Vec<CartItem>, total: i64) -> Cart {
    Cart {
        items,
        total: Decimal::from(total),
        final_total: Decimal::from(total),
    }
}

/// Collects every notice it is handed.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
