//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Product as published by the vendor catalog.
///
/// Only `id` is required; the vendor embeds trimmed-down products in cart
/// lines, so every other field falls back to its default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Vendor identifier
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Catalog category
    #[serde(default)]
    pub category: String,

    /// Short description, may contain literal `\n` line breaks
    #[serde(default)]
    pub description: String,

    /// Long-form content
    #[serde(default)]
    pub content: String,

    /// Main image reference
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,

    /// Additional image references
    #[serde(default, rename = "imagesUrl")]
    pub images_url: Vec<String>,

    /// Selling price
    #[serde(default)]
    pub price: Decimal,

    /// Price before any markdown
    #[serde(default)]
    pub origin_price: Decimal,

    /// Unit label, e.g. "pcs"
    #[serde(default)]
    pub unit: String,

    /// Whether the product is enabled for sale
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub is_enabled: bool,
}

impl Product {
    /// Whether the selling price is below the original price.
    pub fn is_marked_down(&self) -> bool {
        self.price < self.origin_price
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(i64),
}

// The vendor sends `is_enabled` as 0/1.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0,
    })
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde's serialize_with passes fields by reference"
)]
fn serialize_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_deserializes_vendor_shape() -> TestResult {
        let product: Product = serde_json::from_value(json!({
            "id": "-L9tH8jxVb2Ka_DYPwng",
            "title": "Leather Notebook",
            "category": "stationery",
            "description": "A5\\nDotted pages",
            "content": "Hand stitched",
            "imageUrl": "https://example.com/notebook.jpg",
            "imagesUrl": ["https://example.com/notebook-2.jpg"],
            "price": 600,
            "origin_price": 800,
            "unit": "pcs",
            "is_enabled": 1,
            "num": 3
        }))?;

        assert_eq!(product.id, "-L9tH8jxVb2Ka_DYPwng");
        assert_eq!(product.title, "Leather Notebook");
        assert_eq!(product.price, Decimal::from(600));
        assert_eq!(product.origin_price, Decimal::from(800));
        assert_eq!(product.images_url.len(), 1);
        assert!(product.is_enabled);
        assert!(product.is_marked_down());

        Ok(())
    }

    #[test]
    fn enabled_flag_accepts_booleans_and_zero() -> TestResult {
        let disabled: Product = serde_json::from_value(json!({ "id": "a", "is_enabled": 0 }))?;
        let enabled: Product = serde_json::from_value(json!({ "id": "b", "is_enabled": true }))?;

        assert!(!disabled.is_enabled);
        assert!(enabled.is_enabled);

        Ok(())
    }

    #[test]
    fn only_id_is_required() -> TestResult {
        let product: Product = serde_json::from_value(json!({ "id": "p1" }))?;

        assert_eq!(product.id, "p1");
        assert!(product.title.is_empty());
        assert_eq!(product.price, Decimal::ZERO);
        assert!(!product.is_enabled);

        let missing_id = serde_json::from_value::<Product>(json!({ "title": "Nameless" }));

        assert!(missing_id.is_err());

        Ok(())
    }

    #[test]
    fn enabled_flag_serializes_as_number() -> TestResult {
        let product = Product {
            id: "p1".to_string(),
            is_enabled: true,
            ..Product::default()
        };

        let value = serde_json::to_value(&product)?;

        assert_eq!(value["is_enabled"], json!(1));
        assert_eq!(value["imageUrl"], json!(""));

        Ok(())
    }
}
