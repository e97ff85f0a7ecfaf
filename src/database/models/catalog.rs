//! Catalog entities: the things a purchase record can point at.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    #[serde(alias = "product_name")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub item_id: i32,
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    #[serde(alias = "item_name")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vendor {
    pub vendor_id: i32,
    pub vendor_name: String,
    pub vendor_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewVendor {
    #[serde(alias = "vendor_name")]
    pub name: String,
    #[serde(default, alias = "vendor_address")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn price_serializes_as_number() {
        let product = Product {
            product_id: 7,
            product_name: "Pen".into(),
            price: Decimal::from_str("1.5").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "product_id": 7, "product_name": "Pen", "price": 1.5 })
        );
    }

    #[test]
    fn create_payload_accepts_column_names() {
        let new: NewItem = serde_json::from_value(json!({ "item_name": "Bolt", "price": 2 })).unwrap();
        assert_eq!(new.name, "Bolt");
        assert_eq!(new.price, Decimal::from(2));

        let vendor: NewVendor = serde_json::from_value(json!({ "name": "Acme" })).unwrap();
        assert_eq!(vendor.address, None);
    }
}
