//! Purchase records.
//!
//! A purchase row copies the item/product and vendor names at write time instead
//! of joining them, so renaming a catalog entry later leaves the purchase history
//! exactly as it was recorded. Keep it that way.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PurchaseItem {
    pub purchase_id: i32,
    #[serde(rename = "purchaseDate")]
    #[sqlx(rename = "purchasedate")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "purchaseValidDate")]
    #[sqlx(rename = "purchasevaliddate")]
    pub purchase_valid_date: Option<NaiveDate>,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub vendor_id: Option<i32>,
    pub vendor_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPurchaseItem {
    #[serde(rename = "purchaseDate")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "purchaseValidDate", default)]
    pub purchase_valid_date: Option<NaiveDate>,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub vendor_id: Option<i32>,
    #[serde(default)]
    pub vendor_name: Option<String>,
}

impl NewPurchaseItem {
    pub fn into_record(self, purchase_id: i32) -> PurchaseItem {
        PurchaseItem {
            purchase_id,
            purchase_date: self.purchase_date,
            purchase_valid_date: self.purchase_valid_date,
            item_id: self.item_id,
            item_name: self.item_name,
            quantity: self.quantity,
            price: self.price,
            vendor_id: self.vendor_id,
            vendor_name: self.vendor_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PurchaseProduct {
    pub purchase_id: i32,
    #[serde(rename = "purchaseDate")]
    #[sqlx(rename = "purchasedate")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "purchaseValidDate")]
    #[sqlx(rename = "purchasevaliddate")]
    pub purchase_valid_date: Option<NaiveDate>,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub vendor_id: Option<i32>,
    pub vendor_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPurchaseProduct {
    #[serde(rename = "purchaseDate")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "purchaseValidDate", default)]
    pub purchase_valid_date: Option<NaiveDate>,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub vendor_id: Option<i32>,
    #[serde(default)]
    pub vendor_name: Option<String>,
}

impl NewPurchaseProduct {
    pub fn into_record(self, purchase_id: i32) -> PurchaseProduct {
        PurchaseProduct {
            purchase_id,
            purchase_date: self.purchase_date,
            purchase_valid_date: self.purchase_valid_date,
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            vendor_id: self.vendor_id,
            vendor_name: self.vendor_name,
        }
    }
}
