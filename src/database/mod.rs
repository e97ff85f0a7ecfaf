//! Persistence layer: the `InventoryStore` capability and its implementations.
//!
//! Handlers only ever see `Arc<dyn InventoryStore>`; the binary wires in
//! [`PgStore`], tests wire in [`MemoryStore`].

pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use models::{
    Item, NewItem, NewProduct, NewPurchaseItem, NewPurchaseProduct, NewUser, NewVendor, Product,
    PurchaseItem, PurchaseProduct, User, Vendor,
};

/// Errors surfaced by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return StoreError::UniqueViolation(db.message().to_string());
            }
        }

        match err {
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => {
                StoreError::Unavailable(e.to_string())
            }
            other => StoreError::Sqlx(other),
        }
    }
}

/// Every operation the API needs from the relational store.
///
/// Each method is a single statement; there is no transaction spanning calls.
/// Lookups by id return `Ok(None)` when no row matches, which the handlers turn
/// into a 404.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Round-trip to the store, used by the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;

    // =========================================================================
    // Users
    // =========================================================================

    /// Insert a user; a duplicate email yields `StoreError::UniqueViolation`
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    // =========================================================================
    // Catalog
    // =========================================================================

    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn get_product(&self, id: i32) -> Result<Option<Product>, StoreError>;

    async fn insert_item(&self, item: NewItem) -> Result<Item, StoreError>;

    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;

    async fn get_item(&self, id: i32) -> Result<Option<Item>, StoreError>;

    async fn insert_vendor(&self, vendor: NewVendor) -> Result<Vendor, StoreError>;

    async fn list_vendors(&self) -> Result<Vec<Vendor>, StoreError>;

    async fn get_vendor(&self, id: i32) -> Result<Option<Vendor>, StoreError>;

    // =========================================================================
    // Purchase records
    // =========================================================================

    async fn insert_purchase_item(&self, record: NewPurchaseItem) -> Result<PurchaseItem, StoreError>;

    async fn list_purchase_items(&self) -> Result<Vec<PurchaseItem>, StoreError>;

    async fn get_purchase_item(&self, id: i32) -> Result<Option<PurchaseItem>, StoreError>;

    /// Replace every mutable column; `None` when the id does not exist
    async fn update_purchase_item(
        &self,
        id: i32,
        record: NewPurchaseItem,
    ) -> Result<Option<PurchaseItem>, StoreError>;

    /// Returns the removed row, `None` when the id does not exist
    async fn delete_purchase_item(&self, id: i32) -> Result<Option<PurchaseItem>, StoreError>;

    async fn insert_purchase_product(
        &self,
        record: NewPurchaseProduct,
    ) -> Result<PurchaseProduct, StoreError>;

    async fn list_purchase_products(&self) -> Result<Vec<PurchaseProduct>, StoreError>;

    async fn get_purchase_product(&self, id: i32) -> Result<Option<PurchaseProduct>, StoreError>;

    async fn update_purchase_product(
        &self,
        id: i32,
        record: NewPurchaseProduct,
    ) -> Result<Option<PurchaseProduct>, StoreError>;

    async fn delete_purchase_product(&self, id: i32) -> Result<Option<PurchaseProduct>, StoreError>;
}
